// src/ports/mod.rs
pub mod html;
pub mod json;

pub use html::{HtmlPresenter, Stylesheet};
pub use json::JsonPresenter;
