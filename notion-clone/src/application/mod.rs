// src/application/mod.rs
pub mod home;
pub mod page_viewer;

pub use home::HomePage;
pub use page_viewer::{PageViewer, View};
