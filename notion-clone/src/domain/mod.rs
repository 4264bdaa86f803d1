// src/domain/mod.rs
pub mod error;
pub mod view;

pub use error::DomainError;
pub use view::{Element, Node, INTERACTIVE_TAGS};
