// src/infrastructure/mod.rs
pub mod config;
pub mod renderer;

pub use config::Config;
pub use renderer::{write_output, ContentRenderer};
