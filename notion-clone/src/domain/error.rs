// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Config error: {0}")]
    ConfigError(String),
    #[error("Output error: {0}")]
    OutputError(String),
}
