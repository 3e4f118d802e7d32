//! Error types shared across Agora crates

use thiserror::Error;
use std::result;

/// Common result type for core operations
pub type Result<T> = result::Result<T, CoreError>;

/// Common error type for core operations
#[derive(Error, Debug)]
pub enum CoreError {
    /// Logging could not be initialised
    #[error("Logging initialisation failed: {0}")]
    LoggingInit(String),
}

impl CoreError {
    /// Create a new logging initialisation error
    pub fn logging_init<S: Into<String>>(msg: S) -> Self {
        CoreError::LoggingInit(msg.into())
    }
}
