//! Core error type definition and basic helpers

use core::fmt;
use thiserror::Error;

/// Main error type for subsplit core operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Configuration rejected as a whole
    #[error("Configuration error: {0}")]
    Config(String),

    /// A single configuration field holds an unusable value
    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidValue {
        field: &'static str,
        value: String,
        reason: String,
    },
}

impl CoreError {
    /// Create configuration error from message
    pub fn config<T: fmt::Display>(message: T) -> Self {
        Self::Config(message.to_string())
    }

    /// Create error for a rejected configuration field
    pub fn invalid_value<V: fmt::Display>(field: &'static str, value: V, reason: &str) -> Self {
        Self::InvalidValue {
            field,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = core::result::Result<T, CoreError>;
