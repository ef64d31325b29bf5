//! Core error types for subsplit configuration and cross-module error handling
//!
//! Provides the main `CoreError` enum. The import algorithm itself never fails
//! on text input; errors only arise when a caller hands over an invalid
//! configuration, which is rejected eagerly at construction time.
//!
//! # Error Philosophy
//!
//! - Use `thiserror` for structured error handling (no `anyhow` in the library)
//! - Provide detailed context for debugging and user feedback
//! - Include suggestions for common error scenarios
//!
//! # Examples
//!
//! ```rust
//! use subsplit_core::utils::errors::CoreError;
//!
//! let err = CoreError::invalid_value("max_line_length", 0, "must be greater than zero");
//! assert!(err.suggestion().contains("max_line_length"));
//! ```

mod core;
mod suggestion;

pub use core::{CoreError, Result};
