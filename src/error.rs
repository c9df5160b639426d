//! Error types for the orthodist library.
//!
//! All errors are represented by the [`OrthodistError`] enum. Every error is a
//! caller-input problem surfaced synchronously; nothing is retried internally.
//!
//! # Examples
//!
//! ```
//! use orthodist::error::{OrthodistError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(OrthodistError::invalid_config("cost table must have 7 entries"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for orthodist operations.
#[derive(Error, Debug)]
pub enum OrthodistError {
    /// Malformed cost tables or alphabet definitions.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A source string was given without any target strings.
    #[error("Missing target: {0}")]
    MissingTarget(String),

    /// Malformed command-line input (e.g. a multi-letter symbol).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O errors (config files, word lists)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with OrthodistError.
pub type Result<T> = std::result::Result<T, OrthodistError>;

impl OrthodistError {
    /// Create a new invalid configuration error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        OrthodistError::InvalidConfiguration(msg.into())
    }

    /// Create a new missing target error.
    pub fn missing_target<S: Into<String>>(msg: S) -> Self {
        OrthodistError::MissingTarget(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        OrthodistError::InvalidArgument(msg.into())
    }

    /// Whether this error was caused by a malformed configuration.
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, OrthodistError::InvalidConfiguration(_))
    }
}
