//! Error types for the Wordgate library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`WordgateError`] enum.
//!
//! # Examples
//!
//! ```
//! use wordgate::error::{WordgateError, Result};
//!
//! fn pick_format(name: &str) -> Result<()> {
//!     Err(WordgateError::config(format!("unknown word list format '{name}'")))
//! }
//!
//! let err = pick_format("csv").unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Configuration error: unknown word list format 'csv'"
//! );
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Wordgate operations.
///
/// Configuration and resource problems are reported while a filter factory
/// is being built. Once tokens are streaming, the only errors are the ones
/// an upstream token producer returns, and those are passed through as-is.
#[derive(Error, Debug)]
pub enum WordgateError {
    /// I/O errors (reading word list resources, CLI input)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid or missing configuration (unknown option, bad format name,
    /// unreadable resource)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Word list content that cannot be decoded
    #[error("Parse error: {0}")]
    Parse(String),

    /// Analysis-related errors raised by token producers
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with WordgateError.
pub type Result<T> = std::result::Result<T, WordgateError>;

impl WordgateError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        WordgateError::Config(msg.into())
    }

    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        WordgateError::Parse(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        WordgateError::Analysis(msg.into())
    }
}
