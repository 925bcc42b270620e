//! Error types for the Strata index
//!
//! Index and map operations are total: absence is reported through `Option`
//! or `bool`, never through an error. The types here cover the remaining
//! failure surface, which is configuration loading and validation.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::io;
use thiserror::Error;

/// Result type alias for fallible Strata operations
pub type StrataResult<T> = std::result::Result<T, StrataError>;

/// Error types for the Strata index
#[derive(Debug, Error)]
pub enum StrataError {
    /// Invalid argument or configuration value
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O error (config file access)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Config file could not be parsed or serialized
    #[error("Config error: {0}")]
    ConfigParse(String),
}

impl StrataError {
    /// Build an `InvalidInput` error from any string-like message
    pub fn invalid_input(message: impl Into<String>) -> Self {
        StrataError::InvalidInput(message.into())
    }
}

impl From<toml::de::Error> for StrataError {
    fn from(e: toml::de::Error) -> Self {
        StrataError::ConfigParse(e.to_string())
    }
}

impl From<toml::ser::Error> for StrataError {
    fn from(e: toml::ser::Error) -> Self {
        StrataError::ConfigParse(e.to_string())
    }
}
