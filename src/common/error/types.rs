//! Unified error types for odsgen.
//!
//! This module provides a single error type covering schema loading, style
//! markup parsing and package writing, presenting a consistent API to callers.
use thiserror::Error;

/// Main error type for odsgen operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// XML parsing or writing error
    #[error("XML error: {0}")]
    XmlError(String),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// A style definition whose markup cannot be used
    #[error("Invalid style '{name}': {reason}")]
    InvalidStyle { name: String, reason: String },

    /// A `styles` or `defaults` section with an unusable shape
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),

    /// Unsupported input or backend capability
    #[error("Unsupported feature: {0}")]
    Unsupported(String),
}

impl Error {
    /// Wrap a markup problem with the name of the style it belongs to.
    pub(crate) fn invalid_style(name: &str, reason: impl ToString) -> Self {
        Error::InvalidStyle {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Result type for odsgen operations.
pub type Result<T> = std::result::Result<T, Error>;
