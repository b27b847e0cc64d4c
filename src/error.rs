//! Error types and handling for snipgen
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! The taxonomy is deliberately small: malformed host configuration and
//! unreadable tagged files are hard errors; everything the resolver can
//! tolerate (unknown feature names, missing store entries, untagged files)
//! is a silent skip and never surfaces here.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for snipgen operations
#[derive(Error, Diagnostic, Debug)]
pub enum SnipgenError {
    // Option errors
    #[error("Invalid value '{value}' for option '{key}'")]
    #[diagnostic(
        code(snipgen::options::invalid_flag),
        help("Accepted values are \"true\" and \"false\"")
    )]
    InvalidFlag { key: String, value: String },

    // Registry errors
    #[error("Invalid feature registry: {message}")]
    #[diagnostic(code(snipgen::registry::invalid))]
    RegistryInvalid { message: String },

    #[error("Failed to parse feature registry: {reason}")]
    #[diagnostic(
        code(snipgen::registry::parse_failed),
        help("Expected a `features:` list of `name` plus `snippets` entries")
    )]
    RegistryParseFailed { reason: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(
        code(snipgen::fs::read_failed),
        help("The file was tagged for generation; check that it exists and is readable")
    )]
    FileReadFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(snipgen::fs::io_error))]
    IoError { message: String },

    // Pipeline errors
    #[error("Generation pass was cancelled")]
    #[diagnostic(code(snipgen::pipeline::cancelled))]
    Cancelled,
}

/// Create an [`SnipgenError::InvalidFlag`] error
pub fn invalid_flag(key: impl Into<String>, value: impl Into<String>) -> SnipgenError {
    SnipgenError::InvalidFlag {
        key: key.into(),
        value: value.into(),
    }
}

/// Create an [`SnipgenError::RegistryInvalid`] error
pub fn registry_invalid(message: impl Into<String>) -> SnipgenError {
    SnipgenError::RegistryInvalid {
        message: message.into(),
    }
}

/// Create an [`SnipgenError::FileReadFailed`] error
pub fn file_read_failed(path: impl Into<String>, reason: impl Into<String>) -> SnipgenError {
    SnipgenError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

impl From<std::io::Error> for SnipgenError {
    fn from(err: std::io::Error) -> Self {
        SnipgenError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for SnipgenError {
    fn from(err: serde_yaml::Error) -> Self {
        SnipgenError::RegistryParseFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SnipgenError>;
