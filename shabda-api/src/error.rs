//! API error types

use std::string::FromUtf8Error;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Classifier configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] shabda_core::ConfigError),

    /// A rule in a preset failed
    #[error("rule error: {0}")]
    Rule(#[from] shabda_core::RuleError),

    /// Argument that names nothing known (mode, operation, signal)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 conversion error
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// Serialization error
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl From<shabda_core::UnknownOperation> for ApiError {
    fn from(err: shabda_core::UnknownOperation) -> Self {
        ApiError::InvalidArgument(err.to_string())
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
