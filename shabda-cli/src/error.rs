//! Error handling for the CLI application

use thiserror::Error;

/// Custom error type for CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Neither positional forms nor an input file were given
    #[error("No input: pass forms as arguments or use --input")]
    NoInput,
    /// File not found or inaccessible
    #[error("File not found: {0}")]
    FileNotFound(String),
    /// Batch file line that is not `ROOT AFFIX [MODE]`
    #[error("Invalid batch line {line}: {reason}")]
    InvalidBatchLine { line: usize, reason: String },
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
