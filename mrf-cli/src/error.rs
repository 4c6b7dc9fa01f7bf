//! CLI Error Types
//!
//! Error types for the MRF CLI application.

use mrf_core::CoreError;
use mrf_storage::StorageError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Invalid argument
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Input rows failed validation and nothing usable remained
    #[error("Validation failed: {rejected} row(s) rejected")]
    ValidationFailed { rejected: usize },

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Core error
    #[error("Core error: {0}")]
    CoreError(#[from] CoreError),

    /// Storage error
    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),

    /// Server error
    #[error("Server error: {message}")]
    ServerError { message: String },
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        CliError::ConfigError {
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_arg(message: impl Into<String>) -> Self {
        CliError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a server error
    pub fn server(message: impl Into<String>) -> Self {
        CliError::ServerError {
            message: message.into(),
        }
    }

    /// Get exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::ConfigError { .. } => 1,
            CliError::InvalidArgument { .. } => 2,
            CliError::ValidationFailed { .. } => 3,
            CliError::IoError(_) => 5,
            CliError::CoreError(_) => 12,
            CliError::StorageError(e) if e.is_not_found() => 21,
            CliError::StorageError(_) => 13,
            CliError::ServerError { .. } => 30,
        }
    }
}
