//! MRF Storage Error Types

use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// Catalog entry or stored blob not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Write operation failed
    #[error("Write failed: {0}")]
    WriteFailed(String),

    /// Read operation failed
    #[error("Read failed: {0}")]
    ReadFailed(String),

    /// Catalog index exists but does not parse
    #[error("Catalog corrupt: {0}")]
    CatalogCorrupt(String),

    /// Blob key rejected by the backend
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Backend error
    #[error("Backend error: {0}")]
    Backend(String),
}

impl StorageError {
    /// True for missing ids and missing blobs
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound(_))
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}

/// Storage result type
pub type StorageResult<T> = Result<T, StorageError>;
