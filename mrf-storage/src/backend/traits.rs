//! Blob Store Trait
//!
//! The catalog persists everything through this interface, so the same
//! catalog logic runs over a local directory or an in-memory map.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::{StorageError, StorageResult};

/// Flat key/value blob storage
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Write (or replace) the blob stored under `key`
    async fn write(&self, key: &str, data: &[u8]) -> StorageResult<()>;

    /// Read a blob; `NotFound` if absent
    async fn read(&self, key: &str) -> StorageResult<Vec<u8>>;

    /// Check if a blob exists
    async fn exists(&self, key: &str) -> StorageResult<bool>;

    /// Backend-local location of a key (file path, URI, ...)
    fn location(&self, key: &str) -> String;

    /// Get backend type identifier
    fn backend_type(&self) -> BackendType;

    /// Health check
    async fn health_check(&self) -> StorageResult<HealthStatus>;
}

/// Storage backend type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendType {
    /// Local filesystem
    Local,
    /// In-memory (testing only)
    Memory,
}

impl BackendType {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Memory => "memory",
        }
    }
}

impl std::fmt::Display for BackendType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Backend health status
#[derive(Debug, Clone)]
pub struct HealthStatus {
    /// Is healthy
    pub healthy: bool,
    /// Status message
    pub message: String,
    /// Check timestamp
    pub checked_at: DateTime<Utc>,
}

impl HealthStatus {
    /// Create healthy status
    pub fn healthy() -> Self {
        Self {
            healthy: true,
            message: "OK".to_string(),
            checked_at: Utc::now(),
        }
    }

    /// Create unhealthy status
    pub fn unhealthy(message: impl Into<String>) -> Self {
        Self {
            healthy: false,
            message: message.into(),
            checked_at: Utc::now(),
        }
    }
}

/// Reject keys that could escape a flat namespace
pub fn validate_key(key: &str) -> StorageResult<()> {
    if key.is_empty()
        || key.contains('/')
        || key.contains('\\')
        || key.contains("..")
        || key.starts_with('.')
    {
        return Err(StorageError::InvalidKey(key.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key() {
        assert!(validate_key("metadata.json").is_ok());
        assert!(validate_key("mrf_test_2024-06-01_abc.json").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("../etc/passwd").is_err());
        assert!(validate_key("nested/file.json").is_err());
        assert!(validate_key(".hidden").is_err());
    }
}
