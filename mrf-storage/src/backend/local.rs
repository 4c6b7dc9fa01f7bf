//! Local Filesystem Blob Store
//!
//! Stores each blob as a file directly under one directory. Writes land in a
//! hidden temporary sibling first and are renamed into place after an fsync,
//! so readers never observe a half-written catalog or document.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use super::traits::{validate_key, BackendType, BlobStore, HealthStatus};
use crate::error::{StorageError, StorageResult};

/// Local filesystem blob store
pub struct LocalBlobStore {
    /// Base directory for storage
    base_path: PathBuf,
}

impl LocalBlobStore {
    /// Create a store rooted at `base_path`, creating the directory if needed
    pub async fn new(base_path: impl AsRef<Path>) -> StorageResult<Self> {
        let base_path = base_path.as_ref().to_path_buf();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::Backend(format!("Failed to create directory {:?}: {}", base_path, e))
        })?;

        info!("Initialized local blob store at {:?}", base_path);

        Ok(Self { base_path })
    }

    /// Storage root
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn blob_path(&self, key: &str) -> StorageResult<PathBuf> {
        validate_key(key)?;
        Ok(self.base_path.join(key))
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    async fn write(&self, key: &str, data: &[u8]) -> StorageResult<()> {
        let path = self.blob_path(key)?;
        let tmp_path = self
            .base_path
            .join(format!(".{}.{}.tmp", key, uuid::Uuid::new_v4().simple()));

        debug!("Writing blob {} ({} bytes)", key, data.len());

        let mut file = fs::File::create(&tmp_path).await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to create file {:?}: {}", tmp_path, e))
        })?;
        file.write_all(data).await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to write {:?}: {}", tmp_path, e))
        })?;
        file.sync_all().await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to sync {:?}: {}", tmp_path, e))
        })?;
        drop(file);

        if let Err(e) = fs::rename(&tmp_path, &path).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(StorageError::WriteFailed(format!(
                "Failed to move blob into place at {:?}: {}",
                path, e
            )));
        }

        Ok(())
    }

    async fn read(&self, key: &str) -> StorageResult<Vec<u8>> {
        let path = self.blob_path(key)?;

        match fs::read(&path).await {
            Ok(data) => {
                debug!("Read {} bytes from {}", data.len(), key);
                Ok(data)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(StorageError::NotFound(key.to_string()))
            }
            Err(e) => Err(StorageError::ReadFailed(format!(
                "Failed to read {:?}: {}",
                path, e
            ))),
        }
    }

    async fn exists(&self, key: &str) -> StorageResult<bool> {
        let path = self.blob_path(key)?;
        fs::try_exists(&path).await.map_err(|e| {
            StorageError::ReadFailed(format!("Failed to access {:?}: {}", path, e))
        })
    }

    fn location(&self, key: &str) -> String {
        self.base_path.join(key).to_string_lossy().into_owned()
    }

    fn backend_type(&self) -> BackendType {
        BackendType::Local
    }

    async fn health_check(&self) -> StorageResult<HealthStatus> {
        match fs::metadata(&self.base_path).await {
            Ok(meta) if meta.is_dir() => Ok(HealthStatus::healthy()),
            Ok(_) => Ok(HealthStatus::unhealthy(format!(
                "{:?} is not a directory",
                self.base_path
            ))),
            Err(e) => Ok(HealthStatus::unhealthy(format!(
                "Storage directory unavailable: {}",
                e
            ))),
        }
    }
}
