//! Application State
//!
//! Shared state for the MRF API service.

use std::path::Path;
use std::sync::Arc;

use mrf_core::MrfTransformer;
use mrf_storage::{BlobStore, FileCatalog, LocalBlobStore, MemoryBlobStore, StorageResult};

/// Application state
#[derive(Clone)]
pub struct AppState {
    /// Catalog of generated files; owns the index write lock
    pub catalog: Arc<FileCatalog>,
    /// Document builder
    pub transformer: MrfTransformer,
}

impl AppState {
    /// Create state backed by a local storage directory
    pub async fn new(storage_path: impl AsRef<Path>) -> StorageResult<Self> {
        let backend = Arc::new(LocalBlobStore::new(storage_path).await?);
        Ok(Self::with_backend(backend))
    }

    /// Create state over any blob store
    pub fn with_backend(backend: Arc<dyn BlobStore>) -> Self {
        Self {
            catalog: Arc::new(FileCatalog::new(backend)),
            transformer: MrfTransformer::new(),
        }
    }

    /// Create state backed by memory only
    pub fn in_memory() -> Self {
        Self::with_backend(Arc::new(MemoryBlobStore::new()))
    }
}
