//! MRF Storage Layer
//!
//! Persistence for generated MRF documents and the catalog that indexes them.
//!
//! # Backends
//!
//! - **Local filesystem**: one directory holding every document plus the
//!   `metadata.json` catalog index
//! - **In-memory**: for tests and dry runs
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use mrf_storage::{FileCatalog, LocalBlobStore};
//!
//! async fn example(document: mrf_core::MrfDocument) -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = Arc::new(LocalBlobStore::new("./mrf-files").await?);
//!     let catalog = FileCatalog::new(backend);
//!
//!     let entry = catalog.store(&document, "Test Health").await?;
//!     let file = catalog.retrieve(&entry.id).await?;
//!     println!("{} ({} bytes)", file.filename, file.bytes.len());
//!
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod catalog;
pub mod error;

pub use backend::{BackendType, BlobStore, HealthStatus, LocalBlobStore, MemoryBlobStore};
pub use catalog::{
    derive_filename, sanitize_customer, CatalogEntry, FileCatalog, MrfFileInfo, RetrievedFile,
    CATALOG_KEY,
};
pub use error::{StorageError, StorageResult};
