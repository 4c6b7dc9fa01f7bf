//! Blob Storage Backends

pub mod local;
pub mod memory;
pub mod traits;

pub use local::LocalBlobStore;
pub use memory::MemoryBlobStore;
pub use traits::{validate_key, BackendType, BlobStore, HealthStatus};
