//! MRF File Catalog
//!
//! Persists generated MRF documents and keeps an index of every generation
//! in a single `metadata.json` blob.
//!
//! # Write path
//!
//! Under the catalog lock:
//!
//! 1. Load the whole index. An unreadable index fails the store before
//!    anything is written.
//! 2. Write the document under a storage key that embeds the entry id, so
//!    two generations for the same customer on the same day never share a
//!    blob.
//! 3. Append the new entry and persist the whole index.
//!
//! The index is only touched after the document write succeeds. The lock
//! serializes writers inside one process; several processes sharing a
//! storage directory can still lose index updates.
//!
//! Indexes written before entries carried a `storageKey` are still read; the
//! key of such an entry is recovered from its `filePath`.
//!
//! # Read path
//!
//! Every query re-reads the index. `list` is lenient and reports a missing or
//! unreadable index as empty; `get` and `retrieve` surface the failure.

use chrono::{DateTime, NaiveDate, Utc};
use mrf_core::MrfDocument;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

use crate::backend::BlobStore;
use crate::error::{StorageError, StorageResult};

/// Blob key of the catalog index
pub const CATALOG_KEY: &str = "metadata.json";

/// Persisted catalog record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Unique entry id
    pub id: String,
    /// Download filename, `mrf_<customer>_<date>.json`
    pub filename: String,
    pub customer: String,
    pub created_at: DateTime<Utc>,
    /// Byte length of the stored document
    pub size: u64,
    /// Number of claims in the document
    pub record_count: usize,
    /// Server-local location of the stored document
    pub file_path: String,
    /// Blob key of the stored document; empty in older indexes
    #[serde(default)]
    pub storage_key: String,
}

/// Public view of a catalog entry, without server-local locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MrfFileInfo {
    pub id: String,
    pub filename: String,
    pub customer: String,
    pub created_at: DateTime<Utc>,
    pub size: u64,
    pub record_count: usize,
}

impl From<&CatalogEntry> for MrfFileInfo {
    fn from(entry: &CatalogEntry) -> Self {
        Self {
            id: entry.id.clone(),
            filename: entry.filename.clone(),
            customer: entry.customer.clone(),
            created_at: entry.created_at,
            size: entry.size,
            record_count: entry.record_count,
        }
    }
}

impl From<CatalogEntry> for MrfFileInfo {
    fn from(entry: CatalogEntry) -> Self {
        Self::from(&entry)
    }
}

/// Stored document content plus its download filename
#[derive(Debug, Clone)]
pub struct RetrievedFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Replace every non-alphanumeric character with `_` and lower-case
pub fn sanitize_customer(customer: &str) -> String {
    customer
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect::<String>()
        .to_lowercase()
}

/// Download filename for a customer and generation date
pub fn derive_filename(customer: &str, date: NaiveDate) -> String {
    format!(
        "mrf_{}_{}.json",
        sanitize_customer(customer),
        date.format("%Y-%m-%d")
    )
}

/// Blob key of an entry written without one: the file name part of its
/// `file_path`, else its download filename
fn recovered_storage_key(entry: &CatalogEntry) -> String {
    Path::new(&entry.file_path)
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .unwrap_or(&entry.filename)
        .to_string()
}

fn storage_key_for(filename: &str, id: &str) -> String {
    let stem = filename.strip_suffix(".json").unwrap_or(filename);
    format!("{}_{}.json", stem, id)
}

/// Catalog of generated MRF files
pub struct FileCatalog {
    backend: Arc<dyn BlobStore>,
    /// Guards the index read-modify-write cycle
    write_lock: Mutex<()>,
}

impl FileCatalog {
    /// Create a catalog over a blob store
    pub fn new(backend: Arc<dyn BlobStore>) -> Self {
        Self {
            backend,
            write_lock: Mutex::new(()),
        }
    }

    /// Underlying blob store
    pub fn backend(&self) -> &Arc<dyn BlobStore> {
        &self.backend
    }

    /// Persist a document and append its catalog entry
    pub async fn store(&self, document: &MrfDocument, customer: &str) -> StorageResult<CatalogEntry> {
        let bytes = serde_json::to_vec_pretty(document)?;
        let id = Uuid::new_v4().to_string();
        let created_at = Utc::now();
        let filename = derive_filename(customer, created_at.date_naive());
        let storage_key = storage_key_for(&filename, &id);

        let entry = {
            let _guard = self.write_lock.lock().await;
            let mut entries = self.load_entries().await?;

            self.backend.write(&storage_key, &bytes).await?;

            let entry = CatalogEntry {
                id,
                filename,
                customer: customer.to_string(),
                created_at,
                size: bytes.len() as u64,
                record_count: document.record_count(),
                file_path: self.backend.location(&storage_key),
                storage_key,
            };
            entries.push(entry.clone());
            self.save_entries(&entries).await?;
            entry
        };

        info!(
            file_id = %entry.id,
            filename = %entry.filename,
            size = entry.size,
            record_count = entry.record_count,
            "Stored MRF file"
        );

        Ok(entry)
    }

    /// All entries, newest first. A missing or unreadable index lists as empty.
    pub async fn list(&self) -> Vec<MrfFileInfo> {
        match self.load_entries().await {
            Ok(mut entries) => {
                entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                entries.iter().map(MrfFileInfo::from).collect()
            }
            Err(e) => {
                warn!(error = %e, "Failed to load MRF catalog, listing as empty");
                Vec::new()
            }
        }
    }

    /// Look up one entry by id
    pub async fn get(&self, id: &str) -> StorageResult<MrfFileInfo> {
        self.find_entry(id).await.map(MrfFileInfo::from)
    }

    /// Load the stored document for an entry
    pub async fn retrieve(&self, id: &str) -> StorageResult<RetrievedFile> {
        let entry = self.find_entry(id).await?;

        if !self.backend.exists(&entry.storage_key).await? {
            warn!(file_id = %id, key = %entry.storage_key, "Catalog entry points at a missing file");
            return Err(StorageError::NotFound(format!(
                "Stored file for MRF {} is missing",
                id
            )));
        }

        let bytes = self.backend.read(&entry.storage_key).await?;

        Ok(RetrievedFile {
            filename: entry.filename,
            bytes,
        })
    }

    async fn find_entry(&self, id: &str) -> StorageResult<CatalogEntry> {
        self.load_entries()
            .await?
            .into_iter()
            .find(|entry| entry.id == id)
            .ok_or_else(|| StorageError::NotFound(format!("MRF file {}", id)))
    }

    async fn load_entries(&self) -> StorageResult<Vec<CatalogEntry>> {
        match self.backend.read(CATALOG_KEY).await {
            Ok(bytes) => {
                let mut entries: Vec<CatalogEntry> = serde_json::from_slice(&bytes)
                    .map_err(|e| StorageError::CatalogCorrupt(e.to_string()))?;
                for entry in entries.iter_mut().filter(|e| e.storage_key.is_empty()) {
                    entry.storage_key = recovered_storage_key(entry);
                }
                Ok(entries)
            }
            Err(StorageError::NotFound(_)) => Ok(Vec::new()),
            Err(e) => Err(e),
        }
    }

    async fn save_entries(&self, entries: &[CatalogEntry]) -> StorageResult<()> {
        let bytes = serde_json::to_vec_pretty(entries)?;
        self.backend.write(CATALOG_KEY, &bytes).await
    }
}
