//! Persistence and identifier collaborators of the task store.
//!
//! The store never touches files or databases directly. It talks to a
//! [`BlobStore`], a key-value slot store holding whole serialized documents,
//! and asks an [`IdGenerator`] for fresh task ids. Three blob stores exist:
//!
//! - [`MemoryStore`]: process-local, used by tests and dry runs
//! - [`JsonFileStore`]: one `<key>.json` file per slot
//! - [`crate::db::blobs::SqliteStore`]: a `blobs` table in `todue.db`
//!
//! [`open_blob_store`] picks one according to the configuration.

use crate::db::blobs::SqliteStore;
use crate::libs::config::{StorageBackend, StorageConfig};
use crate::libs::data_storage::DataStorage;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::rc::Rc;
use thiserror::Error;
use uuid::Uuid;

/// Failures raised by blob store backends.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to access blob '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("failed to encode tasks: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A store of named blobs. `load` returns `None` for a slot never written.
pub trait BlobStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn save(&mut self, key: &str, blob: &str) -> Result<(), StorageError>;
}

/// Source of unique task identifiers.
pub trait IdGenerator {
    fn new_id(&mut self) -> String;
}

/// Random UUID v4 identifiers in their hyphenated form.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn new_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[derive(Debug, Default)]
struct MemorySlots {
    blobs: HashMap<String, String>,
    writes: usize,
}

/// In-memory blob store.
///
/// Clones share the same slots, so a test can hand one handle to a
/// `TaskStore` and keep another to inspect what was written.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    slots: Rc<RefCell<MemorySlots>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a slot without counting it as a write.
    pub fn with_blob(key: &str, blob: &str) -> Self {
        let store = Self::new();
        store.slots.borrow_mut().blobs.insert(key.to_string(), blob.to_string());
        store
    }

    /// Raw content of a slot.
    pub fn blob(&self, key: &str) -> Option<String> {
        self.slots.borrow().blobs.get(key).cloned()
    }

    /// Number of `save` calls made through any handle.
    pub fn writes(&self) -> usize {
        self.slots.borrow().writes
    }
}

impl BlobStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.blob(key))
    }

    fn save(&mut self, key: &str, blob: &str) -> Result<(), StorageError> {
        let mut slots = self.slots.borrow_mut();
        slots.blobs.insert(key.to_string(), blob.to_string());
        slots.writes += 1;
        Ok(())
    }
}

/// Blob store keeping each slot in `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl BlobStore for JsonFileStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(blob) => Ok(Some(blob)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn save(&mut self, key: &str, blob: &str) -> Result<(), StorageError> {
        let io_err = |source| StorageError::Io {
            key: key.to_string(),
            source,
        };
        fs::create_dir_all(&self.dir).map_err(io_err)?;
        fs::write(self.path_for(key), blob).map_err(io_err)
    }
}

/// Opens the blob store selected by `config`, rooted in `data`.
pub fn open_blob_store(config: &StorageConfig, data: &DataStorage) -> anyhow::Result<Box<dyn BlobStore>> {
    let store: Box<dyn BlobStore> = match config.backend {
        StorageBackend::Sqlite => Box::new(SqliteStore::open(data)?),
        StorageBackend::Json => Box::new(JsonFileStore::new(data.base_path())),
    };
    tracing::debug!(backend = ?config.backend, path = %data.base_path().display(), "opened blob store");
    Ok(store)
}
