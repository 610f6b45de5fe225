use super::db::Db;
use crate::libs::data_storage::DataStorage;
use crate::libs::storage::{BlobStore, StorageError};
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

const SELECT_BLOB: &str = "SELECT value FROM blobs WHERE key = ?1";
const UPSERT_BLOB: &str = "INSERT INTO blobs (key, value, updated_at) VALUES (?1, ?2, datetime(CURRENT_TIMESTAMP, 'localtime'))
    ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";

/// Blob store backed by the `blobs` table of `todue.db`.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens `todue.db` inside `storage`.
    pub fn open(storage: &DataStorage) -> Result<Self> {
        let db = Db::in_storage(storage)?;
        Ok(Self { conn: db.conn })
    }

    pub fn open_path(path: &Path) -> Result<Self> {
        let db = Db::open(path)?;
        Ok(Self { conn: db.conn })
    }
}

impl BlobStore for SqliteStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let blob = self
            .conn
            .query_row(SELECT_BLOB, params![key], |row| row.get(0))
            .optional()?;
        Ok(blob)
    }

    fn save(&mut self, key: &str, blob: &str) -> Result<(), StorageError> {
        self.conn.execute(UPSERT_BLOB, params![key, blob])?;
        Ok(())
    }
}
