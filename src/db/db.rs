use super::migrations::init_with_migrations;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

pub const DB_FILE_NAME: &str = "todue.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens `todue.db` inside `storage`.
    pub fn in_storage(storage: &DataStorage) -> Result<Db> {
        let db_file_path = storage.get_path(DB_FILE_NAME)?;
        Self::open(&db_file_path)
    }

    /// Opens a database file and brings its schema up to date.
    pub fn open(path: &Path) -> Result<Db> {
        let mut conn = Connection::open(path)?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }
}
