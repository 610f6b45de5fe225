//! SQLite persistence for todue.
//!
//! The database only holds named blobs: the task collection is stored as
//! one JSON document in the `"todos"` slot, exactly as it would be in a
//! JSON file. The schema is versioned through [`migrations`].
//!
//! ```rust,no_run
//! use todue::db::blobs::SqliteStore;
//! use todue::libs::data_storage::DataStorage;
//!
//! let store = SqliteStore::open(&DataStorage::new())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection management: opens `todue.db` and applies migrations.
pub mod db;

/// Versioned schema changes recorded in the `migrations` table.
pub mod migrations;

/// `BlobStore` implementation over the `blobs` table.
pub mod blobs;
