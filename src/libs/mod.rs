//! Core library modules for todue.
//!
//! - **Domain**: [`task`], [`store`], [`filter`], [`urgency`], [`sort`], [`edit`]
//! - **Collaborators**: [`storage`] (blob stores, id generation), [`data_storage`]
//! - **Infrastructure**: [`config`], [`messages`], [`view`]
//!
//! ```rust
//! use chrono::NaiveDate;
//! use todue::libs::filter::{visible_tasks, FilterState};
//! use todue::libs::storage::{MemoryStore, UuidGenerator};
//! use todue::libs::store::TaskStore;
//!
//! let mut store = TaskStore::load(Box::new(MemoryStore::new()), Box::new(UuidGenerator));
//! store.add("Water plants", "", NaiveDate::from_ymd_opt(2024, 6, 1)).unwrap();
//! assert_eq!(visible_tasks(&store, &FilterState::default()).len(), 1);
//! ```

pub mod config;
pub mod data_storage;
pub mod edit;
pub mod filter;
pub mod messages;
pub mod sort;
pub mod storage;
pub mod store;
pub mod task;
pub mod urgency;
pub mod view;
