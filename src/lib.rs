//! # todue - personal task list with due dates
//!
//! A command-line task list: create, edit, complete, delete, filter and
//! sort tasks that persist across sessions on a single machine.
//!
//! ## Features
//!
//! - **Task Store**: write-through collection persisted as one JSON document
//! - **Views**: completed/pending view, optional exact due-date filter
//! - **Urgency**: overdue / due-today / upcoming-soon / upcoming-later colouring
//! - **Sorting**: due-date sort that alternates direction on every call
//! - **Editing**: staged edits committed or cancelled as a whole
//! - **Storage Backends**: SQLite database or plain JSON file
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todue::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
