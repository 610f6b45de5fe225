//! Command-line interface for todue.
//!
//! Each subcommand is a one-shot action against the persisted task list.
//! Running `todue` without a subcommand opens an interactive session in
//! which the view filter, sort direction and edit session stay alive
//! between actions.

pub mod add;
pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod session;
pub mod sort;
pub mod toggle;

use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::storage::{open_blob_store, UuidGenerator};
use crate::libs::store::TaskStore;
use crate::libs::task::{parse_date, Task};
use crate::{msg_bail_anyhow, msg_error};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Add a task")]
    Add(add::AddArgs),
    #[command(about = "List pending or completed tasks")]
    List(list::ListArgs),
    #[command(about = "Toggle a task between pending and completed")]
    Toggle(toggle::ToggleArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    #[command(about = "Edit title, description or due date of a task")]
    Edit(edit::EditArgs),
    #[command(about = "Sort all tasks by due date")]
    Sort(sort::SortArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Some(Commands::Init(args)) => init::cmd(args),
            Some(Commands::Add(args)) => add::cmd(args),
            Some(Commands::List(args)) => list::cmd(args),
            Some(Commands::Toggle(args)) => toggle::cmd(args),
            Some(Commands::Delete(args)) => delete::cmd(args),
            Some(Commands::Edit(args)) => edit::cmd(args),
            Some(Commands::Sort(args)) => sort::cmd(args),
            None => session::cmd(),
        }
    }
}

/// Loads the task store through the configured backend.
pub fn open_store(config: &Config) -> Result<TaskStore> {
    let blobs = open_blob_store(&config.storage_or_default(), &DataStorage::new())?;
    Ok(TaskStore::load(blobs, Box::new(UuidGenerator)))
}

/// Resolves a full id or a unique id prefix to a task id.
///
/// Prints the reason and returns `None` when nothing or more than one task matches.
pub fn resolve_id(store: &TaskStore, prefix: &str) -> Option<String> {
    let matches = store.find_by_prefix(prefix);
    match matches.as_slice() {
        [task] => Some(task.id.clone()),
        [] => {
            msg_error!(Message::TaskNotFound(prefix.to_string()));
            None
        }
        many => {
            msg_error!(Message::TaskIdAmbiguous(prefix.to_string(), many.len()));
            None
        }
    }
}

/// Parses an optional `YYYY-MM-DD` argument, failing on malformed input.
pub fn parse_date_arg(raw: Option<&str>) -> Result<Option<NaiveDate>> {
    match raw {
        None => Ok(None),
        Some(raw) => match parse_date(raw) {
            Some(date) => Ok(Some(date)),
            None => msg_bail_anyhow!(Message::InvalidDate(raw.to_string())),
        },
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn title_of(store: &TaskStore, id: &str) -> String {
    store.get(id).map(|task: &Task| task.title.clone()).unwrap_or_default()
}
