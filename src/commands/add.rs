use super::{open_store, parse_date_arg};
use crate::{
    libs::{config::Config, messages::Message, store::TaskStore, task::Outcome},
    msg_error, msg_success,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title
    title: String,
    /// Longer description
    #[arg(short, long, default_value = "")]
    description: String,
    /// Due date (YYYY-MM-DD)
    #[arg(long)]
    due: Option<String>,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let due = parse_date_arg(args.due.as_deref())?;
    let mut store = open_store(&Config::read()?)?;
    add_task(&mut store, &args.title, &args.description, due)?;
    Ok(())
}

/// Adds a task and reports the outcome to the user.
pub fn add_task(store: &mut TaskStore, title: &str, description: &str, due: Option<NaiveDate>) -> Result<Outcome> {
    let outcome = store.add(title, description, due)?;
    match outcome {
        Outcome::Applied => msg_success!(Message::TaskCreated(title.to_string())),
        _ => msg_error!(rejection_reason(title)),
    }
    Ok(outcome)
}

/// Why an add was rejected. A blank title is reported before a missing due date.
pub fn rejection_reason(title: &str) -> Message {
    if title.trim().is_empty() {
        Message::TaskTitleRequired
    } else {
        Message::TaskDueDateRequired
    }
}
