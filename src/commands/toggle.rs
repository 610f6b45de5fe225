use super::{open_store, resolve_id};
use crate::{
    libs::{config::Config, messages::Message, store::TaskStore, task::Outcome},
    msg_error, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ToggleArgs {
    /// Task id or a unique prefix of it
    id: String,
}

pub fn cmd(args: ToggleArgs) -> Result<()> {
    let mut store = open_store(&Config::read()?)?;
    if let Some(id) = resolve_id(&store, &args.id) {
        toggle_task(&mut store, &id)?;
    }
    Ok(())
}

pub fn toggle_task(store: &mut TaskStore, id: &str) -> Result<Outcome> {
    let outcome = store.toggle_completion(id)?;
    match store.get(id) {
        Some(task) if outcome.is_applied() && task.completed => msg_success!(Message::TaskCompleted(task.title.clone())),
        Some(task) if outcome.is_applied() => msg_success!(Message::TaskReopened(task.title.clone())),
        _ => msg_error!(Message::TaskNotFound(id.to_string())),
    }
    Ok(outcome)
}
