use super::{open_store, resolve_id, title_of};
use crate::{
    libs::{config::Config, messages::Message, store::TaskStore, task::Outcome},
    msg_info, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task id or a unique prefix of it
    id: String,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let mut store = open_store(&Config::read()?)?;
    let Some(id) = resolve_id(&store, &args.id) else {
        return Ok(());
    };

    if args.yes || confirm_delete(&store, &id)? {
        delete_task(&mut store, &id)?;
    } else {
        msg_info!(Message::OperationCancelled);
    }
    Ok(())
}

pub fn confirm_delete(store: &TaskStore, id: &str) -> Result<bool> {
    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteTask(title_of(store, id)).to_string())
        .default(false)
        .interact()?;
    Ok(confirmed)
}

pub fn delete_task(store: &mut TaskStore, id: &str) -> Result<Outcome> {
    let outcome = store.delete(id)?;
    if outcome.is_applied() {
        msg_success!(Message::TaskDeleted(id.to_string()));
    } else {
        msg_warning!(Message::TaskNotFound(id.to_string()));
    }
    Ok(outcome)
}
