use super::{open_store, parse_date_arg, resolve_id};
use crate::{
    libs::{
        config::Config,
        edit::EditSession,
        messages::Message,
        store::TaskStore,
        task::{parse_date, Outcome, DATE_FORMAT},
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task id or a unique prefix of it
    id: String,
    /// New title
    #[arg(short, long)]
    title: Option<String>,
    /// New description
    #[arg(short, long)]
    description: Option<String>,
    /// New due date (YYYY-MM-DD)
    #[arg(long)]
    due: Option<String>,
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let due = parse_date_arg(args.due.as_deref())?;
    let mut store = open_store(&Config::read()?)?;
    let Some(id) = resolve_id(&store, &args.id) else {
        return Ok(());
    };

    let mut session = EditSession::new();
    if args.title.is_none() && args.description.is_none() && due.is_none() {
        return edit_interactively(&mut store, &mut session, &id).map(|_| ());
    }

    if let Some(task) = store.get(&id) {
        session.start(task);
    }
    if let Some(draft) = session.draft_mut() {
        if let Some(title) = args.title {
            draft.title = title;
        }
        if let Some(description) = args.description {
            draft.description = description;
        }
        if let Some(due) = due {
            draft.due_date = due;
        }
    }
    commit(&mut store, &mut session)?;
    Ok(())
}

/// Prompts for every editable field with the current values pre-filled,
/// then saves on confirmation and cancels otherwise.
pub(crate) fn edit_interactively(store: &mut TaskStore, session: &mut EditSession, id: &str) -> Result<Outcome> {
    let Some(task) = store.get(id) else {
        msg_error!(Message::TaskNotFound(id.to_string()));
        return Ok(Outcome::RejectedNotFound);
    };
    session.start(task);
    msg_print!(Message::EditingTask(task.title.clone()), true);

    let Some(draft) = session.draft_mut() else {
        return Ok(Outcome::RejectedNotFound);
    };
    let original = draft.clone();

    draft.title = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTitle.to_string())
        .default(draft.title.clone())
        .interact_text()?;
    draft.description = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDescription.to_string())
        .default(draft.description.clone())
        .allow_empty(true)
        .interact_text()?;
    draft.due_date = prompt_date(Message::PromptTaskDueDate, Some(draft.due_date.format(DATE_FORMAT).to_string()))?;

    if *draft == original {
        session.cancel();
        msg_info!(Message::NoChangesDetected);
        return Ok(Outcome::RejectedInvalid);
    }

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmTaskUpdate.to_string())
        .default(true)
        .interact()?;
    if !confirmed {
        session.cancel();
        msg_info!(Message::EditCancelled);
        return Ok(Outcome::RejectedInvalid);
    }

    commit(store, session)
}

/// Prompts until a valid `YYYY-MM-DD` date is entered.
pub(crate) fn prompt_date(prompt: Message, default: Option<String>) -> Result<chrono::NaiveDate> {
    let invalid = Message::DateFormatHint.to_string();
    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme).with_prompt(prompt.to_string());
    if let Some(default) = default {
        input = input.default(default);
    }
    let raw = input
        .validate_with(|raw: &String| -> Result<(), &str> {
            match parse_date(raw) {
                Some(_) => Ok(()),
                None => Err(&invalid),
            }
        })
        .interact_text()?;

    match parse_date(&raw) {
        Some(date) => Ok(date),
        None => crate::msg_bail_anyhow!(Message::InvalidDate(raw)),
    }
}

fn commit(store: &mut TaskStore, session: &mut EditSession) -> Result<Outcome> {
    let id = session.editing_task_id().unwrap_or_default().to_string();
    let outcome = session.save(store)?;
    match outcome {
        Outcome::Applied => msg_success!(Message::TaskUpdated(super::title_of(store, &id))),
        Outcome::RejectedInvalid => msg_error!(Message::TaskEditTitleRequired),
        Outcome::RejectedNotFound => msg_error!(Message::TaskNotFound(id)),
    }
    Ok(outcome)
}
