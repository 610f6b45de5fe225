//! Interactive session.
//!
//! Unlike the one-shot subcommands, the session keeps its view filter, sort
//! direction and edit session between actions, so repeated sorts alternate
//! direction and the completed/pending view sticks until switched.

use super::{
    add::add_task,
    delete::{confirm_delete, delete_task},
    edit::{edit_interactively, prompt_date},
    list::show_tasks,
    open_store,
    sort::sort_tasks,
    toggle::toggle_task,
};
use crate::{
    libs::{
        config::Config,
        edit::EditSession,
        filter::{visible_tasks, FilterState},
        messages::Message,
        sort::SortState,
        store::TaskStore,
        task::{parse_date, DATE_FORMAT},
    },
    msg_error, msg_info,
};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    List,
    Add,
    Toggle,
    Edit,
    Delete,
    Sort,
    ToggleView,
    SetDateFilter,
    ClearDateFilter,
    Quit,
}

const ACTIONS: [Action; 10] = [
    Action::List,
    Action::Add,
    Action::Toggle,
    Action::Edit,
    Action::Delete,
    Action::Sort,
    Action::ToggleView,
    Action::SetDateFilter,
    Action::ClearDateFilter,
    Action::Quit,
];

impl Action {
    fn label(self) -> Message {
        match self {
            Action::List => Message::MenuList,
            Action::Add => Message::MenuAdd,
            Action::Toggle => Message::MenuToggle,
            Action::Edit => Message::MenuEdit,
            Action::Delete => Message::MenuDelete,
            Action::Sort => Message::MenuSort,
            Action::ToggleView => Message::MenuToggleView,
            Action::SetDateFilter => Message::MenuSetDateFilter,
            Action::ClearDateFilter => Message::MenuClearDateFilter,
            Action::Quit => Message::MenuQuit,
        }
    }
}

pub fn cmd() -> Result<()> {
    let config = Config::read()?;
    let view = config.view_or_default();
    let mut store = open_store(&config)?;
    let mut filter = FilterState::new(view.show_completed);
    let mut sort = SortState::new(view.sort_ascending);
    let mut edit = EditSession::new();

    let labels: Vec<String> = ACTIONS.iter().map(|action| action.label().to_string()).collect();
    show_tasks(&store, &filter);

    loop {
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::SelectAction.to_string())
            .items(&labels)
            .default(0)
            .interact_opt()?;
        let Some(choice) = choice else {
            break;
        };

        match ACTIONS[choice] {
            Action::List => show_tasks(&store, &filter),
            Action::Add => add_from_prompts(&mut store)?,
            Action::Toggle => {
                if let Some(id) = select_task(&store, &filter)? {
                    toggle_task(&mut store, &id)?;
                }
            }
            Action::Edit => {
                if let Some(id) = select_task(&store, &filter)? {
                    edit_interactively(&mut store, &mut edit, &id)?;
                }
            }
            Action::Delete => {
                if let Some(id) = select_task(&store, &filter)? {
                    if confirm_delete(&store, &id)? {
                        delete_task(&mut store, &id)?;
                    } else {
                        msg_info!(Message::OperationCancelled);
                    }
                }
            }
            Action::Sort => {
                sort_tasks(&mut store, &mut sort)?;
                show_tasks(&store, &filter);
            }
            Action::ToggleView => {
                filter.toggle_view();
                if filter.show_completed {
                    msg_info!(Message::ShowingCompleted);
                } else {
                    msg_info!(Message::ShowingPending);
                }
                show_tasks(&store, &filter);
            }
            Action::SetDateFilter => {
                let date = prompt_date(Message::PromptFilterDate, None)?;
                filter.set_date(date);
                msg_info!(Message::DateFilterSet(date.format(DATE_FORMAT).to_string()));
                show_tasks(&store, &filter);
            }
            Action::ClearDateFilter => {
                filter.clear_date_filter();
                msg_info!(Message::DateFilterCleared);
                show_tasks(&store, &filter);
            }
            Action::Quit => break,
        }
    }

    Ok(())
}

/// Collects a new task from prompts. Blank answers are passed through so the
/// store reports the rejection.
fn add_from_prompts(store: &mut TaskStore) -> Result<()> {
    let theme = ColorfulTheme::default();
    let title: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskTitle.to_string())
        .allow_empty(true)
        .interact_text()?;
    let description: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskDescription.to_string())
        .allow_empty(true)
        .interact_text()?;
    let raw_due: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskDueDate.to_string())
        .allow_empty(true)
        .interact_text()?;

    let due = if raw_due.trim().is_empty() {
        None
    } else {
        match parse_date(&raw_due) {
            Some(date) => Some(date),
            None => {
                msg_error!(Message::InvalidDate(raw_due));
                return Ok(());
            }
        }
    };

    add_task(store, &title, &description, due)?;
    Ok(())
}

/// Lets the user pick one of the currently visible tasks.
fn select_task(store: &TaskStore, filter: &FilterState) -> Result<Option<String>> {
    let tasks = visible_tasks(store, filter);
    if tasks.is_empty() {
        msg_info!(Message::TasksNotFound);
        return Ok(None);
    }

    let items: Vec<String> = tasks
        .iter()
        .map(|task| format!("{}  {}  ({})", task.short_id(), task.title, task.due_date.format(DATE_FORMAT)))
        .collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectTask.to_string())
        .items(&items)
        .default(0)
        .interact_opt()?;

    Ok(selection.map(|index| tasks[index].id.clone()))
}
