use super::{open_store, parse_date_arg, today};
use crate::{
    libs::{
        config::{Config, ViewConfig},
        filter::{visible_tasks, FilterState},
        messages::Message,
        store::TaskStore,
        task::DATE_FORMAT,
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Show completed tasks
    #[arg(short, long, conflicts_with = "pending")]
    completed: bool,
    /// Show pending tasks, overriding the configured view
    #[arg(short, long)]
    pending: bool,
    /// Only tasks due on this date (YYYY-MM-DD)
    #[arg(long)]
    date: Option<String>,
}

impl ListArgs {
    /// Completed or pending view: an explicit flag wins over the configured default.
    pub fn show_completed(&self, view: &ViewConfig) -> bool {
        match (self.completed, self.pending) {
            (true, _) => true,
            (_, true) => false,
            _ => view.show_completed,
        }
    }
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let config = Config::read()?;
    let mut filter = FilterState::new(args.show_completed(&config.view_or_default()));
    if let Some(date) = parse_date_arg(args.date.as_deref())? {
        filter.set_date(date);
    }

    let store = open_store(&config)?;
    show_tasks(&store, &filter);
    Ok(())
}

/// Prints the tasks visible under `filter`, with a header naming the view.
pub fn show_tasks(store: &TaskStore, filter: &FilterState) {
    let tasks = visible_tasks(store, filter);
    if tasks.is_empty() {
        msg_info!(Message::TasksNotFound);
        return;
    }

    let header = match filter.date_to_filter {
        Some(date) => Message::TasksForDateHeader(date.format(DATE_FORMAT).to_string(), filter.show_completed),
        None if filter.show_completed => Message::TasksCompletedHeader,
        None => Message::TasksHeader,
    };
    msg_print!(header, true);
    View::tasks(&tasks, today());
}
