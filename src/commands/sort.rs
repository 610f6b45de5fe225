use super::{list::show_tasks, open_store};
use crate::{
    libs::{
        config::{Config, ViewConfig},
        filter::FilterState,
        messages::Message,
        sort::{toggle_sort, SortOrder, SortState},
        store::TaskStore,
    },
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SortArgs {
    /// Earliest due date first
    #[arg(short, long, conflicts_with = "descending")]
    ascending: bool,
    /// Latest due date first
    #[arg(short, long)]
    descending: bool,
}

impl SortArgs {
    /// Direction of the sort: an explicit flag wins over the configured default.
    pub fn initial_state(&self, view: &ViewConfig) -> SortState {
        match (self.ascending, self.descending) {
            (true, _) => SortState::new(true),
            (_, true) => SortState::new(false),
            _ => SortState::new(view.sort_ascending),
        }
    }
}

pub fn cmd(args: SortArgs) -> Result<()> {
    let config = Config::read()?;
    let view = config.view_or_default();
    let mut state = args.initial_state(&view);

    let mut store = open_store(&config)?;
    sort_tasks(&mut store, &mut state)?;
    show_tasks(&store, &FilterState::new(view.show_completed));
    Ok(())
}

pub fn sort_tasks(store: &mut TaskStore, state: &mut SortState) -> Result<SortOrder> {
    let order = toggle_sort(store, state)?;
    match order {
        SortOrder::Ascending => msg_success!(Message::SortedAscending),
        SortOrder::Descending => msg_success!(Message::SortedDescending),
    }
    Ok(order)
}
