//! Visible subset of the store for the current view settings.

use super::store::TaskStore;
use super::task::Task;
use chrono::NaiveDate;

/// View settings of a session. Never persisted.
///
/// The completion filter is binary: either completed or pending tasks are
/// shown, never both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub show_completed: bool,
    pub date_to_filter: Option<NaiveDate>,
}

impl FilterState {
    pub fn new(show_completed: bool) -> Self {
        FilterState {
            show_completed,
            date_to_filter: None,
        }
    }

    /// Switches between the completed and the pending view.
    pub fn toggle_view(&mut self) {
        self.show_completed = !self.show_completed;
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date_to_filter = Some(date);
    }

    pub fn clear_date_filter(&mut self) {
        self.date_to_filter = None;
    }
}

/// Tasks matching `filter`, in store order.
///
/// The date filter (exact day) applies first, then the completion filter.
pub fn visible_tasks<'a>(store: &'a TaskStore, filter: &FilterState) -> Vec<&'a Task> {
    store
        .tasks()
        .iter()
        .filter(|task| filter.date_to_filter.map_or(true, |date| task.due_date == date))
        .filter(|task| task.completed == filter.show_completed)
        .collect()
}
