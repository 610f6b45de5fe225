//! Due-date sorting of the whole task collection.
//!
//! The direction alternates: each [`toggle_sort`] applies the direction held
//! in [`SortState`] and flips it for the next call. The current view filter
//! plays no part; hidden tasks are reordered too.

use super::storage::StorageError;
use super::store::TaskStore;

/// Direction of the next due-date sort. Resets on every start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    pub is_ascending: bool,
}

/// Direction a sort was applied in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortState {
    pub fn new(is_ascending: bool) -> Self {
        SortState { is_ascending }
    }
}

/// Sorts the whole collection by due date in the direction held by `state`,
/// flips the direction for the next call and persists the new order.
///
/// Returns the order that was applied.
pub fn toggle_sort(store: &mut TaskStore, state: &mut SortState) -> Result<SortOrder, StorageError> {
    let order = if state.is_ascending { SortOrder::Ascending } else { SortOrder::Descending };
    store.reorder_by_due_date(state.is_ascending);
    state.is_ascending = !state.is_ascending;
    tracing::info!(?order, "tasks sorted by due date");
    store.persist()?;

    Ok(order)
}
