//! Staged in-place editing of a single task.
//!
//! ```text
//!         start(task)              save() / cancel()
//!  Idle ───────────────▶ Editing ───────────────────▶ Idle
//!                          │  ▲
//!                          └──┘ start(other): last started wins
//! ```
//!
//! While editing, only the draft changes. The task itself is written once,
//! on [`EditSession::save`].

use super::storage::StorageError;
use super::store::TaskStore;
use super::task::{Outcome, Task};
use chrono::NaiveDate;

/// Scratch copy of the editable fields of one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    task_id: String,
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
}

impl EditDraft {
    pub fn task_id(&self) -> &str {
        &self.task_id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Idle,
    Editing(EditDraft),
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts editing `task`, replacing any session already in progress.
    pub fn start(&mut self, task: &Task) {
        if let EditSession::Editing(previous) = self {
            tracing::debug!(previous = %previous.task_id, next = %task.id, "edit session replaced");
        }
        *self = EditSession::Editing(EditDraft {
            task_id: task.id.clone(),
            title: task.title.clone(),
            description: task.description.clone(),
            due_date: task.due_date,
        });
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditSession::Editing(_))
    }

    pub fn editing_task_id(&self) -> Option<&str> {
        self.draft().map(EditDraft::task_id)
    }

    pub fn draft(&self) -> Option<&EditDraft> {
        match self {
            EditSession::Editing(draft) => Some(draft),
            EditSession::Idle => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut EditDraft> {
        match self {
            EditSession::Editing(draft) => Some(draft),
            EditSession::Idle => None,
        }
    }

    /// Commits the draft to its task and returns to `Idle`.
    ///
    /// A task deleted mid-edit yields `RejectedNotFound`; a blank draft title
    /// yields `RejectedInvalid`. In both cases the draft is discarded and
    /// nothing is written.
    pub fn save(&mut self, store: &mut TaskStore) -> Result<Outcome, StorageError> {
        let EditSession::Editing(draft) = std::mem::take(self) else {
            return Ok(Outcome::RejectedNotFound);
        };
        if draft.title.trim().is_empty() {
            tracing::debug!(id = %draft.task_id, "edit discarded, blank title");
            return Ok(Outcome::RejectedInvalid);
        }

        store.update_fields(&draft.task_id, &draft.title, &draft.description, draft.due_date)
    }

    /// Discards the draft without touching the task.
    pub fn cancel(&mut self) {
        *self = EditSession::Idle;
    }
}
