//! The task collection and its write-through mutations.
//!
//! A [`TaskStore`] is created by loading the `"todos"` slot of a
//! [`BlobStore`]; every mutating operation ends by serializing the whole
//! collection back into that slot. Rejected operations never write.

use super::storage::{BlobStore, IdGenerator, StorageError};
use super::task::{Outcome, Task};
use chrono::NaiveDate;
use std::collections::HashSet;

/// Name of the blob slot holding the task collection.
pub const STORAGE_KEY: &str = "todos";

/// Ordered task collection bound to its blob store and id source.
///
/// Order is insertion order until a sort rewrites it.
pub struct TaskStore {
    tasks: Vec<Task>,
    blobs: Box<dyn BlobStore>,
    ids: Box<dyn IdGenerator>,
}

impl TaskStore {
    /// Loads the collection from `blobs`.
    ///
    /// A missing, unreadable or malformed slot yields an empty collection.
    pub fn load(blobs: Box<dyn BlobStore>, ids: Box<dyn IdGenerator>) -> Self {
        let tasks = match blobs.load(STORAGE_KEY) {
            Ok(Some(blob)) => decode(&blob),
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!(error = %err, "task blob unreadable, starting empty");
                Vec::new()
            }
        };
        tracing::debug!(count = tasks.len(), "task store loaded");

        TaskStore { tasks, blobs, ids }
    }

    /// All tasks in store order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Task with exactly this id.
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Tasks whose id starts with `prefix`; an exact id match wins outright.
    pub fn find_by_prefix(&self, prefix: &str) -> Vec<&Task> {
        if let Some(task) = self.get(prefix) {
            return vec![task];
        }
        if prefix.is_empty() {
            return Vec::new();
        }
        self.tasks.iter().filter(|task| task.id.starts_with(prefix)).collect()
    }

    /// Appends a new pending task.
    ///
    /// Rejected without writing when the title is blank or the due date is missing.
    pub fn add(&mut self, title: &str, description: &str, due_date: Option<NaiveDate>) -> Result<Outcome, StorageError> {
        let due_date = match due_date {
            Some(date) if !title.trim().is_empty() => date,
            _ => {
                tracing::debug!(title, ?due_date, "add rejected");
                return Ok(Outcome::RejectedInvalid);
            }
        };

        let task = Task::new(self.ids.new_id(), title, description, due_date);
        tracing::info!(id = %task.id, %due_date, "task added");
        self.tasks.push(task);
        self.persist()?;

        Ok(Outcome::Applied)
    }

    /// Flips `completed` and persists. An unknown id changes and writes nothing.
    pub fn toggle_completion(&mut self, id: &str) -> Result<Outcome, StorageError> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(Outcome::RejectedNotFound);
        };
        task.completed = !task.completed;
        tracing::info!(id, completed = task.completed, "task completion toggled");
        self.persist()?;

        Ok(Outcome::Applied)
    }

    /// Removes a task. The collection is persisted even when `id` is unknown.
    pub fn delete(&mut self, id: &str) -> Result<Outcome, StorageError> {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        let removed = self.tasks.len() != before;
        tracing::info!(id, removed, "task delete");
        self.persist()?;

        Ok(if removed { Outcome::Applied } else { Outcome::RejectedNotFound })
    }

    /// Serializes the full collection into the `"todos"` slot.
    pub fn persist(&mut self) -> Result<(), StorageError> {
        let blob = serde_json::to_string(&self.tasks)?;
        self.blobs.save(STORAGE_KEY, &blob)?;
        tracing::debug!(count = self.tasks.len(), "task store persisted");
        Ok(())
    }

    /// Stable reorder by due date; ties keep their relative order.
    pub(crate) fn reorder_by_due_date(&mut self, ascending: bool) {
        if ascending {
            self.tasks.sort_by(|a, b| a.due_date.cmp(&b.due_date));
        } else {
            self.tasks.sort_by(|a, b| b.due_date.cmp(&a.due_date));
        }
    }

    /// Overwrites the editable fields of a task and persists.
    pub(crate) fn update_fields(
        &mut self,
        id: &str,
        title: &str,
        description: &str,
        due_date: NaiveDate,
    ) -> Result<Outcome, StorageError> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(Outcome::RejectedNotFound);
        };
        task.title = title.to_string();
        task.description = description.to_string();
        task.due_date = due_date;
        tracing::info!(id, "task edited");
        self.persist()?;

        Ok(Outcome::Applied)
    }
}

/// Decodes a stored collection, dropping records whose id repeats an earlier one.
fn decode(blob: &str) -> Vec<Task> {
    let tasks: Vec<Task> = match serde_json::from_str(blob) {
        Ok(tasks) => tasks,
        Err(err) => {
            tracing::warn!(error = %err, "task blob malformed, starting empty");
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    let total = tasks.len();
    let unique: Vec<Task> = tasks.into_iter().filter(|task| seen.insert(task.id.clone())).collect();
    if unique.len() != total {
        tracing::warn!(dropped = total - unique.len(), "duplicate task ids dropped on load");
    }
    unique
}
