use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Format used for due dates at the CLI and persistence boundary.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single to-do item.
///
/// Serialized with camelCase keys (`dueDate`) and the due date as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    pub due_date: NaiveDate,
}

impl Task {
    pub fn new(id: String, title: &str, description: &str, due_date: NaiveDate) -> Self {
        Task {
            id,
            title: title.to_string(),
            description: description.to_string(),
            completed: false,
            due_date,
        }
    }

    /// First eight characters of the id, as shown in tables.
    pub fn short_id(&self) -> &str {
        self.id.get(..8).unwrap_or(&self.id)
    }
}

/// Result of a store or edit-session operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// Input failed validation; nothing changed and nothing was written.
    RejectedInvalid,
    /// No task with the given id.
    RejectedNotFound,
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        self == Outcome::Applied
    }
}

/// Parses a `YYYY-MM-DD` date, tolerating surrounding whitespace.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}
