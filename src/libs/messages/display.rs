//! Display implementation for todue messages.
//!
//! Every user-facing string lives in this single match so wording stays
//! consistent between the one-shot commands and the interactive session.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' created", title),
            Message::TaskCompleted(title) => format!("Task '{}' marked as completed", title),
            Message::TaskReopened(title) => format!("Task '{}' marked as pending", title),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TaskUpdated(title) => format!("Task '{}' updated", title),
            Message::TaskNotFound(id) => format!("Task '{}' not found", id),
            Message::TaskIdAmbiguous(prefix, count) => {
                format!("'{}' matches {} tasks, use more characters of the id", prefix, count)
            }
            Message::TaskTitleRequired => "Task title cannot be empty".to_string(),
            Message::TaskDueDateRequired => "Task due date is required".to_string(),
            Message::TaskEditTitleRequired => "Edited title cannot be empty, changes discarded".to_string(),
            Message::TasksNotFound => "No tasks to show".to_string(),
            Message::TasksHeader => "Pending tasks".to_string(),
            Message::TasksCompletedHeader => "Completed tasks".to_string(),
            Message::TasksForDateHeader(date, completed) => {
                let state = if *completed { "Completed" } else { "Pending" };
                format!("{} tasks due {}", state, date)
            }
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}'?", title),
            Message::ConfirmTaskUpdate => "Save changes?".to_string(),
            Message::EditingTask(title) => format!("Editing task: {}", title),
            Message::EditCancelled => "Edit cancelled, task left unchanged".to_string(),
            Message::NoChangesDetected => "No changes detected".to_string(),

            // === DATE MESSAGES ===
            Message::InvalidDate(raw) => format!("'{}' is not a valid date", raw),
            Message::DateFormatHint => "Dates use the YYYY-MM-DD format".to_string(),

            // === VIEW / SORT MESSAGES ===
            Message::ShowingCompleted => "Showing completed tasks".to_string(),
            Message::ShowingPending => "Showing pending tasks".to_string(),
            Message::DateFilterSet(date) => format!("Showing tasks due {}", date),
            Message::DateFilterCleared => "Date filter cleared".to_string(),
            Message::SortedAscending => "Tasks sorted by due date, earliest first".to_string(),
            Message::SortedDescending => "Tasks sorted by due date, latest first".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed, defaults apply".to_string(),
            Message::ConfigNotFound => "No configuration file to remove".to_string(),
            Message::ConfigParseError => "Failed to parse configuration".to_string(),
            Message::ConfigModuleStorage => "Storage settings".to_string(),
            Message::ConfigModuleView => "View settings".to_string(),

            // === MIGRATION MESSAGES ===
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),

            // === PROMPTS ===
            Message::PromptTaskTitle => "Title".to_string(),
            Message::PromptTaskDescription => "Description (optional)".to_string(),
            Message::PromptTaskDueDate => "Due date (YYYY-MM-DD)".to_string(),
            Message::PromptFilterDate => "Show tasks due on (YYYY-MM-DD)".to_string(),
            Message::PromptSelectModules => "Select settings to configure".to_string(),
            Message::PromptStorageBackend => "Storage backend".to_string(),
            Message::PromptShowCompleted => "Show completed tasks by default?".to_string(),
            Message::PromptSortAscending => "Sort earliest due date first on the first sort?".to_string(),
            Message::SelectAction => "What next?".to_string(),
            Message::SelectTask => "Select a task".to_string(),

            // === SESSION MENU ===
            Message::MenuList => "List tasks".to_string(),
            Message::MenuAdd => "Add task".to_string(),
            Message::MenuToggle => "Toggle completion".to_string(),
            Message::MenuEdit => "Edit task".to_string(),
            Message::MenuDelete => "Delete task".to_string(),
            Message::MenuSort => "Sort by due date".to_string(),
            Message::MenuToggleView => "Switch completed/pending view".to_string(),
            Message::MenuSetDateFilter => "Filter by due date".to_string(),
            Message::MenuClearDateFilter => "Clear date filter".to_string(),
            Message::MenuQuit => "Quit".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };

        write!(f, "{}", text)
    }
}
