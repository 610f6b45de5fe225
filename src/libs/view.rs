use super::task::{Task, DATE_FORMAT};
use super::urgency::{classify, Urgency};
use chrono::NaiveDate;
use prettytable::{row, Cell, Row, Table};

pub struct View {}

impl View {
    /// Prints `tasks` as a table, colouring the urgency column relative to `today`.
    pub fn tasks(tasks: &[&Task], today: NaiveDate) {
        Self::tasks_table(tasks, today).printstd();
    }

    pub fn tasks_table(tasks: &[&Task], today: NaiveDate) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "DESCRIPTION", "DUE", "STATUS", "URGENCY"]);
        for task in tasks {
            let urgency = classify(task.due_date, today);
            table.add_row(Row::new(vec![
                Cell::new(task.short_id()),
                Cell::new(&task.title),
                Cell::new(&task.description),
                Cell::new(&task.due_date.format(DATE_FORMAT).to_string()),
                Cell::new(if task.completed { "done" } else { "pending" }),
                Cell::new(urgency.as_str()).style_spec(urgency_style(urgency)),
            ]));
        }

        table
    }
}

/// prettytable style spec for an urgency cell.
fn urgency_style(urgency: Urgency) -> &'static str {
    match urgency {
        Urgency::DueToday => "Fr",
        Urgency::UpcomingSoon => "Fy",
        Urgency::UpcomingLater => "Fg",
        Urgency::Overdue => "Fm",
    }
}
