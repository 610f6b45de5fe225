//! Due-date urgency categories.
//!
//! | days remaining | category         |
//! |----------------|------------------|
//! | `< 0`          | `overdue`        |
//! | `0`            | `due-today`      |
//! | `1..=3`        | `upcoming-soon`  |
//! | `> 3`          | `upcoming-later` |

use chrono::NaiveDate;
use std::fmt;

/// Last day (inclusive) counted as "soon".
pub const SOON_WINDOW_DAYS: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Urgency {
    Overdue,
    DueToday,
    UpcomingSoon,
    UpcomingLater,
}

impl Urgency {
    pub fn as_str(self) -> &'static str {
        match self {
            Urgency::Overdue => "overdue",
            Urgency::DueToday => "due-today",
            Urgency::UpcomingSoon => "upcoming-soon",
            Urgency::UpcomingLater => "upcoming-later",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whole calendar days from `today` until `due_date`; negative once past.
pub fn days_remaining(due_date: NaiveDate, today: NaiveDate) -> i64 {
    (due_date - today).num_days()
}

/// Classifies `due_date` relative to `today`.
pub fn classify(due_date: NaiveDate, today: NaiveDate) -> Urgency {
    match days_remaining(due_date, today) {
        0 => Urgency::DueToday,
        1..=SOON_WINDOW_DAYS => Urgency::UpcomingSoon,
        days if days > SOON_WINDOW_DAYS => Urgency::UpcomingLater,
        _ => Urgency::Overdue,
    }
}
