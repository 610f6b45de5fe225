#[cfg(test)]
mod tests {
    use chrono::{Days, NaiveDate};
    use todue::libs::urgency::{classify, days_remaining, Urgency};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 27).unwrap()
    }

    fn in_days(days: i64) -> NaiveDate {
        if days >= 0 {
            today().checked_add_days(Days::new(days as u64)).unwrap()
        } else {
            today().checked_sub_days(Days::new(days.unsigned_abs())).unwrap()
        }
    }

    #[test]
    fn test_boundary_table() {
        let cases = [
            (-1, Urgency::Overdue),
            (0, Urgency::DueToday),
            (1, Urgency::UpcomingSoon),
            (3, Urgency::UpcomingSoon),
            (4, Urgency::UpcomingLater),
        ];
        for (days, expected) in cases {
            assert_eq!(classify(in_days(days), today()), expected, "days remaining: {}", days);
        }
    }

    #[test]
    fn test_far_past_and_future() {
        assert_eq!(classify(in_days(-365), today()), Urgency::Overdue);
        assert_eq!(classify(in_days(2), today()), Urgency::UpcomingSoon);
        assert_eq!(classify(in_days(400), today()), Urgency::UpcomingLater);
    }

    #[test]
    fn test_days_remaining_crosses_month_and_leap_day() {
        let march_first = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(days_remaining(march_first, today()), 3);
        assert_eq!(classify(march_first, today()), Urgency::UpcomingSoon);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Urgency::Overdue.to_string(), "overdue");
        assert_eq!(Urgency::DueToday.to_string(), "due-today");
        assert_eq!(Urgency::UpcomingSoon.to_string(), "upcoming-soon");
        assert_eq!(Urgency::UpcomingLater.to_string(), "upcoming-later");
    }
}
