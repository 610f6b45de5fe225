#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use test_context::{test_context, TestContext};
    use todue::libs::filter::{visible_tasks, FilterState};
    use todue::libs::storage::{IdGenerator, MemoryStore};
    use todue::libs::store::TaskStore;

    struct SequentialIds(u32);

    impl IdGenerator for SequentialIds {
        fn new_id(&mut self) -> String {
            self.0 += 1;
            format!("t{}", self.0)
        }
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, day).unwrap()
    }

    /// Five tasks with mixed dates and completion:
    ///
    /// | id | due | completed |
    /// |----|-----|-----------|
    /// | t1 | 10  | no        |
    /// | t2 | 10  | yes       |
    /// | t3 | 11  | no        |
    /// | t4 | 10  | no        |
    /// | t5 | 12  | yes       |
    struct FilterTestContext {
        store: TaskStore,
    }

    impl TestContext for FilterTestContext {
        fn setup() -> Self {
            let mut store = TaskStore::load(Box::new(MemoryStore::new()), Box::new(SequentialIds(0)));
            for (title, day) in [("a", 10), ("b", 10), ("c", 11), ("d", 10), ("e", 12)] {
                store.add(title, "", Some(date(day))).unwrap();
            }
            store.toggle_completion("t2").unwrap();
            store.toggle_completion("t5").unwrap();
            FilterTestContext { store }
        }
    }

    fn ids(tasks: &[&todue::libs::task::Task]) -> Vec<String> {
        tasks.iter().map(|t| t.id.clone()).collect()
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_default_view_shows_pending_tasks(ctx: &mut FilterTestContext) {
        let visible = visible_tasks(&ctx.store, &FilterState::default());
        assert_eq!(ids(&visible), vec!["t1", "t3", "t4"]);
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_completed_view(ctx: &mut FilterTestContext) {
        let visible = visible_tasks(&ctx.store, &FilterState::new(true));
        assert_eq!(ids(&visible), vec!["t2", "t5"]);
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_date_and_pending_filters_intersect(ctx: &mut FilterTestContext) {
        let mut filter = FilterState::new(false);
        filter.set_date(date(10));

        let visible = visible_tasks(&ctx.store, &filter);
        assert_eq!(ids(&visible), vec!["t1", "t4"]);
        assert!(visible.iter().all(|t| !t.completed && t.due_date == date(10)));
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_date_and_completed_filters_intersect(ctx: &mut FilterTestContext) {
        let mut filter = FilterState::new(true);
        filter.set_date(date(10));
        assert_eq!(ids(&visible_tasks(&ctx.store, &filter)), vec!["t2"]);

        filter.set_date(date(11));
        assert!(visible_tasks(&ctx.store, &filter).is_empty());
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_clear_date_filter_and_toggle_view(ctx: &mut FilterTestContext) {
        let mut filter = FilterState::new(false);
        filter.set_date(date(12));
        assert!(visible_tasks(&ctx.store, &filter).is_empty());

        filter.toggle_view();
        assert_eq!(ids(&visible_tasks(&ctx.store, &filter)), vec!["t5"]);

        filter.clear_date_filter();
        assert_eq!(filter.date_to_filter, None);
        assert_eq!(ids(&visible_tasks(&ctx.store, &filter)), vec!["t2", "t5"]);
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_filtering_leaves_store_untouched(ctx: &mut FilterTestContext) {
        let before = ctx.store.tasks().to_vec();
        let mut filter = FilterState::new(true);
        filter.set_date(date(10));
        let _ = visible_tasks(&ctx.store, &filter);

        assert_eq!(ctx.store.tasks(), before.as_slice());
    }
}
