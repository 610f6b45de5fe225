#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use test_context::{test_context, TestContext};
    use todue::libs::storage::{IdGenerator, MemoryStore};
    use todue::libs::store::{TaskStore, STORAGE_KEY};
    use todue::libs::task::Outcome;

    struct SequentialIds(u32);

    impl IdGenerator for SequentialIds {
        fn new_id(&mut self) -> String {
            self.0 += 1;
            format!("task-{}", self.0)
        }
    }

    struct StoreTestContext {
        blobs: MemoryStore,
        store: TaskStore,
    }

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            let blobs = MemoryStore::new();
            let store = TaskStore::load(Box::new(blobs.clone()), Box::new(SequentialIds(0)));
            StoreTestContext { blobs, store }
        }
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_add_appends_pending_task(ctx: &mut StoreTestContext) {
        let outcome = ctx.store.add("Buy milk", "2 litres", Some(date(3))).unwrap();

        assert_eq!(outcome, Outcome::Applied);
        assert_eq!(ctx.store.len(), 1);
        let task = &ctx.store.tasks()[0];
        assert_eq!(task.id, "task-1");
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.description, "2 litres");
        assert_eq!(task.due_date, date(3));
        assert!(!task.completed);
        assert_eq!(ctx.blobs.writes(), 1);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_add_keeps_insertion_order(ctx: &mut StoreTestContext) {
        ctx.store.add("late", "", Some(date(20))).unwrap();
        ctx.store.add("early", "", Some(date(1))).unwrap();
        ctx.store.add("middle", "", Some(date(10))).unwrap();

        let titles: Vec<&str> = ctx.store.tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["late", "early", "middle"]);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_add_rejects_blank_title_without_writing(ctx: &mut StoreTestContext) {
        ctx.store.add("Existing", "", Some(date(1))).unwrap();
        let blob_before = ctx.blobs.blob(STORAGE_KEY);
        let writes_before = ctx.blobs.writes();

        assert_eq!(ctx.store.add("", "desc", Some(date(2))).unwrap(), Outcome::RejectedInvalid);
        assert_eq!(ctx.store.add("   \t", "desc", Some(date(2))).unwrap(), Outcome::RejectedInvalid);

        assert_eq!(ctx.store.len(), 1);
        assert_eq!(ctx.blobs.writes(), writes_before);
        assert_eq!(ctx.blobs.blob(STORAGE_KEY), blob_before);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_add_rejects_missing_due_date(ctx: &mut StoreTestContext) {
        assert_eq!(ctx.store.add("No date", "", None).unwrap(), Outcome::RejectedInvalid);
        assert!(ctx.store.is_empty());
        assert_eq!(ctx.blobs.writes(), 0);
        assert_eq!(ctx.blobs.blob(STORAGE_KEY), None);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_toggle_twice_restores_completion(ctx: &mut StoreTestContext) {
        ctx.store.add("Flip me", "", Some(date(4))).unwrap();

        assert_eq!(ctx.store.toggle_completion("task-1").unwrap(), Outcome::Applied);
        assert!(ctx.store.get("task-1").unwrap().completed);
        assert_eq!(ctx.store.toggle_completion("task-1").unwrap(), Outcome::Applied);
        assert!(!ctx.store.get("task-1").unwrap().completed);
        assert_eq!(ctx.blobs.writes(), 3);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_toggle_unknown_id_is_not_persisted(ctx: &mut StoreTestContext) {
        ctx.store.add("Only", "", Some(date(4))).unwrap();

        assert_eq!(ctx.store.toggle_completion("missing").unwrap(), Outcome::RejectedNotFound);
        assert_eq!(ctx.blobs.writes(), 1);
        assert!(!ctx.store.get("task-1").unwrap().completed);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_delete_is_idempotent(ctx: &mut StoreTestContext) {
        ctx.store.add("Keep", "", Some(date(1))).unwrap();
        ctx.store.add("Drop", "", Some(date(2))).unwrap();

        assert_eq!(ctx.store.delete("task-2").unwrap(), Outcome::Applied);
        let after_first = ctx.store.tasks().to_vec();
        let blob_after_first = ctx.blobs.blob(STORAGE_KEY);

        assert_eq!(ctx.store.delete("task-2").unwrap(), Outcome::RejectedNotFound);
        assert_eq!(ctx.store.tasks(), after_first.as_slice());
        assert_eq!(ctx.blobs.blob(STORAGE_KEY), blob_after_first);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_delete_unknown_id_still_persists(ctx: &mut StoreTestContext) {
        ctx.store.add("Keep", "", Some(date(1))).unwrap();
        let writes_before = ctx.blobs.writes();

        ctx.store.delete("nope").unwrap();

        assert_eq!(ctx.blobs.writes(), writes_before + 1);
        assert_eq!(ctx.store.len(), 1);
    }

    #[test]
    fn test_load_missing_blob_is_empty() {
        let store = TaskStore::load(Box::new(MemoryStore::new()), Box::new(SequentialIds(0)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_corrupt_blob_is_empty() {
        let blobs = MemoryStore::with_blob(STORAGE_KEY, "{not json");
        let store = TaskStore::load(Box::new(blobs.clone()), Box::new(SequentialIds(0)));

        assert!(store.is_empty());
        assert_eq!(blobs.writes(), 0);
    }

    #[test]
    fn test_load_reads_persisted_records() {
        let blob = r#"[{"id":"a1","title":"Dentist","description":"","completed":true,"dueDate":"2024-05-07"}]"#;
        let store = TaskStore::load(Box::new(MemoryStore::with_blob(STORAGE_KEY, blob)), Box::new(SequentialIds(0)));

        let task = store.get("a1").unwrap();
        assert_eq!(task.title, "Dentist");
        assert!(task.completed);
        assert_eq!(task.due_date, date(7));
    }

    #[test]
    fn test_reload_yields_equal_collection() {
        let blobs = MemoryStore::new();
        let mut store = TaskStore::load(Box::new(blobs.clone()), Box::new(SequentialIds(0)));
        store.add("One", "first", Some(date(1))).unwrap();
        store.add("Two", "", Some(date(2))).unwrap();
        store.toggle_completion("task-2").unwrap();

        let reloaded = TaskStore::load(Box::new(blobs.clone()), Box::new(SequentialIds(100)));
        assert_eq!(reloaded.tasks(), store.tasks());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_find_by_prefix(ctx: &mut StoreTestContext) {
        ctx.store.add("One", "", Some(date(1))).unwrap();
        ctx.store.add("Two", "", Some(date(2))).unwrap();

        assert_eq!(ctx.store.find_by_prefix("task-2").len(), 1);
        assert_eq!(ctx.store.find_by_prefix("task-").len(), 2);
        assert!(ctx.store.find_by_prefix("x").is_empty());
        assert!(ctx.store.find_by_prefix("").is_empty());
    }
}
