#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use test_context::{test_context, TestContext};
    use todue::libs::edit::EditSession;
    use todue::libs::storage::{IdGenerator, MemoryStore};
    use todue::libs::store::{TaskStore, STORAGE_KEY};
    use todue::libs::task::Outcome;

    struct SequentialIds(u32);

    impl IdGenerator for SequentialIds {
        fn new_id(&mut self) -> String {
            self.0 += 1;
            format!("t{}", self.0)
        }
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 11, day).unwrap()
    }

    struct EditTestContext {
        blobs: MemoryStore,
        store: TaskStore,
        session: EditSession,
    }

    impl TestContext for EditTestContext {
        fn setup() -> Self {
            let blobs = MemoryStore::new();
            let mut store = TaskStore::load(Box::new(blobs.clone()), Box::new(SequentialIds(0)));
            store.add("Write report", "quarterly", Some(date(15))).unwrap();
            store.add("Call bank", "", Some(date(16))).unwrap();
            store.toggle_completion("t1").unwrap();
            EditTestContext {
                blobs,
                store,
                session: EditSession::new(),
            }
        }
    }

    #[test_context(EditTestContext)]
    #[test]
    fn test_start_copies_fields_into_draft(ctx: &mut EditTestContext) {
        ctx.session.start(ctx.store.get("t1").unwrap());

        assert!(ctx.session.is_editing());
        assert_eq!(ctx.session.editing_task_id(), Some("t1"));
        let draft = ctx.session.draft().unwrap();
        assert_eq!(draft.title, "Write report");
        assert_eq!(draft.description, "quarterly");
        assert_eq!(draft.due_date, date(15));
    }

    #[test_context(EditTestContext)]
    #[test]
    fn test_draft_changes_do_not_touch_task(ctx: &mut EditTestContext) {
        let before = ctx.store.get("t1").unwrap().clone();
        ctx.session.start(ctx.store.get("t1").unwrap());
        ctx.session.draft_mut().unwrap().title = "Changed".to_string();

        assert_eq!(ctx.store.get("t1").unwrap(), &before);
    }

    #[test_context(EditTestContext)]
    #[test]
    fn test_cancel_leaves_task_identical(ctx: &mut EditTestContext) {
        let before = ctx.store.get("t1").unwrap().clone();
        let blob_before = ctx.blobs.blob(STORAGE_KEY);
        let writes_before = ctx.blobs.writes();

        ctx.session.start(ctx.store.get("t1").unwrap());
        let draft = ctx.session.draft_mut().unwrap();
        draft.title = "Something else".to_string();
        draft.due_date = date(30);
        ctx.session.cancel();

        assert_eq!(ctx.session, EditSession::Idle);
        assert_eq!(ctx.store.get("t1").unwrap(), &before);
        assert_eq!(ctx.blobs.blob(STORAGE_KEY), blob_before);
        assert_eq!(ctx.blobs.writes(), writes_before);
    }

    #[test_context(EditTestContext)]
    #[test]
    fn test_save_updates_only_editable_fields(ctx: &mut EditTestContext) {
        ctx.session.start(ctx.store.get("t1").unwrap());
        let draft = ctx.session.draft_mut().unwrap();
        draft.title = "Write annual report".to_string();
        draft.description = "".to_string();
        draft.due_date = date(28);

        assert_eq!(ctx.session.save(&mut ctx.store).unwrap(), Outcome::Applied);
        assert!(!ctx.session.is_editing());

        let task = ctx.store.get("t1").unwrap();
        assert_eq!(task.id, "t1");
        assert!(task.completed);
        assert_eq!(task.title, "Write annual report");
        assert_eq!(task.description, "");
        assert_eq!(task.due_date, date(28));

        let other = ctx.store.get("t2").unwrap();
        assert_eq!(other.title, "Call bank");
    }

    #[test_context(EditTestContext)]
    #[test]
    fn test_save_persists(ctx: &mut EditTestContext) {
        let writes_before = ctx.blobs.writes();
        ctx.session.start(ctx.store.get("t2").unwrap());
        ctx.session.draft_mut().unwrap().description = "before noon".to_string();
        ctx.session.save(&mut ctx.store).unwrap();

        assert_eq!(ctx.blobs.writes(), writes_before + 1);
        let reloaded = TaskStore::load(Box::new(ctx.blobs.clone()), Box::new(SequentialIds(9)));
        assert_eq!(reloaded.get("t2").unwrap().description, "before noon");
    }

    #[test_context(EditTestContext)]
    #[test]
    fn test_save_after_delete_discards_silently(ctx: &mut EditTestContext) {
        ctx.session.start(ctx.store.get("t2").unwrap());
        ctx.session.draft_mut().unwrap().title = "Ghost".to_string();
        ctx.store.delete("t2").unwrap();
        let writes_before = ctx.blobs.writes();

        assert_eq!(ctx.session.save(&mut ctx.store).unwrap(), Outcome::RejectedNotFound);
        assert!(!ctx.session.is_editing());
        assert_eq!(ctx.blobs.writes(), writes_before);
        assert!(ctx.store.tasks().iter().all(|t| t.title != "Ghost"));
    }

    #[test_context(EditTestContext)]
    #[test]
    fn test_start_while_editing_replaces_session(ctx: &mut EditTestContext) {
        ctx.session.start(ctx.store.get("t1").unwrap());
        ctx.session.draft_mut().unwrap().title = "Lost change".to_string();
        ctx.session.start(ctx.store.get("t2").unwrap());

        assert_eq!(ctx.session.editing_task_id(), Some("t2"));
        assert_eq!(ctx.session.draft().unwrap().title, "Call bank");

        ctx.session.save(&mut ctx.store).unwrap();
        assert_eq!(ctx.store.get("t1").unwrap().title, "Write report");
    }

    #[test_context(EditTestContext)]
    #[test]
    fn test_blank_title_is_rejected_and_discarded(ctx: &mut EditTestContext) {
        let writes_before = ctx.blobs.writes();
        ctx.session.start(ctx.store.get("t1").unwrap());
        ctx.session.draft_mut().unwrap().title = "  ".to_string();

        assert_eq!(ctx.session.save(&mut ctx.store).unwrap(), Outcome::RejectedInvalid);
        assert!(!ctx.session.is_editing());
        assert_eq!(ctx.store.get("t1").unwrap().title, "Write report");
        assert_eq!(ctx.blobs.writes(), writes_before);
    }

    #[test_context(EditTestContext)]
    #[test]
    fn test_save_while_idle_does_nothing(ctx: &mut EditTestContext) {
        let writes_before = ctx.blobs.writes();
        assert_eq!(ctx.session.save(&mut ctx.store).unwrap(), Outcome::RejectedNotFound);
        assert_eq!(ctx.blobs.writes(), writes_before);
    }
}
