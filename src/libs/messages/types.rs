#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),         // title
    TaskCompleted(String),       // title
    TaskReopened(String),        // title
    TaskDeleted(String),         // id
    TaskUpdated(String),         // title
    TaskNotFound(String),        // id or prefix
    TaskIdAmbiguous(String, usize), // prefix, matches
    TaskTitleRequired,
    TaskDueDateRequired,
    TaskEditTitleRequired,
    TasksNotFound,
    TasksHeader,
    TasksCompletedHeader,
    TasksForDateHeader(String, bool), // date, completed
    ConfirmDeleteTask(String),        // title
    ConfirmTaskUpdate,
    EditingTask(String), // title
    EditCancelled,
    NoChangesDetected,

    // === DATE MESSAGES ===
    InvalidDate(String), // raw input
    DateFormatHint,

    // === VIEW / SORT MESSAGES ===
    ShowingCompleted,
    ShowingPending,
    DateFilterSet(String), // date
    DateFilterCleared,
    SortedAscending,
    SortedDescending,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigParseError,
    ConfigModuleStorage,
    ConfigModuleView,

    // === MIGRATION MESSAGES ===
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),       // version
    MigrationFailed(u32, String),  // version, error
    DatabaseUpToDate,

    // === PROMPTS ===
    PromptTaskTitle,
    PromptTaskDescription,
    PromptTaskDueDate,
    PromptFilterDate,
    PromptSelectModules,
    PromptStorageBackend,
    PromptShowCompleted,
    PromptSortAscending,
    SelectAction,
    SelectTask,

    // === SESSION MENU ===
    MenuList,
    MenuAdd,
    MenuToggle,
    MenuEdit,
    MenuDelete,
    MenuSort,
    MenuToggleView,
    MenuSetDateFilter,
    MenuClearDateFilter,
    MenuQuit,

    // === GENERAL MESSAGES ===
    OperationCancelled,
}
