use chrono::NaiveDate;
use researchai_core::{
    local_today, summarize_day, tasks_on, EditorError, MemoryTaskStore, Priority, StudyTask,
    TaskDraft, TaskStore, DEFAULT_DURATION_MINUTES,
};

#[test]
fn bucketing_returns_exactly_the_matching_day_in_insertion_order() {
    let mut store = MemoryTaskStore::new();
    store
        .add_task(StudyTask::new("exam prep", "", may_day(1), 60, Priority::High))
        .unwrap();
    store
        .add_task(StudyTask::new("lab report", "", may_day(2), 90, Priority::Medium))
        .unwrap();
    store
        .add_task(StudyTask::new("flashcards", "", may_day(1), 20, Priority::Low))
        .unwrap();

    let bucket = tasks_on(may_day(1), store.tasks());

    let titles: Vec<_> = bucket.iter().map(|task| task.title.as_str()).collect();
    assert_eq!(titles, ["exam prep", "flashcards"]);
}

#[test]
fn bucketing_returns_empty_for_free_days() {
    let mut store = MemoryTaskStore::new();
    store
        .add_task(StudyTask::new("only task", "", may_day(3), 30, Priority::Medium))
        .unwrap();

    assert!(tasks_on(may_day(4), store.tasks()).is_empty());
    assert!(tasks_on(may_day(4), &[]).is_empty());
}

#[test]
fn day_summary_counts_tasks_and_minutes() {
    let tasks = vec![
        StudyTask::new("a", "", may_day(6), 45, Priority::Low),
        StudyTask::new("b", "", may_day(6), 30, Priority::High),
        StudyTask::new("c", "", may_day(7), 120, Priority::Medium),
    ];

    let summary = summarize_day(may_day(6), &tasks);
    assert_eq!(summary.task_count, 2);
    assert_eq!(summary.total_minutes, 75);

    let free = summarize_day(may_day(8), &tasks);
    assert_eq!(free.task_count, 0);
    assert_eq!(free.total_minutes, 0);
}

#[test]
fn editor_submit_appends_task_and_resets_draft() {
    let mut store = MemoryTaskStore::new();
    let mut draft = TaskDraft::seeded(may_day(1));
    draft.title = "Read Ch.5".to_string();
    draft.description = "Sections 5.1 through 5.4".to_string();
    draft.duration_minutes = 45;
    draft.priority = Priority::High;

    let id = draft.submit(&mut store).unwrap();

    let stored = store.get_task(id).unwrap();
    assert!(!stored.id.is_nil());
    assert_eq!(stored.title, "Read Ch.5");
    assert_eq!(stored.description, "Sections 5.1 through 5.4");
    assert_eq!(stored.date, may_day(1));
    assert_eq!(stored.duration_minutes, 45);
    assert_eq!(stored.priority, Priority::High);

    assert_eq!(draft.title, "");
    assert_eq!(draft.description, "");
    assert_eq!(draft.date, local_today());
    assert_eq!(draft.duration_minutes, DEFAULT_DURATION_MINUTES);
    assert_eq!(draft.priority, Priority::Medium);
}

#[test]
fn editor_refuses_blank_titles_without_touching_the_store() {
    let mut store = MemoryTaskStore::new();
    let mut draft = TaskDraft::seeded(may_day(2));
    draft.description = "notes without a title".to_string();

    let err = draft.submit(&mut store).unwrap_err();

    assert!(matches!(err, EditorError::EmptyTitle));
    assert!(store.is_empty());
    assert_eq!(draft.description, "notes without a title");
    assert_eq!(draft.date, may_day(2));
}

#[test]
fn whitespace_only_title_passes_the_gate() {
    let mut store = MemoryTaskStore::new();
    let mut draft = TaskDraft::seeded(may_day(2));
    draft.title = "   ".to_string();

    assert!(draft.can_submit());
    let id = draft.submit(&mut store).unwrap();
    assert_eq!(store.get_task(id).unwrap().title, "   ");
}

#[test]
fn successive_submits_generate_distinct_ids() {
    let mut store = MemoryTaskStore::new();
    let mut draft = TaskDraft::seeded(may_day(9));

    draft.title = "morning review".to_string();
    let first = draft.submit(&mut store).unwrap();

    draft.title = "evening review".to_string();
    draft.date = may_day(9);
    let second = draft.submit(&mut store).unwrap();

    assert_ne!(first, second);
    assert_eq!(store.len(), 2);
}

#[test]
fn end_to_end_add_view_delete_cycle() {
    let mut store = MemoryTaskStore::new();
    let mut draft = TaskDraft::seeded(may_day(1));
    draft.title = "Read Ch.5".to_string();
    draft.duration_minutes = 45;
    draft.priority = Priority::High;

    let id = draft.submit(&mut store).unwrap();

    let bucket = tasks_on(may_day(1), store.tasks());
    assert_eq!(bucket.len(), 1);
    assert_eq!(bucket[0].id, id);
    assert_eq!(bucket[0].title, "Read Ch.5");

    assert!(store.remove_task(id));
    assert!(tasks_on(may_day(1), store.tasks()).is_empty());
}

fn may_day(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
}
