use chrono::NaiveDate;
use researchai_core::{Priority, StudyTask, TaskValidationError};
use uuid::Uuid;

#[test]
fn study_task_new_sets_identity_and_fields() {
    let task = StudyTask::new(
        "Read Ch.5",
        "Thermodynamics chapter",
        may_day(1),
        45,
        Priority::High,
    );

    assert!(!task.id.is_nil());
    assert_eq!(task.title, "Read Ch.5");
    assert_eq!(task.description, "Thermodynamics chapter");
    assert_eq!(task.date, may_day(1));
    assert_eq!(task.duration_minutes, 45);
    assert_eq!(task.priority, Priority::High);
}

#[test]
fn priority_defaults_to_medium_and_orders_by_urgency() {
    assert_eq!(Priority::default(), Priority::Medium);
    assert!(Priority::Low < Priority::Medium);
    assert!(Priority::Medium < Priority::High);
}

#[test]
fn priority_labels_round_trip_through_display_and_parse() {
    for priority in [Priority::Low, Priority::Medium, Priority::High] {
        let parsed: Priority = priority.to_string().parse().unwrap();
        assert_eq!(parsed, priority);
    }

    assert_eq!("HIGH".parse::<Priority>().unwrap(), Priority::High);
    assert!("urgent".parse::<Priority>().is_err());
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let task_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let task = StudyTask::with_id(
        task_id,
        "Mock test prep",
        "Physics formulas",
        may_day(1),
        90,
        Priority::Low,
    );

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], task_id.to_string());
    assert_eq!(json["title"], "Mock test prep");
    assert_eq!(json["description"], "Physics formulas");
    assert_eq!(json["date"], "2024-05-01");
    assert_eq!(json["duration"], 90);
    assert_eq!(json["priority"], "low");

    let decoded: StudyTask = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn validate_rejects_empty_title() {
    let task = StudyTask::new("", "", may_day(2), 30, Priority::Medium);
    assert_eq!(task.validate().unwrap_err(), TaskValidationError::EmptyTitle);

    let valid = StudyTask::new("Revise notes", "", may_day(2), 30, Priority::Medium);
    assert!(valid.validate().is_ok());
}

#[test]
fn is_scheduled_on_compares_whole_days() {
    let task = StudyTask::new("Flashcards", "", may_day(3), 20, Priority::Low);

    assert!(task.is_scheduled_on(may_day(3)));
    assert!(!task.is_scheduled_on(may_day(4)));
}

fn may_day(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
}
