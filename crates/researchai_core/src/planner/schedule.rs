//! Calendar-day bucketing over the task collection.
//!
//! # Responsibility
//! - Select the tasks scheduled on a given calendar day.
//! - Aggregate per-day load for the calendar views.
//!
//! # Invariants
//! - Bucketing is pure and deterministic; input order is preserved inside
//!   every bucket.
//! - Day membership is whole-date equality; time of day never participates.

use crate::model::task::StudyTask;
use chrono::{Local, NaiveDate};

/// Returns the tasks scheduled on `day`, in insertion order.
///
/// The result borrows from `tasks`; an empty vector means a free day.
pub fn tasks_on(day: NaiveDate, tasks: &[StudyTask]) -> Vec<&StudyTask> {
    tasks
        .iter()
        .filter(|task| task.is_scheduled_on(day))
        .collect()
}

/// Aggregate schedule load for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DaySummary {
    /// Tasks scheduled on the day.
    pub task_count: usize,
    /// Planned minutes across those tasks, saturating on overflow.
    pub total_minutes: u32,
}

/// Computes the schedule load for `day`.
pub fn summarize_day(day: NaiveDate, tasks: &[StudyTask]) -> DaySummary {
    let mut summary = DaySummary::default();
    for task in tasks_on(day, tasks) {
        summary.task_count += 1;
        summary.total_minutes = summary.total_minutes.saturating_add(task.duration_minutes);
    }
    summary
}

/// Current calendar day in local wall-clock time.
///
/// The one boundary where time of day is stripped before entering planner
/// state. Day selection follows the user's wall clock, not UTC.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
