//! Study task domain model.
//!
//! # Responsibility
//! - Define the canonical planner record consumed by schedule, list and
//!   editor flows.
//! - Provide priority semantics shared by forms and calendar views.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `date` is a calendar day; time of day never enters the model.
//! - `duration_minutes` counts whole minutes of planned study time.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier for every planner task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Urgency band attached to every study task.
///
/// Ordering follows urgency, so `Low < Medium < High` holds when sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can slip without hurting the plan.
    Low,
    /// Everyday work. Fresh drafts start here.
    #[default]
    Medium,
    /// Deadline-driven, surfaced first in the views.
    High,
}

impl Priority {
    /// Lowercase label as it appears on the wire and in shells.
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Priority {
    type Err = String;

    /// Strict parse of the canonical labels, ignoring ASCII case.
    ///
    /// Lenient fallback behavior belongs to the formatting helpers, not here.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(format!("invalid priority: `{other}`")),
        }
    }
}

/// Validation error for study task records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Title is empty; the editor refuses to submit such drafts.
    EmptyTitle,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title must not be empty"),
        }
    }
}

impl Error for TaskValidationError {}

/// Canonical planner record for one scheduled study session.
///
/// The same shape backs the calendar bucket view, the day list and the
/// editor form, so there is exactly one source of truth per task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyTask {
    /// Stable global ID used for removal and lookups.
    pub id: TaskId,
    /// Short display title. Non-empty for every task the editor produces.
    pub title: String,
    /// Free-form notes. May be empty.
    pub description: String,
    /// Calendar day this session is scheduled on.
    pub date: NaiveDate,
    /// Serialized as `duration` to match external schema naming.
    #[serde(rename = "duration")]
    pub duration_minutes: u32,
    /// Urgency band used for badge rendering and sorting.
    pub priority: Priority,
}

impl StudyTask {
    /// Creates a new task with a generated stable ID.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
        duration_minutes: u32,
        priority: Priority,
    ) -> Self {
        Self::with_id(
            Uuid::new_v4(),
            title,
            description,
            date,
            duration_minutes,
            priority,
        )
    }

    /// Creates a task with a caller-provided stable ID.
    ///
    /// Used by test fixtures and import paths where identity already exists.
    ///
    /// # Invariants
    /// - The provided `id` must remain stable for this task lifetime.
    /// - This constructor does not validate field contents.
    pub fn with_id(
        id: TaskId,
        title: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
        duration_minutes: u32,
        priority: Priority,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            date,
            duration_minutes,
            priority,
        }
    }

    /// Checks the record against editor-level validation rules.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.title.is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        Ok(())
    }

    /// Returns whether this task belongs to the `day` calendar bucket.
    pub fn is_scheduled_on(&self, day: NaiveDate) -> bool {
        self.date == day
    }
}
