//! Draft lifecycle for the new-task form.
//!
//! # Responsibility
//! - Hold the form state for one task being composed.
//! - Gate submission on the non-empty-title rule.
//! - Reset the form to seeded defaults after every successful submit.
//!
//! # Invariants
//! - Stored tasks always get a fresh id; drafts never carry identity.
//! - A failed submit leaves the draft untouched for correction.

use crate::model::task::{Priority, StudyTask, TaskId};
use crate::planner::schedule::local_today;
use crate::store::task_store::{StoreError, TaskStore};
use chrono::NaiveDate;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Planned minutes pre-filled into every fresh draft.
pub const DEFAULT_DURATION_MINUTES: u32 = 60;

/// Editor failure surfaced to the form.
#[derive(Debug)]
pub enum EditorError {
    /// The title is empty; submission stays disabled.
    EmptyTitle,
    /// The store rejected the finished task.
    Store(StoreError),
}

impl Display for EditorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title must not be empty"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for EditorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::EmptyTitle => None,
        }
    }
}

impl From<StoreError> for EditorError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Mutable form state for one task being composed.
///
/// Field values mirror `StudyTask` minus the id, which is generated at
/// submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub duration_minutes: u32,
    pub priority: Priority,
}

impl TaskDraft {
    /// Fresh draft seeded for `day`: blank text, one hour, medium priority.
    pub fn seeded(day: NaiveDate) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            date: day,
            duration_minutes: DEFAULT_DURATION_MINUTES,
            priority: Priority::default(),
        }
    }

    /// Fresh draft seeded for the current local day.
    pub fn for_today() -> Self {
        Self::seeded(local_today())
    }

    /// Whether submit is currently allowed.
    ///
    /// Views use this to disable the submit action while the title is empty.
    pub fn can_submit(&self) -> bool {
        !self.title.is_empty()
    }

    /// Validates the draft, appends the finished task to `store`, then
    /// resets the form to defaults seeded with the current local day.
    ///
    /// Returns the id of the stored task. There are no partial-save
    /// semantics; the reset happens only after the store accepted the task.
    pub fn submit<S: TaskStore>(&mut self, store: &mut S) -> Result<TaskId, EditorError> {
        if !self.can_submit() {
            return Err(EditorError::EmptyTitle);
        }

        let task = StudyTask::new(
            self.title.clone(),
            self.description.clone(),
            self.date,
            self.duration_minutes,
            self.priority,
        );
        let id = store.add_task(task)?;
        info!(
            "event=task_submitted module=editor task_id={id} date={} duration_minutes={}",
            self.date, self.duration_minutes
        );

        *self = Self::seeded(local_today());
        Ok(id)
    }
}
