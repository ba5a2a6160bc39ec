//! Task store contract and the in-memory implementation.
//!
//! # Responsibility
//! - Own the flat task collection behind a storage-agnostic interface.
//! - Enforce id uniqueness on every write path.
//!
//! # Invariants
//! - Stored ids are unique; duplicate inserts are rejected before mutation.
//! - `tasks()` preserves insertion order; removal never reorders survivors.
//! - Removing an absent id is a silent no-op, not an error.

use crate::model::task::{StudyTask, TaskId};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage error for task collection mutations.
#[derive(Debug)]
pub enum StoreError {
    /// A task with this id is already stored.
    DuplicateId(TaskId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "task id already present: {id}"),
        }
    }
}

impl Error for StoreError {}

/// Storage interface for planner task collections.
///
/// The editor and schedule flows are generic over this trait so alternative
/// backends can be injected without touching planner logic.
pub trait TaskStore {
    /// Appends one task. The collection grows by exactly one on success.
    fn add_task(&mut self, task: StudyTask) -> StoreResult<TaskId>;

    /// Removes the task with `id`. Returns `false` when no such task exists,
    /// leaving the collection unchanged.
    fn remove_task(&mut self, id: TaskId) -> bool;

    /// Full collection in insertion order.
    fn tasks(&self) -> &[StudyTask];

    /// Looks up one task by stable id.
    fn get_task(&self, id: TaskId) -> Option<&StudyTask>;
}

/// Process-lifetime task store backed by a plain vector.
#[derive(Debug, Default)]
pub struct MemoryTaskStore {
    tasks: Vec<StudyTask>,
}

impl MemoryTaskStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the store holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl TaskStore for MemoryTaskStore {
    fn add_task(&mut self, task: StudyTask) -> StoreResult<TaskId> {
        if self.tasks.iter().any(|existing| existing.id == task.id) {
            return Err(StoreError::DuplicateId(task.id));
        }

        let id = task.id;
        self.tasks.push(task);
        debug!(
            "event=task_added module=store task_id={id} total={}",
            self.tasks.len()
        );
        Ok(id)
    }

    fn remove_task(&mut self, id: TaskId) -> bool {
        match self.tasks.iter().position(|task| task.id == id) {
            Some(index) => {
                self.tasks.remove(index);
                debug!(
                    "event=task_removed module=store task_id={id} total={}",
                    self.tasks.len()
                );
                true
            }
            None => false,
        }
    }

    fn tasks(&self) -> &[StudyTask] {
        &self.tasks
    }

    fn get_task(&self, id: TaskId) -> Option<&StudyTask> {
        self.tasks.iter().find(|task| task.id == id)
    }
}
