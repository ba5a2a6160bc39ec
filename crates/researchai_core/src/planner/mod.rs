//! Study planner use-cases.
//!
//! # Responsibility
//! - Project the task collection onto calendar days.
//! - Drive the new-task draft lifecycle.
//! - Provide presentation helpers shared by every task view.
//!
//! # Invariants
//! - Planner logic never touches storage internals; it goes through the
//!   `TaskStore` interface.

pub mod editor;
pub mod format;
pub mod schedule;
