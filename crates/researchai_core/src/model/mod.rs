//! Planner domain model.
//!
//! # Responsibility
//! - Define canonical data structures used by core planner logic.
//! - Keep one task shape shared by calendar, list and editor projections.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Dates carry calendar-day granularity only; no time of day.

pub mod task;
