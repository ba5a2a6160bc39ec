//! Task storage contracts and backends.
//!
//! # Responsibility
//! - Provide stable add/remove/list APIs over the planner task collection.
//! - Keep collection ordering rules inside the storage boundary.
//!
//! # Invariants
//! - The only shipped backend is in-memory; task lifetime is bounded by the
//!   owning process.

pub mod task_store;
