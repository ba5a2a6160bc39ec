//! Core domain logic for ResearchAI.
//! This crate is the single source of truth for business invariants.

pub mod assistant;
pub mod logging;
pub mod model;
pub mod planner;
pub mod quiz;
pub mod store;
pub mod studio;

pub use assistant::{AskError, ChatMessage, ChatRole, DoubtSession, CANNED_REPLIES, GREETING};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Priority, StudyTask, TaskId, TaskValidationError};
pub use planner::editor::{EditorError, TaskDraft, DEFAULT_DURATION_MINUTES};
pub use planner::format::{color_class, format_duration, parse_duration, priority_color_class};
pub use planner::schedule::{local_today, summarize_day, tasks_on, DaySummary};
pub use quiz::{
    format_clock, question_bank, Question, QuizError, ReviewRow, TestSession, TIME_LIMIT_SECS,
};
pub use store::task_store::{MemoryTaskStore, StoreError, StoreResult, TaskStore};
pub use studio::{GenerationPhase, PromptError, VideoJob, VideoRequest};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
