//! Simulated video generation pipeline.
//!
//! # Responsibility
//! - Validate prompt requests coming from the studio form.
//! - Step one job through the simulated generation phases.
//!
//! # Invariants
//! - Phases only move forward; `Ready` is terminal.
//! - Stepping is synchronous; wall-clock pacing lives in the shells.

use chrono::{DateTime, Local};
use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Request validation error for the studio form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptError {
    /// The prompt contains no visible characters.
    BlankPrompt,
}

impl Display for PromptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankPrompt => write!(f, "prompt must not be blank"),
        }
    }
}

impl Error for PromptError {}

/// Pipeline stage of one generation job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationPhase {
    /// Accepted, waiting to start.
    Queued,
    /// Reading the prompt and planning scenes.
    Analyzing,
    /// Producing frames.
    Rendering,
    /// Output available for download.
    Ready,
}

impl GenerationPhase {
    /// Lowercase label used in logs and shells.
    pub fn label(self) -> &'static str {
        match self {
            Self::Queued => "queued",
            Self::Analyzing => "analyzing",
            Self::Rendering => "rendering",
            Self::Ready => "ready",
        }
    }
}

impl Display for GenerationPhase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Validated prompt input for one generation job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoRequest {
    prompt: String,
}

impl VideoRequest {
    /// Accepts a text prompt, rejecting blank input.
    pub fn from_prompt(prompt: impl Into<String>) -> Result<Self, PromptError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(PromptError::BlankPrompt);
        }
        Ok(Self { prompt })
    }

    /// The prompt text as entered.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

/// One simulated generation job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoJob {
    pub id: Uuid,
    pub prompt: String,
    /// Local wall-clock time the request was accepted.
    pub requested_at: DateTime<Local>,
    pub phase: GenerationPhase,
}

impl VideoJob {
    /// Starts a job for an accepted request, queued for the pipeline.
    pub fn start(request: VideoRequest) -> Self {
        let job = Self {
            id: Uuid::new_v4(),
            prompt: request.prompt,
            requested_at: Local::now(),
            phase: GenerationPhase::Queued,
        };
        debug!("event=video_job_started module=studio job_id={}", job.id);
        job
    }

    /// Steps the pipeline one phase forward and returns the new phase.
    ///
    /// `Ready` is terminal; stepping there changes nothing.
    pub fn advance(&mut self) -> GenerationPhase {
        self.phase = match self.phase {
            GenerationPhase::Queued => GenerationPhase::Analyzing,
            GenerationPhase::Analyzing => GenerationPhase::Rendering,
            GenerationPhase::Rendering => GenerationPhase::Ready,
            GenerationPhase::Ready => GenerationPhase::Ready,
        };
        self.phase
    }

    /// Whether the job reached its terminal phase.
    pub fn is_finished(&self) -> bool {
        self.phase == GenerationPhase::Ready
    }
}

#[cfg(test)]
mod tests {
    use super::{GenerationPhase, PromptError, VideoJob, VideoRequest};

    #[test]
    fn blank_prompts_are_rejected() {
        assert_eq!(
            VideoRequest::from_prompt("").unwrap_err(),
            PromptError::BlankPrompt
        );
        assert_eq!(
            VideoRequest::from_prompt("   \t").unwrap_err(),
            PromptError::BlankPrompt
        );
    }

    #[test]
    fn pipeline_walks_phases_in_order_and_stops_at_ready() {
        let request = VideoRequest::from_prompt("a neuron firing, macro shot").expect("valid");
        let mut job = VideoJob::start(request);
        assert_eq!(job.phase, GenerationPhase::Queued);
        assert!(!job.is_finished());

        assert_eq!(job.advance(), GenerationPhase::Analyzing);
        assert_eq!(job.advance(), GenerationPhase::Rendering);
        assert_eq!(job.advance(), GenerationPhase::Ready);
        assert!(job.is_finished());

        assert_eq!(job.advance(), GenerationPhase::Ready);
        assert!(job.is_finished());
    }

    #[test]
    fn job_keeps_the_requested_prompt() {
        let request = VideoRequest::from_prompt("tour of the solar system").expect("valid");
        let job = VideoJob::start(request);
        assert_eq!(job.prompt, "tour of the solar system");
    }
}
