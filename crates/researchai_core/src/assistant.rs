//! Doubt solver chat transcript.
//!
//! # Responsibility
//! - Keep one ordered chat transcript per session, seeded with a greeting.
//! - Answer questions from the fixed reply list; no external model is
//!   consulted.
//!
//! # Invariants
//! - The transcript only grows; rejected questions leave it unchanged.
//! - Every accepted question appends exactly two messages: user first,
//!   assistant second.

use chrono::{DateTime, Local};
use log::debug;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opening assistant message present in every fresh session.
pub const GREETING: &str =
    "Hello! I'm your AI research assistant. How can I help with your academic questions today?";

/// Reply pool the assistant draws from, one pick per question.
pub const CANNED_REPLIES: [&str; 5] = [
    "Based on recent research, the answer to your question involves several key factors...",
    "That's an interesting question! According to the literature, there are multiple perspectives...",
    "I found several relevant studies that address this topic. The consensus appears to be...",
    "This is a complex topic. Let me break it down for you based on the latest research...",
    "Great question! From an academic perspective, we should consider the following points...",
];

/// Author of one chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl Display for ChatRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => f.write_str("user"),
            Self::Assistant => f.write_str("assistant"),
        }
    }
}

/// One entry in the chat transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub content: String,
    /// Local wall-clock time the message entered the transcript.
    pub sent_at: DateTime<Local>,
}

impl ChatMessage {
    /// Creates a message stamped with the current local time.
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            sent_at: Local::now(),
        }
    }
}

/// Chat error surfaced to the ask form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AskError {
    /// The question contains no visible characters; Send stays disabled.
    BlankQuestion,
}

impl Display for AskError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankQuestion => write!(f, "question must not be blank"),
        }
    }
}

impl Error for AskError {}

/// One doubt-solver conversation.
#[derive(Debug, Clone)]
pub struct DoubtSession {
    messages: Vec<ChatMessage>,
}

impl DoubtSession {
    /// Starts a session with the greeting already in the transcript.
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::new(ChatRole::Assistant, GREETING)],
        }
    }

    /// Transcript in send order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Submits a question and returns the assistant reply.
    ///
    /// Blank questions are rejected before anything is appended. Accepted
    /// questions append the user message followed by one reply drawn from
    /// `CANNED_REPLIES`.
    pub fn ask(&mut self, question: &str) -> Result<&ChatMessage, AskError> {
        if question.trim().is_empty() {
            return Err(AskError::BlankQuestion);
        }

        self.messages.push(ChatMessage::new(ChatRole::User, question));
        self.messages
            .push(ChatMessage::new(ChatRole::Assistant, pick_canned_reply()));
        debug!(
            "event=doubt_reply module=assistant transcript_len={}",
            self.messages.len()
        );

        let reply_index = self.messages.len() - 1;
        Ok(&self.messages[reply_index])
    }
}

impl Default for DoubtSession {
    fn default() -> Self {
        Self::new()
    }
}

fn pick_canned_reply() -> &'static str {
    let mut rng = rand::rng();
    CANNED_REPLIES
        .choose(&mut rng)
        .copied()
        .unwrap_or(CANNED_REPLIES[0])
}
