//! Mock test engine over the built-in question bank.
//!
//! # Responsibility
//! - Drive one multiple-choice attempt: navigation, answer selection,
//!   scoring and review.
//! - Ship the built-in question bank used for every attempt.
//!
//! # Invariants
//! - The question list is never empty and `current` always indexes into it.
//! - Unanswered questions are `None`; they never count toward the score.
//! - A completed attempt rejects further answer changes until `restart`.

use log::info;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Advertised time limit for one attempt, in seconds.
///
/// Presentational only; the session itself does not count down.
pub const TIME_LIMIT_SECS: u32 = 300;

/// One multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: u32,
    /// Serialized as `question` to match external schema naming.
    #[serde(rename = "question")]
    pub text: String,
    pub options: Vec<String>,
    /// Index into `options`.
    pub correct_answer: usize,
}

/// Built-in question bank backing every mock test attempt.
pub fn question_bank() -> Vec<Question> {
    vec![
        Question {
            id: 1,
            text: "What is the primary function of mitochondria in a cell?".to_string(),
            options: vec![
                "Protein synthesis".to_string(),
                "Energy production".to_string(),
                "Cell division".to_string(),
                "Waste removal".to_string(),
            ],
            correct_answer: 1,
        },
        Question {
            id: 2,
            text: "Which of the following is NOT a fundamental force in physics?".to_string(),
            options: vec![
                "Gravity".to_string(),
                "Electromagnetic force".to_string(),
                "Strong nuclear force".to_string(),
                "Centrifugal force".to_string(),
            ],
            correct_answer: 3,
        },
        Question {
            id: 3,
            text: "What is the chemical symbol for gold?".to_string(),
            options: vec![
                "Go".to_string(),
                "Gd".to_string(),
                "Au".to_string(),
                "Ag".to_string(),
            ],
            correct_answer: 2,
        },
        Question {
            id: 4,
            text: "Which algorithm has the worst time complexity?".to_string(),
            options: vec![
                "Binary search".to_string(),
                "Merge sort".to_string(),
                "Bubble sort".to_string(),
                "Depth-first search".to_string(),
            ],
            correct_answer: 2,
        },
        Question {
            id: 5,
            text: "What is the capital of Brazil?".to_string(),
            options: vec![
                "Rio de Janeiro".to_string(),
                "São Paulo".to_string(),
                "Brasília".to_string(),
                "Salvador".to_string(),
            ],
            correct_answer: 2,
        },
    ]
}

/// Quiz flow error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizError {
    /// Sessions need at least one question.
    EmptyBank,
    /// The attempt is finished; answers are frozen until `restart`.
    AlreadyCompleted,
    /// The selected option index does not exist on the current question.
    ChoiceOutOfRange { choice: usize, options: usize },
}

impl Display for QuizError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyBank => write!(f, "question bank must not be empty"),
            Self::AlreadyCompleted => write!(f, "test attempt is already completed"),
            Self::ChoiceOutOfRange { choice, options } => {
                write!(f, "answer choice {choice} out of range for {options} options")
            }
        }
    }
}

impl Error for QuizError {}

/// Per-question outcome row for the results view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRow {
    pub question_id: u32,
    pub text: String,
    /// Label of the chosen option, when one was chosen.
    pub chosen: Option<String>,
    /// Label of the correct option.
    pub correct: String,
    pub is_correct: bool,
}

/// One mock test attempt over a fixed question list.
#[derive(Debug, Clone)]
pub struct TestSession {
    questions: Vec<Question>,
    current: usize,
    answers: Vec<Option<usize>>,
    completed: bool,
}

impl TestSession {
    /// Starts an attempt over `questions`.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::EmptyBank);
        }
        Ok(Self::from_questions(questions))
    }

    /// Starts an attempt over the built-in question bank.
    pub fn with_default_bank() -> Self {
        Self::from_questions(question_bank())
    }

    fn from_questions(questions: Vec<Question>) -> Self {
        let answers = vec![None; questions.len()];
        Self {
            questions,
            current: 0,
            answers,
            completed: false,
        }
    }

    /// Zero-based index of the question currently shown.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The question currently shown.
    pub fn current_question(&self) -> &Question {
        &self.questions[self.current]
    }

    /// Total number of questions in this attempt.
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Recorded answer for the current question, if any.
    pub fn selected_answer(&self) -> Option<usize> {
        self.answers[self.current]
    }

    /// Number of questions answered so far.
    pub fn answered_count(&self) -> usize {
        self.answers.iter().flatten().count()
    }

    /// Whether the attempt has been completed.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Records `choice` as the answer to the current question.
    ///
    /// Re-selecting overwrites the previous answer for this question.
    pub fn select_answer(&mut self, choice: usize) -> Result<(), QuizError> {
        if self.completed {
            return Err(QuizError::AlreadyCompleted);
        }

        let options = self.questions[self.current].options.len();
        if choice >= options {
            return Err(QuizError::ChoiceOutOfRange { choice, options });
        }

        self.answers[self.current] = Some(choice);
        Ok(())
    }

    /// Advances to the next question, or completes the attempt when the
    /// current question is the last one. No-op once completed.
    pub fn next(&mut self) {
        if self.completed {
            return;
        }

        if self.current + 1 < self.questions.len() {
            self.current += 1;
        } else {
            self.completed = true;
            info!(
                "event=test_completed module=quiz score={} total={}",
                self.score(),
                self.questions.len()
            );
        }
    }

    /// Steps back one question, saturating at the first. No-op once
    /// completed.
    pub fn previous(&mut self) {
        if self.completed {
            return;
        }
        self.current = self.current.saturating_sub(1);
    }

    /// Count of answered-and-correct questions.
    pub fn score(&self) -> usize {
        self.questions
            .iter()
            .zip(&self.answers)
            .filter(|(question, answer)| **answer == Some(question.correct_answer))
            .count()
    }

    /// Score as a rounded percentage of the question count.
    pub fn percent(&self) -> u32 {
        let total = self.questions.len();
        ((self.score() * 100) as f64 / total as f64).round() as u32
    }

    /// Per-question outcome rows in question order.
    pub fn review(&self) -> Vec<ReviewRow> {
        self.questions
            .iter()
            .zip(&self.answers)
            .map(|(question, answer)| ReviewRow {
                question_id: question.id,
                text: question.text.clone(),
                chosen: answer.and_then(|choice| question.options.get(choice).cloned()),
                correct: question
                    .options
                    .get(question.correct_answer)
                    .cloned()
                    .unwrap_or_default(),
                is_correct: *answer == Some(question.correct_answer),
            })
            .collect()
    }

    /// Discards all answers and starts over on the same question list.
    pub fn restart(&mut self) {
        self.current = 0;
        self.answers = vec![None; self.questions.len()];
        self.completed = false;
    }
}

/// Renders a second count as a zero-padded `mm:ss` clock label.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::{format_clock, question_bank};

    #[test]
    fn clock_labels_are_zero_padded() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(65), "01:05");
        assert_eq!(format_clock(300), "05:00");
        assert_eq!(format_clock(3599), "59:59");
    }

    #[test]
    fn built_in_bank_is_well_formed() {
        let bank = question_bank();
        assert_eq!(bank.len(), 5);
        for question in &bank {
            assert_eq!(question.options.len(), 4);
            assert!(question.correct_answer < question.options.len());
            assert!(!question.text.is_empty());
        }
    }
}
