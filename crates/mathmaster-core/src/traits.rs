//! The question-generation seam.
//!
//! Question construction lives in the `mathmaster-questions` crate; the
//! engine only sees this trait and the `(display text, canonical answer)`
//! pairs it yields.

use crate::model::{Difficulty, Operation};

/// One generated question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// The expression or prompt as shown to the player.
    pub text: String,
    /// The canonical answer string the player's input is judged against.
    pub answer: String,
}

impl Question {
    pub fn new(text: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            answer: answer.into(),
        }
    }
}

/// Source of questions for a session.
pub trait QuestionSource {
    /// Produce the next question for the given category and tier.
    fn next_question(&mut self, operation: Operation, difficulty: Difficulty) -> Question;
}
