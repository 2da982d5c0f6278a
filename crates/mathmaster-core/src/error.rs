//! Engine error taxonomy.
//!
//! Defined here so every layer classifies failures the same way. None of
//! these ever abort a round: parse failures are absorbed into "incorrect"
//! by the answer comparator, and a short adaptive window is absorbed into
//! "no transition" by the difficulty controller.

use thiserror::Error;

/// Errors that can occur inside the game engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The raw answer string matches no supported numeric form.
    #[error("answer is not a recognizable number")]
    UnparsableAnswer,

    /// A submitted fraction has a zero denominator.
    #[error("fraction denominator is zero")]
    DivisionByZeroInAnswer,

    /// The adaptive controller was invoked before its window filled.
    #[error("need {needed} results for a difficulty decision, have {have}")]
    InsufficientWindowData { needed: usize, have: usize },
}

impl EngineError {
    /// Returns `true` if this error came from answer parsing and should be
    /// judged as an incorrect answer rather than surfaced.
    pub fn is_parse_failure(&self) -> bool {
        matches!(
            self,
            EngineError::UnparsableAnswer | EngineError::DivisionByZeroInAnswer
        )
    }
}
