//! Scripted question source for deterministic tests.

use std::collections::VecDeque;

use mathmaster_core::model::{Difficulty, Operation};
use mathmaster_core::traits::{Question, QuestionSource};

/// Serves a fixed queue of questions, ignoring category and tier.
///
/// Lets engine and front-end tests run a whole session with known answers.
/// Once the queue is drained it falls back to a fixed filler question.
pub struct ScriptedSource {
    queue: VecDeque<Question>,
    served: u32,
}

impl ScriptedSource {
    pub fn new<I>(questions: I) -> Self
    where
        I: IntoIterator<Item = Question>,
    {
        Self {
            queue: questions.into_iter().collect(),
            served: 0,
        }
    }

    /// Build from `(text, answer)` pairs.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self::new(pairs.iter().map(|(text, answer)| Question::new(*text, *answer)))
    }

    /// Number of questions handed out so far.
    pub fn served(&self) -> u32 {
        self.served
    }
}

impl QuestionSource for ScriptedSource {
    fn next_question(&mut self, _operation: Operation, _difficulty: Difficulty) -> Question {
        self.served += 1;
        self.queue
            .pop_front()
            .unwrap_or_else(|| Question::new("1 + 1", "2"))
    }
}
