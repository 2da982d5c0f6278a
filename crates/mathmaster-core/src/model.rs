//! Core data model types for mathmaster.
//!
//! These are the fundamental types the entire mathmaster system uses to
//! represent operations, difficulty tiers, and per-round results.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The nine practice categories a player can choose from.
///
/// Numeric values match the menu numbers the game has always used, and the
/// numbers persisted score files are keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Fractions,
    Percentages,
    Exponents,
    Arrays,
    Mixed,
}

impl Operation {
    /// The eight concrete categories a mixed challenge draws from.
    pub const CONCRETE: [Operation; 8] = [
        Operation::Addition,
        Operation::Subtraction,
        Operation::Multiplication,
        Operation::Division,
        Operation::Fractions,
        Operation::Percentages,
        Operation::Exponents,
        Operation::Arrays,
    ];

    /// All categories in menu order.
    pub const ALL: [Operation; 9] = [
        Operation::Addition,
        Operation::Subtraction,
        Operation::Multiplication,
        Operation::Division,
        Operation::Fractions,
        Operation::Percentages,
        Operation::Exponents,
        Operation::Arrays,
        Operation::Mixed,
    ];

    /// Menu number (1-9).
    pub fn number(self) -> u8 {
        match self {
            Operation::Addition => 1,
            Operation::Subtraction => 2,
            Operation::Multiplication => 3,
            Operation::Division => 4,
            Operation::Fractions => 5,
            Operation::Percentages => 6,
            Operation::Exponents => 7,
            Operation::Arrays => 8,
            Operation::Mixed => 9,
        }
    }

    /// Look up a category by its menu number.
    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.number() == n)
    }

    /// Display name ("Addition", ..., "Mixed Challenge").
    pub fn name(self) -> &'static str {
        match self {
            Operation::Addition => "Addition",
            Operation::Subtraction => "Subtraction",
            Operation::Multiplication => "Multiplication",
            Operation::Division => "Division",
            Operation::Fractions => "Fractions",
            Operation::Percentages => "Percentages",
            Operation::Exponents => "Exponents",
            Operation::Arrays => "Arrays",
            Operation::Mixed => "Mixed Challenge",
        }
    }

    /// Snake-case key used for high-score buckets (e.g. "mixed_challenge").
    pub fn slug(self) -> String {
        self.name().to_lowercase().replace(' ', "_")
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Difficulty tiers. There is no stored "level 4": adaptive mode is a
/// difficulty *selection*, not a tier (see [`DifficultySelection`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Tier number (1-3).
    pub fn level(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    /// Look up a tier by its number.
    pub fn from_level(n: u8) -> Option<Self> {
        match n {
            1 => Some(Difficulty::Easy),
            2 => Some(Difficulty::Medium),
            3 => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// One tier harder, saturating at [`Difficulty::Hard`].
    pub fn step_up(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium | Difficulty::Hard => Difficulty::Hard,
        }
    }

    /// One tier easier, saturating at [`Difficulty::Easy`].
    pub fn step_down(self) -> Self {
        match self {
            Difficulty::Easy | Difficulty::Medium => Difficulty::Easy,
            Difficulty::Hard => Difficulty::Medium,
        }
    }

    /// Display name ("Easy", "Medium", "Hard").
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How the player chose difficulty at session setup.
///
/// The setup menu offers 1-3 for the fixed tiers and 4 for adaptive mode,
/// which starts at Easy and retunes from performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultySelection {
    Fixed(Difficulty),
    Adaptive,
}

impl DifficultySelection {
    /// Map a setup-menu choice (1-4) to a selection.
    pub fn from_menu_choice(n: u8) -> Option<Self> {
        match n {
            4 => Some(DifficultySelection::Adaptive),
            _ => Difficulty::from_level(n).map(DifficultySelection::Fixed),
        }
    }

    /// The tier the session starts at.
    pub fn initial_difficulty(self) -> Difficulty {
        match self {
            DifficultySelection::Fixed(d) => d,
            DifficultySelection::Adaptive => Difficulty::Easy,
        }
    }

    pub fn is_adaptive(self) -> bool {
        matches!(self, DifficultySelection::Adaptive)
    }
}

/// Game mode, used for high-score bucketing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    Normal,
    Timed,
}

impl GameMode {
    /// Persisted bucket key ("normal_mode" / "timed_mode").
    pub fn slug(self) -> &'static str {
        match self {
            GameMode::Normal => "normal_mode",
            GameMode::Timed => "timed_mode",
        }
    }
}

/// The record of one completed round. Immutable once created; appended to
/// the session's result sequence in play order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    /// Whether the submitted answer matched the canonical one.
    pub correct: bool,
    /// Elapsed time between question display and answer submission.
    pub time_taken_secs: f64,
    /// The question as displayed.
    pub question: String,
    /// The raw submitted answer; `None` when the player withdrew or timed out.
    pub user_answer: Option<String>,
    /// The canonical answer string from the question generator.
    pub correct_answer: String,
    /// Points awarded; always 0 for an incorrect answer.
    pub score: u32,
}
