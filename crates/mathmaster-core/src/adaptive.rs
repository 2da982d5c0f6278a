//! Rolling-window difficulty adaptation.
//!
//! In adaptive mode the controller inspects the trailing window of round
//! results at every window boundary and proposes a tier change: a clean,
//! fast sweep moves the player up, a mostly-wrong window moves them down.
//! A proposal that clamps into the tier the player is already at is
//! suppressed entirely: no transition, no message.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::model::{Difficulty, RoundResult};

/// Tunable adaptation thresholds. Defaults are the game's canonical values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdaptiveConfig {
    /// Number of trailing rounds inspected per decision; also the cadence
    /// at which decisions happen.
    pub window: usize,
    /// A clean sweep must also average under this many seconds per answer
    /// to bump difficulty.
    pub fast_avg_secs: f64,
    /// Difficulty drops when the window holds at most this many correct
    /// answers.
    pub decrease_at_most_correct: usize,
}

impl Default for AdaptiveConfig {
    fn default() -> Self {
        Self {
            window: 3,
            fast_avg_secs: 5.0,
            decrease_at_most_correct: 1,
        }
    }
}

/// Why a difficulty transition happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionReason {
    Increase,
    Decrease,
}

/// A proposed difficulty change, consumed immediately by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyTransition {
    pub new_difficulty: Difficulty,
    pub reason: TransitionReason,
}

/// Inspects recent results and proposes difficulty transitions.
#[derive(Debug, Clone)]
pub struct DifficultyController {
    config: AdaptiveConfig,
}

impl DifficultyController {
    pub fn new(config: AdaptiveConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AdaptiveConfig {
        &self.config
    }

    /// Inspect the trailing window of `results` and propose a transition
    /// away from `current`.
    ///
    /// Returns `None` when the window has not filled yet, when performance
    /// sits between the two thresholds, or when the proposal clamps into
    /// the current tier.
    pub fn evaluate(
        &self,
        results: &[RoundResult],
        current: Difficulty,
    ) -> Option<DifficultyTransition> {
        match self.decide(results, current) {
            Ok(transition) => transition,
            Err(err) => {
                tracing::debug!("no difficulty decision: {err}");
                None
            }
        }
    }

    fn decide(
        &self,
        results: &[RoundResult],
        current: Difficulty,
    ) -> Result<Option<DifficultyTransition>, EngineError> {
        if results.len() < self.config.window {
            return Err(EngineError::InsufficientWindowData {
                needed: self.config.window,
                have: results.len(),
            });
        }

        let window = &results[results.len() - self.config.window..];
        let correct_count = window.iter().filter(|r| r.correct).count();
        let avg_time =
            window.iter().map(|r| r.time_taken_secs).sum::<f64>() / window.len() as f64;

        let (proposed, reason) = if correct_count == window.len()
            && avg_time < self.config.fast_avg_secs
        {
            (current.step_up(), TransitionReason::Increase)
        } else if correct_count <= self.config.decrease_at_most_correct {
            (current.step_down(), TransitionReason::Decrease)
        } else {
            return Ok(None);
        };

        if proposed == current {
            return Ok(None);
        }

        Ok(Some(DifficultyTransition {
            new_difficulty: proposed,
            reason,
        }))
    }
}
