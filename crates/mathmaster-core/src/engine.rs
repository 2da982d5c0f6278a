//! Round resolution and session orchestration.
//!
//! [`GameEngine`] is a synchronous state machine: the driving loop (CLI or
//! any other front end) shows a question, collects the raw answer and the
//! elapsed time, and hands both here. One call judges the answer, updates
//! the streak, scores the round, records it, and applies any window-boundary
//! difficulty transition in adaptive mode. Nothing in here blocks, suspends,
//! or shares state across sessions.

use crate::adaptive::{AdaptiveConfig, DifficultyController, DifficultyTransition};
use crate::answer::answers_match;
use crate::model::{Difficulty, DifficultySelection, RoundResult};
use crate::scoring::ScoringConfig;
use crate::session::{SessionState, SessionStats};
use crate::streak::StreakEvent;

/// Everything a front end needs to display after one round.
#[derive(Debug, Clone)]
pub struct RoundOutcome {
    pub result: RoundResult,
    pub streak_event: Option<StreakEvent>,
    pub transition: Option<DifficultyTransition>,
}

/// The per-session game engine.
pub struct GameEngine {
    scoring: ScoringConfig,
    controller: DifficultyController,
    session: SessionState,
}

impl GameEngine {
    pub fn new(
        selection: DifficultySelection,
        scoring: ScoringConfig,
        adaptive: AdaptiveConfig,
    ) -> Self {
        let session = SessionState::new(selection, scoring.streak_bonus_threshold);
        Self {
            scoring,
            controller: DifficultyController::new(adaptive),
            session,
        }
    }

    /// A fresh engine with the canonical scoring and adaptation tunings.
    pub fn with_defaults(selection: DifficultySelection) -> Self {
        Self::new(selection, ScoringConfig::default(), AdaptiveConfig::default())
    }

    /// The tier the next question should be generated at.
    pub fn difficulty(&self) -> Difficulty {
        self.session.difficulty()
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn stats(&self) -> SessionStats {
        self.session.stats()
    }

    /// Resolve one completed round.
    ///
    /// `answer` is the raw submitted string, or `None` when the player
    /// withdrew or timed out; judged incorrect with the time as measured.
    /// Malformed answers are judged incorrect, never an error.
    pub fn resolve_round(
        &mut self,
        question: &str,
        canonical_answer: &str,
        answer: Option<&str>,
        time_taken_secs: f64,
    ) -> RoundOutcome {
        let correct = answer.is_some_and(|a| answers_match(a, canonical_answer));

        // The streak increments first so scoring sees the count that
        // includes the answer just given.
        let streak_event = self.session.streak_mut().record(correct);
        let streak_count = self.session.streak().current();

        let score = self.scoring.score_round(
            correct,
            time_taken_secs,
            self.session.difficulty(),
            streak_count,
        );

        let result = RoundResult {
            correct,
            time_taken_secs: time_taken_secs.max(0.0),
            question: question.to_string(),
            user_answer: answer.map(str::to_string),
            correct_answer: canonical_answer.to_string(),
            score,
        };
        self.session.add_result(result.clone());

        let transition = self.maybe_adapt();

        RoundOutcome {
            result,
            streak_event,
            transition,
        }
    }

    /// Run the adaptive controller at window boundaries only.
    fn maybe_adapt(&mut self) -> Option<DifficultyTransition> {
        if !self.session.is_adaptive() {
            return None;
        }
        let window = self.controller.config().window;
        if window == 0 || self.session.rounds_played() % window != 0 {
            return None;
        }

        let transition = self
            .controller
            .evaluate(self.session.results(), self.session.difficulty())?;
        tracing::debug!(
            from = %self.session.difficulty(),
            to = %transition.new_difficulty,
            "difficulty transition"
        );
        self.session.set_difficulty(transition.new_difficulty);
        Some(transition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adaptive::TransitionReason;
    use crate::model::Difficulty;

    fn fixed_easy() -> GameEngine {
        GameEngine::with_defaults(DifficultySelection::Fixed(Difficulty::Easy))
    }

    #[test]
    fn correct_round_is_scored_and_recorded() {
        let mut engine = fixed_easy();
        let outcome = engine.resolve_round("2 + 2", "4", Some("4"), 10.0);
        assert!(outcome.result.correct);
        assert_eq!(outcome.result.score, 100);
        assert_eq!(engine.stats().total_rounds, 1);
        assert_eq!(engine.stats().total_score, 100);
    }

    #[test]
    fn equivalent_forms_are_accepted() {
        let mut engine = fixed_easy();
        let outcome = engine.resolve_round("1/2 + 0", "1/2", Some("0.5"), 10.0);
        assert!(outcome.result.correct);
    }

    #[test]
    fn withdrawn_answer_is_incorrect_with_time_kept() {
        let mut engine = fixed_easy();
        let outcome = engine.resolve_round("2 + 2", "4", None, 7.5);
        assert!(!outcome.result.correct);
        assert_eq!(outcome.result.score, 0);
        assert_eq!(outcome.result.user_answer, None);
        assert!((outcome.result.time_taken_secs - 7.5).abs() < f64::EPSILON);
    }

    #[test]
    fn malformed_answer_is_incorrect_not_an_error() {
        let mut engine = fixed_easy();
        let outcome = engine.resolve_round("2 + 2", "4", Some("four!!"), 1.0);
        assert!(!outcome.result.correct);
        assert_eq!(outcome.result.score, 0);
    }

    #[test]
    fn third_consecutive_correct_earns_streak_bonus_and_milestone() {
        let mut engine = fixed_easy();
        engine.resolve_round("q", "1", Some("1"), 10.0);
        engine.resolve_round("q", "1", Some("1"), 10.0);
        let third = engine.resolve_round("q", "1", Some("1"), 10.0);
        assert_eq!(third.streak_event, Some(StreakEvent::Milestone(3)));
        // base 100 + streak bonus 25, no speed bonus at 10s
        assert_eq!(third.result.score, 125);
    }

    #[test]
    fn fixed_difficulty_never_transitions() {
        let mut engine = fixed_easy();
        for _ in 0..6 {
            let outcome = engine.resolve_round("q", "1", Some("1"), 1.0);
            assert_eq!(outcome.transition, None);
        }
        assert_eq!(engine.difficulty(), Difficulty::Easy);
    }

    #[test]
    fn adaptive_bumps_after_a_fast_clean_window() {
        let mut engine = GameEngine::with_defaults(DifficultySelection::Adaptive);
        engine.resolve_round("q", "1", Some("1"), 1.0);
        engine.resolve_round("q", "1", Some("1"), 1.0);
        let third = engine.resolve_round("q", "1", Some("1"), 1.0);
        let transition = third.transition.expect("transition at window boundary");
        assert_eq!(transition.new_difficulty, Difficulty::Medium);
        assert_eq!(transition.reason, TransitionReason::Increase);
        assert_eq!(engine.difficulty(), Difficulty::Medium);
    }

    #[test]
    fn adaptive_only_decides_at_window_boundaries() {
        let mut engine = GameEngine::with_defaults(DifficultySelection::Adaptive);
        // Rounds 4 and 5 are fast and correct, but no boundary is crossed.
        for _ in 0..3 {
            engine.resolve_round("q", "1", Some("2"), 9.0);
        }
        let fourth = engine.resolve_round("q", "1", Some("1"), 1.0);
        let fifth = engine.resolve_round("q", "1", Some("1"), 1.0);
        assert_eq!(fourth.transition, None);
        assert_eq!(fifth.transition, None);
    }

    #[test]
    fn adaptive_drops_back_after_a_poor_window() {
        let mut engine = GameEngine::with_defaults(DifficultySelection::Adaptive);
        // Climb to Medium first.
        for _ in 0..3 {
            engine.resolve_round("q", "1", Some("1"), 1.0);
        }
        assert_eq!(engine.difficulty(), Difficulty::Medium);
        // Then miss the next window.
        engine.resolve_round("q", "1", Some("2"), 4.0);
        engine.resolve_round("q", "1", Some("2"), 4.0);
        let sixth = engine.resolve_round("q", "1", Some("1"), 4.0);
        let transition = sixth.transition.expect("decrease after poor window");
        assert_eq!(transition.new_difficulty, Difficulty::Easy);
        assert_eq!(transition.reason, TransitionReason::Decrease);
    }

    #[test]
    fn adaptive_suppresses_no_op_transitions_at_the_floor() {
        let mut engine = GameEngine::with_defaults(DifficultySelection::Adaptive);
        for _ in 0..2 {
            engine.resolve_round("q", "1", Some("2"), 4.0);
        }
        let third = engine.resolve_round("q", "1", Some("2"), 4.0);
        assert_eq!(third.transition, None);
        assert_eq!(engine.difficulty(), Difficulty::Easy);
    }

    #[test]
    fn session_scores_add_up() {
        let mut engine = fixed_easy();
        let mut expected = 0u32;
        for i in 0..5 {
            let answer = if i % 2 == 0 { "1" } else { "2" };
            let outcome = engine.resolve_round("q", "1", Some(answer), 6.0);
            expected += outcome.result.score;
        }
        assert_eq!(engine.stats().total_score, expected);
        assert_eq!(engine.session().total_score(), expected);
    }
}
