//! Session state and aggregate statistics.

use serde::{Deserialize, Serialize};

use crate::model::{Difficulty, DifficultySelection, RoundResult};
use crate::streak::StreakTracker;

/// Aggregate statistics over a session's played rounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    pub total_rounds: usize,
    pub correct_count: usize,
    /// Percentage in 0.0..=100.0; 0 for an empty session.
    pub accuracy: f64,
    /// Mean seconds per answer; 0 for an empty session.
    pub avg_time: f64,
    pub total_score: u32,
}

/// Mutable state of one active game session.
///
/// Owned by exactly one session at a time; reset by constructing a fresh
/// value at session start.
#[derive(Debug, Clone)]
pub struct SessionState {
    difficulty: Difficulty,
    adaptive: bool,
    streak: StreakTracker,
    total_score: u32,
    results: Vec<RoundResult>,
}

impl SessionState {
    pub fn new(selection: DifficultySelection, streak_threshold: u32) -> Self {
        Self {
            difficulty: selection.initial_difficulty(),
            adaptive: selection.is_adaptive(),
            streak: StreakTracker::new(streak_threshold),
            total_score: 0,
            results: Vec::new(),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub(crate) fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn is_adaptive(&self) -> bool {
        self.adaptive
    }

    pub fn streak(&self) -> &StreakTracker {
        &self.streak
    }

    pub(crate) fn streak_mut(&mut self) -> &mut StreakTracker {
        &mut self.streak
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    /// Rounds played so far, in play order.
    pub fn results(&self) -> &[RoundResult] {
        &self.results
    }

    pub fn rounds_played(&self) -> usize {
        self.results.len()
    }

    /// Append a completed round and accumulate its score.
    pub fn add_result(&mut self, result: RoundResult) {
        self.total_score += result.score;
        self.results.push(result);
    }

    /// Recompute aggregate statistics over the full result sequence.
    ///
    /// Always derived from scratch so the numbers cannot drift from the
    /// recorded rounds.
    pub fn stats(&self) -> SessionStats {
        let total_rounds = self.results.len();
        if total_rounds == 0 {
            return SessionStats {
                total_rounds: 0,
                correct_count: 0,
                accuracy: 0.0,
                avg_time: 0.0,
                total_score: 0,
            };
        }

        let correct_count = self.results.iter().filter(|r| r.correct).count();
        let accuracy = correct_count as f64 / total_rounds as f64 * 100.0;
        let avg_time =
            self.results.iter().map(|r| r.time_taken_secs).sum::<f64>() / total_rounds as f64;
        let total_score = self.results.iter().map(|r| r.score).sum();

        SessionStats {
            total_rounds,
            correct_count,
            accuracy,
            avg_time,
            total_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(correct: bool, time_taken_secs: f64, score: u32) -> RoundResult {
        RoundResult {
            correct,
            time_taken_secs,
            question: "3 + 4".into(),
            user_answer: Some("7".into()),
            correct_answer: "7".into(),
            score,
        }
    }

    #[test]
    fn empty_session_stats_are_all_zero() {
        let session = SessionState::new(DifficultySelection::Fixed(Difficulty::Easy), 3);
        let stats = session.stats();
        assert_eq!(stats.total_rounds, 0);
        assert_eq!(stats.correct_count, 0);
        assert_eq!(stats.accuracy, 0.0);
        assert_eq!(stats.avg_time, 0.0);
        assert_eq!(stats.total_score, 0);
    }

    #[test]
    fn stats_aggregate_over_all_rounds() {
        let mut session = SessionState::new(DifficultySelection::Fixed(Difficulty::Easy), 3);
        session.add_result(result(true, 2.0, 120));
        session.add_result(result(false, 6.0, 0));
        session.add_result(result(true, 4.0, 110));

        let stats = session.stats();
        assert_eq!(stats.total_rounds, 3);
        assert_eq!(stats.correct_count, 2);
        assert!((stats.accuracy - 66.666).abs() < 0.01);
        assert!((stats.avg_time - 4.0).abs() < f64::EPSILON);
        assert_eq!(stats.total_score, 230);
    }

    #[test]
    fn running_total_matches_recomputed_sum() {
        let mut session = SessionState::new(DifficultySelection::Fixed(Difficulty::Easy), 3);
        for score in [100, 0, 137, 250] {
            session.add_result(result(score > 0, 3.0, score));
        }
        assert_eq!(session.total_score(), session.stats().total_score);
    }

    #[test]
    fn results_keep_play_order() {
        let mut session = SessionState::new(DifficultySelection::Adaptive, 3);
        for t in [1.0, 2.0, 3.0] {
            session.add_result(result(true, t, 10));
        }
        let times: Vec<f64> = session.results().iter().map(|r| r.time_taken_secs).collect();
        assert_eq!(times, vec![1.0, 2.0, 3.0]);
    }
}
