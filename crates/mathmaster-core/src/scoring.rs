//! Score computation from correctness, speed, difficulty, and streak state.
//!
//! The three bonuses are additive and independent so each signal can be
//! tuned on its own; the total is floored to a whole point value.

use serde::{Deserialize, Serialize};

use crate::model::Difficulty;

/// Tunable scoring weights. The defaults are the game's canonical values;
/// tests and the config file can supply alternates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Points for a correct answer before any multiplier or bonus.
    pub base_points: f64,
    /// Base-point multiplier per difficulty tier (index = tier - 1).
    pub difficulty_multipliers: [f64; 3],
    /// Answers faster than this earn a speed bonus.
    pub speed_bonus_threshold_secs: f64,
    /// Speed bonus at an instant answer; scales linearly down to 0 at the
    /// threshold.
    pub speed_bonus_max: f64,
    /// Consecutive correct answers needed before the streak bonus kicks in.
    pub streak_bonus_threshold: u32,
    /// Streak bonus at exactly the threshold.
    pub streak_bonus_base: f64,
    /// Fractional growth of the streak bonus per streak step past the
    /// threshold.
    pub streak_bonus_growth: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_points: 100.0,
            difficulty_multipliers: [1.0, 1.5, 2.5],
            speed_bonus_threshold_secs: 5.0,
            speed_bonus_max: 50.0,
            streak_bonus_threshold: 3,
            streak_bonus_base: 25.0,
            streak_bonus_growth: 0.1,
        }
    }
}

impl ScoringConfig {
    /// Compute the points for one completed round.
    ///
    /// `streak_count` is the streak *including* the answer just given, i.e.
    /// the tracker's post-increment value. An incorrect answer always
    /// scores 0.
    pub fn score_round(
        &self,
        correct: bool,
        time_taken_secs: f64,
        difficulty: Difficulty,
        streak_count: u32,
    ) -> u32 {
        if !correct {
            return 0;
        }

        let mut score =
            self.base_points * self.difficulty_multipliers[usize::from(difficulty.level() - 1)];

        if time_taken_secs < self.speed_bonus_threshold_secs {
            let speed_factor = ((self.speed_bonus_threshold_secs - time_taken_secs)
                / self.speed_bonus_threshold_secs)
                .max(0.0);
            score += self.speed_bonus_max * speed_factor;
        }

        if streak_count >= self.streak_bonus_threshold {
            let steps_past = f64::from(streak_count - self.streak_bonus_threshold);
            score += self.streak_bonus_base * (1.0 + steps_past * self.streak_bonus_growth);
        }

        score.max(0.0).floor() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incorrect_scores_zero() {
        let config = ScoringConfig::default();
        assert_eq!(config.score_round(false, 0.0, Difficulty::Hard, 10), 0);
        assert_eq!(config.score_round(false, 100.0, Difficulty::Easy, 0), 0);
    }

    #[test]
    fn slow_easy_answer_is_base_only() {
        let config = ScoringConfig::default();
        assert_eq!(config.score_round(true, 10.0, Difficulty::Easy, 0), 100);
    }

    #[test]
    fn instant_answer_earns_full_speed_bonus() {
        let config = ScoringConfig::default();
        assert_eq!(config.score_round(true, 0.0, Difficulty::Easy, 0), 150);
    }

    #[test]
    fn speed_bonus_scales_linearly() {
        let config = ScoringConfig::default();
        // Half the threshold leaves half the bonus.
        assert_eq!(config.score_round(true, 2.5, Difficulty::Easy, 0), 125);
        // At the threshold the bonus is gone.
        assert_eq!(config.score_round(true, 5.0, Difficulty::Easy, 0), 100);
    }

    #[test]
    fn difficulty_multiplies_base() {
        let config = ScoringConfig::default();
        assert_eq!(config.score_round(true, 10.0, Difficulty::Medium, 0), 150);
        assert_eq!(config.score_round(true, 10.0, Difficulty::Hard, 0), 250);
    }

    #[test]
    fn streak_bonus_starts_at_threshold_and_grows() {
        let config = ScoringConfig::default();
        // Below the threshold: no bonus.
        assert_eq!(config.score_round(true, 10.0, Difficulty::Easy, 2), 100);
        // At the threshold: base streak bonus.
        assert_eq!(config.score_round(true, 10.0, Difficulty::Easy, 3), 125);
        // Two steps past: 25 * (1 + 0.2) = 30.
        assert_eq!(config.score_round(true, 10.0, Difficulty::Easy, 5), 130);
    }

    #[test]
    fn total_is_floored() {
        let config = ScoringConfig::default();
        // 100 + 50 * (5 - 1.33) / 5 = 136.7, truncated not rounded.
        let score = config.score_round(true, 1.33, Difficulty::Easy, 0);
        assert_eq!(score, 136);
    }

    #[test]
    fn alternate_tuning_is_respected() {
        let config = ScoringConfig {
            base_points: 10.0,
            difficulty_multipliers: [1.0, 2.0, 3.0],
            speed_bonus_max: 0.0,
            streak_bonus_threshold: 1,
            streak_bonus_base: 5.0,
            streak_bonus_growth: 0.0,
            ..ScoringConfig::default()
        };
        assert_eq!(config.score_round(true, 0.0, Difficulty::Medium, 1), 25);
    }
}
