//! mathmaster-scores — High-score book with JSON persistence.
//!
//! Scores are bucketed per game mode, operation, and difficulty tier. A
//! bucket is only overwritten when a session's total score strictly beats
//! the stored one; lifetime totals and the last-played stamp update on
//! every recorded session regardless.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use serde::{Deserialize, Serialize};

use mathmaster_core::model::{Difficulty, GameMode, Operation};
use mathmaster_core::session::SessionStats;

/// One persisted best result for a (mode, operation, difficulty) bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub score: u32,
    /// Local date-time the score was set, "YYYY-MM-DD HH:MM".
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub accuracy: f64,
    #[serde(default)]
    pub avg_time: f64,
}

/// Totals accumulated across every recorded session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LifetimeStats {
    pub total_problems_solved: u64,
    pub total_time_played_secs: f64,
    pub games_played: u64,
}

/// The most recent recorded session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastPlayed {
    pub operation: String,
    pub difficulty: u8,
    pub mode: String,
    pub date: String,
}

/// Outcome of [`HighScoreBook::record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreUpdate {
    /// Whether the session set a new bucket record.
    pub is_high_score: bool,
    /// The bucket's best before this session (0 if unset).
    pub previous_best: u32,
}

type Buckets = BTreeMap<String, BTreeMap<String, ScoreEntry>>;

/// The full persisted score state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HighScoreBook {
    #[serde(default)]
    normal_mode: Buckets,
    #[serde(default)]
    timed_mode: Buckets,
    #[serde(default)]
    last_played: Option<LastPlayed>,
    #[serde(default)]
    stats: LifetimeStats,
}

impl HighScoreBook {
    /// Load a book from `path`.
    ///
    /// A missing file yields a fresh book; a malformed one is logged and
    /// replaced with a fresh book rather than failing the game.
    pub fn load(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&content) {
            Ok(book) => book,
            Err(err) => {
                tracing::warn!("ignoring malformed score file {}: {err}", path.display());
                Self::default()
            }
        }
    }

    /// Save the book as pretty JSON, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize scores")?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write scores to {}", path.display()))?;
        Ok(())
    }

    /// The stored best for a bucket, if any score has been set there.
    pub fn entry(
        &self,
        mode: GameMode,
        operation: Operation,
        difficulty: Difficulty,
    ) -> Option<&ScoreEntry> {
        self.mode_buckets(mode)
            .get(&operation.slug())
            .and_then(|by_difficulty| by_difficulty.get(&difficulty_key(difficulty)))
    }

    pub fn lifetime(&self) -> &LifetimeStats {
        &self.stats
    }

    pub fn last_played(&self) -> Option<&LastPlayed> {
        self.last_played.as_ref()
    }

    /// Record a completed session.
    ///
    /// The bucket updates only on a strictly higher total score; lifetime
    /// totals and the last-played stamp always update.
    pub fn record(
        &mut self,
        mode: GameMode,
        operation: Operation,
        difficulty: Difficulty,
        stats: &SessionStats,
    ) -> ScoreUpdate {
        let now = Local::now().format("%Y-%m-%d %H:%M").to_string();

        let bucket = self
            .mode_buckets_mut(mode)
            .entry(operation.slug())
            .or_default()
            .entry(difficulty_key(difficulty))
            .or_default();

        let previous_best = bucket.score;
        let is_high_score = stats.total_score > previous_best;
        if is_high_score {
            *bucket = ScoreEntry {
                score: stats.total_score,
                date: now.clone(),
                accuracy: stats.accuracy,
                avg_time: stats.avg_time,
            };
        }

        self.last_played = Some(LastPlayed {
            operation: operation.slug(),
            difficulty: difficulty.level(),
            mode: mode.slug().to_string(),
            date: now,
        });
        self.stats.total_problems_solved += stats.total_rounds as u64;
        self.stats.total_time_played_secs += stats.avg_time * stats.total_rounds as f64;
        self.stats.games_played += 1;

        ScoreUpdate {
            is_high_score,
            previous_best,
        }
    }

    fn mode_buckets(&self, mode: GameMode) -> &Buckets {
        match mode {
            GameMode::Normal => &self.normal_mode,
            GameMode::Timed => &self.timed_mode,
        }
    }

    fn mode_buckets_mut(&mut self, mode: GameMode) -> &mut Buckets {
        match mode {
            GameMode::Normal => &mut self.normal_mode,
            GameMode::Timed => &mut self.timed_mode,
        }
    }
}

fn difficulty_key(difficulty: Difficulty) -> String {
    format!("difficulty_{}", difficulty.level())
}
