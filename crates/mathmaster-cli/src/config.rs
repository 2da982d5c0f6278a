//! mathmaster.toml configuration loading.
//!
//! Every field is optional; the file only needs to name what it changes.
//! The scoring and adaptation sections deserialize straight into the core
//! engine's config structures.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use mathmaster_core::adaptive::AdaptiveConfig;
use mathmaster_core::scoring::ScoringConfig;

/// Top-level mathmaster configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MathmasterConfig {
    pub scoring: ScoringConfig,
    pub adaptive: AdaptiveConfig,
    pub game: GameDefaults,
    pub scores: ScoreSettings,
}

/// Session defaults used when the flags are absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameDefaults {
    pub default_rounds: u32,
    pub default_time_limit_secs: u64,
}

impl Default for GameDefaults {
    fn default() -> Self {
        Self {
            default_rounds: 10,
            default_time_limit_secs: 60,
        }
    }
}

/// Where the high-score book lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreSettings {
    pub path: PathBuf,
}

impl Default for ScoreSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("mathmaster_scores.json"),
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `mathmaster.toml` in the current directory
/// 2. `~/.config/mathmaster/config.toml`
pub fn load_config_from(path: Option<&Path>) -> Result<MathmasterConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("mathmaster.toml");
        if local.exists() {
            Some(local)
        } else if let Some(dir) = dirs_path() {
            let global = dir.join("config.toml");
            global.exists().then_some(global)
        } else {
            None
        }
    };

    match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<MathmasterConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))
        }
        None => {
            tracing::debug!("no config file found, using defaults");
            Ok(MathmasterConfig::default())
        }
    }
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("mathmaster"))
}
