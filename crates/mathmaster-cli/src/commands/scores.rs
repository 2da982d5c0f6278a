//! The `mathmaster scores` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use mathmaster_core::model::{Difficulty, GameMode, Operation};
use mathmaster_scores::HighScoreBook;

use crate::config::load_config_from;

pub fn execute(
    mode: Option<String>,
    operation: Option<u8>,
    scores_file: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let path = scores_file.unwrap_or_else(|| config.scores.path.clone());
    let book = HighScoreBook::load(&path);

    let modes: Vec<GameMode> = match mode.as_deref() {
        None => vec![GameMode::Normal, GameMode::Timed],
        Some("normal") => vec![GameMode::Normal],
        Some("timed") => vec![GameMode::Timed],
        Some(other) => anyhow::bail!("unknown mode '{other}' (expected 'normal' or 'timed')"),
    };

    let operations: Vec<Operation> = match operation {
        Some(n) => Operation::from_number(n).into_iter().collect(),
        None => Operation::ALL.to_vec(),
    };

    println!("\n{:^60}", "HIGH SCORES");
    println!("{}", "=".repeat(60));

    for mode in modes {
        let heading = match mode {
            GameMode::Normal => "NORMAL MODE",
            GameMode::Timed => "TIMED MODE",
        };
        println!("\n{heading}");

        let mut table = Table::new();
        table.set_header(vec![
            "Operation",
            "Difficulty",
            "Score",
            "Accuracy",
            "Avg Time",
            "Date",
        ]);

        let mut any = false;
        for op in &operations {
            for tier in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
                if let Some(entry) = book.entry(mode, *op, tier) {
                    if entry.score > 0 {
                        table.add_row(vec![
                            Cell::new(op.name()),
                            Cell::new(tier.name()),
                            Cell::new(entry.score),
                            Cell::new(format!("{:.1}%", entry.accuracy)),
                            Cell::new(format!("{:.2}s", entry.avg_time)),
                            Cell::new(&entry.date),
                        ]);
                        any = true;
                    }
                }
            }
        }

        if any {
            println!("{table}");
        } else {
            println!("No scores recorded yet.");
        }
    }

    let lifetime = book.lifetime();
    println!("\nOverall stats:");
    println!("  Problems solved: {}", lifetime.total_problems_solved);
    println!(
        "  Time played: {:.1} minutes",
        lifetime.total_time_played_secs / 60.0
    );
    println!("  Games played: {}", lifetime.games_played);

    if let Some(last) = book.last_played() {
        println!(
            "\nLast played: {} (difficulty {}) in {} on {}",
            last.operation.replace('_', " "),
            last.difficulty,
            last.mode.replace('_', " "),
            last.date
        );
    }

    Ok(())
}
