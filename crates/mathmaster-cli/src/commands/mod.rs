//! Subcommand implementations, plus the display and session-finishing
//! helpers play and timed share.

pub mod init;
pub mod play;
pub mod scores;
pub mod timed;

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use mathmaster_core::adaptive::TransitionReason;
use mathmaster_core::engine::{GameEngine, RoundOutcome};
use mathmaster_core::model::{DifficultySelection, GameMode, Operation, RoundResult};
use mathmaster_core::session::SessionStats;
use mathmaster_core::streak::StreakEvent;
use mathmaster_scores::HighScoreBook;

use crate::config::MathmasterConfig;
use crate::input;

/// Resolve the operation from the flag, or prompt with the menu.
/// `None` means the player quit at the menu.
pub(crate) fn resolve_operation(flag: Option<u8>) -> Result<Option<Operation>> {
    if let Some(n) = flag {
        return Ok(Operation::from_number(n));
    }
    let options: Vec<(u8, String)> = Operation::ALL
        .iter()
        .map(|op| (op.number(), op.name().to_string()))
        .collect();
    let choice = input::menu_choice("Choose an operation to practice:", &options)?;
    Ok(choice.and_then(Operation::from_number))
}

/// Resolve the difficulty selection from the flag, or prompt with the menu.
pub(crate) fn resolve_selection(flag: Option<u8>) -> Result<Option<DifficultySelection>> {
    if let Some(n) = flag {
        return Ok(DifficultySelection::from_menu_choice(n));
    }
    let options: Vec<(u8, String)> = vec![
        (1, "Easy".into()),
        (2, "Medium".into()),
        (3, "Hard".into()),
        (4, "Adaptive (adjusts based on your performance)".into()),
    ];
    let choice = input::menu_choice("Select difficulty level:", &options)?;
    Ok(choice.and_then(DifficultySelection::from_menu_choice))
}

/// Print the per-round feedback block: verdict, time, score delta, and any
/// streak or difficulty notices.
pub(crate) fn show_round_feedback(outcome: &RoundOutcome) {
    if outcome.result.correct {
        println!("\n✓ Correct! The answer is {}", outcome.result.correct_answer);
    } else {
        println!(
            "\n✗ Incorrect. The correct answer is {}",
            outcome.result.correct_answer
        );
    }
    println!("Time: {:.2} seconds", outcome.result.time_taken_secs);
    println!("Score: +{}", outcome.result.score);

    match outcome.streak_event {
        Some(StreakEvent::Milestone(n)) => println!("\n{n} ANSWER STREAK!"),
        Some(StreakEvent::Broken) => println!("\nStreak broken!"),
        None => {}
    }

    if let Some(transition) = outcome.transition {
        match transition.reason {
            TransitionReason::Increase => {
                println!("\nDifficulty increased to {}", transition.new_difficulty);
            }
            TransitionReason::Decrease => {
                println!(
                    "\nDifficulty adjusted to {} to help you improve",
                    transition.new_difficulty
                );
            }
        }
    }
}

/// Print the end-of-session summary and question review.
pub(crate) fn show_summary(stats: &SessionStats, results: &[RoundResult], mode: GameMode) {
    let title = match mode {
        GameMode::Normal => "GAME SUMMARY",
        GameMode::Timed => "TIMED CHALLENGE RESULTS",
    };
    println!("\n{}", "=".repeat(60));
    println!("{title:^60}");
    println!("{}", "=".repeat(60));

    let mut table = Table::new();
    table.set_header(vec!["Rounds", "Correct", "Accuracy", "Avg Time", "Total Score"]);
    table.add_row(vec![
        Cell::new(stats.total_rounds),
        Cell::new(stats.correct_count),
        Cell::new(format!("{:.1}%", stats.accuracy)),
        Cell::new(format!("{:.2}s", stats.avg_time)),
        Cell::new(stats.total_score),
    ]);
    println!("{table}");

    if !results.is_empty() {
        println!("\nQuestion review:");
        for (i, result) in results.iter().enumerate() {
            let status = if result.correct { "✓" } else { "✗" };
            let given = result.user_answer.as_deref().unwrap_or("(no answer)");
            println!(
                "{:>2}. {status} {} = {}",
                i + 1,
                result.question,
                result.correct_answer
            );
            println!(
                "      Your answer: {given} ({:.2}s)",
                result.time_taken_secs
            );
        }
    }
}

/// Show the summary, then record the session in the high-score book.
/// Sessions with no completed rounds are not recorded.
pub(crate) fn finish_session(
    engine: &GameEngine,
    mode: GameMode,
    operation: Operation,
    config: &MathmasterConfig,
    scores_file: Option<PathBuf>,
) -> Result<()> {
    let stats = engine.stats();
    show_summary(&stats, engine.session().results(), mode);

    if stats.total_rounds == 0 {
        return Ok(());
    }

    let path = scores_file.unwrap_or_else(|| config.scores.path.clone());
    let mut book = HighScoreBook::load(&path);
    // Adaptive sessions are bucketed under the tier they ended at.
    let update = book.record(mode, operation, engine.difficulty(), &stats);
    if update.is_high_score {
        if update.previous_best > 0 {
            println!("\nNEW HIGH SCORE! Previous best: {}", update.previous_best);
        } else {
            println!("\nNEW HIGH SCORE!");
        }
    }
    book.save(&path)?;
    Ok(())
}
