//! Quick session example — minimal programmatic usage of the engine.
//!
//! Generates a handful of questions, answers them with the canonical
//! answers, and prints the outcomes the way a front end would.
//!
//! ```bash
//! cargo run --example quick_session
//! ```

use mathmaster_core::engine::GameEngine;
use mathmaster_core::model::{DifficultySelection, Operation};
use mathmaster_core::traits::QuestionSource;
use mathmaster_questions::RandomSource;

fn main() {
    let mut source = RandomSource::new();
    let mut engine = GameEngine::with_defaults(DifficultySelection::Adaptive);

    for round in 1..=6 {
        let question = source.next_question(Operation::Mixed, engine.difficulty());

        // Answer correctly and quickly, as a perfect player would.
        let outcome = engine.resolve_round(
            &question.text,
            &question.answer,
            Some(&question.answer),
            1.5,
        );

        println!(
            "round {round}: {} = {} (+{} points)",
            question.text, question.answer, outcome.result.score
        );
        if let Some(transition) = outcome.transition {
            println!("  difficulty is now {}", transition.new_difficulty);
        }
    }

    let stats = engine.stats();
    println!(
        "\n{} rounds, {:.1}% accuracy, {} points total",
        stats.total_rounds, stats.accuracy, stats.total_score
    );
}
