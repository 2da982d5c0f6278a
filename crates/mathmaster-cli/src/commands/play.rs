//! The `mathmaster play` command — normal mode with a fixed round count.

use std::path::PathBuf;

use anyhow::Result;

use mathmaster_core::engine::GameEngine;
use mathmaster_core::model::GameMode;
use mathmaster_core::traits::QuestionSource;
use mathmaster_questions::RandomSource;

use crate::config::load_config_from;
use crate::input::{self, AnswerInput};

pub fn execute(
    operation: Option<u8>,
    difficulty: Option<u8>,
    rounds: Option<u32>,
    scores_file: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let Some(operation) = super::resolve_operation(operation)? else {
        return Ok(());
    };
    let Some(selection) = super::resolve_selection(difficulty)? else {
        return Ok(());
    };
    let rounds = rounds.unwrap_or(config.game.default_rounds).clamp(1, 50);

    println!("\nPracticing {} ({rounds} rounds)", operation.name());

    let mut source = RandomSource::new();
    let mut engine = GameEngine::new(selection, config.scoring.clone(), config.adaptive.clone());

    for round in 1..=rounds {
        println!("\nRound {round} of {rounds}");
        println!("{}", "=".repeat(30));

        let question = source.next_question(operation, engine.difficulty());
        let (answer, elapsed) = input::prompt_answer(&question.text)?;
        let answer = match answer {
            AnswerInput::Quit => {
                println!("\nSession ended early.");
                break;
            }
            // The normal-mode prompt re-asks on blank input, so a forfeited
            // round can only come out of the timed prompt.
            AnswerInput::NoAnswer => None,
            AnswerInput::Answer(a) => Some(a),
        };

        let outcome =
            engine.resolve_round(&question.text, &question.answer, answer.as_deref(), elapsed);
        super::show_round_feedback(&outcome);
    }

    super::finish_session(&engine, GameMode::Normal, operation, &config, scores_file)
}
