//! The `mathmaster timed` command — solve as many problems as possible
//! before the clock runs out.

use std::path::PathBuf;
use std::time::{Duration, Instant};

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
    seconds: Option<u64>,
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
    let limit = seconds
        .unwrap_or(config.game.default_time_limit_secs)
        .clamp(10, 300);

    println!("\nTIMED CHALLENGE: Solve as many problems as you can in {limit} seconds!");
    println!("Press Enter to start...");
    input::read_line()?;

    let mut source = RandomSource::new();
    let mut engine = GameEngine::new(selection, config.scoring.clone(), config.adaptive.clone());

    let deadline = Instant::now() + Duration::from_secs(limit);
    let mut round = 1u32;

    // The deadline is only checked between rounds; a question already on
    // screen is allowed to finish.
    while Instant::now() < deadline {
        let remaining = deadline.saturating_duration_since(Instant::now()).as_secs();
        let question = source.next_question(operation, engine.difficulty());
        let (answer, elapsed) = input::prompt_answer_timed(&question.text, round, remaining)?;
        let answer = match answer {
            AnswerInput::Quit => break,
            AnswerInput::NoAnswer => None,
            AnswerInput::Answer(a) => Some(a),
        };

        let outcome =
            engine.resolve_round(&question.text, &question.answer, answer.as_deref(), elapsed);
        super::show_round_feedback(&outcome);
        round += 1;
    }

    super::finish_session(&engine, GameMode::Timed, operation, &config, scores_file)
}
