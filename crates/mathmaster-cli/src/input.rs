//! Interactive prompt helpers for menus and the round loop.
//!
//! Answer timing starts when the question is printed and stops when a line
//! comes back, so re-prompts for blank input stay inside the measured time.

use std::io::{self, BufRead, Write};
use std::time::Instant;

/// What the player did at an answer prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerInput {
    Answer(String),
    /// A blank submission in timed mode; the round still counts, as
    /// incorrect.
    NoAnswer,
    /// The player typed `q` or closed stdin.
    Quit,
}

/// Read one trimmed line from stdin; `None` on EOF.
pub fn read_line() -> io::Result<Option<String>> {
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt(text: &str) -> io::Result<()> {
    print!("{text}");
    io::stdout().flush()
}

/// Show a numbered menu and loop until a valid choice. Returns `None` when
/// the player quits (`q` or EOF).
pub fn menu_choice(title: &str, options: &[(u8, String)]) -> io::Result<Option<u8>> {
    loop {
        println!("\n{title}");
        for (number, label) in options {
            println!("{number}. {label}");
        }
        println!("q. Quit");

        prompt("\nEnter your choice: ")?;
        let Some(line) = read_line()? else {
            return Ok(None);
        };
        if line.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        match line.parse::<u8>() {
            Ok(n) if options.iter().any(|(number, _)| *number == n) => return Ok(Some(n)),
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

/// Show a question and collect a timed answer. Blank input re-prompts; `q`
/// or EOF withdraws from the session.
pub fn prompt_answer(question: &str) -> io::Result<(AnswerInput, f64)> {
    println!("Calculate: {question}");
    let start = Instant::now();
    loop {
        prompt("Your answer: ")?;
        let Some(line) = read_line()? else {
            return Ok((AnswerInput::Quit, start.elapsed().as_secs_f64()));
        };
        if line.is_empty() {
            println!("Please enter an answer.");
            continue;
        }
        if line.eq_ignore_ascii_case("q") {
            return Ok((AnswerInput::Quit, start.elapsed().as_secs_f64()));
        }
        return Ok((AnswerInput::Answer(line), start.elapsed().as_secs_f64()));
    }
}

/// Timed-mode answer prompt. There is no re-prompt here: a blank line is a
/// forfeited round, so hesitation costs a question instead of stopping the
/// clock's pressure.
pub fn prompt_answer_timed(
    question: &str,
    round: u32,
    remaining_secs: u64,
) -> io::Result<(AnswerInput, f64)> {
    println!("\nTime remaining: {remaining_secs} seconds");
    println!("Question {round}");
    println!("Calculate: {question}");

    let start = Instant::now();
    prompt("Your answer: ")?;
    match read_line()? {
        None => Ok((AnswerInput::Quit, start.elapsed().as_secs_f64())),
        Some(line) if line.eq_ignore_ascii_case("q") => {
            Ok((AnswerInput::Quit, start.elapsed().as_secs_f64()))
        }
        Some(line) if line.is_empty() => {
            Ok((AnswerInput::NoAnswer, start.elapsed().as_secs_f64()))
        }
        Some(line) => Ok((AnswerInput::Answer(line), start.elapsed().as_secs_f64())),
    }
}
