//! mathmaster CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;
mod input;

#[derive(Parser)]
#[command(name = "mathmaster", version, about = "Mental arithmetic practice game")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a fixed number of rounds
    Play {
        /// Operation category (1-9, 9 = mixed challenge)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=9))]
        operation: Option<u8>,

        /// Difficulty tier (1-3), or 4 for adaptive
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=4))]
        difficulty: Option<u8>,

        /// Number of rounds (1-50)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=50))]
        rounds: Option<u32>,

        /// High-score file override
        #[arg(long)]
        scores_file: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Solve as many problems as possible before the clock runs out
    Timed {
        /// Operation category (1-9, 9 = mixed challenge)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=9))]
        operation: Option<u8>,

        /// Difficulty tier (1-3), or 4 for adaptive
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=4))]
        difficulty: Option<u8>,

        /// Time limit in seconds (10-300)
        #[arg(long, value_parser = clap::value_parser!(u64).range(10..=300))]
        seconds: Option<u64>,

        /// High-score file override
        #[arg(long)]
        scores_file: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show the high-score book
    Scores {
        /// Filter to one mode: normal or timed
        #[arg(long)]
        mode: Option<String>,

        /// Filter to one operation (1-9)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=9))]
        operation: Option<u8>,

        /// High-score file override
        #[arg(long)]
        scores_file: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter mathmaster.toml
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mathmaster=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            operation,
            difficulty,
            rounds,
            scores_file,
            config,
        } => commands::play::execute(operation, difficulty, rounds, scores_file, config),
        Commands::Timed {
            operation,
            difficulty,
            seconds,
            scores_file,
            config,
        } => commands::timed::execute(operation, difficulty, seconds, scores_file, config),
        Commands::Scores {
            mode,
            operation,
            scores_file,
            config,
        } => commands::scores::execute(mode, operation, scores_file, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
