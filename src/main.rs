//! Tic Tac Toe Duel - Unified CLI
//!
//! Plays tic-tac-toe in the terminal, or evaluates a board from the command line.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use tictactoe_core::{Board, Mark, Outcome, advisor};
use tictactoe_duel::AppConfig;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Play {
        mode: None,
        theme: None,
        log_file: None,
    }) {
        Command::Play {
            mode,
            theme,
            log_file,
        } => {
            let config = AppConfig::load_or_default(&cli.config)?.with_overrides(
                mode.map(Into::into),
                theme.map(Into::into),
                log_file,
            );
            initialize_file_tracing(config.log_file())?;
            tictactoe_duel::tui::run_tui(&config).await
        }
        Command::Suggest { board, mark } => {
            initialize_stderr_tracing();
            run_suggest(&board, mark.into())
        }
    }
}

/// Prints the outcome of `board` and the advisor's move for `mark`.
#[instrument]
fn run_suggest(board: &str, mark: Mark) -> Result<()> {
    let board: Board = board.parse()?;
    info!("Evaluating board");

    println!("{}\n", board.display());
    match tictactoe_core::evaluate(&board) {
        Outcome::Won(winner) => println!("{} wins.", winner),
        Outcome::Draw => println!("It's a draw."),
        Outcome::Undecided => match advisor::explain(&board, mark, mark.opponent()) {
            Some(advice) => println!(
                "{} should play cell {} ({}): {:?}.",
                mark,
                advice.position.to_index() + 1,
                advice.position,
                advice.reason
            ),
            None => println!("No move available."),
        },
    }
    Ok(())
}

/// Logs go to a file so they don't corrupt the terminal UI.
fn initialize_file_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tictactoe_duel=debug")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    info!(path = %path.display(), "File tracing initialized");
    Ok(())
}

fn initialize_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
