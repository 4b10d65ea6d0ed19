//! Command-line interface for tictactoe_duel.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tictactoe_core::{Mark, Mode, Theme};

/// Tic Tac Toe - play a friend or a heuristic AI in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe_duel")]
#[command(about = "Terminal tic-tac-toe against a friend or a heuristic AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(short, long, global = true, default_value = "tictactoe_duel.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Starting mode
        #[arg(long)]
        mode: Option<ModeArg>,

        /// Starting theme
        #[arg(long)]
        theme: Option<ThemeArg>,

        /// Log file (the UI owns the terminal, so logs go here)
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Evaluate a board and print the AI's suggested move
    Suggest {
        /// Nine cells in row-major order, e.g. "XX_|O__|___"
        board: String,

        /// Mark to suggest a move for
        #[arg(long, default_value = "o")]
        mark: MarkArg,
    },
}

/// Mode as spelled on the command line.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum ModeArg {
    /// Player vs Player
    Pvp,
    /// Player vs AI
    Ai,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Pvp => Mode::PlayerVsPlayer,
            ModeArg::Ai => Mode::PlayerVsAi,
        }
    }
}

/// Theme as spelled on the command line.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum ThemeArg {
    /// Light palette
    Light,
    /// Dark palette
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

/// Mark as spelled on the command line.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum MarkArg {
    /// X
    X,
    /// O
    O,
}

impl From<MarkArg> for Mark {
    fn from(arg: MarkArg) -> Self {
        match arg {
            MarkArg::X => Mark::X,
            MarkArg::O => Mark::O,
        }
    }
}
