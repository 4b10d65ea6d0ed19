//! Tic Tac Toe Duel library - terminal tic-tac-toe with a heuristic AI
//!
//! # Architecture
//!
//! - **Core** ([`tictactoe_core`]): evaluator, move advisor, game controller
//! - **Session**: the controller plus the AI's cancellable "thinking" timer
//! - **Status**: status line and labels derived from a snapshot
//! - **TUI**: ratatui presentation layer
//!
//! # Example
//!
//! ```no_run
//! use tictactoe_duel::{Command, GameController, GameSession, Mode, Theme, ThinkingDelay};
//!
//! # async fn example() {
//! let controller = GameController::new(Mode::PlayerVsAi, Theme::Dark);
//! let mut session = GameSession::new(controller, ThinkingDelay::default());
//!
//! session.dispatch(Command::CellClicked(0));
//! let reply = session.next_automated_move().await;
//! assert!(reply.is_some());
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod session;
pub mod status;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Session
pub use session::{GameSession, ThinkingDelay};

// Crate-level exports - Game types
pub use tictactoe_core::{
    Advice, Board, BoardParseError, Command, Epoch, GameController, GameSnapshot, Mark, Mode,
    Outcome, Position, Reason, Square, Theme, advise, evaluate,
};
