//! Pure tic-tac-toe game logic.
//!
//! - [`rules::evaluate`] classifies a board (win, draw, undecided).
//! - [`advisor::advise`] picks the automated player's move.
//! - [`GameController`] owns the board and applies commands.
//!
//! Nothing here sleeps or spawns; scheduling the automated player's delayed
//! move is left to the caller, keyed on [`Epoch`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod advisor;
mod controller;
mod mode;
mod position;
pub mod rules;
mod theme;
mod types;

pub use advisor::{Advice, Reason, advise};
pub use controller::{Command, Epoch, GameController, GameSnapshot};
pub use mode::Mode;
pub use position::Position;
pub use rules::evaluate;
pub use theme::Theme;
pub use types::{Board, BoardParseError, Mark, Outcome, Square};
