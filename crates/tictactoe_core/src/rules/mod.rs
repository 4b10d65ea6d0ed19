//! Outcome evaluation: win lines and draw detection.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};

use crate::{Board, Outcome};
use tracing::instrument;

/// Classifies a board.
///
/// A completed line wins; otherwise a full board is a draw; otherwise the
/// game is undecided. Called on every read so the outcome can never drift
/// from the board.
#[instrument(level = "trace")]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(mark) = check_winner(board) {
        Outcome::Won(mark)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::Undecided
    }
}
