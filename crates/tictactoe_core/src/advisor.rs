//! Heuristic move advisor for the automated player.
//!
//! One-ply lookahead with fixed preferences: win, block, center, corner,
//! first free cell. It is not minimax and can lose to perfect play.

use crate::rules::check_winner;
use crate::{Board, Mark, Position};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Which rule produced an advised move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// The move completes a line for the automated mark.
    Win,
    /// The move occupies the cell the opponent needs to complete a line.
    Block,
    /// The center was free.
    Center,
    /// The first free corner in the order 0, 2, 6, 8.
    Corner,
    /// The first free cell in ascending order.
    FirstFree,
}

/// A move chosen by the advisor together with the rule that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advice {
    /// Where to play.
    pub position: Position,
    /// Why.
    pub reason: Reason,
}

/// Returns the move the automated player should make, or `None` when the
/// board is full.
#[instrument(skip(board))]
pub fn advise(board: &Board, own: Mark, opponent: Mark) -> Option<Position> {
    explain(board, own, opponent).map(|advice| advice.position)
}

/// Like [`advise`], but also reports which rule fired.
#[instrument(skip(board))]
pub fn explain(board: &Board, own: Mark, opponent: Mark) -> Option<Advice> {
    let advice = winning_cell(board, own)
        .map(|position| Advice {
            position,
            reason: Reason::Win,
        })
        .or_else(|| {
            winning_cell(board, opponent).map(|position| Advice {
                position,
                reason: Reason::Block,
            })
        })
        .or_else(|| {
            board.is_empty(Position::Center).then_some(Advice {
                position: Position::Center,
                reason: Reason::Center,
            })
        })
        .or_else(|| {
            Position::CORNERS
                .into_iter()
                .find(|pos| board.is_empty(*pos))
                .map(|position| Advice {
                    position,
                    reason: Reason::Corner,
                })
        })
        .or_else(|| {
            Position::iter()
                .find(|pos| board.is_empty(*pos))
                .map(|position| Advice {
                    position,
                    reason: Reason::FirstFree,
                })
        });

    debug!(?advice, "Advisor decision");
    advice
}

/// Lowest-index empty cell that completes a line for `mark`.
fn winning_cell(board: &Board, mark: Mark) -> Option<Position> {
    Position::iter()
        .filter(|pos| board.is_empty(*pos))
        .find(|pos| check_winner(&board.with_mark(*pos, mark)) == Some(mark))
}
