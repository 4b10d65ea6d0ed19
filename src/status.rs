//! Text shown around the board, derived from a snapshot.

use tictactoe_core::{GameSnapshot, Mark, Mode, Outcome, Position, Square};

/// Headline status: whose turn it is, or how the game ended.
pub fn status_message(snapshot: &GameSnapshot) -> String {
    let mode = *snapshot.mode();
    let ai_mode = mode == Mode::PlayerVsAi;

    match *snapshot.outcome() {
        Outcome::Draw => "It's a draw!".to_string(),
        Outcome::Won(mark) if mode.automated_mark() == Some(mark) => "AI wins!".to_string(),
        Outcome::Won(Mark::X) => "Player 1 wins!".to_string(),
        Outcome::Won(Mark::O) => "Player 2 wins!".to_string(),
        Outcome::Undecided if *snapshot.automated_turn() => "AI is thinking...".to_string(),
        Outcome::Undecided if ai_mode => "Your Turn (X)".to_string(),
        Outcome::Undecided => match snapshot.turn() {
            Mark::X => "Player 1's Turn (X)".to_string(),
            Mark::O => "Player 2's Turn (O)".to_string(),
        },
    }
}

/// Label of the restart control.
pub fn restart_label(snapshot: &GameSnapshot) -> &'static str {
    if snapshot.outcome().is_decided() {
        "Restart Game"
    } else {
        "Reset"
    }
}

/// Who plays which mark in `mode`.
pub fn mode_hint(mode: Mode) -> &'static str {
    match mode {
        Mode::PlayerVsAi => "You play as X. AI plays as O.",
        Mode::PlayerVsPlayer => "Player 1 = X, Player 2 = O.",
    }
}

/// Accessible label for a cell, numbered from 1.
pub fn cell_label(snapshot: &GameSnapshot, pos: Position) -> String {
    let content = match snapshot.board().get(pos) {
        Square::Empty => "empty".to_string(),
        Square::Occupied(mark) => mark.to_string(),
    };
    format!("Cell {}: {}", pos.to_index() + 1, content)
}

/// The mode selector is frozen once a game is under way.
pub fn mode_locked(snapshot: &GameSnapshot) -> bool {
    snapshot.outcome().is_decided() || !snapshot.board().is_blank()
}

/// Cells are inert when the game is over or the AI is to move.
pub fn board_locked(snapshot: &GameSnapshot) -> bool {
    snapshot.outcome().is_decided() || *snapshot.automated_turn()
}
