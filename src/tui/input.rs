//! Keyboard mapping: cursor movement and key actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tictactoe_core::Position;

use super::ui::cell_at;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor.
    MoveCursor(Position),
    /// Select the cell under the cursor.
    SelectCursor,
    /// Select a cell directly (0-8).
    SelectCell(usize),
    /// Switch between the two modes.
    ToggleMode,
    /// Reset the board.
    Restart,
    /// Switch between light and dark.
    ToggleTheme,
    /// Leave the game.
    Quit,
}

/// Moves cursor based on arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up | KeyCode::Char('k') => (row.saturating_sub(1), col),
        KeyCode::Down | KeyCode::Char('j') => (row + 1, col),
        KeyCode::Left | KeyCode::Char('h') => (row, col.saturating_sub(1)),
        KeyCode::Right | KeyCode::Char('l') => (row, col + 1),
        _ => return cursor,
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

/// Maps a key press to an action.
pub fn action_for(cursor: Position, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Up
        | KeyCode::Down
        | KeyCode::Left
        | KeyCode::Right
        | KeyCode::Char('h' | 'j' | 'k' | 'l') => {
            Some(Action::MoveCursor(move_cursor(cursor, key.code)))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::SelectCursor),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map(|digit| Action::SelectCell(digit as usize - 1)),
        KeyCode::Char('m' | 'M') => Some(Action::ToggleMode),
        KeyCode::Char('r' | 'R') => Some(Action::Restart),
        KeyCode::Char('t' | 'T') => Some(Action::ToggleTheme),
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Maps a left click on a board cell to selecting that cell.
pub fn mouse_action(area: Rect, mouse: MouseEvent) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => cell_at(area, mouse.column, mouse.row)
            .map(|pos| Action::SelectCell(pos.to_index())),
        _ => None,
    }
}
