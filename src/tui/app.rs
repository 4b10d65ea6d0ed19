//! Application state and logic.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;
use tictactoe_core::{Command, GameSnapshot, Position};
use tracing::{debug, instrument};

use super::input::{Action, action_for, mouse_action};
use crate::session::GameSession;
use crate::status::{board_locked, mode_locked};

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: GameSession,
    cursor: Position,
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application around a session.
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            cursor: Position::Center,
            notice: None,
            should_quit: false,
        }
    }

    /// Gets the session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Current state for rendering.
    pub fn snapshot(&self) -> GameSnapshot {
        self.session.snapshot()
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// One-line feedback about the last rejected key, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(action) = action_for(self.cursor, key) {
            self.perform(action);
        }
    }

    /// Handles a mouse event on a screen of size `area`.
    pub fn handle_mouse(&mut self, area: Rect, mouse: MouseEvent) {
        if let Some(action) = mouse_action(area, mouse) {
            self.perform(action);
        }
    }

    /// Applies a user action.
    #[instrument(skip(self))]
    pub fn perform(&mut self, action: Action) {
        debug!("Handling action");
        self.notice = None;

        match action {
            Action::MoveCursor(pos) => self.cursor = pos,
            Action::SelectCursor => self.select(self.cursor),
            Action::SelectCell(index) => {
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                    self.select(pos);
                }
            }
            Action::ToggleMode => {
                let snapshot = self.snapshot();
                if mode_locked(&snapshot) {
                    self.notice = Some("Reset the game to change mode.".to_string());
                } else {
                    self.session
                        .dispatch(Command::SetMode(snapshot.mode().toggle()));
                }
            }
            Action::Restart => {
                self.session.dispatch(Command::Restart);
            }
            Action::ToggleTheme => {
                self.session.dispatch(Command::ToggleTheme);
            }
            Action::Quit => self.should_quit = true,
        }
    }

    /// Applies a fired automated move. Returns true if the board changed.
    pub fn tick(&mut self) -> bool {
        self.session.poll_automated_move().is_some()
    }

    fn select(&mut self, pos: Position) {
        if board_locked(&self.snapshot()) {
            return;
        }
        if !self.session.dispatch(Command::CellClicked(pos.to_index())) {
            self.notice = Some(format!("{} is already taken.", pos));
        }
    }
}
