//! Game state controller: the only place the board changes.
//!
//! Every transition that touches the board (accepted move, mode change,
//! restart) bumps the [`Epoch`]. A delayed automated move is bound to the
//! epoch it was scheduled in and is dropped if the epoch has moved on.

use derive_getters::Getters;
use tracing::{debug, info, instrument, warn};

use crate::advisor::advise;
use crate::rules::evaluate;
use crate::{Board, Mark, Mode, Outcome, Position, Square, Theme};

/// Counter of board transitions, used to invalidate stale scheduled moves.
pub type Epoch = u64;

/// Commands accepted from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// A cell (0-8) was selected.
    CellClicked(usize),
    /// Switch to the given mode, resetting the board.
    SetMode(Mode),
    /// Reset the board, keeping the mode.
    Restart,
    /// Flip between light and dark.
    ToggleTheme,
}

/// Read-only view of the controller for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GameSnapshot {
    board: Board,
    mode: Mode,
    turn: Mark,
    outcome: Outcome,
    theme: Theme,
    automated_turn: bool,
    epoch: Epoch,
}

/// Owns board, turn, mode and theme.
#[derive(Debug, Clone)]
pub struct GameController {
    board: Board,
    turn: Mark,
    mode: Mode,
    theme: Theme,
    epoch: Epoch,
}

impl GameController {
    /// Creates a controller with an empty board and X to move.
    #[instrument]
    pub fn new(mode: Mode, theme: Theme) -> Self {
        info!("Creating game controller");
        Self {
            board: Board::new(),
            turn: Mark::X,
            mode,
            theme,
            epoch: 0,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that moves next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the current theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Returns the current epoch.
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    /// Outcome derived from the board.
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    /// Captures the current state for rendering.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            mode: self.mode,
            turn: self.turn,
            outcome: self.outcome(),
            theme: self.theme,
            automated_turn: self.automated_turn().is_some(),
            epoch: self.epoch,
        }
    }

    /// Dispatches a presentation command.
    ///
    /// Returns false when the command was rejected.
    #[instrument(skip(self), fields(epoch = self.epoch))]
    pub fn handle(&mut self, command: Command) -> bool {
        match command {
            Command::CellClicked(index) => self.cell_clicked(index),
            Command::SetMode(mode) => {
                self.set_mode(mode);
                true
            }
            Command::Restart => {
                self.restart();
                true
            }
            Command::ToggleTheme => {
                self.toggle_theme();
                true
            }
        }
    }

    /// Places the current mark at `pos` and passes the turn.
    ///
    /// No-op (returns false) if the game is decided or the square is taken.
    #[instrument(skip(self), fields(mark = ?self.turn, epoch = self.epoch))]
    pub fn apply_move(&mut self, pos: Position) -> bool {
        if self.outcome().is_decided() {
            debug!("Move rejected: game is over");
            return false;
        }
        if !self.board.is_empty(pos) {
            debug!("Move rejected: square occupied");
            return false;
        }

        self.board.set(pos, Square::Occupied(self.turn));
        self.turn = self.turn.opponent();
        self.epoch += 1;

        info!(outcome = ?self.outcome(), next = ?self.turn, "Move applied");
        true
    }

    /// Handles a human selecting cell `index` (0-8).
    ///
    /// In AI mode the human may only place X, and only while undecided.
    #[instrument(skip(self), fields(mode = ?self.mode, turn = ?self.turn))]
    pub fn cell_clicked(&mut self, index: usize) -> bool {
        let Some(pos) = Position::from_index(index) else {
            warn!("Ignoring click outside the board");
            return false;
        };

        if !self.mode.is_human(self.turn) || self.outcome().is_decided() {
            debug!("Click ignored: not the human's turn");
            return false;
        }

        self.apply_move(pos)
    }

    /// Returns the current epoch if the automated player is due to move.
    pub fn automated_turn(&self) -> Option<Epoch> {
        let due = self.mode.automated_mark() == Some(self.turn) && !self.outcome().is_decided();
        due.then_some(self.epoch)
    }

    /// Plays the advisor's move for a timer scheduled at `epoch`.
    ///
    /// Does nothing if any transition happened since scheduling or the
    /// automated player is no longer due.
    #[instrument(skip(self), fields(current = self.epoch))]
    pub fn play_automated_move(&mut self, epoch: Epoch) -> Option<Position> {
        if self.automated_turn() != Some(epoch) {
            debug!("Discarding stale automated move");
            return None;
        }

        let pos = advise(&self.board, self.turn, self.turn.opponent())?;
        self.apply_move(pos).then_some(pos)
    }

    /// Switches mode and resets the board, even if the mode is unchanged.
    #[instrument(skip(self), fields(from = ?self.mode))]
    pub fn set_mode(&mut self, mode: Mode) {
        info!("Setting mode");
        self.mode = mode;
        self.reset();
    }

    /// Resets the board, keeping the mode.
    #[instrument(skip(self), fields(mode = ?self.mode))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.reset();
    }

    /// Flips the theme. Leaves the board, turn and epoch alone.
    #[instrument(skip(self), fields(theme = ?self.theme))]
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        debug!(now = ?self.theme, "Theme toggled");
    }

    fn reset(&mut self) {
        self.board = Board::new();
        self.turn = Mark::X;
        self.epoch += 1;
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(Mode::default(), Theme::default())
    }
}
