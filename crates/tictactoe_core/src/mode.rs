//! Game mode selection.

use serde::{Deserialize, Serialize};

use crate::Mark;

/// Game mode - who is the opponent?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Two humans share the board.
    #[default]
    PlayerVsPlayer,
    /// A human (X) plays the heuristic advisor (O).
    PlayerVsAi,
}

impl Mode {
    /// Mark played by the automated player in AI mode.
    pub const AUTOMATED_MARK: Mark = Mark::O;

    /// Returns display name.
    pub fn label(self) -> &'static str {
        match self {
            Mode::PlayerVsPlayer => "Player vs Player",
            Mode::PlayerVsAi => "Player vs AI",
        }
    }

    /// Returns the other mode.
    pub fn toggle(self) -> Self {
        match self {
            Mode::PlayerVsPlayer => Mode::PlayerVsAi,
            Mode::PlayerVsAi => Mode::PlayerVsPlayer,
        }
    }

    /// The mark driven by the advisor, if this mode has an automated player.
    pub fn automated_mark(self) -> Option<Mark> {
        match self {
            Mode::PlayerVsPlayer => None,
            Mode::PlayerVsAi => Some(Self::AUTOMATED_MARK),
        }
    }

    /// Returns true if a human may place `mark` in this mode.
    pub fn is_human(self, mark: Mark) -> bool {
        self.automated_mark() != Some(mark)
    }
}
