//! Outcome, seat and phase types shared by the game and the engine.

use super::Mark;
use serde::{Deserialize, Serialize};

/// Result of scoring a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Nobody has won and squares remain.
    InProgress,
    /// A mark completed a line.
    Won(Mark),
    /// The board filled up with no line.
    Drawn,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Won(mark) => Some(*mark),
            _ => None,
        }
    }

    /// True for `Won` and `Drawn`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "Game in progress"),
            Outcome::Won(mark) => write!(f, "Player {} won!", mark),
            Outcome::Drawn => write!(f, "The match has been drawn."),
        }
    }
}

/// Who controls a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Seat {
    /// Moves come from UI input.
    Human,
    /// Moves are picked at random by the engine.
    Automated,
}

/// Where the engine is in the game lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the human to choose X or O.
    AwaitingSelection,
    /// Moves are being played; `active` moves next.
    InProgress {
        /// The mark entitled to move next.
        active: Mark,
    },
    /// Terminal: a line was completed.
    Won(Mark),
    /// Terminal: the board filled up.
    Drawn,
}

impl GamePhase {
    /// True for `Won` and `Drawn`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Won(_) | GamePhase::Drawn)
    }
}
