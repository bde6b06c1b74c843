//! A game in any phase.

use super::phases::{GamePhase, Outcome};
use super::typestate::{GameFinished, GameInProgress, GameSetup};
use super::Board;

/// Wraps the phase structs so one owner can hold a game across transitions.
#[derive(Debug, Clone)]
pub enum Game {
    /// Waiting for mark selection.
    AwaitingSelection(GameSetup),
    /// Moves are being played.
    InProgress(GameInProgress),
    /// Game over.
    Finished(GameFinished),
}

impl Default for Game {
    fn default() -> Self {
        Game::AwaitingSelection(GameSetup::new())
    }
}

impl From<GameSetup> for Game {
    fn from(game: GameSetup) -> Self {
        Game::AwaitingSelection(game)
    }
}

impl From<GameInProgress> for Game {
    fn from(game: GameInProgress) -> Self {
        Game::InProgress(game)
    }
}

impl From<GameFinished> for Game {
    fn from(game: GameFinished) -> Self {
        Game::Finished(game)
    }
}

impl Game {
    /// The board in its current state.
    pub fn board(&self) -> &Board {
        match self {
            Game::AwaitingSelection(g) => g.board(),
            Game::InProgress(g) => g.board(),
            Game::Finished(g) => g.board(),
        }
    }

    /// Lifecycle phase.
    pub fn phase(&self) -> GamePhase {
        match self {
            Game::AwaitingSelection(_) => GamePhase::AwaitingSelection,
            Game::InProgress(g) => GamePhase::InProgress { active: g.to_move() },
            Game::Finished(g) => match g.outcome() {
                Outcome::Won(mark) => GamePhase::Won(mark),
                // A finished game is never in progress.
                Outcome::Drawn | Outcome::InProgress => GamePhase::Drawn,
            },
        }
    }

    /// Outcome as scored after the last move.
    pub fn outcome(&self) -> Outcome {
        match self {
            Game::Finished(g) => g.outcome(),
            _ => Outcome::InProgress,
        }
    }
}
