//! Phase-specific game structs.
//!
//! Each phase is its own type: only [`GameInProgress`] accepts moves, and a
//! [`GameFinished`] always carries a terminal outcome.

use super::contracts::{Contract, MoveContract};
use super::phases::{Outcome, Seat};
use super::{Board, Mark, Move, MoveError, Position, Square, rules};
use tracing::{debug, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game waiting for the human to pick a mark. The board is empty.
#[derive(Debug, Clone, Default)]
pub struct GameSetup {
    board: Board,
}

impl GameSetup {
    /// Creates a new game in setup phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the (empty) board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Starts the game with the human holding `human`. X always moves first.
    #[instrument(skip(self))]
    pub fn start(self, human: Mark) -> GameInProgress {
        GameInProgress {
            board: self.board,
            history: Vec::new(),
            to_move: Mark::X,
            human,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game accepting moves.
#[derive(Debug, Clone)]
pub struct GameInProgress {
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
    pub(crate) to_move: Mark,
    pub(crate) human: Mark,
}

/// A refused move, handing the untouched game back to the caller.
#[derive(Debug, derive_more::Display)]
#[display("{}", error)]
pub struct MoveRejected {
    game: GameInProgress,
    error: MoveError,
}

impl MoveRejected {
    /// The reason the move was refused.
    pub fn error(&self) -> &MoveError {
        &self.error
    }

    /// Splits into the unchanged game and the error.
    pub fn into_parts(self) -> (GameInProgress, MoveError) {
        (self.game, self.error)
    }
}

impl std::error::Error for MoveRejected {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl GameInProgress {
    /// Places a mark, consuming the game and returning the next phase.
    ///
    /// Preconditions are checked before anything changes; on failure the
    /// game comes back inside [`MoveRejected`]. Postconditions are checked in
    /// debug builds.
    ///
    /// # Errors
    ///
    /// `NotYourTurn` or `SquareOccupied` when the precondition fails,
    /// `ConflictingWinners` if the resulting board cannot be scored.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn make_move(self, action: Move) -> Result<GameResult, MoveRejected> {
        if let Err(error) = MoveContract::pre(&self, &action) {
            return Err(MoveRejected { game: self, error });
        }

        let mut game = self;
        game.board.set(action.position, Square::Occupied(action.mark));
        game.history.push(action);

        let outcome = match rules::evaluate(&game.board) {
            Ok(outcome) => outcome,
            Err(error) => {
                // Roll back so the caller gets the game it handed in.
                game.board.set(action.position, Square::Empty);
                game.history.pop();
                return Err(MoveRejected { game, error });
            }
        };
        debug!(%action, ?outcome, "Move applied");

        match outcome {
            Outcome::InProgress => {
                game.to_move = game.to_move.opponent();

                #[cfg(debug_assertions)]
                if let Err(error) = MoveContract::post(&game) {
                    return Err(MoveRejected { game, error });
                }

                Ok(GameResult::InProgress(game))
            }
            outcome => Ok(GameResult::Finished(GameFinished {
                board: game.board,
                history: game.history,
                human: game.human,
                outcome,
            })),
        }
    }

    /// The mark entitled to move next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// The mark held by the human.
    pub fn human(&self) -> Mark {
        self.human
    }

    /// The mark held by the automated opponent.
    pub fn automated(&self) -> Mark {
        self.human.opponent()
    }

    /// Who controls `mark`.
    pub fn seat_of(&self, mark: Mark) -> Seat {
        if mark == self.human {
            Seat::Human
        } else {
            Seat::Automated
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Open squares.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }

    /// Replays `moves` from an empty board with the human holding `human`.
    ///
    /// # Errors
    ///
    /// Returns the first rejection; moves after a finishing move are ignored.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(human: Mark, moves: &[Move]) -> Result<GameResult, MoveError> {
        let mut game = GameSetup::new().start(human);
        for action in moves {
            match game.make_move(*action).map_err(|r| r.into_parts().1)? {
                GameResult::InProgress(next) => game = next,
                finished @ GameResult::Finished(_) => return Ok(finished),
            }
        }
        Ok(GameResult::InProgress(game))
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game over. The outcome is always `Won` or `Drawn`.
#[derive(Debug, Clone)]
pub struct GameFinished {
    board: Board,
    history: Vec<Move>,
    human: Mark,
    outcome: Outcome,
}

impl GameFinished {
    /// The terminal outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The final board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// All moves played.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The mark the human held.
    pub fn human(&self) -> Mark {
        self.human
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Phase reached after a move.
#[derive(Debug)]
pub enum GameResult {
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_move_returns_game() {
        let game = GameSetup::new().start(Mark::X);
        let rejected = game
            .make_move(Move::new(Mark::O, Position::Center))
            .unwrap_err();
        assert_eq!(rejected.error(), &MoveError::NotYourTurn(Mark::O));

        let (game, _) = rejected.into_parts();
        assert!(game.history().is_empty());
        assert_eq!(game.to_move(), Mark::X);
    }

    #[test]
    fn test_finishing_move_keeps_history() {
        let moves = [
            Move::new(Mark::X, Position::TopLeft),
            Move::new(Mark::O, Position::Center),
            Move::new(Mark::X, Position::TopCenter),
            Move::new(Mark::O, Position::BottomLeft),
            Move::new(Mark::X, Position::TopRight),
        ];
        let Ok(GameResult::Finished(game)) = GameInProgress::replay(Mark::O, &moves) else {
            panic!("Expected finished game");
        };
        assert_eq!(game.outcome(), Outcome::Won(Mark::X));
        assert_eq!(game.history().len(), 5);
        assert_eq!(game.human(), Mark::O);
    }

    #[test]
    fn test_seats() {
        let game = GameSetup::new().start(Mark::O);
        assert_eq!(game.seat_of(Mark::O), Seat::Human);
        assert_eq!(game.seat_of(Mark::X), Seat::Automated);
        assert_eq!(game.automated(), Mark::X);
    }
}
