//! Squares never change once marked.

use super::Invariant;
use crate::{Board, GameInProgress, Square};

/// Invariant: replaying the history onto an empty board, never writing an
/// occupied square, reproduces the current board.
pub struct MonotonicBoardInvariant;

impl Invariant<GameInProgress> for MonotonicBoardInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let mut replayed = Board::new();
        for mov in game.history() {
            if !replayed.is_empty(mov.position) {
                return false;
            }
            replayed.set(mov.position, Square::Occupied(mov.mark));
        }
        replayed == *game.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameResult, GameSetup, Mark, Move, Position};

    #[test]
    fn test_holds_after_moves() {
        let game = GameSetup::new().start(Mark::X);
        let Ok(GameResult::InProgress(game)) = game.make_move(Move::new(Mark::X, Position::Center))
        else {
            panic!("Expected in-progress game");
        };
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_detects_unrecorded_mark() {
        let mut game = GameSetup::new().start(Mark::X);
        game.board.set(Position::BottomRight, Square::Occupied(Mark::O));
        assert!(!MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_detects_overwrite_in_history() {
        let mut game = GameSetup::new().start(Mark::X);
        game.history.push(Move::new(Mark::X, Position::Center));
        game.history.push(Move::new(Mark::O, Position::Center));
        game.board.set(Position::Center, Square::Occupied(Mark::O));
        assert!(!MonotonicBoardInvariant::holds(&game));
    }
}
