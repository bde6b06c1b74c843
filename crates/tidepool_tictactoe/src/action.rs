//! Moves and the errors that reject them.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// A mark placed at a position.
///
/// Moves are domain events: the game history is a list of them and the
/// invariants are checked by replaying that list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// Where it is placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Why a move or game command was refused.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// No mark has been selected yet.
    #[display("No game in progress; select X or O first")]
    NotStarted,

    /// A mark was already selected for this game.
    #[display("A game is already running")]
    AlreadyStarted,

    /// The game is over.
    #[display("Game is already over")]
    GameOver,

    /// The given mark may not move right now.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(#[error(not(source))] Mark),

    /// Board index outside 0-8.
    #[display("Board index {} is outside 0-8", _0)]
    InvalidPosition(#[error(not(source))] usize),

    /// The square is taken.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// Both marks own a completed line, which no legal game can produce.
    #[display("Malformed board: both X and O have three in a row")]
    ConflictingWinners,

    /// A postcondition failed after a move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_position_names_the_board_index_range() {
        let err = Position::try_from(9usize).unwrap_err();
        assert_eq!(err, MoveError::InvalidPosition(9));
        assert_eq!(err.to_string(), "Board index 9 is outside 0-8");
    }

    #[test]
    fn test_history_survives_json() {
        let history = vec![
            Move::new(Mark::X, Position::Center),
            Move::new(Mark::O, Position::TopLeft),
        ];
        let json = serde_json::to_string(&history).unwrap();
        assert_eq!(
            json,
            r#"[{"mark":"X","position":"Center"},{"mark":"O","position":"TopLeft"}]"#
        );
        let back: Vec<Move> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, history);
    }
}
