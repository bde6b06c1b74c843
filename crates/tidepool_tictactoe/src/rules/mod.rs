//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). The typestate game and the
//! engine both call [`evaluate`] after every move.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{LINES, check_winner, completed_lines};

use crate::{Board, MoveError, Outcome};
use tracing::{instrument, warn};

/// Computes the outcome of `board` from scratch.
///
/// Lines are scanned rows first, then columns, then diagonals; the first
/// complete line decides the winner. A full board without a line is a draw.
///
/// # Errors
///
/// Returns [`MoveError::ConflictingWinners`] when both marks own a complete
/// line.
#[instrument(level = "trace")]
pub fn evaluate(board: &Board) -> Result<Outcome, MoveError> {
    if is_draw(board) {
        return Ok(Outcome::Drawn);
    }
    match check_winner(board) {
        Ok(Some(mark)) => Ok(Outcome::Won(mark)),
        Ok(None) => Ok(Outcome::InProgress),
        Err(e) => {
            warn!(%board, "Refusing to score malformed board");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    #[test]
    fn test_evaluate_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), Ok(Outcome::InProgress));
    }

    #[test]
    fn test_evaluate_full_board_without_line_is_drawn() {
        let board: Board = "XOX XOO OXX".parse().unwrap();
        assert_eq!(evaluate(&board), Ok(Outcome::Drawn));
    }

    #[test]
    fn test_evaluate_full_board_with_line_is_won() {
        let board: Board = "XXX OOX XOO".parse().unwrap();
        assert_eq!(evaluate(&board), Ok(Outcome::Won(Mark::X)));
    }

    #[test]
    fn test_evaluate_rejects_two_winners() {
        let board: Board = "XXX OOO ...".parse().unwrap();
        assert_eq!(evaluate(&board), Err(MoveError::ConflictingWinners));
    }
}
