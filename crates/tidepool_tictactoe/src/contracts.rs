//! Preconditions and postconditions for moves.

use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::{GameInProgress, Move, MoveError};
use tracing::{instrument, warn};

/// Hoare-style contract: `{pre(state, action)} action {post(after)}`.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions on the state the action produced.
    fn post(after: &S) -> Result<(), MoveError>;
}

/// Contract for placing a mark.
///
/// Preconditions: the square is empty and the mark is the one to move.
/// Postconditions: every [`TicTacToeInvariants`] member holds.
pub struct MoveContract;

impl Contract<GameInProgress, Move> for MoveContract {
    #[instrument(skip(game))]
    fn pre(game: &GameInProgress, action: &Move) -> Result<(), MoveError> {
        if action.mark != game.to_move() {
            return Err(MoveError::NotYourTurn(action.mark));
        }
        if !game.board().is_empty(action.position) {
            return Err(MoveError::SquareOccupied(action.position));
        }
        Ok(())
    }

    fn post(after: &GameInProgress) -> Result<(), MoveError> {
        TicTacToeInvariants::check_all(after).map_err(|violations| {
            let joined = violations.join("; ");
            warn!(violations = %joined, "Move postcondition failed");
            MoveError::InvariantViolation(joined)
        })
    }
}
