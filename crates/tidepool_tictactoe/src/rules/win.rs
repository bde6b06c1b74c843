//! Win detection.

use crate::{Board, Mark, MoveError, Position};
use tracing::instrument;

/// The eight winning combinations: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Every complete line on the board, in [`LINES`] order, with its owner.
pub fn completed_lines(board: &Board) -> impl Iterator<Item = ([Position; 3], Mark)> + '_ {
    LINES.into_iter().filter_map(|line @ [a, b, c]| {
        let mark = board.get(a).mark()?;
        (board.get(b).mark() == Some(mark) && board.get(c).mark() == Some(mark))
            .then_some((line, mark))
    })
}

/// Returns the owner of the first complete line, if any.
///
/// One move can complete two lines for the same mark, which is fine. Lines
/// for both marks at once cannot come from legal play and are rejected.
///
/// # Errors
///
/// Returns [`MoveError::ConflictingWinners`] if X and O both own a line.
#[instrument(level = "trace")]
pub fn check_winner(board: &Board) -> Result<Option<Mark>, MoveError> {
    let mut lines = completed_lines(board);
    let Some((_, first)) = lines.next() else {
        return Ok(None);
    };
    if lines.any(|(_, mark)| mark != first) {
        return Err(MoveError::ConflictingWinners);
    }
    Ok(Some(first))
}
