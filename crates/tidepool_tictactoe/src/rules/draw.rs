//! Draw detection.

use super::win::completed_lines;
use crate::Board;

/// A draw is a full board on which nobody completed a line.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && completed_lines(board).next().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_board_is_not_a_draw() {
        let board: Board = "XOX OX. ...".parse().unwrap();
        assert!(!is_draw(&board));
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn test_full_board_without_line_is_a_draw() {
        let board: Board = "XOX OXX OXO".parse().unwrap();
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_line_is_not_a_draw() {
        let board: Board = "XXX OOX OXO".parse().unwrap();
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_full_board_with_two_winners_is_not_a_draw() {
        let board: Board = "XXX OOO XXO".parse().unwrap();
        assert!(!is_draw(&board));
    }
}
