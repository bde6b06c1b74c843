//! Marks alternate X, O, X, ...

use super::Invariant;
use crate::{GameInProgress, Mark};

/// Invariant: history starts with X, never repeats a mark back to back, and
/// the mark to move is the one after the last move.
pub struct AlternatingTurnInvariant;

impl Invariant<GameInProgress> for AlternatingTurnInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let history = game.history();

        if history.first().is_some_and(|m| m.mark != Mark::X) {
            return false;
        }
        if history.windows(2).any(|w| w[0].mark == w[1].mark) {
            return false;
        }

        let expected_next = if history.len() % 2 == 0 { Mark::X } else { Mark::O };
        game.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Marks alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameInProgress, GameResult, GameSetup, Move, Position};

    #[test]
    fn test_empty_game_holds() {
        let game = GameSetup::new().start(Mark::O);
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.to_move(), Mark::X);
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let moves = [
            Move::new(Mark::X, Position::TopLeft),
            Move::new(Mark::O, Position::Center),
            Move::new(Mark::X, Position::TopRight),
        ];
        let Ok(GameResult::InProgress(game)) = GameInProgress::replay(Mark::X, &moves) else {
            panic!("Expected in-progress game");
        };
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.to_move(), Mark::O);
    }

    #[test]
    fn test_same_mark_twice_violates() {
        let mut game = GameSetup::new().start(Mark::X);
        game.history.push(Move::new(Mark::X, Position::TopLeft));
        game.history.push(Move::new(Mark::X, Position::Center));
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
