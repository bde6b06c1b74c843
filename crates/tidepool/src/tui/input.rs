//! Keyboard handling.

use crossterm::event::KeyCode;
use tidepool_tictactoe::{Mark, Position, Screen, UiEvent};

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the program.
    Quit,
    /// Move the board cursor.
    MoveCursor(Position),
    /// Forward to the game.
    Game(UiEvent),
}

/// Moves cursor based on arrow keys. Stops at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

/// Maps a key to an action for the visible screen.
pub fn action_for(screen: Screen, cursor: Position, key: KeyCode) -> Option<Action> {
    if matches!(key, KeyCode::Char('q') | KeyCode::Esc) {
        return Some(Action::Quit);
    }

    match screen {
        Screen::Selection => match key {
            KeyCode::Char('x' | 'X') => Some(Action::Game(UiEvent::MarkSelected(Mark::X))),
            KeyCode::Char('o' | 'O') => Some(Action::Game(UiEvent::MarkSelected(Mark::O))),
            _ => None,
        },
        Screen::Board => match key {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                Some(Action::MoveCursor(move_cursor(cursor, key)))
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                Some(Action::Game(UiEvent::CellClicked(cursor)))
            }
            KeyCode::Char(c) => c
                .to_digit(10)
                .and_then(Position::from_cell_number)
                .map(|pos| Action::Game(UiEvent::CellClicked(pos))),
            _ => None,
        },
        Screen::Result(_) => match key {
            KeyCode::Char('r' | 'R') | KeyCode::Enter => Some(Action::Game(UiEvent::ReplayClicked)),
            _ => None,
        },
    }
}
