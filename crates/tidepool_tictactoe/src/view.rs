//! View model that mirrors what the engine has told the UI.

use super::phases::Outcome;
use super::ports::UiPort;
use super::{Board, Mark, Position, Square};
use serde::{Deserialize, Serialize};

/// Which view is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Screen {
    /// Choose X or O.
    #[default]
    Selection,
    /// The board.
    Board,
    /// Final result.
    Result(Outcome),
}

/// One call the engine made on the UI port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiEffect {
    /// `render_cell`
    Cell(Position, Square),
    /// `set_active`
    Active(Mark),
    /// `set_input_enabled`
    Input(bool),
    /// `show_selection`
    Selection,
    /// `show_board`
    Board,
    /// `show_result`
    Result(Outcome),
}

/// A [`UiPort`] that keeps the displayed state and a log of every effect.
///
/// Front ends draw from it; tests and the simulation read the log.
#[derive(Debug, Clone, Default)]
pub struct BoardView {
    cells: Board,
    active: Option<Mark>,
    input_enabled: bool,
    screen: Screen,
    effects: Vec<UiEffect>,
}

impl BoardView {
    /// Creates a blank view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cells as drawn.
    pub fn cells(&self) -> &Board {
        &self.cells
    }

    /// Highlighted mark, once a game has started.
    pub fn active(&self) -> Option<Mark> {
        self.active
    }

    /// Whether the board accepts clicks.
    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    /// Visible screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Every effect received, oldest first.
    pub fn effects(&self) -> &[UiEffect] {
        &self.effects
    }

    /// Forgets the effect log, keeping the displayed state.
    pub fn clear_effects(&mut self) {
        self.effects.clear();
    }
}

impl UiPort for BoardView {
    fn render_cell(&mut self, position: Position, square: Square) {
        self.cells.set(position, square);
        self.effects.push(UiEffect::Cell(position, square));
    }

    fn set_active(&mut self, mark: Mark) {
        self.active = Some(mark);
        self.effects.push(UiEffect::Active(mark));
    }

    fn set_input_enabled(&mut self, enabled: bool) {
        self.input_enabled = enabled;
        self.effects.push(UiEffect::Input(enabled));
    }

    fn show_selection(&mut self) {
        self.screen = Screen::Selection;
        self.active = None;
        self.effects.push(UiEffect::Selection);
    }

    fn show_board(&mut self) {
        self.screen = Screen::Board;
        self.effects.push(UiEffect::Board);
    }

    fn show_result(&mut self, outcome: Outcome) {
        self.screen = Screen::Result(outcome);
        self.effects.push(UiEffect::Result(outcome));
    }
}
