//! Tic-tac-toe against a random opponent.
//!
//! # Architecture
//!
//! - **Types**: [`Mark`], [`Square`], [`Board`], [`Position`], [`Move`]
//! - **Rules**: [`rules::evaluate`] scores a board (rows, columns, diagonals)
//! - **Typestate**: [`GameSetup`] → [`GameInProgress`] → [`GameFinished`]
//! - **Engine**: [`GameController`] drives a game from [`UiEvent`]s and
//!   timers, producing effects on a [`UiPort`]
//! - **Ports**: [`Scheduler`] and [`RandomSource`] are injected so hosts and
//!   tests choose how time and chance behave
//!
//! # Example
//!
//! ```
//! use tidepool_tictactoe::{
//!     BoardView, GameController, GamePhase, GameTiming, ManualScheduler, Mark, Position,
//!     RngSource, UiEvent,
//! };
//!
//! let mut game = GameController::new(
//!     BoardView::new(),
//!     ManualScheduler::new(),
//!     RngSource::from_seed(1),
//!     GameTiming::default(),
//! );
//! game.handle(UiEvent::MarkSelected(Mark::X)).unwrap();
//! game.handle(UiEvent::CellClicked(Position::Center)).unwrap();
//! game.settle().unwrap();
//! assert_eq!(game.board().count(Mark::O), 1);
//! assert!(matches!(game.phase(), GamePhase::InProgress { active: Mark::X }));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod engine;
mod game;
mod phases;
mod ports;
mod position;
mod scheduler;
mod types;
mod typestate;
mod view;

pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError};
pub use contracts::{Contract, MoveContract};
pub use engine::{GameController, GameTiming};
pub use game::Game;
pub use phases::{GamePhase, Outcome, Seat};
pub use ports::{GameTimer, RandomSource, RngSource, Scheduler, TimerId, TimerKind, UiEvent, UiPort};
pub use position::Position;
pub use scheduler::{ManualScheduler, PendingTimer};
pub use types::{Board, BoardParseError, Mark, Square};
pub use typestate::{GameFinished, GameInProgress, GameResult, GameSetup, MoveRejected};
pub use view::{BoardView, Screen, UiEffect};
