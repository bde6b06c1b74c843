//! Tidepool: tic-tac-toe against a random opponent, drawn over a band of
//! animated waves.
//!
//! The rules and engine live in `tidepool_tictactoe`, the animation in
//! `tidepool_waves`. This crate wires them to a terminal front end and a
//! headless simulation, both driven by a [`SceneConfig`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod simulate;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, GameConfig, SceneConfig, SurfaceConfig, WaveConfig};
pub use simulate::{GameRecord, Simulation, SimulationError, Tally};
