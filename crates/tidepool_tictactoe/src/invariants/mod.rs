//! Invariants that hold for every in-progress game.
//!
//! They are checked as move postconditions in debug builds and can be
//! tested on their own.

pub mod alternating_turn;
pub mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

/// A logical property of a state.
pub trait Invariant<S> {
    /// Checks the property.
    fn holds(state: &S) -> bool;

    /// Human-readable description.
    fn description() -> &'static str;
}

/// A group of invariants checked together.
pub trait InvariantSet<S> {
    /// Checks every member, collecting the descriptions of those that fail.
    fn check_all(state: &S) -> Result<(), Vec<&'static str>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<&'static str>> {
        let violations: Vec<&'static str> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ]
        .into_iter()
        .filter_map(|(ok, description)| (!ok).then_some(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Every invariant of an in-progress game.
pub type TicTacToeInvariants = (MonotonicBoardInvariant, AlternatingTurnInvariant);
