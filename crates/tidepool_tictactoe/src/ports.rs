//! Capabilities the engine needs from its host: a view to draw on, a timer
//! service and a source of randomness.

use super::phases::Outcome;
use super::{Mark, Position, Square};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Input coming from the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiEvent {
    /// The human picked a cell.
    CellClicked(Position),
    /// The human chose which mark to play.
    MarkSelected(Mark),
    /// The human asked for a new game.
    ReplayClicked,
}

/// Effects the engine produces on the view.
pub trait UiPort {
    /// Draws `square` at `position`.
    fn render_cell(&mut self, position: Position, square: Square);

    /// Highlights the mark that moves next.
    fn set_active(&mut self, mark: Mark);

    /// Allows or blocks human input on the board.
    fn set_input_enabled(&mut self, enabled: bool);

    /// Shows the mark selection view.
    fn show_selection(&mut self);

    /// Swaps the selection view for the board.
    fn show_board(&mut self);

    /// Swaps the board for the result view.
    fn show_result(&mut self, outcome: Outcome);
}

/// Handle for a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// What a timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// The automated opponent plays.
    OpponentMove,
    /// The result view replaces the board.
    ShowResult(Outcome),
}

/// Message handed back to [`GameController::on_timer`](crate::GameController::on_timer)
/// when a timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameTimer {
    /// Reset counter at scheduling time. Timers from older epochs are dropped.
    pub epoch: u64,
    /// Action to take.
    pub kind: TimerKind,
}

/// Deferred delivery of [`GameTimer`]s.
pub trait Scheduler {
    /// Delivers `timer` back to the engine after `delay`.
    fn after(&mut self, delay: Duration, timer: GameTimer) -> TimerId;

    /// Drops a timer that has not fired. Unknown ids are ignored.
    fn cancel(&mut self, id: TimerId);
}

/// Randomness used by the automated opponent.
pub trait RandomSource {
    /// Uniform index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;

    /// Uniform duration in `[min, max)`, or `min` when the range is empty.
    fn delay_between(&mut self, min: Duration, max: Duration) -> Duration;
}

/// [`RandomSource`] backed by a [`rand::Rng`].
#[derive(Debug, Clone)]
pub struct RngSource<R = StdRng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Reproducible source.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from the thread generator.
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random::<u64>())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    fn delay_between(&mut self, min: Duration, max: Duration) -> Duration {
        // Sampled in whole milliseconds; a sub-millisecond span is empty.
        let (lo, hi) = (min.as_millis() as u64, max.as_millis() as u64);
        if hi <= lo {
            return min;
        }
        Duration::from_millis(self.rng.random_range(lo..hi))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_stays_in_range() {
        let mut source = RngSource::from_seed(7);
        for len in 1..=9 {
            for _ in 0..50 {
                assert!(source.pick(len) < len);
            }
        }
    }

    #[test]
    fn test_delay_between_is_half_open() {
        let mut source = RngSource::from_seed(11);
        let min = Duration::from_millis(200);
        let max = Duration::from_millis(1200);
        for _ in 0..500 {
            let delay = source.delay_between(min, max);
            assert!(delay >= min && delay < max, "{delay:?}");
        }
    }

    #[test]
    fn test_delay_between_empty_range_is_min() {
        let mut source = RngSource::from_seed(0);
        let d = Duration::from_millis(5);
        assert_eq!(source.delay_between(d, d), d);
    }

    #[test]
    fn test_delay_between_sub_millisecond_range_is_min() {
        let mut source = RngSource::from_seed(1);
        let min = Duration::from_micros(100);
        let max = Duration::from_micros(900);
        assert_eq!(source.delay_between(min, max), min);

        // Same whole millisecond on both ends.
        let min = Duration::from_micros(1_100);
        let max = Duration::from_micros(1_900);
        assert_eq!(source.delay_between(min, max), min);
    }

    #[test]
    fn test_ui_events_cross_json() {
        let events = [
            UiEvent::MarkSelected(Mark::O),
            UiEvent::CellClicked(Position::BottomRight),
            UiEvent::ReplayClicked,
        ];
        let json = serde_json::to_string(&events).unwrap();
        let back: Vec<UiEvent> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, events);
        assert_eq!(
            serde_json::to_value(UiEvent::CellClicked(Position::Center)).unwrap(),
            serde_json::json!({ "CellClicked": "Center" })
        );
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = RngSource::from_seed(42);
        let mut b = RngSource::from_seed(42);
        let xs: Vec<usize> = (0..20).map(|_| a.pick(9)).collect();
        let ys: Vec<usize> = (0..20).map(|_| b.pick(9)).collect();
        assert_eq!(xs, ys);
    }
}
