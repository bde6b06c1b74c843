//! Shared helpers for engine tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::time::Duration;
use tidepool_tictactoe::{
    BoardView, GameController, GameTiming, ManualScheduler, RandomSource, RngSource,
};

/// Random source that returns scripted picks.
///
/// Each pick is an index into the open squares in board order. Delays are
/// always `fixed_delay`.
#[derive(Debug)]
pub struct ScriptedRandom {
    picks: VecDeque<usize>,
    fixed_delay: Duration,
}

impl ScriptedRandom {
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
            fixed_delay: Duration::from_millis(500),
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn pick(&mut self, len: usize) -> usize {
        let pick = self.picks.pop_front().expect("script ran out of picks");
        assert!(pick < len, "scripted pick {pick} with only {len} open squares");
        pick
    }

    fn delay_between(&mut self, _min: Duration, _max: Duration) -> Duration {
        self.fixed_delay
    }
}

pub type ScriptedGame = GameController<BoardView, ManualScheduler, ScriptedRandom>;
pub type SeededGame = GameController<BoardView, ManualScheduler, RngSource>;

pub fn scripted(picks: impl IntoIterator<Item = usize>) -> ScriptedGame {
    GameController::new(
        BoardView::new(),
        ManualScheduler::new(),
        ScriptedRandom::new(picks),
        GameTiming::default(),
    )
}

pub fn seeded(seed: u64) -> SeededGame {
    GameController::new(
        BoardView::new(),
        ManualScheduler::new(),
        RngSource::from_seed(seed),
        GameTiming::default(),
    )
}
