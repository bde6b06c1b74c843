//! A scheduler that only fires timers when asked.

use super::engine::GameController;
use super::ports::{GameTimer, RandomSource, Scheduler, TimerId, UiPort};
use super::MoveError;
use std::collections::VecDeque;
use std::time::Duration;
use tracing::{instrument, trace};

/// A timer waiting in a [`ManualScheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTimer {
    /// Handle returned by `after`.
    pub id: TimerId,
    /// Requested delay.
    pub delay: Duration,
    /// Message to deliver.
    pub timer: GameTimer,
}

/// Queues timers in scheduling order and never waits.
///
/// Used by the headless simulation and by tests, which fire timers one at
/// a time or drain the queue with [`GameController::settle`].
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    queue: VecDeque<PendingTimer>,
}

impl ManualScheduler {
    /// Creates an empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Timers not yet fired, oldest first.
    pub fn pending(&self) -> impl Iterator<Item = &PendingTimer> {
        self.queue.iter()
    }

    /// Number of queued timers.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// True when nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Removes and returns the oldest timer.
    pub fn pop_next(&mut self) -> Option<PendingTimer> {
        self.queue.pop_front()
    }
}

impl Scheduler for ManualScheduler {
    fn after(&mut self, delay: Duration, timer: GameTimer) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        trace!(?id, ?delay, ?timer, "Timer queued");
        self.queue.push_back(PendingTimer { id, delay, timer });
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.queue.retain(|pending| pending.id != id);
    }
}

impl<U, R> GameController<U, ManualScheduler, R>
where
    U: UiPort,
    R: RandomSource,
{
    /// Fires queued timers, including ones they schedule, until none remain.
    ///
    /// Returns how many timers fired.
    ///
    /// # Errors
    ///
    /// Stops at the first timer whose handler fails.
    #[instrument(skip(self))]
    pub fn settle(&mut self) -> Result<usize, MoveError> {
        let mut fired = 0;
        while let Some(pending) = self.scheduler_mut().pop_next() {
            self.on_timer(pending.timer)?;
            fired += 1;
        }
        Ok(fired)
    }
}
