//! Self-rescheduling tick timer.
//!
//! The next deadline is set only after the previous tick has been handled,
//! so ticks never overlap and slow ticks push later ones back.

use std::time::Duration;
use tokio::time::{Instant, sleep_until};
use tracing::debug;

/// Delay between the end of one tick and the start of the next.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(45);

/// Deadline-based ticker meant for a `tokio::select!` loop.
///
/// ```ignore
/// loop {
///     tokio::select! {
///         _ = ticker.wait() => {
///             renderer.tick();
///             ticker.reschedule();
///         }
///         // other branches
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next: Option<Instant>,
}

impl Ticker {
    /// A running ticker whose first tick is due immediately.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next: Some(Instant::now()),
        }
    }

    /// Delay between ticks.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether ticks are still being scheduled.
    pub fn is_running(&self) -> bool {
        self.next.is_some()
    }

    /// When the next tick is due, if running.
    pub fn deadline(&self) -> Option<Instant> {
        self.next
    }

    /// Resolves when the next tick is due. Never resolves once stopped.
    pub async fn wait(&self) {
        match self.next {
            Some(at) => sleep_until(at).await,
            None => std::future::pending().await,
        }
    }

    /// Schedules the next tick one interval from now. No-op once stopped.
    pub fn reschedule(&mut self) {
        if self.next.is_some() {
            self.next = Some(Instant::now() + self.interval);
        }
    }

    /// Stops scheduling ticks.
    pub fn stop(&mut self) {
        if self.next.take().is_some() {
            debug!("Ticker stopped");
        }
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL)
    }
}
