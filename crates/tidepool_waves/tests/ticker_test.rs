//! Tick pacing under tokio's paused clock.

use std::time::Duration;
use tidepool_waves::{DEFAULT_TICK_INTERVAL, Ticker};
use tokio::time::{Instant, advance, timeout};

#[tokio::test(start_paused = true)]
async fn test_first_tick_is_immediate() {
    let start = Instant::now();
    let ticker = Ticker::default();
    ticker.wait().await;
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn test_next_tick_waits_one_interval_after_reschedule() {
    let mut ticker = Ticker::new(DEFAULT_TICK_INTERVAL);
    ticker.wait().await;

    let handled = Instant::now();
    ticker.reschedule();
    ticker.wait().await;
    assert_eq!(handled.elapsed(), Duration::from_millis(45));
}

#[tokio::test(start_paused = true)]
async fn test_slow_tick_pushes_the_next_one_back() {
    let start = Instant::now();
    let mut ticker = Ticker::new(Duration::from_millis(45));
    ticker.wait().await;

    // Handling took longer than the interval.
    advance(Duration::from_millis(100)).await;
    ticker.reschedule();
    ticker.wait().await;
    assert_eq!(start.elapsed(), Duration::from_millis(145));
}

#[tokio::test(start_paused = true)]
async fn test_stopped_ticker_never_fires() {
    let mut ticker = Ticker::default();
    ticker.stop();
    assert!(!ticker.is_running());

    ticker.reschedule();
    assert!(ticker.deadline().is_none());
    assert!(
        timeout(Duration::from_secs(60), ticker.wait())
            .await
            .is_err()
    );
}
