//! Terminal front end.

mod app;
mod input;
mod scheduler;
mod ui;

pub use app::{App, SEA_BACKGROUND};
pub use input::{Action, action_for, move_cursor};
pub use scheduler::TokioScheduler;
pub use ui::WaveBand;

use crate::config::SceneConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tidepool_waves::Ticker;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};

/// How long the input thread blocks before checking for shutdown.
const INPUT_POLL: Duration = Duration::from_millis(100);

/// Runs the game until the user quits, restoring the terminal afterwards.
pub async fn run_tui(config: &SceneConfig, seed: Option<u64>) -> Result<()> {
    info!("Starting tidepool TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, config, seed).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draw, then wait for whichever comes first: a wave tick, a game timer or
/// a key press.
#[instrument(skip_all)]
async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &SceneConfig,
    seed: Option<u64>,
) -> Result<()> {
    let (timer_tx, mut timer_rx) = mpsc::unbounded_channel();
    let mut input_rx = spawn_input_reader();

    let size = terminal.size().context("Failed to read terminal size")?;
    let mut app = App::new(config, seed, size.width, timer_tx)?;
    let mut ticker = Ticker::new(config.waves().tick_interval());

    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        tokio::select! {
            _ = ticker.wait() => {
                app.tick();
                ticker.reschedule();
            }
            Some(timer) = timer_rx.recv() => app.on_timer(timer),
            event = input_rx.recv() => match event {
                Some(Event::Key(key)) if key.kind == KeyEventKind::Press => app.on_key(key.code),
                Some(_) => {}
                None => {
                    warn!("Input reader stopped");
                    break;
                }
            },
        }

        if app.should_quit() {
            ticker.stop();
            break;
        }
    }

    debug!("Game loop finished");
    Ok(())
}

/// Reads terminal events on a blocking thread until the receiver is dropped.
fn spawn_input_reader() -> mpsc::UnboundedReceiver<Event> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        while !tx.is_closed() {
            match event::poll(INPUT_POLL) {
                Ok(true) => match event::read() {
                    Ok(ev) => {
                        if tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        error!(error = %e, "Failed to read terminal event");
                        break;
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    error!(error = %e, "Failed to poll terminal events");
                    break;
                }
            }
        }
        debug!("Input reader exiting");
    });
    rx
}
