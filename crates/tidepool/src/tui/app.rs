//! Application state and logic.

use super::input::{Action, action_for};
use super::scheduler::TokioScheduler;
use crate::config::SceneConfig;
use crossterm::event::KeyCode;
use tidepool_tictactoe::{
    BoardView, GameController, GamePhase, GameTimer, Position, RngSource, Screen,
};
use tidepool_waves::{RasterSurface, Rgb, WaveRenderer};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Color behind the waves.
pub const SEA_BACKGROUND: Rgb = Rgb::new(0x12, 0x1b, 0x2e);

/// Main application state.
pub struct App {
    game: GameController<BoardView, TokioScheduler, RngSource>,
    waves: WaveRenderer<RasterSurface>,
    band_rows: Vec<u16>,
    cursor: Position,
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    /// Builds the game and one wave surface per configured band, `cols`
    /// terminal columns wide.
    ///
    /// Timers scheduled by the game arrive on the receiver paired with
    /// `timers`.
    pub fn new(
        config: &SceneConfig,
        seed: Option<u64>,
        cols: u16,
        timers: mpsc::UnboundedSender<GameTimer>,
    ) -> anyhow::Result<Self> {
        let waves_config = config.waves();
        let band_rows = waves_config.band_rows();
        let surfaces = band_rows
            .iter()
            .map(|&rows| RasterSurface::new(0, 0, cols, rows, SEA_BACKGROUND))
            .collect();
        let viewport_width = u32::from(cols) * waves_config.column_width();
        let waves = WaveRenderer::initialize(
            surfaces,
            waves_config.palettes()?,
            viewport_width,
            *waves_config.surface_height(),
        )?
        .with_increment(*waves_config.clock_increment());

        let random = match seed {
            Some(seed) => RngSource::from_seed(seed),
            None => RngSource::from_entropy(),
        };
        let game = GameController::new(
            BoardView::new(),
            TokioScheduler::new(timers),
            random,
            config.game().timing(),
        );

        info!(cols, viewport_width, ?seed, "App ready");
        Ok(Self {
            game,
            waves,
            band_rows,
            cursor: Position::Center,
            notice: None,
            should_quit: false,
        })
    }

    /// The view the game draws into.
    pub fn view(&self) -> &BoardView {
        self.game.ui()
    }

    /// The wave renderer.
    pub fn waves(&self) -> &WaveRenderer<RasterSurface> {
        &self.waves
    }

    /// Terminal rows of each wave band.
    pub fn band_rows(&self) -> &[u16] {
        &self.band_rows
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Status line text.
    pub fn status(&self) -> String {
        let base = match self.game.phase() {
            GamePhase::AwaitingSelection => "Choose your mark: press x or o".to_string(),
            GamePhase::InProgress { active } if self.game.input_enabled() => {
                format!("Your move as {active}. Arrows + Enter, or 1-9")
            }
            GamePhase::InProgress { active } => format!("{active} is thinking..."),
            GamePhase::Won(_) | GamePhase::Drawn => match self.view().screen() {
                Screen::Result(_) => "Press r to play again".to_string(),
                _ => "Game over".to_string(),
            },
        };
        match &self.notice {
            Some(notice) => format!("{base}  ({notice})"),
            None => base,
        }
    }

    /// Redraws the wave bands.
    pub fn tick(&mut self) {
        self.waves.tick();
    }

    /// Delivers a fired game timer.
    pub fn on_timer(&mut self, timer: GameTimer) {
        if let Err(e) = self.game.on_timer(timer) {
            warn!(error = %e, "Timer handler failed");
            self.notice = Some(e.to_string());
        }
        self.game.ui_mut().clear_effects();
    }

    /// Handles a key press.
    pub fn on_key(&mut self, key: KeyCode) {
        let Some(action) = action_for(self.view().screen(), self.cursor, key) else {
            return;
        };
        debug!(?action, "Key action");

        match action {
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
            Action::MoveCursor(position) => self.cursor = position,
            Action::Game(event) => {
                self.notice = None;
                if let Err(e) = self.game.handle(event) {
                    warn!(error = %e, ?event, "Input rejected");
                    self.notice = Some(e.to_string());
                }
                self.game.ui_mut().clear_effects();
            }
        }
    }
}
