//! Scene configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tidepool_tictactoe::GameTiming;
use tidepool_waves::{DEFAULT_INCREMENT, DEFAULT_SURFACE_HEIGHT, Palette, Rgb};
use tracing::{debug, info, instrument};

/// Everything the front ends read from the config file.
#[derive(Debug, Clone, Default, PartialEq, Getters, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Background animation.
    #[serde(default)]
    waves: WaveConfig,

    /// Opponent pacing.
    #[serde(default)]
    game: GameConfig,
}

/// Wave animation settings.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct WaveConfig {
    /// Pause after each tick, in milliseconds.
    #[serde(default = "default_tick_interval_ms")]
    tick_interval_ms: u64,

    /// Seconds added to the animation clock per tick.
    #[serde(default = "default_clock_increment")]
    clock_increment: f64,

    /// Logical height of every surface, in pixels.
    #[serde(default = "default_surface_height")]
    surface_height: u32,

    /// Logical pixels per terminal column.
    #[serde(default = "default_column_width")]
    column_width: u32,

    /// One entry per surface, top to bottom.
    #[serde(default = "default_surfaces")]
    surfaces: Vec<SurfaceConfig>,
}

/// One wave surface.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct SurfaceConfig {
    /// One to three colors, back to front.
    palette: Vec<Rgb>,

    /// Terminal rows the surface is painted into.
    #[serde(default = "default_surface_rows")]
    rows: u16,
}

/// Opponent pacing, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Shortest thinking pause.
    #[serde(default = "default_thinking_min_ms")]
    thinking_min_ms: u64,

    /// Longest thinking pause (exclusive).
    #[serde(default = "default_thinking_max_ms")]
    thinking_max_ms: u64,

    /// Pause before the result view.
    #[serde(default = "default_result_delay_ms")]
    result_delay_ms: u64,
}

fn default_tick_interval_ms() -> u64 {
    45
}

fn default_clock_increment() -> f64 {
    DEFAULT_INCREMENT
}

fn default_surface_height() -> u32 {
    DEFAULT_SURFACE_HEIGHT
}

fn default_column_width() -> u32 {
    10
}

fn default_surface_rows() -> u16 {
    4
}

fn default_surfaces() -> Vec<SurfaceConfig> {
    vec![
        SurfaceConfig::new(
            vec![
                Rgb::new(0x66, 0x66, 0x66),
                Rgb::new(0xcc, 0xcc, 0xcc),
                Rgb::new(0xee, 0xee, 0xee),
            ],
            6,
        ),
        SurfaceConfig::new(vec![Rgb::new(0x43, 0xc0, 0xe4)], 4),
        SurfaceConfig::new(vec![Rgb::new(0xff, 0xff, 0xff)], 4),
    ]
}

fn default_thinking_min_ms() -> u64 {
    200
}

fn default_thinking_max_ms() -> u64 {
    1200
}

fn default_result_delay_ms() -> u64 {
    700
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            clock_increment: default_clock_increment(),
            surface_height: default_surface_height(),
            column_width: default_column_width(),
            surfaces: default_surfaces(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            thinking_min_ms: default_thinking_min_ms(),
            thinking_max_ms: default_thinking_max_ms(),
            result_delay_ms: default_result_delay_ms(),
        }
    }
}

impl SurfaceConfig {
    /// Creates a surface entry.
    pub fn new(palette: Vec<Rgb>, rows: u16) -> Self {
        Self { palette, rows }
    }
}

impl WaveConfig {
    /// Tick pause as a duration.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Validated palettes, in surface order.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first surface whose palette is empty or
    /// has more than three colors.
    pub fn palettes(&self) -> Result<Vec<Palette>, ConfigError> {
        self.surfaces
            .iter()
            .enumerate()
            .map(|(idx, surface)| {
                Palette::new(surface.palette.clone())
                    .map_err(|e| ConfigError::new(format!("Surface {}: {}", idx + 1, e)))
            })
            .collect()
    }

    /// Rows of every band, in surface order.
    pub fn band_rows(&self) -> Vec<u16> {
        self.surfaces.iter().map(|s| s.rows).collect()
    }
}

impl GameConfig {
    /// Delays for the game controller.
    pub fn timing(&self) -> GameTiming {
        GameTiming::new(
            Duration::from_millis(self.thinking_min_ms),
            Duration::from_millis(self.thinking_max_ms),
            Duration::from_millis(self.result_delay_ms),
        )
    }
}

impl SceneConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(surfaces = config.waves.surfaces.len(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path`, or the defaults when no such file exists.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks values serde cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let waves = &self.waves;
        if waves.tick_interval_ms == 0 {
            return Err(ConfigError::new("waves.tick_interval_ms must be positive".to_string()));
        }
        if !(waves.clock_increment.is_finite() && waves.clock_increment > 0.0) {
            return Err(ConfigError::new(format!(
                "waves.clock_increment must be a positive number, got {}",
                waves.clock_increment
            )));
        }
        if waves.surface_height == 0 || waves.column_width == 0 {
            return Err(ConfigError::new(
                "waves.surface_height and waves.column_width must be positive".to_string(),
            ));
        }
        waves.palettes()?;

        let game = &self.game;
        if game.thinking_min_ms > game.thinking_max_ms {
            return Err(ConfigError::new(format!(
                "game.thinking_min_ms ({}) exceeds game.thinking_max_ms ({})",
                game.thinking_min_ms, game.thinking_max_ms
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
