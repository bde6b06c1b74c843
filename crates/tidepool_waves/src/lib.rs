//! Layered sine-wave backgrounds.
//!
//! A [`WaveRenderer`] owns a set of [`Surface`]s, each bound to a
//! [`Palette`]. Every [`WaveRenderer::tick`] clears each surface and paints
//! three translucent wave fills at the same phase, then advances the shared
//! [`AnimationClock`]. A [`Ticker`] paces the ticks.
//!
//! ```
//! use tidepool_waves::{Palette, RasterSurface, Rgb, WaveRenderer};
//!
//! let surface = RasterSurface::new(0, 0, 40, 5, Rgb::new(0, 0, 0));
//! let palette = Palette::parse(&["#43c0e4"]).unwrap();
//! let mut renderer = WaveRenderer::initialize(vec![surface], vec![palette], 400, 500).unwrap();
//! renderer.tick();
//! assert!(renderer.clock().seconds() > 0.0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod clock;
mod color;
mod palette;
mod renderer;
mod surface;
mod ticker;
mod wave;

pub use clock::{AnimationClock, DEFAULT_INCREMENT};
pub use color::{ColorError, Rgb};
pub use palette::{Palette, PaletteError};
pub use renderer::{DEFAULT_SURFACE_HEIGHT, RendererError, WaveRenderer, draw, draw_wave_fill};
pub use surface::{RasterSurface, Surface};
pub use ticker::{DEFAULT_TICK_INTERVAL, Ticker};
pub use wave::{LAYERS, Point, SAMPLE_STEP, UNIT, WaveLayer, wave_outline};
