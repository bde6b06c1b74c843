//! The wave renderer: surfaces, their palettes, and the shared clock.

use super::clock::{AnimationClock, DEFAULT_INCREMENT};
use super::color::Rgb;
use super::palette::Palette;
use super::surface::Surface;
use super::wave::{LAYERS, WaveLayer, wave_outline};
use tracing::{debug, instrument, trace};

/// Default drawable height of every surface, in pixels.
pub const DEFAULT_SURFACE_HEIGHT: u32 = 500;

/// Error setting up the renderer.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum RendererError {
    /// Each surface needs exactly one palette.
    #[display("{} surfaces but {} palettes", surfaces, palettes)]
    PaletteCountMismatch {
        /// Surfaces given.
        surfaces: usize,
        /// Palettes given.
        palettes: usize,
    },
}

/// Redraws every bound surface once per tick.
#[derive(Debug)]
pub struct WaveRenderer<S> {
    bindings: Vec<(S, Palette)>,
    clock: AnimationClock,
    increment: f64,
}

impl<S: Surface> WaveRenderer<S> {
    /// Binds each surface to its palette, sizes every surface to
    /// `viewport_width` × `height`, and starts the clock at zero.
    ///
    /// # Errors
    ///
    /// [`RendererError::PaletteCountMismatch`] when the counts differ.
    #[instrument(skip(surfaces, palettes), fields(surfaces = surfaces.len()))]
    pub fn initialize(
        surfaces: Vec<S>,
        palettes: Vec<Palette>,
        viewport_width: u32,
        height: u32,
    ) -> Result<Self, RendererError> {
        if surfaces.len() != palettes.len() {
            return Err(RendererError::PaletteCountMismatch {
                surfaces: surfaces.len(),
                palettes: palettes.len(),
            });
        }

        let bindings = surfaces
            .into_iter()
            .zip(palettes)
            .map(|(mut surface, palette)| {
                surface.resize(viewport_width, height);
                (surface, palette)
            })
            .collect();

        debug!("Wave renderer initialized");
        Ok(Self {
            bindings,
            clock: AnimationClock::new(),
            increment: DEFAULT_INCREMENT,
        })
    }

    /// Overrides the per-tick clock increment.
    pub fn with_increment(mut self, increment: f64) -> Self {
        self.increment = increment;
        self
    }

    /// Redraws every surface at the current phase, then advances the clock.
    ///
    /// Returns the phase that was drawn.
    #[instrument(level = "trace", skip(self))]
    pub fn tick(&mut self) -> f64 {
        let phase = self.clock.phase();
        for (surface, palette) in &mut self.bindings {
            draw(surface, palette, phase);
        }
        self.clock.advance(self.increment);
        trace!(phase, seconds = self.clock.seconds(), "Tick rendered");
        phase
    }

    /// The shared clock.
    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    /// Per-tick clock increment.
    pub fn increment(&self) -> f64 {
        self.increment
    }

    /// Bound surfaces in binding order.
    pub fn surfaces(&self) -> impl Iterator<Item = &S> {
        self.bindings.iter().map(|(surface, _)| surface)
    }

    /// Surface `index`, if bound.
    pub fn surface(&self, index: usize) -> Option<&S> {
        self.bindings.get(index).map(|(surface, _)| surface)
    }

    /// Number of bound surfaces.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// True when nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Clears `surface` and paints the three layers of `palette` at `phase`.
pub fn draw<S: Surface>(surface: &mut S, palette: &Palette, phase: f64) {
    surface.clear();
    for (idx, layer) in LAYERS.iter().enumerate() {
        draw_wave_fill(surface, palette.color_for_layer(idx), layer, phase);
    }
}

/// Paints one translucent wave.
pub fn draw_wave_fill<S: Surface>(surface: &mut S, color: Rgb, layer: &WaveLayer, phase: f64) {
    let outline = wave_outline(surface.width(), surface.height(), phase, layer);
    surface.fill_polygon(&outline, color, layer.alpha);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wave::Point;

    /// Records calls instead of drawing.
    #[derive(Debug, Default)]
    struct Recorder {
        size: (u32, u32),
        calls: Vec<String>,
        first_points: Vec<Point>,
    }

    impl Surface for Recorder {
        fn width(&self) -> u32 {
            self.size.0
        }
        fn height(&self) -> u32 {
            self.size.1
        }
        fn resize(&mut self, width: u32, height: u32) {
            self.size = (width, height);
        }
        fn clear(&mut self) {
            self.calls.push("clear".into());
        }
        fn fill_polygon(&mut self, outline: &[Point], color: Rgb, alpha: f64) {
            self.calls.push(format!("fill {color} {alpha}"));
            self.first_points.push(outline[0]);
        }
    }

    #[test]
    fn test_initialize_sizes_surfaces_and_rejects_mismatch() {
        let palettes = vec![Palette::parse(&["#fff"]).unwrap()];
        let renderer =
            WaveRenderer::initialize(vec![Recorder::default()], palettes.clone(), 640, 500)
                .unwrap();
        assert_eq!(renderer.surface(0).map(|s| s.size), Some((640, 500)));
        assert_eq!(renderer.clock().seconds(), 0.0);

        let err = WaveRenderer::initialize(
            vec![Recorder::default(), Recorder::default()],
            palettes,
            640,
            500,
        )
        .unwrap_err();
        assert_eq!(
            err,
            RendererError::PaletteCountMismatch {
                surfaces: 2,
                palettes: 1
            }
        );
    }

    #[test]
    fn test_tick_clears_then_paints_layers_back_to_front() {
        let palettes = vec![Palette::parse(&["#666", "#ccc", "#eee"]).unwrap()];
        let mut renderer =
            WaveRenderer::initialize(vec![Recorder::default()], palettes, 100, 500).unwrap();
        renderer.tick();

        let calls = &renderer.surface(0).unwrap().calls;
        assert_eq!(
            calls,
            &[
                "clear".to_string(),
                "fill #666666 0.5".to_string(),
                "fill #cccccc 0.4".to_string(),
                "fill #eeeeee 0.2".to_string(),
            ]
        );
    }

    #[test]
    fn test_every_surface_sees_the_same_phase_per_tick() {
        let palettes = vec![
            Palette::parse(&["#43c0e4"]).unwrap(),
            Palette::parse(&["#fff"]).unwrap(),
        ];
        let mut renderer = WaveRenderer::initialize(
            vec![Recorder::default(), Recorder::default()],
            palettes,
            100,
            500,
        )
        .unwrap();
        renderer.tick();
        renderer.tick();

        let a = &renderer.surface(0).unwrap().first_points;
        let b = &renderer.surface(1).unwrap().first_points;
        assert_eq!(a, b);
        // The second tick drew at a later phase than the first.
        assert_ne!(a[0], a[3]);
    }
}
