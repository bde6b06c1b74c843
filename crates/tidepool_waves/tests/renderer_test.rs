//! Renderer behavior over many ticks on a raster surface.

use serde::Deserialize;
use tidepool_waves::{
    DEFAULT_INCREMENT, DEFAULT_SURFACE_HEIGHT, Palette, RasterSurface, Rgb, Surface, WaveRenderer,
};

const BACKGROUND: Rgb = Rgb::new(0, 0, 0);

fn surface() -> RasterSurface {
    RasterSurface::new(0, 0, 80, 10, BACKGROUND)
}

fn default_palettes() -> Vec<Palette> {
    vec![
        Palette::parse(&["#666", "#ccc", "#eee"]).unwrap(),
        Palette::parse(&["#43c0e4"]).unwrap(),
        Palette::parse(&["#fff"]).unwrap(),
    ]
}

#[test]
fn test_clock_advances_by_the_increment_each_tick() {
    let mut renderer = WaveRenderer::initialize(
        vec![surface(), surface(), surface()],
        default_palettes(),
        800,
        DEFAULT_SURFACE_HEIGHT,
    )
    .unwrap();

    let mut last = renderer.clock().seconds();
    for n in 1..=50 {
        renderer.tick();
        let now = renderer.clock().seconds();
        assert!(now > last);
        assert!((now - DEFAULT_INCREMENT * f64::from(n)).abs() < 1e-9);
        last = now;
    }
}

#[test]
fn test_tick_returns_the_phase_before_advancing() {
    let mut renderer =
        WaveRenderer::initialize(vec![surface()], vec![Palette::parse(&["#fff"]).unwrap()], 800, 500)
            .unwrap()
            .with_increment(0.25);

    assert_eq!(renderer.tick(), 0.0);
    let expected = 0.25 * std::f64::consts::PI / 0.5;
    assert!((renderer.tick() - expected).abs() < 1e-12);
}

#[test]
fn test_bottom_rows_are_painted_and_top_rows_stay_clear() {
    let mut renderer =
        WaveRenderer::initialize(vec![surface()], vec![Palette::parse(&["#fff"]).unwrap()], 800, 500)
            .unwrap();
    renderer.tick();

    let raster = renderer.surface(0).unwrap();
    let last_row = raster.rows() - 1;
    for col in 0..raster.cols() {
        // The crest never rises more than UNIT above the axis at 250 px.
        assert_eq!(raster.cell(col, 0), Some(BACKGROUND));
        assert_ne!(raster.cell(col, last_row), Some(BACKGROUND));
    }
}

#[test]
fn test_each_tick_redraws_from_a_clear_surface() {
    let mut renderer =
        WaveRenderer::initialize(vec![surface()], vec![Palette::parse(&["#fff"]).unwrap()], 800, 500)
            .unwrap()
            .with_increment(0.0);

    renderer.tick();
    let first = renderer.surface(0).unwrap().clone();
    renderer.tick();
    // A zero increment redraws the same frame instead of stacking fills.
    assert_eq!(renderer.surface(0).unwrap(), &first);
    assert_eq!(first.width(), 800);
}

#[derive(Debug, Deserialize)]
struct Surfaces {
    palettes: Vec<Palette>,
}

#[test]
fn test_palettes_load_from_toml() {
    let parsed: Surfaces = toml::from_str(
        r##"
        palettes = [["#666", "#ccc", "#eee"], ["#43c0e4"], ["#fff"]]
        "##,
    )
    .unwrap();
    assert_eq!(parsed.palettes, default_palettes());

    let bad = toml::from_str::<Surfaces>(r##"palettes = [["#666", "#ccc", "#eee", "#000"]]"##);
    assert!(bad.is_err());
}
