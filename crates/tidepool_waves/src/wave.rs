//! Geometry of one translucent wave fill.

use serde::{Deserialize, Serialize};

/// Vertical scale of the sine curve, in pixels.
pub const UNIT: f64 = 100.0;

/// Horizontal distance between samples, in pixels.
pub const SAMPLE_STEP: u32 = 10;

/// A point in surface pixels, y pointing down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal offset from the left edge.
    pub x: f64,
    /// Vertical offset from the top edge.
    pub y: f64,
}

impl Point {
    /// Creates a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Opacity, horizontal zoom and phase delay of one fill.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveLayer {
    /// Fill opacity.
    pub alpha: f64,
    /// Horizontal stretch; larger values give longer waves.
    pub zoom: f64,
    /// Phase offset subtracted inside the sine.
    pub delay: f64,
}

/// The three fills, back to front.
pub const LAYERS: [WaveLayer; 3] = [
    WaveLayer {
        alpha: 0.5,
        zoom: 3.0,
        delay: 0.0,
    },
    WaveLayer {
        alpha: 0.4,
        zoom: 2.0,
        delay: 250.0,
    },
    WaveLayer {
        alpha: 0.2,
        zoom: 1.6,
        delay: 100.0,
    },
];

/// Closed outline of a wave fill on a `width` × `height` surface.
///
/// The curve starts at `(0, UNIT·sin(phase)/zoom + axis)`, then samples
/// `UNIT·sin(phase + x/UNIT/zoom − delay)/3 + axis` every [`SAMPLE_STEP`]
/// pixels up to `width + SAMPLE_STEP`, and closes along the bottom edge.
/// `axis` is half the height, rounded down.
pub fn wave_outline(width: u32, height: u32, phase: f64, layer: &WaveLayer) -> Vec<Point> {
    let axis = f64::from(height / 2);
    let bottom = f64::from(height);
    let right = width + SAMPLE_STEP;

    let mut points = Vec::with_capacity((right / SAMPLE_STEP) as usize + 4);
    points.push(Point::new(0.0, UNIT * phase.sin() / layer.zoom + axis));

    for x in (0..=right).step_by(SAMPLE_STEP as usize) {
        let x = f64::from(x);
        let angle = phase + x / UNIT / layer.zoom - layer.delay;
        points.push(Point::new(x, UNIT * angle.sin() / 3.0 + axis));
    }

    points.push(Point::new(f64::from(right), bottom));
    points.push(Point::new(0.0, bottom));
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_shape() {
        let points = wave_outline(100, 500, 0.0, &LAYERS[0]);
        // start + samples at 0..=110 + two bottom corners
        assert_eq!(points.len(), 1 + 12 + 2);
        assert_eq!(points[0], Point::new(0.0, 250.0));
        assert_eq!(points[points.len() - 2], Point::new(110.0, 500.0));
        assert_eq!(points[points.len() - 1], Point::new(0.0, 500.0));
    }

    #[test]
    fn test_samples_stay_within_a_third_of_unit_of_the_axis() {
        for layer in &LAYERS {
            let points = wave_outline(800, 500, 1.234, layer);
            for p in &points[1..points.len() - 2] {
                assert!((p.y - 250.0).abs() <= UNIT / 3.0 + 1e-9);
            }
        }
    }

    #[test]
    fn test_sample_matches_formula() {
        let layer = LAYERS[1];
        let phase = 0.7;
        let points = wave_outline(200, 301, phase, &layer);
        // axis rounds down: 301 / 2 = 150
        let expected = UNIT * (phase + 30.0 / UNIT / layer.zoom - layer.delay).sin() / 3.0 + 150.0;
        // points[1] is x = 0, so x = 30 is points[4]
        assert!((points[4].y - expected).abs() < 1e-9);
        assert_eq!(points[4].x, 30.0);
    }
}
