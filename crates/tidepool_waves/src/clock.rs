//! Animation clock shared by every surface.

use std::f64::consts::PI;

/// Seconds per tick.
pub const DEFAULT_INCREMENT: f64 = 0.014;

/// Elapsed animation time. Only moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationClock {
    seconds: f64,
}

impl AnimationClock {
    /// Clock at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed seconds.
    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    /// Angle derived from elapsed time: `seconds × π`.
    pub fn t(&self) -> f64 {
        self.seconds * PI
    }

    /// Horizontal phase handed to the wave math: `t / 0.5`.
    pub fn phase(&self) -> f64 {
        self.t() / 0.5
    }

    /// Moves the clock forward. Negative or non-finite steps are ignored.
    pub fn advance(&mut self, increment: f64) {
        if increment.is_finite() && increment > 0.0 {
            self.seconds += increment;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_is_two_pi_per_second() {
        let mut clock = AnimationClock::new();
        clock.advance(1.0);
        assert!((clock.phase() - 2.0 * PI).abs() < 1e-12);
    }

    #[test]
    fn test_advance_never_goes_backwards() {
        let mut clock = AnimationClock::new();
        clock.advance(DEFAULT_INCREMENT);
        let before = clock.seconds();
        clock.advance(-1.0);
        clock.advance(f64::NAN);
        clock.advance(f64::INFINITY);
        assert_eq!(clock.seconds(), before);
    }
}
