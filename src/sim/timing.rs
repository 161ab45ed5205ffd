//! Bounce timing estimation
//!
//! Predicts how long the ball needs to fall back (or rise) from a vertical
//! velocity sample, and tracks how long it has actually been since the last
//! floor bounce.

use serde::{Deserialize, Serialize};

/// Time to reach the apex or the floor from `velocity_y` under `gravity`.
///
/// Gravity is negative, so the result is non-negative for any finite velocity.
#[inline]
pub fn expected_duration(velocity_y: f32, gravity: f32) -> f32 {
    -velocity_y.abs() / gravity
}

/// Expected vs. elapsed time since the last floor bounce
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TimingEstimator {
    /// Predicted duration (seconds)
    pub expected: f32,
    /// Seconds since `bounce_start`
    pub elapsed: f32,
    /// Host time of the last floor bounce
    pub bounce_start: f32,
}

impl TimingEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the prediction from a fresh vertical velocity sample
    pub fn set_expected(&mut self, velocity_y: f32, gravity: f32) {
        self.expected = expected_duration(velocity_y, gravity);
        log::debug!(
            "Expected bounce time {:.3}s from vy={:.3}",
            self.expected,
            velocity_y
        );
    }

    /// Move the elapsed-time baseline to `now`
    pub fn restart(&mut self, now: f32) {
        self.bounce_start = now;
        self.elapsed = 0.0;
    }

    /// Refresh elapsed time from the host clock (once per frame)
    pub fn tick(&mut self, now: f32) {
        self.elapsed = now - self.bounce_start;
    }

    /// Positive while the bounce is still ahead of schedule
    #[inline]
    pub fn time_difference(&self) -> f32 {
        self.expected - self.elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::GRAVITY;
    use proptest::prelude::*;

    #[test]
    fn test_expected_duration_ignores_direction() {
        let up = expected_duration(9.81, GRAVITY);
        let down = expected_duration(-9.81, GRAVITY);
        assert!((up - 1.0).abs() < 1e-6);
        assert_eq!(up, down);
    }

    #[test]
    fn test_time_difference_tracks_clock() {
        let mut timing = TimingEstimator::new();
        timing.set_expected(-4.905, GRAVITY);
        timing.restart(10.0);
        timing.tick(10.2);
        assert!((timing.time_difference() - 0.3).abs() < 1e-4);

        timing.tick(11.0);
        assert!(timing.time_difference() < 0.0);
    }

    proptest! {
        #[test]
        fn expected_duration_is_non_negative(
            velocity_y in -1000.0f32..1000.0,
            gravity in -100.0f32..-0.01,
        ) {
            prop_assert!(expected_duration(velocity_y, gravity) >= 0.0);
        }
    }
}
