//! Seeded autoplayer
//!
//! Taps the ball once per fall, aiming at a lead time drawn from a seeded RNG
//! so runs are reproducible. Used by the headless binary and tests.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{BallController, BoxArena, FrameInput};

/// Autoplayer tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoPlayConfig {
    /// Largest |expected - elapsed| the player waits for before tapping (seconds)
    pub max_lead: f32,
    /// Largest aim error, as a fraction of the collider radius
    pub aim_error: f32,
}

impl Default for AutoPlayConfig {
    fn default() -> Self {
        Self {
            max_lead: 0.5,
            aim_error: 0.8,
        }
    }
}

/// Deterministic tap generator
#[derive(Debug, Clone)]
pub struct AutoPlayer {
    config: AutoPlayConfig,
    rng: Pcg32,
    /// Lead time chosen for the current fall
    lead: f32,
    /// Bounce baseline the current plan was made for
    planned_for: Option<f32>,
    tapped: bool,
}

impl AutoPlayer {
    /// Negative or non-finite config values fall back to zero
    pub fn new(seed: u64, config: AutoPlayConfig) -> Self {
        let sanitize = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        let config = AutoPlayConfig {
            max_lead: sanitize(config.max_lead),
            aim_error: sanitize(config.aim_error),
        };
        Self {
            config,
            rng: Pcg32::seed_from_u64(seed),
            lead: 0.0,
            planned_for: None,
            tapped: false,
        }
    }

    /// Input for the coming frame
    pub fn input(&mut self, controller: &BallController, arena: &BoxArena) -> FrameInput {
        let state = controller.state();

        if self.planned_for != Some(state.timing.bounce_start) {
            self.planned_for = Some(state.timing.bounce_start);
            self.lead = self.rng.random_range(0.0..=self.config.max_lead);
            self.tapped = false;
        }

        let due = state.timing.time_difference() <= self.lead;
        if self.tapped || !due {
            return FrameInput::default();
        }
        self.tapped = true;

        let angle = self.rng.random_range(0.0..std::f32::consts::TAU);
        let reach = self.rng.random_range(0.0..=self.config.aim_error) * arena.radius;
        let aim = arena.pos + Vec2::new(angle.cos(), angle.sin()) * reach;
        let screen = arena.world_to_screen(aim, controller.settings().tap_depth);

        log::debug!("Autoplay tap with lead {:.3}s", self.lead);
        FrameInput::click(screen)
    }
}
