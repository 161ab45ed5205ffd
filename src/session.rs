//! Headless play session
//!
//! Drives a [`BallController`] against the [`BoxArena`] with a fixed-timestep
//! accumulator: physics steps (trigger callbacks, then classification) run at
//! `SIM_DT`, input and HUD run once per rendered frame.

use crate::autoplay::{AutoPlayConfig, AutoPlayer};
use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::settings::{Settings, SettingsError};
use crate::sim::{ArenaBounds, BallController, Bounce, BoxArena, TapHit};

/// Ball collider radius in the reference arena
pub const BALL_RADIUS: f32 = 0.5;

/// What happened during one frame
#[derive(Debug, Clone, Default)]
pub struct FrameReport {
    pub bounces: Vec<Bounce>,
    pub tap: Option<TapHit>,
}

/// Controller, host and player bundled with their clock
#[derive(Debug, Clone)]
pub struct Session {
    pub controller: BallController,
    pub arena: BoxArena,
    pub player: AutoPlayer,
    /// Host time (seconds)
    pub time: f32,
    accumulator: f32,
}

impl Session {
    pub fn new(settings: Settings, seed: u64) -> Result<Self, SettingsError> {
        let mut controller = BallController::new(settings)?;
        let mut arena = BoxArena::new(ArenaBounds::default(), BALL_RADIUS);
        controller.start(&mut arena, 0.0);

        Ok(Self {
            controller,
            arena,
            player: AutoPlayer::new(seed, AutoPlayConfig::default()),
            time: 0.0,
            accumulator: 0.0,
        })
    }

    /// Advance by one rendered frame of `dt` seconds
    pub fn advance(&mut self, dt: f32) -> FrameReport {
        let mut report = FrameReport::default();

        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.controller.fixed_update();
            self.time += SIM_DT;
            for tag in self.arena.step(SIM_DT) {
                let bounce = self
                    .controller
                    .on_trigger_enter(&mut self.arena, tag, self.time);
                report.bounces.push(bounce);
            }
            self.accumulator -= SIM_DT;
            substeps += 1;
        }

        let input = self.player.input(&self.controller, &self.arena);
        report.tap = self.controller.update(&mut self.arena, self.time, &input);
        report
    }

    /// Restart the level with the same settings
    pub fn reset(&mut self) {
        self.controller.reset(&mut self.arena, self.time);
    }
}
