//! fPrime - a falling-ball bounce timing game
//!
//! Core modules:
//! - `sim`: Ball controller (timing, classification, taps, collisions) and the host seam
//! - `hud`: Debug readouts and score text
//! - `settings`: Validated, data-driven controller tuning
//! - `autoplay`: Seeded tap generator for headless runs
//! - `session`: Fixed-timestep loop tying controller, arena and autoplayer together

pub mod autoplay;
pub mod hud;
pub mod session;
pub mod settings;
pub mod sim;

pub use hud::Hud;
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (50 Hz, the host engine's default physics rate)
    pub const SIM_DT: f32 = 1.0 / 50.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Vertical gravity (world units/s², negative pulls down)
    pub const GRAVITY: f32 = -9.81;
    /// Velocity imparted per world unit of tap offset
    pub const CLICK_ACCELERATION: f32 = 30.0;
    /// Energy kept after a bounce with no tap since the previous bounce
    pub const WEAK_IMPACT_MODIFIER: f32 = 0.97;
    /// Energy kept after a bounce that follows a tap-hit
    pub const STRONG_IMPACT_MODIFIER: f32 = 0.65;
    /// Floor rebounds slower than this are doubled
    pub const MIN_REBOUND_SPEED: f32 = 1.0;
    /// Camera distance used when projecting taps into the ball's plane
    pub const TAP_DEPTH: f32 = 16.0;

    /// Tier thresholds on |expected - elapsed|, tightest first
    pub const TIER_THRESHOLDS: [f32; 4] = [0.0, 0.25, 0.6, 1.0];
    /// Status message per tier
    pub const TIER_MESSAGES: [&str; 4] = ["MEGA fPRIME!", "SUPER fPRIME!", "fPRIME!", ""];
    /// Points granularity of the tier score formula
    pub const POINTS_PER_STEP: i64 = 100;
}
