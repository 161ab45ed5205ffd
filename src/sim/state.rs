//! Ball gameplay state
//!
//! Everything the controller mutates lives here. Snapshots serialize for
//! debugging; nothing is persisted between sessions.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::surface::Surface;
use super::timing::TimingEstimator;

/// Tag shown before the ball has touched anything
pub const NO_SURFACE_TAG: &str = "NULL";

/// Live state of the single ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallState {
    /// Last position read from the host
    pub pos: Vec2,
    /// Last velocity read from (or written to) the host
    pub vel: Vec2,
    /// A tap landed since the last bounce
    pub did_hit: bool,
    /// Current accuracy tier (0 = best)
    pub tier: usize,
    /// Running score
    pub total_points: i64,
    /// Expected vs. elapsed bounce time
    pub timing: TimingEstimator,
    /// Last surface touched
    pub last_surface: Option<Surface>,
}

impl BallState {
    pub fn new(worst_tier: usize) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            did_hit: false,
            tier: worst_tier,
            total_points: 0,
            timing: TimingEstimator::new(),
            last_surface: None,
        }
    }

    /// Tag of the last surface, or `NULL` before the first contact
    pub fn last_surface_tag(&self) -> &str {
        self.last_surface
            .as_ref()
            .map(Surface::as_tag)
            .unwrap_or(NO_SURFACE_TAG)
    }
}
