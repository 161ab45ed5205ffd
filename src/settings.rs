//! Controller settings
//!
//! Replaces the engine's global gravity and the inspector-tuned fields with one
//! validated value. Loaded from JSON; every field falls back to its default.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Reasons a settings value is rejected
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("gravity must be finite and negative, got {0}")]
    InvalidGravity(f32),
    #[error("at least one tier threshold is required")]
    NoThresholds,
    #[error("tier threshold {index} is {value}, expected a finite non-negative value")]
    InvalidThreshold { index: usize, value: f32 },
    #[error("tier thresholds must be strictly ascending (index {index})")]
    UnorderedThresholds { index: usize },
    #[error("{messages} status messages for {thresholds} tier thresholds")]
    MessageCountMismatch { messages: usize, thresholds: usize },
    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidFactor { name: &'static str, value: f32 },
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
}

/// Controller tuning and launch parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Launch ===
    /// Where the ball is placed at start
    pub initial_position: Vec2,
    /// Velocity change applied at start (only when starting above y = 0)
    pub initial_velocity: Vec2,

    // === Physics ===
    /// Vertical gravity pushed to the host (world units/s²)
    pub gravity: f32,
    /// Tap offset to velocity scale
    pub click_acceleration: f32,
    /// Bounce energy factor without a preceding tap-hit
    pub weak_impact_modifier: f32,
    /// Bounce energy factor right after a tap-hit
    pub strong_impact_modifier: f32,
    /// Floor rebounds below this speed are doubled
    pub min_rebound_speed: f32,
    /// Camera distance for tap projection
    pub tap_depth: f32,

    // === Scoring ===
    /// Ascending thresholds on |expected - elapsed|; index is the tier
    pub tier_thresholds: Vec<f32>,
    /// One status message per tier
    pub tier_messages: Vec<String>,

    // === HUD ===
    /// Keep the six debug readouts alive and refreshed every frame
    pub debug_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            initial_position: Vec2::new(0.0, 5.0),
            initial_velocity: Vec2::ZERO,

            gravity: GRAVITY,
            click_acceleration: CLICK_ACCELERATION,
            weak_impact_modifier: WEAK_IMPACT_MODIFIER,
            strong_impact_modifier: STRONG_IMPACT_MODIFIER,
            min_rebound_speed: MIN_REBOUND_SPEED,
            tap_depth: TAP_DEPTH,

            tier_thresholds: TIER_THRESHOLDS.to_vec(),
            tier_messages: TIER_MESSAGES.iter().map(|m| m.to_string()).collect(),

            debug_mode: false,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read, parse and validate a JSON settings file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every invariant the controller relies on
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.gravity.is_finite() || self.gravity >= 0.0 {
            return Err(SettingsError::InvalidGravity(self.gravity));
        }

        for (name, value) in [
            ("click_acceleration", self.click_acceleration),
            ("weak_impact_modifier", self.weak_impact_modifier),
            ("strong_impact_modifier", self.strong_impact_modifier),
            ("min_rebound_speed", self.min_rebound_speed),
            ("tap_depth", self.tap_depth),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SettingsError::InvalidFactor { name, value });
            }
        }

        if self.tier_thresholds.is_empty() {
            return Err(SettingsError::NoThresholds);
        }
        for (index, &value) in self.tier_thresholds.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(SettingsError::InvalidThreshold { index, value });
            }
        }
        if let Some(index) = self
            .tier_thresholds
            .windows(2)
            .position(|pair| pair[1] <= pair[0])
        {
            return Err(SettingsError::UnorderedThresholds { index: index + 1 });
        }

        if self.tier_messages.len() != self.tier_thresholds.len() {
            return Err(SettingsError::MessageCountMismatch {
                messages: self.tier_messages.len(),
                thresholds: self.tier_thresholds.len(),
            });
        }

        Ok(())
    }
}
