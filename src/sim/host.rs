//! Host engine seam
//!
//! The controller never integrates motion itself. Rigid-body state, gravity,
//! camera projection and input polling belong to whatever drives it.

use glam::Vec2;

/// Rigid body, world and camera services the controller consumes
pub trait Host {
    /// Set world gravity
    fn set_gravity(&mut self, gravity: Vec2);

    /// Ball center in world space
    fn position(&self) -> Vec2;

    /// Teleport the ball (launch placement only)
    fn set_position(&mut self, pos: Vec2);

    /// Current ball velocity
    fn velocity(&self) -> Vec2;

    /// Zero the ball velocity
    fn reset_velocity(&mut self);

    /// Instantaneous velocity change, mass ignored
    fn apply_velocity_change(&mut self, delta: Vec2);

    /// Radius of the ball's collider in world units
    fn collider_radius(&self) -> f32;

    /// Project a screen pixel into the world plane `depth` units from the camera
    fn screen_to_world(&self, screen: Vec2, depth: f32) -> Vec2;

    /// Replace the velocity outright
    fn replace_velocity(&mut self, velocity: Vec2) {
        self.reset_velocity();
        self.apply_velocity_change(velocity);
    }
}

/// Where pointer input comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    #[default]
    Desktop,
    Mobile,
}

/// Input polled for one frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Fire button / touch went down this frame
    pub fire_down: bool,
    pub platform: Platform,
    /// Mouse position in screen pixels
    pub mouse: Vec2,
    /// First touch position in screen pixels
    pub touch: Option<Vec2>,
}

impl FrameInput {
    /// A desktop click at a screen position
    pub fn click(mouse: Vec2) -> Self {
        Self {
            fire_down: true,
            mouse,
            ..Default::default()
        }
    }

    /// A mobile tap at a screen position
    pub fn tap(touch: Vec2) -> Self {
        Self {
            fire_down: true,
            platform: Platform::Mobile,
            touch: Some(touch),
            ..Default::default()
        }
    }

    /// Screen position of the pointer for this platform
    pub fn pointer(&self) -> Option<Vec2> {
        match self.platform {
            Platform::Mobile => self.touch,
            Platform::Desktop => Some(self.mouse),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_per_platform() {
        let mut input = FrameInput {
            mouse: Vec2::new(10.0, 20.0),
            touch: Some(Vec2::new(1.0, 2.0)),
            ..Default::default()
        };
        assert_eq!(input.pointer(), Some(Vec2::new(10.0, 20.0)));

        input.platform = Platform::Mobile;
        assert_eq!(input.pointer(), Some(Vec2::new(1.0, 2.0)));

        input.touch = None;
        assert_eq!(input.pointer(), None);
    }
}
