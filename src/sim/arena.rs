//! Headless reference host
//!
//! One ball in a rectangular box whose sides are trigger volumes tagged
//! `Floor`, `Ceiling` and `Wall`. Semi-implicit Euler at a fixed timestep,
//! with a perspective camera looking down +z at the ball's plane.

use glam::Vec2;

use super::host::Host;

/// Camera vertical field of view (radians)
const CAMERA_FOV_Y: f32 = std::f32::consts::FRAC_PI_3;

/// Box bounds and camera for the arena
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArenaBounds {
    pub floor: f32,
    pub ceiling: f32,
    /// Walls sit at ±half_width
    pub half_width: f32,
    /// Screen size in pixels
    pub screen: Vec2,
}

impl Default for ArenaBounds {
    fn default() -> Self {
        Self {
            floor: 0.0,
            ceiling: 12.0,
            half_width: 8.0,
            screen: Vec2::new(1280.0, 720.0),
        }
    }
}

/// Which triggers the ball currently overlaps
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Contacts {
    floor: bool,
    ceiling: bool,
    wall: bool,
}

/// Box arena implementing [`Host`]
#[derive(Debug, Clone)]
pub struct BoxArena {
    pub bounds: ArenaBounds,
    pub gravity: Vec2,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// World point the camera is centered on
    pub camera_center: Vec2,
    contacts: Contacts,
}

impl BoxArena {
    pub fn new(bounds: ArenaBounds, radius: f32) -> Self {
        Self {
            bounds,
            gravity: Vec2::ZERO,
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius,
            camera_center: Vec2::new(0.0, (bounds.floor + bounds.ceiling) / 2.0),
            contacts: Contacts::default(),
        }
    }

    /// Integrate one step; returns the tags of triggers entered during it.
    ///
    /// A trigger the ball already overlaps fires again while the ball is still
    /// moving into it, so a push toward a surface is never absorbed by the clamp.
    pub fn step(&mut self, dt: f32) -> Vec<&'static str> {
        self.vel += self.gravity * dt;
        self.pos += self.vel * dt;

        let b = self.bounds;
        let now = Contacts {
            floor: self.pos.y - self.radius <= b.floor,
            ceiling: self.pos.y + self.radius >= b.ceiling,
            wall: self.pos.x.abs() + self.radius >= b.half_width,
        };

        // keep the ball inside the box; the controller owns the velocity response
        self.pos.y = self
            .pos
            .y
            .clamp(b.floor + self.radius, (b.ceiling - self.radius).max(b.floor + self.radius));
        let max_x = (b.half_width - self.radius).max(0.0);
        self.pos.x = self.pos.x.clamp(-max_x, max_x);

        let into = Contacts {
            floor: self.vel.y < 0.0,
            ceiling: self.vel.y > 0.0,
            wall: self.pos.x * self.vel.x > 0.0,
        };

        let mut entered = Vec::new();
        if now.floor && (!self.contacts.floor || into.floor) {
            entered.push("Floor");
        }
        if now.ceiling && (!self.contacts.ceiling || into.ceiling) {
            entered.push("Ceiling");
        }
        if now.wall && (!self.contacts.wall || into.wall) {
            entered.push("Wall");
        }
        self.contacts = now;
        entered
    }

    /// World units per pixel at `depth` from the camera
    fn units_per_pixel(&self, depth: f32) -> f32 {
        2.0 * depth * (CAMERA_FOV_Y / 2.0).tan() / self.bounds.screen.y
    }

    /// Inverse of [`Host::screen_to_world`]
    pub fn world_to_screen(&self, world: Vec2, depth: f32) -> Vec2 {
        (world - self.camera_center) / self.units_per_pixel(depth) + self.bounds.screen / 2.0
    }
}

impl Host for BoxArena {
    fn set_gravity(&mut self, gravity: Vec2) {
        self.gravity = gravity;
    }

    fn position(&self) -> Vec2 {
        self.pos
    }

    fn set_position(&mut self, pos: Vec2) {
        self.pos = pos;
        self.contacts = Contacts::default();
    }

    fn velocity(&self) -> Vec2 {
        self.vel
    }

    fn reset_velocity(&mut self) {
        self.vel = Vec2::ZERO;
    }

    fn apply_velocity_change(&mut self, delta: Vec2) {
        self.vel += delta;
    }

    fn collider_radius(&self) -> f32 {
        self.radius
    }

    fn screen_to_world(&self, screen: Vec2, depth: f32) -> Vec2 {
        (screen - self.bounds.screen / 2.0) * self.units_per_pixel(depth) + self.camera_center
    }
}
