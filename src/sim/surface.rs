//! Surfaces the ball can bounce off

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Collider identity, parsed from the host's object tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Surface {
    Floor,
    Ceiling,
    Wall,
    /// Any other tagged collider (no reflection)
    Other(String),
}

impl Surface {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Floor" => Surface::Floor,
            "Ceiling" => Surface::Ceiling,
            "Wall" => Surface::Wall,
            other => Surface::Other(other.to_string()),
        }
    }

    pub fn as_tag(&self) -> &str {
        match self {
            Surface::Floor => "Floor",
            Surface::Ceiling => "Ceiling",
            Surface::Wall => "Wall",
            Surface::Other(tag) => tag,
        }
    }

    /// Velocity right after touching this surface, before the impact modifier.
    ///
    /// Floor rebounds always point up; anything slower than `min_speed` is doubled.
    pub fn rebound(&self, velocity: Vec2, min_speed: f32) -> Vec2 {
        match self {
            Surface::Floor => {
                let mut speed = velocity.y.abs();
                if speed < min_speed {
                    speed *= 2.0;
                }
                Vec2::new(velocity.x, speed)
            }
            Surface::Ceiling => Vec2::new(velocity.x, -velocity.y),
            Surface::Wall => Vec2::new(-velocity.x, velocity.y),
            Surface::Other(_) => velocity,
        }
    }
}

impl std::fmt::Display for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}
