use glam::Vec2;

use crate::config::BallSpawn;

/// A ball on the table
#[derive(Debug, Clone)]
pub struct Body {
    /// Center position, table coordinates with the origin at the top-left
    pub position: Vec2,
    /// Velocity in length units per frame
    pub velocity: Vec2,
    pub mass: f32,
    /// Key into the material restitution table
    pub material: String,
    /// Render identity only, never consulted by the physics
    pub color: [u8; 3],
    /// Latched once the ball drops into a pocket
    pub pocketed: bool,
    /// Cached |velocity|, refreshed on every velocity-mutating operation
    pub speed: f32,
}

impl Body {
    pub fn new(position: Vec2, mass: f32, color: [u8; 3], material: impl Into<String>) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            mass,
            material: material.into(),
            color,
            pocketed: false,
            speed: 0.0,
        }
    }

    pub fn from_spawn(spawn: &BallSpawn) -> Self {
        Self::new(spawn.position, spawn.mass, spawn.color, spawn.material.clone())
    }

    /// True while the body is faster than the shared rest epsilon
    pub fn is_moving(&self, rest_epsilon: f32) -> bool {
        self.velocity.length() > rest_epsilon
    }

    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    pub fn momentum(&self) -> Vec2 {
        self.velocity * self.mass
    }

    /// Drop the ball out of play. Only a full reset brings it back.
    pub fn pocket(&mut self) {
        self.pocketed = true;
        self.velocity = Vec2::ZERO;
        self.speed = 0.0;
    }

    pub(crate) fn refresh_speed(&mut self) {
        self.speed = self.velocity.length();
    }
}
