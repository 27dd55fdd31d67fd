//! Immutable simulation configuration.
//!
//! Every constant the physics consumes lives here and is validated once,
//! when the simulation is constructed. Nothing in this module is mutated
//! afterwards, so independent simulations can run side by side.

use glam::Vec2;
use serde::Deserialize;
use thiserror::Error;

use crate::materials::MaterialTable;

/// Configuration validation failure, fatal at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("table dimensions must be positive and larger than a ball diameter")]
    BadTableSize,
    #[error("{name} must be positive")]
    NonPositive { name: &'static str },
    #[error("friction coefficient must lie in (0, 1], got {0}")]
    BadFriction(f32),
    #[error("wall restitution must lie in (0, 1], got {0}")]
    BadWallRestitution(f32),
    #[error("frame rate must be positive, got {0}")]
    BadFrameRate(f32),
    #[error("at least one ball (the cue ball) must be configured")]
    NoBalls,
    #[error("ball {index} spawns outside the table")]
    SpawnOutOfBounds { index: usize },
    #[error("ball {index} has non-positive mass {mass}")]
    BadMass { index: usize, mass: f32 },
    #[error("restitution for material '{material}' must lie in [0, 1], got {value}")]
    BadRestitution { material: String, value: f32 },
}

/// Table geometry and pocket layout
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub width: f32,
    pub height: f32,
    /// Shared radius of every ball
    pub ball_radius: f32,
    /// Radius of the pocket capture circles
    pub pocket_radius: f32,
    /// Pocket capture centers; `None` places one on each corner
    pub pockets: Option<Vec<Vec2>>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 400.0,
            ball_radius: 15.0,
            pocket_radius: 30.0,
            pockets: None,
        }
    }
}

impl TableConfig {
    pub fn pocket_centers(&self) -> Vec<Vec2> {
        match &self.pockets {
            Some(centers) => centers.clone(),
            None => vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(self.width, 0.0),
                Vec2::new(0.0, self.height),
                Vec2::new(self.width, self.height),
            ],
        }
    }
}

/// Motion constants
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Per-frame exponential velocity decay, in (0, 1]
    pub friction: f32,
    /// Scale applied to the reflected velocity component on a wall rebound
    pub wall_restitution: f32,
    /// Speeds at or below this count as "at rest"
    pub rest_epsilon: f32,
    /// Fixed-timestep frequency the frame loop targets
    pub frame_rate: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            friction: 0.99,
            wall_restitution: 1.0,
            rest_epsilon: 0.01,
            frame_rate: 60.0,
        }
    }
}

/// Cue strike input mapping constants
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StrikeConfig {
    /// Factor converting clamped drag length to impulse magnitude
    pub strike_coefficient: f32,
    /// Drag length is clamped here before scaling
    pub max_drag_length: f32,
    /// Drags at or below this length are accidental clicks, not shots
    pub min_drag_distance: f32,
}

impl Default for StrikeConfig {
    fn default() -> Self {
        Self {
            strike_coefficient: 0.05,
            max_drag_length: 120.0,
            min_drag_distance: 5.0,
        }
    }
}

/// Ball-ball contact response selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionModel {
    /// Perfectly elastic contacts regardless of material
    Elastic,
    /// Restitution looked up per pair from the material table
    #[default]
    Materials,
}

/// Initial state of one ball
#[derive(Debug, Clone, Deserialize)]
pub struct BallSpawn {
    pub position: Vec2,
    #[serde(default = "default_mass")]
    pub mass: f32,
    pub color: [u8; 3],
    #[serde(default = "default_material")]
    pub material: String,
}

fn default_mass() -> f32 {
    1.0
}

fn default_material() -> String {
    "ivory".to_string()
}

/// Ball colors shared between the default rack and the front ends
pub mod palette {
    pub const WHITE: [u8; 3] = [255, 255, 255];
    pub const RED: [u8; 3] = [255, 0, 0];
    pub const BLUE: [u8; 3] = [0, 0, 255];
    pub const YELLOW: [u8; 3] = [255, 255, 0];
    pub const GREEN: [u8; 3] = [0, 128, 0];
    pub const BLACK: [u8; 3] = [0, 0, 0];
    pub const GRAY: [u8; 3] = [128, 128, 128];
}

/// Complete configuration for one simulation
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub table: TableConfig,
    pub physics: PhysicsConfig,
    pub strike: StrikeConfig,
    pub materials: MaterialTable,
    pub collision_model: CollisionModel,
    /// Initial rack; index 0 is the cue ball
    pub balls: Vec<BallSpawn>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            table: TableConfig::default(),
            physics: PhysicsConfig::default(),
            strike: StrikeConfig::default(),
            materials: MaterialTable::default(),
            collision_model: CollisionModel::default(),
            balls: default_rack(),
        }
    }
}

fn default_rack() -> Vec<BallSpawn> {
    let spawn = |x: f32, y: f32, color: [u8; 3]| BallSpawn {
        position: Vec2::new(x, y),
        mass: 1.0,
        color,
        material: default_material(),
    };
    vec![
        spawn(200.0, 200.0, palette::WHITE),
        spawn(500.0, 180.0, palette::RED),
        spawn(540.0, 220.0, palette::BLUE),
    ]
}

impl SimConfig {
    /// Reject malformed configuration before any frame runs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let table = &self.table;
        if table.ball_radius <= 0.0 {
            return Err(ConfigError::NonPositive { name: "ball radius" });
        }
        if table.pocket_radius <= 0.0 {
            return Err(ConfigError::NonPositive { name: "pocket radius" });
        }
        if table.width <= 2.0 * table.ball_radius || table.height <= 2.0 * table.ball_radius {
            return Err(ConfigError::BadTableSize);
        }

        let physics = &self.physics;
        if !(physics.friction > 0.0 && physics.friction <= 1.0) {
            return Err(ConfigError::BadFriction(physics.friction));
        }
        if !(physics.wall_restitution > 0.0 && physics.wall_restitution <= 1.0) {
            return Err(ConfigError::BadWallRestitution(physics.wall_restitution));
        }
        if physics.rest_epsilon <= 0.0 {
            return Err(ConfigError::NonPositive { name: "rest epsilon" });
        }
        if !(physics.frame_rate > 0.0) {
            return Err(ConfigError::BadFrameRate(physics.frame_rate));
        }

        if self.strike.strike_coefficient <= 0.0 {
            return Err(ConfigError::NonPositive { name: "strike coefficient" });
        }
        if self.strike.max_drag_length <= 0.0 {
            return Err(ConfigError::NonPositive { name: "maximum drag length" });
        }

        if self.balls.is_empty() {
            return Err(ConfigError::NoBalls);
        }
        for (index, ball) in self.balls.iter().enumerate() {
            if ball.mass <= 0.0 {
                return Err(ConfigError::BadMass { index, mass: ball.mass });
            }
            let r = table.ball_radius;
            let inside = ball.position.x >= r
                && ball.position.x <= table.width - r
                && ball.position.y >= r
                && ball.position.y <= table.height - r;
            if !inside {
                return Err(ConfigError::SpawnOutOfBounds { index });
            }
        }

        for (material, value) in &self.materials.restitution {
            if !(*value >= 0.0 && *value <= 1.0) {
                return Err(ConfigError::BadRestitution {
                    material: material.clone(),
                    value: *value,
                });
            }
        }
        let fallback = self.materials.default_restitution;
        if !(fallback >= 0.0 && fallback <= 1.0) {
            return Err(ConfigError::BadRestitution {
                material: "<default>".to_string(),
                value: fallback,
            });
        }

        Ok(())
    }
}
