pub mod body;
pub mod collision;
pub mod config;
pub mod integrator;
pub mod materials;
pub mod pockets;
pub mod simulation;
pub mod sound;
pub mod strike;
pub mod telemetry;

pub use body::Body;
pub use collision::{resolve_collision, RestitutionPolicy};
pub use config::{
    BallSpawn, CollisionModel, ConfigError, PhysicsConfig, SimConfig, StrikeConfig, TableConfig,
};
pub use integrator::integrate;
pub use materials::MaterialTable;
pub use pockets::is_captured;
pub use simulation::{Simulation, CUE_BALL};
pub use sound::{impact_volume, CollisionSound, NoSound};
pub use strike::{HitSpot, Strike};
pub use telemetry::Telemetry;

// Test helpers module (public for integration tests)
// Always compiled - integration tests are separate crates and need access
pub mod tests;
