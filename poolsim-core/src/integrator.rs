//! Per-frame motion integration: friction decay and wall rebound.

use crate::body::Body;
use crate::config::{PhysicsConfig, TableConfig};
use crate::sound::{impact_volume, CollisionSound};

/// Advance one body by one frame.
///
/// The position moves by the current velocity, friction scales the velocity
/// down, then each wall axis is checked independently. A corner hit may
/// rebound on both axes in the same step. Pocketed bodies are untouched.
pub fn integrate(
    body: &mut Body,
    table: &TableConfig,
    physics: &PhysicsConfig,
    sound: &mut dyn CollisionSound,
) {
    if body.pocketed {
        return;
    }

    body.position += body.velocity;
    body.velocity *= physics.friction;

    let r = table.ball_radius;
    let mut rebounded = false;

    if body.position.y - r <= 0.0 {
        body.position.y = r;
        body.velocity.y = -body.velocity.y * physics.wall_restitution;
        rebounded = true;
    } else if body.position.y + r >= table.height {
        body.position.y = table.height - r;
        body.velocity.y = -body.velocity.y * physics.wall_restitution;
        rebounded = true;
    }

    if body.position.x - r <= 0.0 {
        body.position.x = r;
        body.velocity.x = -body.velocity.x * physics.wall_restitution;
        rebounded = true;
    } else if body.position.x + r >= table.width {
        body.position.x = table.width - r;
        body.velocity.x = -body.velocity.x * physics.wall_restitution;
        rebounded = true;
    }

    body.refresh_speed();

    if rebounded {
        sound.play(impact_volume(body.speed));
    }
}
