//! Pairwise ball-ball collision resolution.

use crate::body::Body;
use crate::materials::MaterialTable;
use crate::sound::{impact_volume, CollisionSound};

/// How the coefficient of restitution for a contact pair is chosen
#[derive(Debug, Clone, Copy)]
pub enum RestitutionPolicy<'a> {
    /// cor = 1 for every pair
    Elastic,
    /// cor = the lower of the two bodies' material coefficients
    ByMaterial(&'a MaterialTable),
}

impl RestitutionPolicy<'_> {
    fn restitution_for(&self, a: &Body, b: &Body) -> f32 {
        match self {
            RestitutionPolicy::Elastic => 1.0,
            RestitutionPolicy::ByMaterial(table) => {
                table.pair_restitution(&a.material, &b.material)
            }
        }
    }
}

/// Resolve one unordered pair for the current frame.
///
/// Applies the impulse `J = -(1 + cor) * (Δv·n) / (1/m1 + 1/m2)` along the
/// contact normal and pushes both bodies apart by half the overlap each;
/// tangential velocity components are untouched. With `cor = 1` this
/// reduces exactly to the classic elastic exchange. Resolution reads the
/// positions as they are at call time, so pair iteration order affects the
/// exact floating-point trajectory in multi-contact frames.
pub fn resolve_collision(
    a: &mut Body,
    b: &mut Body,
    ball_radius: f32,
    policy: RestitutionPolicy<'_>,
    sound: &mut dyn CollisionSound,
) {
    if a.pocketed || b.pocketed {
        return;
    }

    let delta = a.position - b.position;
    let dist = delta.length();
    // Coincident centers have no defined normal; treated as no contact.
    if dist == 0.0 || dist > 2.0 * ball_radius {
        return;
    }

    let normal = delta / dist;
    let rel_vel = a.velocity - b.velocity;
    let vel_along_normal = rel_vel.dot(normal);
    // A pair still overlapping after an earlier correction may already be
    // separating; resolving it again would stick the balls together.
    if vel_along_normal > 0.0 {
        return;
    }

    let (m1, m2) = (a.mass, b.mass);
    if m1 + m2 <= 0.0 {
        return;
    }

    let cor = policy.restitution_for(a, b);
    let impulse = -(1.0 + cor) * vel_along_normal / (1.0 / m1 + 1.0 / m2);
    a.velocity += impulse * normal / m1;
    b.velocity -= impulse * normal / m2;

    // Split the remaining overlap evenly, independent of mass.
    let overlap = 2.0 * ball_radius - dist;
    let correction = normal * (overlap / 2.0);
    a.position += correction;
    b.position -= correction;

    a.refresh_speed();
    b.refresh_speed();

    sound.play(impact_volume(vel_along_normal.abs()));
}
