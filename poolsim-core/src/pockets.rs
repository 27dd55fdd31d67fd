//! Pocket capture detection.

use glam::Vec2;

use crate::body::Body;

/// True when the body's center lies strictly inside any pocket circle.
///
/// A center at exactly `pocket_radius` from a pocket is not captured; the
/// strict inequality is relied on by determinism tests.
pub fn is_captured(body: &Body, pockets: &[Vec2], pocket_radius: f32) -> bool {
    pockets
        .iter()
        .any(|center| body.position.distance(*center) < pocket_radius)
}
