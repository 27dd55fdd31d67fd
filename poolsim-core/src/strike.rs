//! Cue strike input mapping.

use glam::Vec2;
use serde::Deserialize;

use crate::config::StrikeConfig;

/// Angular deflection for a full off-center side contact, in degrees
const SIDE_DEFLECTION_DEG: f32 = 7.0;

/// Selected contact point on the cue ball, 3x3 layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HitSpot {
    #[default]
    Center,
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
    TopLeft,
}

impl HitSpot {
    pub const ALL: [HitSpot; 9] = [
        HitSpot::Center,
        HitSpot::Top,
        HitSpot::TopRight,
        HitSpot::Right,
        HitSpot::BottomRight,
        HitSpot::Bottom,
        HitSpot::BottomLeft,
        HitSpot::Left,
        HitSpot::TopLeft,
    ];

    /// Angular deflection applied to the strike direction, in radians.
    ///
    /// Side contacts deflect the shot, corner spots at half strength;
    /// vertical offset alone has no effect without spin modeling.
    pub fn angle_offset(self) -> f32 {
        let degrees = match self {
            HitSpot::Left => SIDE_DEFLECTION_DEG,
            HitSpot::TopLeft | HitSpot::BottomLeft => SIDE_DEFLECTION_DEG / 2.0,
            HitSpot::Right => -SIDE_DEFLECTION_DEG,
            HitSpot::TopRight | HitSpot::BottomRight => -SIDE_DEFLECTION_DEG / 2.0,
            HitSpot::Center | HitSpot::Top | HitSpot::Bottom => 0.0,
        };
        degrees.to_radians()
    }

    /// Short label for selector UIs
    pub fn label(self) -> &'static str {
        match self {
            HitSpot::Center => "●",
            HitSpot::Top => "↑",
            HitSpot::TopRight => "↗",
            HitSpot::Right => "→",
            HitSpot::BottomRight => "↘",
            HitSpot::Bottom => "↓",
            HitSpot::BottomLeft => "↙",
            HitSpot::Left => "←",
            HitSpot::TopLeft => "↖",
        }
    }
}

/// A drag-release gesture aimed at the cue ball
#[derive(Debug, Clone, Copy)]
pub struct Strike {
    /// Drag vector from the release point toward the cue ball
    pub drag: Vec2,
    pub spot: HitSpot,
}

impl Strike {
    pub fn new(drag: Vec2, spot: HitSpot) -> Self {
        Self { drag, spot }
    }

    /// Impulse this gesture applies, or `None` for an accidental click.
    ///
    /// Drag length is clamped before scaling, so very long drags saturate
    /// at `max_drag_length * strike_coefficient`.
    pub fn impulse(&self, config: &StrikeConfig) -> Option<Vec2> {
        let length = self.drag.length();
        if length <= config.min_drag_distance {
            return None;
        }
        let unit = self.drag / length;
        let aimed = Vec2::from_angle(self.spot.angle_offset()).rotate(unit);
        let magnitude = length.min(config.max_drag_length) * config.strike_coefficient;
        Some(aimed * magnitude)
    }
}
