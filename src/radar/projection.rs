use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::config::RadarConfig;
use crate::math::angle::{planar_angle, wrap_angle, wrap_degrees};

/// Position of a tracked object on the radar, in radar pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadarPoint {
    pub x: f32,
    pub y: f32,
    /// Dot inside the radar; otherwise (x, y) is a bearing glyph on the rim
    pub in_bounds: bool,
    /// Rotation for the bearing glyph, in (-180, 180]
    pub bearing_degrees: f32,
}

impl RadarPoint {
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Horizontal-plane offset (x, z) from the player to the object
pub fn planar_offset(player: Vec3, object: Vec3) -> Vec2 {
    Vec2::new(object.x - player.x, object.z - player.z)
}

/// Linear map of a planar offset onto radar pixels, player at the center
pub fn scale_to_radar(offset: Vec2, radar: &RadarConfig) -> Vec2 {
    let half = radar.center();
    offset / radar.max_range * half + Vec2::splat(half)
}

/// Angle of the object relative to where the camera looks, in (-PI, PI]
pub fn relative_angle(offset: Vec2, forward: Vec3) -> f32 {
    let camera_angle = planar_angle(forward.x, forward.z);
    let object_angle = planar_angle(offset.x, offset.y);
    wrap_angle(object_angle - camera_angle)
}

/// Glyph rotation pointing toward the object, in (-180, 180]
pub fn bearing_degrees(relative_angle: f32) -> f32 {
    wrap_degrees(-relative_angle.to_degrees() + 180.0)
}

/// Rim position for a bearing glyph, kept `indicator_margin` away from the border
pub fn edge_indicator(relative_angle: f32, radar: &RadarConfig) -> Vec2 {
    let center = radar.center();
    let (sin, cos) = relative_angle.sin_cos();
    let edge = Vec2::splat(center) - center * Vec2::new(sin, cos);

    let low = radar.indicator_margin;
    let high = radar.size - radar.indicator_margin;
    edge.clamp(Vec2::splat(low), Vec2::splat(high))
}

/// Project a world position onto the radar
///
/// Pure: the same inputs always give the same point.
pub fn project(player: Vec3, object: Vec3, forward: Vec3, radar: &RadarConfig) -> RadarPoint {
    let offset = planar_offset(player, object);
    let scaled = scale_to_radar(offset, radar);
    let angle = relative_angle(offset, forward);
    let bearing = bearing_degrees(angle);

    let in_bounds = (0.0..=radar.size).contains(&scaled.x) && (0.0..=radar.size).contains(&scaled.y);

    if in_bounds {
        RadarPoint {
            x: scaled.x,
            y: scaled.y,
            in_bounds: true,
            bearing_degrees: bearing,
        }
    } else {
        let edge = edge_indicator(angle, radar);
        RadarPoint {
            x: edge.x,
            y: edge.y,
            in_bounds: false,
            bearing_degrees: bearing,
        }
    }
}
