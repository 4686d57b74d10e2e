use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// Wraps an angle in radians into (-PI, PI]
pub fn wrap_angle(radians: f32) -> f32 {
    let wrapped = (radians + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Wraps an angle in degrees into (-180, 180]
pub fn wrap_degrees(degrees: f32) -> f32 {
    let wrapped = (degrees + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped <= -180.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

/// Angle of a direction in the horizontal plane, measured from +Z toward +X
pub fn planar_angle(x: f32, z: f32) -> f32 {
    x.atan2(z)
}

/// Compass heading of a forward vector in [0, 360)
///
/// Looking down -Z reads 0, looking down +X reads 270.
pub fn heading_degrees(forward: Vec3) -> f32 {
    let degrees = planar_angle(forward.x, forward.z).to_degrees() + 180.0;
    let heading = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if heading >= 360.0 {
        0.0
    } else {
        heading
    }
}
