use glam::{Mat3, Quat, Vec3};

/// Minimum look distance before a look rotation is considered undefined
const LOOK_EPSILON: f32 = 1e-6;

/// Camera forward vector (cameras look down -Z)
pub fn forward(orientation: Quat) -> Vec3 {
    (orientation * Vec3::NEG_Z).normalize()
}

/// Camera right vector
pub fn right(orientation: Quat) -> Vec3 {
    (orientation * Vec3::X).normalize()
}

/// Camera up vector
pub fn up(orientation: Quat) -> Vec3 {
    (orientation * Vec3::Y).normalize()
}

/// Shortest-arc spherical interpolation with exact endpoints
///
/// `t` is clamped to [0, 1]. `t == 0` returns `from` and `t == 1` returns `to`
/// bit-for-bit, as does interpolating a rotation with itself.
pub fn slerp(from: Quat, to: Quat, t: f32) -> Quat {
    let t = t.clamp(0.0, 1.0);
    if t <= 0.0 || from == to {
        return from;
    }
    if t >= 1.0 {
        return to;
    }
    // glam flips the far endpoint when the dot product is negative
    from.slerp(to, t).normalize()
}

/// Rotation that points the camera's -Z axis along `direction` with world +Y kept up
///
/// Returns `None` when `direction` is too short to define a heading.
pub fn look_rotation(direction: Vec3) -> Option<Quat> {
    if !direction.is_finite() || direction.length() < LOOK_EPSILON {
        return None;
    }
    let forward = direction.normalize();

    // Looking straight up or down leaves world up undefined; borrow any perpendicular axis
    let world_up = if forward.cross(Vec3::Y).length_squared() < LOOK_EPSILON {
        forward.any_orthonormal_vector()
    } else {
        Vec3::Y
    };

    let right = forward.cross(world_up).normalize();
    let up = right.cross(forward);
    let basis = Mat3::from_cols(right, up, -forward);

    Some(Quat::from_mat3(&basis).normalize())
}

/// Same rotation test that tolerates the q / -q double cover
pub fn same_rotation(a: Quat, b: Quat, tolerance: f32) -> bool {
    a.dot(b).abs() >= 1.0 - tolerance
}
