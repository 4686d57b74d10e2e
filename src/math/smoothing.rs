use glam::{Vec2, Vec3};

/// Interpolation factor for exponential approach at `rate` per second over `dt` seconds
///
/// Stays in [0, 1] and composes across steps: two steps of `dt` equal one of `2 * dt`.
pub fn smoothing_factor(rate: f32, dt: f32) -> f32 {
    if rate <= 0.0 || dt <= 0.0 {
        return 0.0;
    }
    1.0 - (-rate * dt).exp()
}

/// Response parameters for one smoothed quantity (linear or angular velocity)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Response {
    /// Approach rate while a non-zero target is requested, per second
    pub acceleration: f32,
    /// Approach rate while the target is zero, per second
    pub deceleration: f32,
    /// Magnitudes below this snap to exactly zero
    pub epsilon: f32,
    /// Hard cap on the resulting magnitude
    pub max: f32,
}

impl Response {
    fn rate_for(&self, desired_len: f32) -> f32 {
        if desired_len > 0.0 {
            self.acceleration
        } else {
            self.deceleration
        }
    }
}

/// Moves `current` toward `desired`, zeroing residual drift and capping the magnitude
pub fn approach3(current: Vec3, desired: Vec3, response: &Response, dt: f32) -> Vec3 {
    let t = smoothing_factor(response.rate_for(desired.length()), dt);
    let next = current.lerp(desired, t).clamp_length_max(response.max);

    if next.length() < response.epsilon {
        Vec3::ZERO
    } else {
        next
    }
}

/// Two-dimensional counterpart of [`approach3`], used for yaw/pitch rates
pub fn approach2(current: Vec2, desired: Vec2, response: &Response, dt: f32) -> Vec2 {
    let t = smoothing_factor(response.rate_for(desired.length()), dt);
    let next = current.lerp(desired, t).clamp_length_max(response.max);

    if next.length() < response.epsilon {
        Vec2::ZERO
    } else {
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE: Response = Response {
        acceleration: 2.0,
        deceleration: 1.0,
        epsilon: 0.1,
        max: 10.0,
    };

    #[test]
    fn factor_is_bounded() {
        assert_eq!(smoothing_factor(1.0, 0.0), 0.0);
        assert_eq!(smoothing_factor(0.0, 1.0), 0.0);
        let f = smoothing_factor(1000.0, 1.0);
        assert!(f > 0.99 && f <= 1.0);
    }

    #[test]
    fn factor_composes_over_steps() {
        let one = smoothing_factor(3.0, 0.2);
        let half = smoothing_factor(3.0, 0.1);
        let two_halves = 1.0 - (1.0 - half) * (1.0 - half);
        assert!((one - two_halves).abs() < 1e-6);
    }

    #[test]
    fn approach_moves_toward_target() {
        let next = approach3(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), &RESPONSE, 0.5);
        assert!(next.x > 0.0 && next.x < 10.0);
        assert_eq!(next.y, 0.0);
    }

    #[test]
    fn approach_snaps_small_values_to_zero() {
        let next = approach3(Vec3::new(0.05, 0.0, 0.0), Vec3::ZERO, &RESPONSE, 0.01);
        assert_eq!(next, Vec3::ZERO);

        let next = approach2(Vec2::new(0.0, 0.05), Vec2::ZERO, &RESPONSE, 0.01);
        assert_eq!(next, Vec2::ZERO);
    }

    #[test]
    fn approach_never_exceeds_max() {
        let next = approach3(Vec3::new(50.0, 0.0, 0.0), Vec3::new(0.0, 10.0, 0.0), &RESPONSE, 0.01);
        assert!(next.length() <= RESPONSE.max + 1e-4);
    }
}
