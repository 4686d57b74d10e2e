use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::NavError;
use crate::math::look_rotation;

/// Active autopilot destination
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AutopilotTarget {
    /// Point the user selected (usually a tracked object's position)
    pub target_point: Vec3,
    /// Where the ship actually parks: the target plus the standoff offset
    pub aim_point: Vec3,
}

impl AutopilotTarget {
    /// Build a target without checks; the caller guarantees a sane point
    pub fn new(target_point: Vec3, standoff: Vec3) -> Self {
        Self {
            target_point,
            aim_point: target_point + standoff,
        }
    }

    /// Build a target, rejecting points the core cannot fly to
    pub fn validate(target_point: Vec3, position: Vec3, standoff: Vec3) -> Result<Self, NavError> {
        if !target_point.is_finite() {
            return Err(NavError::NonFiniteTarget(target_point));
        }
        let target = Self::new(target_point, standoff);
        if !target.aim_point.is_finite() {
            return Err(NavError::NonFiniteTarget(target.aim_point));
        }
        if target.aim_point == position {
            return Err(NavError::TargetAtPosition {
                aim: target.aim_point,
            });
        }
        Ok(target)
    }

    pub fn offset_from(&self, position: Vec3) -> Vec3 {
        self.aim_point - position
    }

    pub fn distance_from(&self, position: Vec3) -> f32 {
        position.distance(self.aim_point)
    }

    /// Orientation that faces the aim point from `position`
    ///
    /// Falls back to `current` when the ship already sits on the aim point.
    pub fn facing_from(&self, position: Vec3, current: Quat) -> Quat {
        look_rotation(self.offset_from(position)).unwrap_or(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::orientation::forward;

    const STANDOFF: Vec3 = Vec3::new(0.0, 0.0, 15_000.0);

    #[test]
    fn aim_point_includes_standoff() {
        let target = AutopilotTarget::new(Vec3::new(100.0, 0.0, -200.0), STANDOFF);
        assert_eq!(target.aim_point, Vec3::new(100.0, 0.0, 14_800.0));
        assert_eq!(target.target_point, Vec3::new(100.0, 0.0, -200.0));
    }

    #[test]
    fn validate_rejects_non_finite_points() {
        let err = AutopilotTarget::validate(Vec3::new(f32::INFINITY, 0.0, 0.0), Vec3::ZERO, STANDOFF)
            .unwrap_err();
        assert!(matches!(err, NavError::NonFiniteTarget(_)));
    }

    #[test]
    fn validate_rejects_target_on_ship() {
        let position = Vec3::new(5.0, 5.0, 15_005.0);
        let err = AutopilotTarget::validate(Vec3::new(5.0, 5.0, 5.0), position, STANDOFF).unwrap_err();
        assert_eq!(err, NavError::TargetAtPosition { aim: position });
    }

    #[test]
    fn facing_points_at_aim() {
        let target = AutopilotTarget::new(Vec3::new(1000.0, 0.0, -15_000.0), STANDOFF);
        let q = target.facing_from(Vec3::ZERO, Quat::IDENTITY);
        assert!(forward(q).abs_diff_eq(Vec3::X, 1e-5));
    }

    #[test]
    fn facing_keeps_current_when_parked() {
        let target = AutopilotTarget::new(Vec3::ZERO, Vec3::ZERO);
        let current = Quat::from_rotation_x(0.3);
        assert_eq!(target.facing_from(Vec3::ZERO, current), current);
    }
}
