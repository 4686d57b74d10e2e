use glam::{Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::math::orientation;

/// Kinematic state of the ship (and the camera riding on it)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipState {
    pub position: Vec3,
    /// World units per second
    pub velocity: Vec3,
    pub orientation: Quat,
    /// x = yaw rate, y = pitch rate, radians per second
    pub rotational_velocity: Vec2,
}

impl ShipState {
    /// Ship at rest, looking down -Z
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            rotational_velocity: Vec2::ZERO,
        }
    }

    pub fn with_orientation(mut self, orientation: Quat) -> Self {
        self.orientation = orientation.normalize();
        self
    }

    pub fn forward(&self) -> Vec3 {
        orientation::forward(self.orientation)
    }

    pub fn right(&self) -> Vec3 {
        orientation::right(self.orientation)
    }

    pub fn up(&self) -> Vec3 {
        orientation::up(self.orientation)
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

impl Default for ShipState {
    /// Parked well outside the inner bodies
    fn default() -> Self {
        Self::at(Vec3::new(0.0, 0.0, 500_000.0))
    }
}
