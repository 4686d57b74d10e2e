// config.rs - Navigation tuning and simulation settings
use anyhow::{Context, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::NavError;
use crate::math::Response;

/// Flight model tuning. Every rate is per second of simulated time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightTuning {
    /// Maximum linear speed in world units per second.
    pub max_speed: f32,
    /// Velocity approach rate while thrusting.
    pub acceleration: f32,
    /// Velocity approach rate while coasting to a stop.
    pub deceleration: f32,
    /// Speeds below this snap to zero.
    pub speed_epsilon: f32,

    /// Maximum yaw/pitch rate in radians per second.
    pub max_rotation_speed: f32,
    pub rotation_acceleration: f32,
    pub rotation_deceleration: f32,
    pub rotation_epsilon: f32,
}

impl Default for FlightTuning {
    fn default() -> Self {
        Self {
            max_speed: 37_500.0,
            acceleration: 0.755,
            deceleration: 0.376,
            speed_epsilon: 6.0,
            max_rotation_speed: 0.6,
            rotation_acceleration: 6.32,
            rotation_deceleration: 6.32,
            rotation_epsilon: 0.006,
        }
    }
}

impl FlightTuning {
    pub fn linear_response(&self) -> Response {
        Response {
            acceleration: self.acceleration,
            deceleration: self.deceleration,
            epsilon: self.speed_epsilon,
            max: self.max_speed,
        }
    }

    pub fn angular_response(&self) -> Response {
        Response {
            acceleration: self.rotation_acceleration,
            deceleration: self.rotation_deceleration,
            epsilon: self.rotation_epsilon,
            max: self.max_rotation_speed,
        }
    }
}

/// What a manual command does while the autopilot is flying
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OverridePolicy {
    /// Drop the autopilot and the orientation transition, back to manual flight.
    #[default]
    CancelAutopilot,
    /// Only stop the orientation transition; the autopilot keeps translating.
    CancelTransition,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutopilotTuning {
    /// Offset added to a selected target so the ship parks beside it.
    pub standoff: Vec3,
    /// Distance to the aim point at which the autopilot disengages.
    pub arrival_threshold: f32,
    pub override_policy: OverridePolicy,
}

impl Default for AutopilotTuning {
    fn default() -> Self {
        Self {
            standoff: Vec3::new(0.0, 0.0, 15_000.0),
            arrival_threshold: 1.0,
            override_policy: OverridePolicy::CancelAutopilot,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionTuning {
    /// Seconds to swing the camera onto the autopilot heading.
    pub duration: f32,
}

impl Default for TransitionTuning {
    fn default() -> Self {
        Self { duration: 1.0 }
    }
}

/// Radar overlay geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadarConfig {
    /// World distance mapped to the radar rim.
    pub max_range: f32,
    /// Radar edge length in pixels.
    pub size: f32,
    /// Bearing glyphs stay this many pixels away from the border.
    pub indicator_margin: f32,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            max_range: 500_000.0,
            size: 150.0,
            indicator_margin: 8.0,
        }
    }
}

impl RadarConfig {
    pub fn center(&self) -> f32 {
        self.size / 2.0
    }
}

/// View cone used to pick the highlighted object
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusConfig {
    pub half_angle_degrees: f32,
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            half_angle_degrees: 37.5,
        }
    }
}

/// Fixed-step scheduling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub step_hz: f32,
    /// Steps allowed per frame before the remainder is dropped.
    pub max_steps_per_frame: u8,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            step_hz: 60.0,
            max_steps_per_frame: 8,
        }
    }
}

impl SimulationConfig {
    pub fn step_seconds(&self) -> f32 {
        1.0 / self.step_hz
    }
}

/// Complete navigation configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub flight: FlightTuning,
    pub autopilot: AutopilotTuning,
    pub transition: TransitionTuning,
    pub radar: RadarConfig,
    pub focus: FocusConfig,
    pub simulation: SimulationConfig,
}

impl NavConfig {
    /// Load a JSON config; missing fields keep their defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: NavConfig = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would break the core's numeric guarantees
    pub fn validate(&self) -> std::result::Result<(), NavError> {
        let positive = [
            ("flight.max_speed", self.flight.max_speed),
            ("flight.max_rotation_speed", self.flight.max_rotation_speed),
            ("transition.duration", self.transition.duration),
            ("radar.max_range", self.radar.max_range),
            ("radar.size", self.radar.size),
            ("simulation.step_hz", self.simulation.step_hz),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(NavError::InvalidConfig {
                    field,
                    reason: format!("must be a positive number, got {value}"),
                });
            }
        }

        let non_negative = [
            ("flight.acceleration", self.flight.acceleration),
            ("flight.deceleration", self.flight.deceleration),
            ("flight.speed_epsilon", self.flight.speed_epsilon),
            ("flight.rotation_acceleration", self.flight.rotation_acceleration),
            ("flight.rotation_deceleration", self.flight.rotation_deceleration),
            ("flight.rotation_epsilon", self.flight.rotation_epsilon),
            ("autopilot.arrival_threshold", self.autopilot.arrival_threshold),
            ("radar.indicator_margin", self.radar.indicator_margin),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(NavError::InvalidConfig {
                    field,
                    reason: format!("must be zero or positive, got {value}"),
                });
            }
        }

        if self.radar.indicator_margin * 2.0 > self.radar.size {
            return Err(NavError::InvalidConfig {
                field: "radar.indicator_margin",
                reason: "must leave room inside the radar".to_string(),
            });
        }
        if !self.autopilot.standoff.is_finite() {
            return Err(NavError::InvalidConfig {
                field: "autopilot.standoff",
                reason: "must be finite".to_string(),
            });
        }
        if self.simulation.max_steps_per_frame == 0 {
            return Err(NavError::InvalidConfig {
                field: "simulation.max_steps_per_frame",
                reason: "must allow at least one step".to_string(),
            });
        }
        Ok(())
    }
}
