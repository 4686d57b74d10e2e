use glam::{Quat, Vec3};
use serde::Serialize;

use super::state::{FlightMode, NavEvent, NavState};
use crate::radar::RadarContact;

/// Mode as shown on the navigation HUD
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ModeSummary {
    Manual,
    Autopilot {
        target: Vec3,
        aim: Vec3,
        distance: f32,
        /// Camera transition progress while it is still running
        transition_progress: Option<f32>,
    },
}

impl ModeSummary {
    pub fn of(state: &NavState) -> Self {
        match state.mode {
            FlightMode::Manual => ModeSummary::Manual,
            FlightMode::Autopilot { target, transition } => ModeSummary::Autopilot {
                target: target.target_point,
                aim: target.aim_point,
                distance: target.distance_from(state.ship.position),
                transition_progress: transition.map(|t| t.progress()),
            },
        }
    }
}

/// Immutable view of the navigation core after a frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavSnapshot {
    /// Fixed steps simulated so far
    pub step: u64,
    /// Simulated seconds so far
    pub time: f32,
    pub position: Vec3,
    pub velocity: Vec3,
    pub orientation: Quat,
    pub forward: Vec3,
    pub heading_degrees: f32,
    pub mode: ModeSummary,
    pub contacts: Vec<RadarContact>,
    /// Label of the closest tracked object in view
    pub focused: Option<String>,
    /// Mode changes during this frame, oldest first
    pub events: Vec<NavEvent>,
}

impl NavSnapshot {
    pub fn is_autopilot(&self) -> bool {
        matches!(self.mode, ModeSummary::Autopilot { .. })
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(
            self.mode,
            ModeSummary::Autopilot {
                transition_progress: Some(_),
                ..
            }
        )
    }

    pub fn contact(&self, label: &str) -> Option<&RadarContact> {
        self.contacts.iter().find(|c| c.label == label)
    }

    /// One-line HUD readout
    pub fn hud_line(&self) -> String {
        let mode = match self.mode {
            ModeSummary::Manual => "manual".to_string(),
            ModeSummary::Autopilot {
                distance,
                transition_progress: Some(progress),
                ..
            } => format!("autopilot {:.0} to go, turning {:.0}%", distance, progress * 100.0),
            ModeSummary::Autopilot { distance, .. } => format!("autopilot {:.0} to go", distance),
        };
        format!(
            "X: {:.2} Y: {:.2} Z: {:.2} | Direction: {:.2}° | speed {:.1} | {}",
            self.position.x,
            self.position.y,
            self.position.z,
            self.heading_degrees,
            self.velocity.length(),
            mode
        )
    }
}
