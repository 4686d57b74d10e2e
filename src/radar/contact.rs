use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::projection::{project, RadarPoint};
use crate::config::RadarConfig;

/// Object the radar follows, supplied by the body-position feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedObject {
    pub label: String,
    pub position: Vec3,
}

impl TrackedObject {
    pub fn new(label: impl Into<String>, position: Vec3) -> Self {
        Self {
            label: label.into(),
            position,
        }
    }
}

/// A tracked object as it appears on the radar this tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarContact {
    pub label: String,
    /// World position; selecting the contact makes this the autopilot target
    pub position: Vec3,
    pub distance: f32,
    pub point: RadarPoint,
}

/// Re-project every tracked object from the player's point of view
pub fn sweep(player: Vec3, forward: Vec3, objects: &[TrackedObject], radar: &RadarConfig) -> Vec<RadarContact> {
    objects
        .iter()
        .map(|object| RadarContact {
            label: object.label.clone(),
            position: object.position,
            distance: player.distance(object.position),
            point: project(player, object.position, forward, radar),
        })
        .collect()
}

/// Look up a tracked object by label
pub fn find<'a>(objects: &'a [TrackedObject], label: &str) -> Option<&'a TrackedObject> {
    objects.iter().find(|object| object.label == label)
}
