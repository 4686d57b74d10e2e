use glam::Quat;
use serde::{Deserialize, Serialize};

use crate::math::slerp;

/// Time-bounded swing of the camera from one orientation to another
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrientationTransition {
    start: Quat,
    target: Quat,
    progress: f32,
    duration: f32,
}

/// Outcome of advancing a transition by one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionStep {
    /// Still swinging; carries the updated transition and the orientation to use this tick
    Running(OrientationTransition, Quat),
    /// Finished; the orientation is exactly the target
    Completed(Quat),
}

impl OrientationTransition {
    /// Start at progress 0. `duration` must be positive.
    pub fn begin(start: Quat, target: Quat, duration: f32) -> Self {
        debug_assert!(duration > 0.0, "transition duration must be positive");
        Self {
            start,
            target,
            progress: 0.0,
            duration,
        }
    }

    pub fn start(&self) -> Quat {
        self.start
    }

    pub fn target(&self) -> Quat {
        self.target
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Orientation at the current progress
    pub fn orientation(&self) -> Quat {
        slerp(self.start, self.target, self.progress)
    }

    /// Advance by `dt` seconds
    pub fn advance(self, dt: f32) -> TransitionStep {
        let progress = self.progress + dt.max(0.0) / self.duration;

        if progress >= 1.0 {
            TransitionStep::Completed(self.target)
        } else {
            let next = Self { progress, ..self };
            TransitionStep::Running(next, next.orientation())
        }
    }
}
