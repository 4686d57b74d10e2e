// scenario.rs - Scripted flight plans for headless runs
use anyhow::{bail, Context, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::NavConfig;
use crate::nav::CommandSet;
use crate::radar::{self, TrackedObject};
use crate::traits::Command;

/// Autopilot selection made by a plan entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectTarget {
    /// A tracked object, by label
    Object(String),
    /// A raw world point
    Point(Vec3),
}

/// Commands held from `at` until the next entry, plus an optional selection made at `at`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanEntry {
    pub at: f32,
    #[serde(default)]
    pub hold: CommandSet,
    #[serde(default)]
    pub select: Option<SelectTarget>,
}

impl PlanEntry {
    pub fn hold(at: f32, commands: &[Command]) -> Self {
        Self {
            at,
            hold: commands.iter().copied().collect(),
            select: None,
        }
    }

    pub fn select(at: f32, target: SelectTarget) -> Self {
        Self {
            at,
            hold: CommandSet::EMPTY,
            select: Some(target),
        }
    }
}

fn default_start() -> Vec3 {
    Vec3::new(0.0, 0.0, 500_000.0)
}

fn default_duration() -> f32 {
    30.0
}

/// Flight plan: the world, optional tuning overrides and a timeline of inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightPlan {
    #[serde(default = "default_start")]
    pub start: Vec3,
    #[serde(default)]
    pub objects: Vec<TrackedObject>,
    #[serde(default)]
    pub config: Option<NavConfig>,
    #[serde(default)]
    pub timeline: Vec<PlanEntry>,
    /// Simulated seconds to run
    #[serde(default = "default_duration")]
    pub duration: f32,
}

impl FlightPlan {
    /// Load a JSON flight plan and check it against its own objects
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read flight plan: {:?}", path))?;
        let mut plan: FlightPlan = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse flight plan: {:?}", path))?;
        plan.prepare()
            .with_context(|| format!("Invalid flight plan: {:?}", path))?;
        Ok(plan)
    }

    /// Sort the timeline and reject entries that can never play back
    pub fn prepare(&mut self) -> Result<()> {
        if !(self.duration.is_finite() && self.duration >= 0.0) {
            bail!("duration must be zero or positive, got {}", self.duration);
        }
        if !self.start.is_finite() {
            bail!("start position must be finite");
        }
        if let Some(config) = &self.config {
            config.validate()?;
        }
        for entry in &self.timeline {
            if !(entry.at.is_finite() && entry.at >= 0.0) {
                bail!("timeline entry at {} must be zero or positive", entry.at);
            }
            if let Some(SelectTarget::Object(label)) = &entry.select {
                if radar::find(&self.objects, label).is_none() {
                    bail!("timeline selects unknown object {:?}", label);
                }
            }
        }
        self.timeline.sort_by(|a, b| a.at.total_cmp(&b.at));
        Ok(())
    }

    /// Built-in tour: drift forward, look around, then hand over to the autopilot
    pub fn demo() -> Self {
        Self {
            start: default_start(),
            objects: vec![
                TrackedObject::new("starphorea", Vec3::ZERO),
                TrackedObject::new("aurelis", Vec3::new(120_000.0, 8_000.0, 300_000.0)),
                TrackedObject::new("kethra", Vec3::new(-200_000.0, -20_000.0, 420_000.0)),
                TrackedObject::new("vesh", Vec3::new(60_000.0, 0.0, 900_000.0)),
            ],
            config: None,
            timeline: vec![
                PlanEntry::hold(0.0, &[Command::MoveForward]),
                PlanEntry::hold(3.0, &[Command::MoveForward, Command::YawLeft]),
                PlanEntry::hold(4.0, &[]),
                PlanEntry::select(5.0, SelectTarget::Object("starphorea".to_string())),
            ],
            duration: 25.0,
        }
    }

    pub fn playback(&self) -> Playback<'_> {
        Playback {
            timeline: &self.timeline,
            next: 0,
            hold: CommandSet::EMPTY,
        }
    }
}

/// What the plan asks for at one moment
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cue<'a> {
    pub hold: CommandSet,
    /// Selections whose time has come, oldest first
    pub selections: Vec<&'a SelectTarget>,
}

/// Walks a sorted timeline forward in time
#[derive(Debug, Clone)]
pub struct Playback<'a> {
    timeline: &'a [PlanEntry],
    next: usize,
    hold: CommandSet,
}

impl<'a> Playback<'a> {
    /// Consume every entry at or before `time`
    pub fn advance(&mut self, time: f32) -> Cue<'a> {
        let mut selections = Vec::new();
        while let Some(entry) = self.timeline.get(self.next) {
            if entry.at > time {
                break;
            }
            self.hold = entry.hold;
            selections.extend(entry.select.as_ref());
            self.next += 1;
        }
        Cue {
            hold: self.hold,
            selections,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.next >= self.timeline.len()
    }
}
