use glam::Vec3;
use log::{debug, warn};

use super::autopilot::AutopilotTarget;
use super::command::CommandSet;
use super::ship::ShipState;
use super::snapshot::{ModeSummary, NavSnapshot};
use super::state::{step, NavEvent, NavInput, NavState};
use crate::config::NavConfig;
use crate::core::Accumulator;
use crate::error::NavError;
use crate::math::heading_degrees;
use crate::radar::{self, TrackedObject};

/// Owns the navigation state and runs it at a fixed rate from variable frame times
///
/// Single writer: only [`Navigator::tick`] changes the state, and readers get the
/// snapshot it returns.
#[derive(Debug, Clone)]
pub struct Navigator {
    state: NavState,
    config: NavConfig,
    accumulator: Accumulator,
    /// Selection waiting for the next fixed step
    pending_target: Option<AutopilotTarget>,
    steps: u64,
}

impl Navigator {
    pub fn new(config: NavConfig, ship: ShipState) -> Self {
        Self {
            state: NavState::new(ship),
            accumulator: Accumulator::new(config.simulation.step_hz, config.simulation.max_steps_per_frame),
            config,
            pending_target: None,
            steps: 0,
        }
    }

    pub fn state(&self) -> &NavState {
        &self.state
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn simulated_time(&self) -> f32 {
        self.steps as f32 * self.accumulator.timestep()
    }

    pub fn pending_target(&self) -> Option<&AutopilotTarget> {
        self.pending_target.as_ref()
    }

    /// Validate a world point and queue it as the next autopilot target
    pub fn select_point(&mut self, point: Vec3) -> Result<AutopilotTarget, NavError> {
        let position = self.state.ship.position;
        let target = AutopilotTarget::validate(point, position, self.config.autopilot.standoff)
            .inspect_err(|err| warn!("Rejected autopilot target: {err}"))?;
        self.pending_target = Some(target);
        Ok(target)
    }

    /// Queue the tracked object called `label` as the next autopilot target
    pub fn select_object(&mut self, label: &str, objects: &[TrackedObject]) -> Result<AutopilotTarget, NavError> {
        let object = radar::find(objects, label).ok_or_else(|| NavError::UnknownObject(label.to_string()))?;
        debug!("Selected {} at {}", object.label, object.position);
        self.select_point(object.position)
    }

    /// Run every fixed step that fits in `frame_delta` and publish the result
    ///
    /// `input.select` replaces any queued target. Commands apply to every step of
    /// the frame; a selection is consumed by the first step that runs.
    pub fn tick(&mut self, frame_delta: f32, input: &NavInput, objects: &[TrackedObject]) -> NavSnapshot {
        if input.select.is_some() {
            self.pending_target = input.select;
        }

        let mut events = Vec::new();
        for dt in self.accumulator.tick(frame_delta) {
            let step_input = NavInput {
                commands: input.commands,
                select: self.pending_target.take(),
            };
            let result = step(&self.state, &step_input, dt, &self.config);
            self.state = result.state;
            self.steps += 1;
            events.extend(result.events);
        }

        self.snapshot(objects, events)
    }

    /// Convenience wrapper for a frame with held commands only
    pub fn tick_commands(&mut self, frame_delta: f32, commands: CommandSet, objects: &[TrackedObject]) -> NavSnapshot {
        self.tick(frame_delta, &NavInput::commands(commands), objects)
    }

    /// Snapshot of the current state with the radar re-projected
    pub fn snapshot(&self, objects: &[TrackedObject], events: Vec<NavEvent>) -> NavSnapshot {
        let ship = &self.state.ship;
        let forward = ship.forward();
        let contacts = radar::sweep(ship.position, forward, objects, &self.config.radar);
        let focused = radar::focus_target(ship.position, forward, objects, &self.config.focus)
            .map(|index| objects[index].label.clone());

        NavSnapshot {
            step: self.steps,
            time: self.simulated_time(),
            position: ship.position,
            velocity: ship.velocity,
            orientation: ship.orientation,
            forward,
            heading_degrees: heading_degrees(forward),
            mode: ModeSummary::of(&self.state),
            contacts,
            focused,
            events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Command;

    const FRAME: f32 = 1.0 / 60.0;

    fn navigator() -> Navigator {
        Navigator::new(NavConfig::default(), ShipState::at(Vec3::ZERO))
    }

    #[test]
    fn short_frame_runs_no_step() {
        let mut nav = navigator();
        let snapshot = nav.tick_commands(FRAME / 4.0, CommandSet::EMPTY.with(Command::MoveForward), &[]);
        assert_eq!(snapshot.step, 0);
        assert_eq!(snapshot.position, Vec3::ZERO);
    }

    #[test]
    fn selection_survives_a_zero_step_frame() {
        let mut nav = navigator();
        nav.select_point(Vec3::new(100_000.0, 0.0, 0.0)).unwrap();

        let first = nav.tick(FRAME / 4.0, &NavInput::default(), &[]);
        assert!(!first.is_autopilot());
        assert!(nav.pending_target().is_some());

        let second = nav.tick(FRAME, &NavInput::default(), &[]);
        assert!(second.is_autopilot());
        assert!(second.is_transitioning());
        assert!(nav.pending_target().is_none());
    }

    #[test]
    fn unknown_object_is_an_error() {
        let mut nav = navigator();
        let err = nav.select_object("nowhere", &[]).unwrap_err();
        assert_eq!(err, NavError::UnknownObject("nowhere".to_string()));
    }

    #[test]
    fn snapshot_reports_contacts_and_focus() {
        let mut nav = navigator();
        let objects = vec![
            TrackedObject::new("ahead", Vec3::new(0.0, 0.0, -50_000.0)),
            TrackedObject::new("behind", Vec3::new(0.0, 0.0, 50_000.0)),
        ];
        let snapshot = nav.tick(FRAME, &NavInput::default(), &objects);

        assert_eq!(snapshot.contacts.len(), 2);
        assert_eq!(snapshot.focused.as_deref(), Some("ahead"));
        let heading = snapshot.heading_degrees;
        assert!(heading < 1e-3 || heading > 360.0 - 1e-3, "heading {heading}");
        assert!(snapshot.contact("behind").unwrap().point.in_bounds);
    }
}
