//! Composite navigation state machine
//!
//! ```text
//! Manual --select--> Autopilot { transition: Some }
//! Autopilot { Some } --progress >= 1--> Autopilot { None }
//! Autopilot --arrival--> Manual
//! Autopilot --manual command--> Manual              (OverridePolicy::CancelAutopilot)
//! Autopilot { Some } --manual command--> Autopilot { None }  (OverridePolicy::CancelTransition)
//! ```
//!
//! A transition only exists inside `Autopilot`, so "transitioning without a
//! target" cannot be expressed.

use glam::{Vec2, Vec3};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::autopilot::AutopilotTarget;
use super::command::CommandSet;
use super::flight::{autopilot_step, manual_step, Pursuit};
use super::ship::ShipState;
use super::transition::{OrientationTransition, TransitionStep};
use crate::config::{NavConfig, OverridePolicy};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum FlightMode {
    #[default]
    Manual,
    Autopilot {
        target: AutopilotTarget,
        transition: Option<OrientationTransition>,
    },
}

impl FlightMode {
    pub fn target(&self) -> Option<&AutopilotTarget> {
        match self {
            FlightMode::Manual => None,
            FlightMode::Autopilot { target, .. } => Some(target),
        }
    }

    pub fn transition(&self) -> Option<&OrientationTransition> {
        match self {
            FlightMode::Autopilot {
                transition: Some(transition),
                ..
            } => Some(transition),
            _ => None,
        }
    }
}

/// Everything the core carries from one tick to the next
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NavState {
    pub ship: ShipState,
    pub mode: FlightMode,
}

impl NavState {
    pub fn new(ship: ShipState) -> Self {
        Self {
            ship,
            mode: FlightMode::Manual,
        }
    }

    pub fn is_autopilot(&self) -> bool {
        matches!(self.mode, FlightMode::Autopilot { .. })
    }

    pub fn is_transitioning(&self) -> bool {
        self.mode.transition().is_some()
    }

    pub fn forward(&self) -> Vec3 {
        self.ship.forward()
    }
}

/// Input for one tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NavInput {
    pub commands: CommandSet,
    /// A freshly selected autopilot target
    pub select: Option<AutopilotTarget>,
}

impl NavInput {
    pub fn commands(commands: CommandSet) -> Self {
        Self {
            commands,
            select: None,
        }
    }

    pub fn select(target: AutopilotTarget) -> Self {
        Self {
            commands: CommandSet::EMPTY,
            select: Some(target),
        }
    }
}

/// Mode changes that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum NavEvent {
    AutopilotEngaged { target: Vec3, aim: Vec3 },
    AutopilotArrived { position: Vec3 },
    AutopilotCancelled,
    TransitionCompleted,
    TransitionCancelled,
}

/// Result of [`step`]
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub state: NavState,
    pub events: Vec<NavEvent>,
}

/// Advance the navigation core by one fixed tick
///
/// Order within the tick: target selection or manual override, then the flight
/// model, then the orientation transition. The input state is never modified.
pub fn step(state: &NavState, input: &NavInput, dt: f32, config: &NavConfig) -> Step {
    let mut events = Vec::new();
    let mut ship = state.ship;
    let mut mode = state.mode;

    if let Some(target) = input.select {
        let start = ship.orientation;
        let facing = target.facing_from(ship.position, start);
        let transition = OrientationTransition::begin(start, facing, config.transition.duration);

        // A leftover spin would resume after arrival
        ship.rotational_velocity = Vec2::ZERO;
        mode = FlightMode::Autopilot {
            target,
            transition: Some(transition),
        };
        info!(
            "Autopilot engaged: target {} (aim {})",
            target.target_point, target.aim_point
        );
        events.push(NavEvent::AutopilotEngaged {
            target: target.target_point,
            aim: target.aim_point,
        });
    } else if input.commands.has_manual_input() {
        mode = manual_override(mode, config.autopilot.override_policy, &mut events);
    }

    match mode {
        FlightMode::Manual => {
            ship = manual_step(&ship, &input.commands, &config.flight, dt);
        }
        FlightMode::Autopilot { target, transition } => {
            match autopilot_step(&ship, &target, &config.flight, config.autopilot.arrival_threshold, dt) {
                Pursuit::Cruising(next) => ship = next,
                Pursuit::Arrived(next) => {
                    ship = next;
                    if let Some(transition) = transition {
                        // Settle rather than leave the camera half-turned
                        ship.orientation = transition.target();
                        events.push(NavEvent::TransitionCompleted);
                    }
                    info!("Autopilot arrived at {}", ship.position);
                    events.push(NavEvent::AutopilotArrived {
                        position: ship.position,
                    });
                    mode = FlightMode::Manual;
                }
            }
        }
    }

    if let FlightMode::Autopilot {
        target,
        transition: Some(transition),
    } = mode
    {
        match transition.advance(dt) {
            TransitionStep::Running(next, orientation) => {
                ship.orientation = orientation;
                mode = FlightMode::Autopilot {
                    target,
                    transition: Some(next),
                };
            }
            TransitionStep::Completed(orientation) => {
                ship.orientation = orientation;
                mode = FlightMode::Autopilot {
                    target,
                    transition: None,
                };
                debug!("Camera transition complete");
                events.push(NavEvent::TransitionCompleted);
            }
        }
    }

    Step {
        state: NavState { ship, mode },
        events,
    }
}

fn manual_override(mode: FlightMode, policy: OverridePolicy, events: &mut Vec<NavEvent>) -> FlightMode {
    let FlightMode::Autopilot { target, transition } = mode else {
        return mode;
    };

    if transition.is_some() {
        debug!("Camera transition cancelled by manual input");
        events.push(NavEvent::TransitionCancelled);
    }

    match policy {
        OverridePolicy::CancelAutopilot => {
            info!("Autopilot cancelled by manual input");
            events.push(NavEvent::AutopilotCancelled);
            FlightMode::Manual
        }
        OverridePolicy::CancelTransition => FlightMode::Autopilot {
            target,
            transition: None,
        },
    }
}
