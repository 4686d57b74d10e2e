//! Flight control model
//!
//! Manual flight smooths linear and angular velocity toward what the held
//! commands ask for. Autopilot flight heads straight for the aim point at
//! full speed and shortens the final step so it lands on the point instead
//! of overshooting it.

use glam::{Quat, Vec2, Vec3};
use log::trace;

use super::autopilot::AutopilotTarget;
use super::command::CommandSet;
use super::ship::ShipState;
use crate::config::FlightTuning;
use crate::math::{approach2, approach3};
use crate::traits::Command;

/// Result of one autopilot tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pursuit {
    Cruising(ShipState),
    /// Within the arrival threshold; velocity is exactly zero
    Arrived(ShipState),
}

/// Unit-less thrust direction requested by the held commands, in world space
pub fn desired_direction(ship: &ShipState, commands: &CommandSet) -> Vec3 {
    let forward = commands.axis(Command::MoveForward, Command::MoveBack);
    let strafe = commands.axis(Command::StrafeRight, Command::StrafeLeft);
    let lift = commands.axis(Command::Ascend, Command::Descend);

    ship.forward() * forward + ship.right() * strafe + ship.up() * lift
}

/// Requested (yaw, pitch) turn direction. Positive yaw turns left, positive pitch noses up.
pub fn desired_turn(commands: &CommandSet) -> Vec2 {
    Vec2::new(
        commands.axis(Command::YawLeft, Command::YawRight),
        commands.axis(Command::PitchUp, Command::PitchDown),
    )
}

/// One tick of keyboard flight
pub fn manual_step(ship: &ShipState, commands: &CommandSet, tuning: &FlightTuning, dt: f32) -> ShipState {
    let desired_velocity = desired_direction(ship, commands).normalize_or_zero() * tuning.max_speed;
    let velocity = approach3(ship.velocity, desired_velocity, &tuning.linear_response(), dt);
    let position = ship.position + velocity * dt;

    let desired_rotation = desired_turn(commands).normalize_or_zero() * tuning.max_rotation_speed;
    let rotational_velocity = approach2(
        ship.rotational_velocity,
        desired_rotation,
        &tuning.angular_response(),
        dt,
    );
    let orientation = apply_turn(ship.orientation, rotational_velocity, dt);

    ShipState {
        position,
        velocity,
        orientation,
        rotational_velocity,
    }
}

/// Rotate about the ship's own up axis (yaw), then its own right axis (pitch)
pub fn apply_turn(orientation: Quat, rotational_velocity: Vec2, dt: f32) -> Quat {
    if rotational_velocity == Vec2::ZERO {
        return orientation;
    }
    let yaw = Quat::from_rotation_y(rotational_velocity.x * dt);
    let pitch = Quat::from_rotation_x(rotational_velocity.y * dt);
    (orientation * yaw * pitch).normalize()
}

/// One tick of autopilot flight toward `target`
///
/// Orientation is left alone; the camera transition owns it while the autopilot flies.
pub fn autopilot_step(
    ship: &ShipState,
    target: &AutopilotTarget,
    tuning: &FlightTuning,
    arrival_threshold: f32,
    dt: f32,
) -> Pursuit {
    let offset = target.offset_from(ship.position);
    let distance = offset.length();

    if distance <= arrival_threshold {
        return Pursuit::Arrived(ShipState {
            velocity: Vec3::ZERO,
            ..*ship
        });
    }

    let direction = offset / distance;
    // Never cover more than the remaining distance in one tick
    let speed = if dt > 0.0 {
        tuning.max_speed.min(distance / dt)
    } else {
        tuning.max_speed
    };
    let velocity = direction * speed;

    trace!("autopilot: distance {:.1}, speed {:.1}", distance, speed);

    Pursuit::Cruising(ShipState {
        position: ship.position + velocity * dt.max(0.0),
        velocity,
        ..*ship
    })
}
