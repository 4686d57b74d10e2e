use glam::Vec3;
use verae_nav::config::{NavConfig, OverridePolicy};
use verae_nav::nav::{
    step, AutopilotTarget, CommandSet, NavEvent, NavInput, NavState, Navigator, ShipState,
};
use verae_nav::radar::TrackedObject;
use verae_nav::scenario::{FlightPlan, SelectTarget};
use verae_nav::traits::Command;
use verae_nav::NavError;

const FRAME: f32 = 1.0 / 60.0;

fn navigator_at(position: Vec3) -> Navigator {
    Navigator::new(NavConfig::default(), ShipState::at(position))
}

#[cfg(test)]
mod autopilot_tests {
    use super::*;

    #[test]
    fn test_autopilot_converges_and_stops() {
        let config = NavConfig::default();
        let mut nav = navigator_at(Vec3::ZERO);
        let target = nav.select_point(Vec3::new(100_000.0, 0.0, 0.0)).unwrap();
        let initial = target.distance_from(Vec3::ZERO);
        let bound = (initial / config.flight.speed_epsilon).ceil() as usize;

        let mut arrived = None;
        for tick in 0..bound {
            let snapshot = nav.tick(FRAME, &NavInput::default(), &[]);
            if snapshot.events.iter().any(|e| matches!(e, NavEvent::AutopilotArrived { .. })) {
                arrived = Some((tick, snapshot));
                break;
            }
        }

        let (tick, snapshot) = arrived.expect("autopilot should arrive");
        assert!(tick < bound);
        assert!(snapshot.position.distance(target.aim_point) <= config.autopilot.arrival_threshold);
        assert_eq!(snapshot.velocity, Vec3::ZERO);
        assert!(!snapshot.is_autopilot());
        assert!(!nav.state().is_autopilot());
    }

    #[test]
    fn test_autopilot_speed_respects_limit() {
        let config = NavConfig::default();
        let mut nav = navigator_at(Vec3::ZERO);
        nav.select_point(Vec3::new(-2.0e5, 3.0e4, -1.0e5)).unwrap();

        for _ in 0..600 {
            let snapshot = nav.tick(FRAME, &NavInput::default(), &[]);
            assert!(snapshot.velocity.length() <= config.flight.max_speed * (1.0 + 1e-5));
        }
    }

    #[test]
    fn test_rejects_target_on_top_of_ship() {
        let config = NavConfig::default();
        let mut nav = navigator_at(config.autopilot.standoff);

        let err = nav.select_point(Vec3::ZERO).unwrap_err();

        assert!(matches!(err, NavError::TargetAtPosition { .. }));
        assert!(nav.pending_target().is_none());
    }

    #[test]
    fn test_rejects_non_finite_target() {
        let mut nav = navigator_at(Vec3::ZERO);
        let err = nav.select_point(Vec3::new(f32::NAN, 0.0, 0.0)).unwrap_err();
        assert!(matches!(err, NavError::NonFiniteTarget(_)));
    }
}

#[cfg(test)]
mod scheduling_tests {
    use super::*;

    #[test]
    fn test_pending_target_waits_for_a_step() {
        let mut nav = navigator_at(Vec3::ZERO);
        nav.select_point(Vec3::new(0.0, 0.0, -100_000.0)).unwrap();

        for _ in 0..3 {
            let snapshot = nav.tick(FRAME / 8.0, &NavInput::default(), &[]);
            assert_eq!(snapshot.step, 0);
            assert!(!snapshot.is_autopilot());
        }

        let snapshot = nav.tick(FRAME, &NavInput::default(), &[]);
        assert!(snapshot.is_autopilot());
        assert!(matches!(snapshot.events[0], NavEvent::AutopilotEngaged { .. }));
    }

    #[test]
    fn test_stalled_frame_runs_capped_steps() {
        let config = NavConfig::default();
        let mut nav = navigator_at(Vec3::ZERO);

        let snapshot = nav.tick(2.0, &NavInput::commands(CommandSet::EMPTY), &[]);

        assert_eq!(snapshot.step, config.simulation.max_steps_per_frame as u64);
        assert!(nav.tick(FRAME, &NavInput::default(), &[]).step <= snapshot.step + 2);
    }

    #[test]
    fn test_later_selection_replaces_queued_target() {
        let mut nav = navigator_at(Vec3::ZERO);
        nav.select_point(Vec3::new(50_000.0, 0.0, 0.0)).unwrap();
        let other = nav.select_point(Vec3::new(-50_000.0, 0.0, 0.0)).unwrap();

        let snapshot = nav.tick(FRAME, &NavInput::default(), &[]);

        assert_eq!(nav.state().mode.target(), Some(&other));
        assert!(snapshot.is_transitioning());
    }

    #[test]
    fn test_snapshot_serializes_to_json() {
        let mut nav = navigator_at(Vec3::ZERO);
        let objects = [TrackedObject::new("starphorea", Vec3::new(0.0, 0.0, -80_000.0))];
        nav.select_object("starphorea", &objects).unwrap();

        let snapshot = nav.tick(FRAME, &NavInput::default(), &objects);
        let json = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(json["mode"]["mode"], "autopilot");
        assert_eq!(json["focused"], "starphorea");
        assert_eq!(json["events"][0]["event"], "autopilot_engaged");
    }
}

#[cfg(test)]
mod plan_tests {
    use super::*;

    #[test]
    fn test_demo_plan_reaches_its_destination() {
        let mut plan = FlightPlan::demo();
        plan.prepare().unwrap();
        let mut nav = Navigator::new(plan.config.unwrap_or_default(), ShipState::at(plan.start));
        let mut playback = plan.playback();
        let mut events = Vec::new();

        let frames = (plan.duration / FRAME).round() as usize;
        for _ in 0..frames {
            let cue = playback.advance(nav.simulated_time());
            for target in cue.selections {
                if let SelectTarget::Object(label) = target {
                    nav.select_object(label, &plan.objects).unwrap();
                }
            }
            let snapshot = nav.tick(FRAME, &NavInput::commands(cue.hold), &plan.objects);
            events.extend(snapshot.events);
        }

        assert!(events.iter().any(|e| matches!(e, NavEvent::AutopilotEngaged { .. })));
        assert!(events.contains(&NavEvent::TransitionCompleted));
        let arrival = events
            .iter()
            .find_map(|e| match e {
                NavEvent::AutopilotArrived { position } => Some(*position),
                _ => None,
            })
            .expect("demo tour should arrive");
        assert!(arrival.distance(Vec3::new(0.0, 0.0, 15_000.0)) <= 1.0);
    }
}

#[cfg(test)]
mod motion_tests {
    use super::*;

    /// Autopilot is only ever at rest on the tick it arrives, and arrival leaves autopilot
    fn assert_moving_while_engaged(state: &NavState, tick: usize) {
        assert!(
            !state.is_autopilot() || state.ship.velocity != Vec3::ZERO,
            "autopilot engaged with zero velocity at tick {tick}"
        );
    }

    fn fly(config: &NavConfig, dt: f32, override_at: Option<usize>) -> (NavState, Vec<NavEvent>) {
        let aim = Vec3::new(40_000.0, -5_000.0, -60_000.0);
        let target = AutopilotTarget::new(aim, config.autopilot.standoff);
        let mut state = NavState::new(ShipState::at(Vec3::ZERO));
        let mut events = Vec::new();

        // Engagement tick, possibly with no time passing
        let result = step(&state, &NavInput::select(target), dt, config);
        state = result.state;
        events.extend(result.events);
        assert_moving_while_engaged(&state, 0);

        for tick in 1..2_000 {
            let input = if Some(tick) == override_at {
                NavInput::commands(CommandSet::EMPTY.with(Command::YawLeft))
            } else {
                NavInput::default()
            };
            let result = step(&state, &input, FRAME, config);
            state = result.state;
            events.extend(result.events);
            assert_moving_while_engaged(&state, tick);
            if !state.is_autopilot() {
                break;
            }
        }
        (state, events)
    }

    #[test]
    fn test_engaged_autopilot_is_never_at_rest() {
        let config = NavConfig::default();
        let (state, events) = fly(&config, FRAME, None);

        assert!(!state.is_autopilot());
        assert_eq!(state.ship.velocity, Vec3::ZERO);
        assert!(events.iter().any(|e| matches!(e, NavEvent::AutopilotArrived { .. })));
    }

    #[test]
    fn test_zero_dt_engagement_still_moves() {
        let config = NavConfig::default();
        let (state, events) = fly(&config, 0.0, None);

        assert!(!state.is_autopilot());
        assert!(events.iter().any(|e| matches!(e, NavEvent::AutopilotArrived { .. })));
    }

    #[test]
    fn test_cancel_transition_override_keeps_moving() {
        let mut config = NavConfig::default();
        config.autopilot.override_policy = OverridePolicy::CancelTransition;
        let (state, events) = fly(&config, FRAME, Some(20));

        assert!(events.contains(&NavEvent::TransitionCancelled));
        assert!(!events.contains(&NavEvent::AutopilotCancelled));
        assert!(!state.is_autopilot(), "flight still ends in arrival");
        assert!(events.iter().any(|e| matches!(e, NavEvent::AutopilotArrived { .. })));
    }
}
