use anyhow::Result;
use clap::Parser;
use log::{info, warn};
use std::io::Write;

use verae_nav::{
    cli::Cli,
    config::NavConfig,
    core::Throttled,
    frame::{FrameInfo, RealtimeFrames, SimulatedFrames},
    nav::{NavInput, NavSnapshot, Navigator, ShipState},
    radar::{self, OverlayStyle},
    scenario::{FlightPlan, SelectTarget},
};

fn load_plan(cli: &Cli) -> Result<FlightPlan> {
    match &cli.plan {
        Some(path) => FlightPlan::from_json_file(path),
        None => {
            let mut plan = FlightPlan::demo();
            plan.prepare()?;
            Ok(plan)
        }
    }
}

fn load_config(cli: &Cli, plan: &FlightPlan) -> Result<NavConfig> {
    let mut config = match &cli.config {
        Some(path) => NavConfig::from_json_file(path)?,
        None => plan.config.unwrap_or_default(),
    };
    if let Some(policy) = cli.override_policy {
        config.autopilot.override_policy = policy;
    }
    config.validate()?;
    Ok(config)
}

fn frames(cli: &Cli, duration: f32) -> Box<dyn Iterator<Item = FrameInfo>> {
    if cli.realtime {
        Box::new(RealtimeFrames::new(cli.fps, duration))
    } else {
        Box::new(SimulatedFrames::new(cli.fps, duration))
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    cli.validate()?;

    let plan = load_plan(&cli)?;
    let config = load_config(&cli, &plan)?;
    let duration = cli.duration.unwrap_or(plan.duration);

    info!(
        "Flying {} objects for {:.1}s at {} fps ({} steps/s)",
        plan.objects.len(),
        duration,
        cli.fps,
        config.simulation.step_hz
    );

    let mut navigator = Navigator::new(config, ShipState::at(plan.start));
    let mut playback = plan.playback();
    let mut hud = Throttled::new(cli.hud_interval);
    let mut last: NavSnapshot = navigator.snapshot(&plan.objects, Vec::new());
    let mut out = std::io::stdout().lock();

    if !cli.json {
        writeln!(out, "verae-nav - {}", last.hud_line())?;
    }

    for frame in frames(&cli, duration) {
        let cue = playback.advance(navigator.simulated_time());
        for target in cue.selections {
            let selected = match target {
                SelectTarget::Object(label) => navigator.select_object(label, &plan.objects),
                SelectTarget::Point(point) => navigator.select_point(*point),
            };
            if let Err(e) = selected {
                warn!("Ignoring selection at frame {}: {}", frame.number, e);
            }
        }

        let snapshot = navigator.tick(frame.delta, &NavInput::commands(cue.hold), &plan.objects);

        if cli.json {
            serde_json::to_writer(&mut out, &snapshot)?;
            writeln!(out)?;
        } else if hud.try_tick(frame.delta) {
            writeln!(out, "{}", snapshot.hud_line())?;
        }
        last = snapshot;
    }

    info!("Finished after {} steps: {}", last.step, last.hud_line());

    if let Some(path) = &cli.radar_png {
        let config = navigator.config();
        radar::render(&last.contacts, last.focused.as_deref(), &config.radar, &OverlayStyle::default())
            .save_png(path)?;
        info!("Radar overlay saved to {:?}", path);
    }

    Ok(())
}
