// cli.rs - Command-line interface configuration
use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::config::OverridePolicy;

#[derive(Parser, Debug, Clone)]
#[command(name = "verae-nav")]
#[command(about = "Headless space-ship navigation core", long_about = None)]
pub struct Cli {
    /// Flight plan JSON (built-in demo tour when omitted)
    #[arg(long)]
    pub plan: Option<PathBuf>,

    /// Navigation tuning JSON, overrides the plan's own config
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Simulated seconds to run, overrides the plan's duration
    #[arg(long)]
    pub duration: Option<f32>,

    /// Host frame rate
    #[arg(long, default_value = "60.0")]
    pub fps: f32,

    /// Pace frames with the wall clock instead of simulating them back to back
    #[arg(long, default_value = "false")]
    pub realtime: bool,

    /// Print one JSON snapshot per frame on stdout
    #[arg(long, default_value = "false")]
    pub json: bool,

    /// Save the final radar overlay as a PNG
    #[arg(long = "radar-png")]
    pub radar_png: Option<PathBuf>,

    /// What manual input does while the autopilot is flying
    #[arg(long = "override-policy", value_enum)]
    pub override_policy: Option<OverridePolicy>,

    /// Seconds between HUD log lines
    #[arg(long = "hud-interval", default_value = "1.0")]
    pub hud_interval: f32,
}

impl Cli {
    /// Reject numeric arguments that would stall or never end the frame loop
    pub fn validate(&self) -> Result<()> {
        if !(self.fps.is_finite() && self.fps > 0.0) {
            bail!("--fps must be a positive number, got {}", self.fps);
        }
        if let Some(duration) = self.duration {
            if !(duration.is_finite() && duration >= 0.0) {
                bail!("--duration must be zero or positive, got {}", duration);
            }
        }
        if !(self.hud_interval.is_finite() && self.hud_interval >= 0.0) {
            bail!("--hud-interval must be zero or positive, got {}", self.hud_interval);
        }
        Ok(())
    }
}
