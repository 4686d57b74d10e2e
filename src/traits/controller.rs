use serde::{Deserialize, Serialize};

use crate::nav::CommandSet;

/// Discrete flight command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Command {
    MoveForward,
    MoveBack,
    StrafeLeft,
    StrafeRight,
    Ascend,
    Descend,
    YawLeft,
    YawRight,
    PitchUp,
    PitchDown,
}

impl Command {
    pub const ALL: [Command; 10] = [
        Command::MoveForward,
        Command::MoveBack,
        Command::StrafeLeft,
        Command::StrafeRight,
        Command::Ascend,
        Command::Descend,
        Command::YawLeft,
        Command::YawRight,
        Command::PitchUp,
        Command::PitchDown,
    ];

    /// Commands that move the ship
    pub const fn is_translation(self) -> bool {
        matches!(
            self,
            Command::MoveForward
                | Command::MoveBack
                | Command::StrafeLeft
                | Command::StrafeRight
                | Command::Ascend
                | Command::Descend
        )
    }

    /// Commands that turn the ship
    pub const fn is_rotation(self) -> bool {
        !self.is_translation()
    }
}

/// Controller - per-command boolean input state
pub trait Controller {
    /// Check if command is currently held
    fn is_active(&self, command: Command) -> bool;

    /// Freeze the current state into a snapshot for one tick
    fn snapshot(&self) -> CommandSet {
        Command::ALL
            .into_iter()
            .filter(|&command| self.is_active(command))
            .collect()
    }
}
