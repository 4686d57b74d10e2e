use serde::{Deserialize, Serialize};

use crate::traits::{Command, Controller};

/// Immutable per-tick snapshot of held commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct CommandSet {
    bits: u16,
}

impl CommandSet {
    pub const EMPTY: CommandSet = CommandSet { bits: 0 };

    const fn bit(command: Command) -> u16 {
        1 << command as u16
    }

    pub const fn with(self, command: Command) -> Self {
        Self {
            bits: self.bits | Self::bit(command),
        }
    }

    pub fn insert(&mut self, command: Command) {
        self.bits |= Self::bit(command);
    }

    pub fn remove(&mut self, command: Command) {
        self.bits &= !Self::bit(command);
    }

    pub const fn contains(&self, command: Command) -> bool {
        self.bits & Self::bit(command) != 0
    }

    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = Command> + '_ {
        Command::ALL.into_iter().filter(|&c| self.contains(c))
    }

    /// Any translation or rotation command held
    pub const fn has_manual_input(&self) -> bool {
        !self.is_empty()
    }

    pub fn has_translation(&self) -> bool {
        self.iter().any(Command::is_translation)
    }

    pub fn has_rotation(&self) -> bool {
        self.iter().any(Command::is_rotation)
    }

    /// +1, -1 or 0 for a pair of opposing commands
    pub const fn axis(&self, positive: Command, negative: Command) -> f32 {
        match (self.contains(positive), self.contains(negative)) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }
}

impl FromIterator<Command> for CommandSet {
    fn from_iter<I: IntoIterator<Item = Command>>(iter: I) -> Self {
        iter.into_iter().fold(CommandSet::EMPTY, CommandSet::with)
    }
}

impl Controller for CommandSet {
    fn is_active(&self, command: Command) -> bool {
        self.contains(command)
    }

    fn snapshot(&self) -> CommandSet {
        *self
    }
}

impl Serialize for CommandSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for CommandSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let commands = Vec::<Command>::deserialize(deserializer)?;
        Ok(commands.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set() {
        let set = CommandSet::default();
        assert!(set.is_empty());
        assert!(!set.has_manual_input());
        assert_eq!(set.len(), 0);
        assert_eq!(set, CommandSet::EMPTY);
    }

    #[test]
    fn insert_and_remove() {
        let mut set = CommandSet::EMPTY;
        set.insert(Command::PitchDown);
        set.insert(Command::PitchDown);
        assert_eq!(set.len(), 1);
        assert!(set.has_rotation());
        assert!(!set.has_translation());

        set.remove(Command::PitchDown);
        assert!(set.is_empty());
    }

    #[test]
    fn opposing_commands_cancel() {
        let set: CommandSet = [Command::MoveForward, Command::MoveBack, Command::StrafeRight]
            .into_iter()
            .collect();

        assert_eq!(set.axis(Command::MoveForward, Command::MoveBack), 0.0);
        assert_eq!(set.axis(Command::StrafeRight, Command::StrafeLeft), 1.0);
        assert_eq!(set.axis(Command::StrafeLeft, Command::StrafeRight), -1.0);
        // Opposing keys still count as manual input
        assert!(set.has_manual_input());
    }

    #[test]
    fn iterates_in_declaration_order() {
        let set: CommandSet = [Command::YawRight, Command::MoveForward].into_iter().collect();
        let commands: Vec<_> = set.iter().collect();
        assert_eq!(commands, vec![Command::MoveForward, Command::YawRight]);
    }

    #[test]
    fn serializes_as_list() {
        let set = CommandSet::EMPTY.with(Command::Ascend).with(Command::YawLeft);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["ascend","yaw-left"]"#);

        let back: CommandSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
