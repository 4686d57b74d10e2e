use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::nav::CommandSet;
use crate::traits::{Command, Controller};

/// Adapter that turns Winit keyboard events into held flight commands
#[derive(Debug, Clone, Default)]
pub struct KeyboardController {
    held: CommandSet,
    /// Keys currently down that map to a command; a command stays held while any of its keys is
    keys_down: Vec<KeyCode>,
}

impl KeyboardController {
    /// Create a controller with nothing held
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a Winit WindowEvent and update internal state
    pub fn process_event(&mut self, event: &WindowEvent) {
        if let WindowEvent::KeyboardInput { event, .. } = event {
            if let PhysicalKey::Code(keycode) = event.physical_key {
                match event.state {
                    ElementState::Pressed => self.press(keycode),
                    ElementState::Released => self.release(keycode),
                }
            }
        }
    }

    /// Key went down
    pub fn press(&mut self, keycode: KeyCode) {
        if Self::keycode_to_command(keycode).is_some() && !self.keys_down.contains(&keycode) {
            self.keys_down.push(keycode);
            self.rebuild();
        }
    }

    /// Key went up
    pub fn release(&mut self, keycode: KeyCode) {
        let before = self.keys_down.len();
        self.keys_down.retain(|&k| k != keycode);
        if self.keys_down.len() != before {
            self.rebuild();
        }
    }

    /// Forget every held key, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        self.keys_down.clear();
        self.held = CommandSet::EMPTY;
    }

    fn rebuild(&mut self) {
        self.held = self
            .keys_down
            .iter()
            .filter_map(|&k| Self::keycode_to_command(k))
            .collect();
    }

    /// Map Winit KeyCode to Command
    pub fn keycode_to_command(keycode: KeyCode) -> Option<Command> {
        match keycode {
            KeyCode::KeyW => Some(Command::MoveForward),
            KeyCode::KeyS => Some(Command::MoveBack),
            KeyCode::KeyA => Some(Command::StrafeLeft),
            KeyCode::KeyD => Some(Command::StrafeRight),
            KeyCode::Space => Some(Command::Ascend),
            KeyCode::ShiftLeft | KeyCode::ShiftRight => Some(Command::Descend),
            KeyCode::KeyQ | KeyCode::ArrowLeft | KeyCode::Quote => Some(Command::YawLeft),
            KeyCode::KeyE | KeyCode::ArrowRight | KeyCode::Semicolon => Some(Command::YawRight),
            KeyCode::KeyL | KeyCode::ArrowUp => Some(Command::PitchUp),
            KeyCode::KeyK | KeyCode::ArrowDown => Some(Command::PitchDown),
            _ => None,
        }
    }
}

impl Controller for KeyboardController {
    fn is_active(&self, command: Command) -> bool {
        self.held.contains(command)
    }

    fn snapshot(&self) -> CommandSet {
        self.held
    }
}
