// Input manager - turns winit key events into room actions

use super::action::Action;
use super::config::InputConfig;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Collects the actions triggered by key presses during a frame
#[derive(Debug, Default)]
pub struct InputManager {
    config: InputConfig,

    /// Actions pressed since the last `drain`, in press order
    pressed: Vec<Action>,
}

impl InputManager {
    /// Create an input manager with default bindings
    pub fn new() -> Self {
        Self::with_config(InputConfig::default())
    }

    /// Create an input manager with custom bindings
    pub fn with_config(config: InputConfig) -> Self {
        Self {
            config,
            pressed: Vec::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        // Only process physical key presses
        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.process_key(key_code, event.state, event.repeat);
        }
    }

    /// Process a key transition
    pub fn process_key(&mut self, key: KeyCode, state: ElementState, repeat: bool) {
        // Actions are edge-triggered: releases and key repeats do nothing
        if state != ElementState::Pressed || repeat {
            return;
        }

        if let Some(action) = self.config.get_action(key) {
            log::debug!("{:?} -> {:?}", key, action);
            self.pressed.push(action);
        }
    }

    /// Take the actions pressed this frame
    pub fn drain(&mut self) -> Vec<Action> {
        std::mem::take(&mut self.pressed)
    }
}
