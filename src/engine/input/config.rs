// Key binding configuration and remapping

use super::action::{default_bindings, Action};
use std::collections::HashMap;
use winit::keyboard::KeyCode;

/// Maps keys to room actions
#[derive(Debug, Clone)]
pub struct InputConfig {
    /// Mapping from keys to actions
    bindings: HashMap<KeyCode, Action>,

    /// Reverse mapping for quick lookups (action -> all keys)
    action_to_keys: HashMap<Action, Vec<KeyCode>>,
}

impl InputConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
            action_to_keys: HashMap::new(),
        }
    }

    /// Create a configuration from a list of bindings
    pub fn from_bindings(bindings: Vec<(KeyCode, Action)>) -> Self {
        let mut config = Self::new();
        for (key, action) in bindings {
            config.bind(key, action);
        }
        config
    }

    /// Bind a key to an action, replacing whatever the key did before
    pub fn bind(&mut self, key: KeyCode, action: Action) {
        self.unbind_key(key);

        self.bindings.insert(key, action);
        self.action_to_keys.entry(action).or_default().push(key);
    }

    /// Unbind a key
    pub fn unbind_key(&mut self, key: KeyCode) {
        if let Some(action) = self.bindings.remove(&key) {
            if let Some(keys) = self.action_to_keys.get_mut(&action) {
                keys.retain(|k| *k != key);
                if keys.is_empty() {
                    self.action_to_keys.remove(&action);
                }
            }
        }
    }

    /// Get the action bound to a key
    pub fn get_action(&self, key: KeyCode) -> Option<Action> {
        self.bindings.get(&key).copied()
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::from_bindings(default_bindings())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_and_lookup() {
        let mut config = InputConfig::new();
        config.bind(KeyCode::KeyJ, Action::Jump);

        assert_eq!(config.get_action(KeyCode::KeyJ), Some(Action::Jump));
        assert_eq!(config.action_to_keys.get(&Action::Jump), Some(&vec![KeyCode::KeyJ]));
    }

    #[test]
    fn test_rebinding_a_key_moves_it() {
        let mut config = InputConfig::new();
        config.bind(KeyCode::KeyJ, Action::Jump);
        config.bind(KeyCode::KeyJ, Action::WalkLeft);

        assert_eq!(config.get_action(KeyCode::KeyJ), Some(Action::WalkLeft));
        assert!(!config.action_to_keys.contains_key(&Action::Jump));
    }

    #[test]
    fn test_unbind_key_keeps_other_keys() {
        let mut config = InputConfig::default();
        config.unbind_key(KeyCode::Space);

        assert_eq!(config.get_action(KeyCode::Space), None);
        assert_eq!(config.get_action(KeyCode::KeyW), Some(Action::Jump));
        assert_eq!(config.action_to_keys.get(&Action::Jump), Some(&vec![KeyCode::KeyW]));
    }

    #[test]
    fn test_unbind_unknown_key_is_noop() {
        let mut config = InputConfig::default();
        config.unbind_key(KeyCode::KeyZ);
        assert_eq!(config.get_action(KeyCode::KeyA), Some(Action::WalkLeft));
    }

    #[test]
    fn test_default_matches_default_bindings() {
        let config = InputConfig::default();
        for (key, action) in default_bindings() {
            assert_eq!(config.get_action(key), Some(action));
        }
    }
}
