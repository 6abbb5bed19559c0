// Keyboard binding configuration and remapping

use super::action::{default_keyboard_bindings, InputKey};
use std::collections::HashMap;
use winit::keyboard::KeyCode;

/// Maps physical key codes to input keys.
/// Several codes may drive the same key (arrows and WASD).
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyCode, InputKey>,
}

impl KeyBindings {
    /// Create an empty binding table
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Create a binding table from a list of pairs
    pub fn from_pairs(pairs: Vec<(KeyCode, InputKey)>) -> Self {
        let mut bindings = Self::empty();
        for (code, key) in pairs {
            bindings.bind(code, key);
        }
        bindings
    }

    /// Bind a key code, replacing whatever it drove before
    pub fn bind(&mut self, code: KeyCode, key: InputKey) {
        self.bindings.insert(code, key);
    }

    /// Remove the binding for a key code
    pub fn unbind_code(&mut self, code: KeyCode) {
        self.bindings.remove(&code);
    }

    /// Remove every code bound to `key`
    pub fn unbind_key(&mut self, key: InputKey) {
        self.bindings.retain(|_, bound| *bound != key);
    }

    /// Get the input key driven by a key code
    pub fn get(&self, code: KeyCode) -> Option<InputKey> {
        self.bindings.get(&code).copied()
    }

    /// All codes currently driving `key`
    pub fn codes_for(&self, key: InputKey) -> Vec<KeyCode> {
        self.bindings
            .iter()
            .filter(|(_, bound)| **bound == key)
            .map(|(code, _)| *code)
            .collect()
    }

    pub fn has_binding(&self, key: InputKey) -> bool {
        self.bindings.values().any(|bound| *bound == key)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Reset to the default layout
    pub fn reset_to_defaults(&mut self) {
        *self = Self::default();
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::from_pairs(default_keyboard_bindings())
    }
}
