// Input provider contract shared by keyboard, scripted and AI input

use super::action::InputKey;

/// Raw directional/action state reported by a provider for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub shoot: bool,
}

impl InputState {
    /// Check a single key in this state
    pub fn is_pressed(&self, key: InputKey) -> bool {
        match key {
            InputKey::Left => self.left,
            InputKey::Right => self.right,
            InputKey::Up => self.up,
            InputKey::Down => self.down,
            InputKey::Shoot => self.shoot,
        }
    }

    /// Set a single key in this state
    pub fn set(&mut self, key: InputKey, pressed: bool) {
        match key {
            InputKey::Left => self.left = pressed,
            InputKey::Right => self.right = pressed,
            InputKey::Up => self.up = pressed,
            InputKey::Down => self.down = pressed,
            InputKey::Shoot => self.shoot = pressed,
        }
    }

    /// Builder-style variant of [`InputState::set`]
    pub fn with(mut self, key: InputKey) -> Self {
        self.set(key, true);
        self
    }
}

/// What a provider gets to see of the world after each tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Observation {
    pub x: f32,
    pub y: f32,
    pub is_grounded: bool,
}

/// Source of player input.
///
/// The simulation only ever talks to this trait, so keyboard, scripted and
/// AI input can be swapped without it noticing.
pub trait InputProvider {
    /// Current state of every key
    fn input_state(&self) -> InputState;

    /// Check a single key
    fn is_key_pressed(&self, key: InputKey) -> bool {
        self.input_state().is_pressed(key)
    }

    /// Called once at the end of every tick with the entity's new position
    fn observe(&mut self, _observation: &Observation) {}

    /// Short label for logs
    fn name(&self) -> &'static str;
}
