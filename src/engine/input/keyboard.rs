// Keyboard-backed input provider fed from winit window events

use super::action::InputKey;
use super::config::KeyBindings;
use super::provider::{InputProvider, InputState};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

#[derive(Debug, Default)]
struct KeyboardState {
    /// Physical keys currently held down
    held: HashSet<KeyCode>,
    bindings: KeyBindings,
}

/// Keyboard input provider.
///
/// Clones share the same key state: the event loop keeps one handle to feed
/// window events while the input handler owns another.
#[derive(Debug, Clone, Default)]
pub struct KeyboardInput {
    state: Rc<RefCell<KeyboardState>>,
}

impl KeyboardInput {
    /// Create a keyboard provider with the default bindings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a keyboard provider with custom bindings
    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self {
            state: Rc::new(RefCell::new(KeyboardState {
                held: HashSet::new(),
                bindings,
            })),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&self, event: &KeyEvent) {
        if event.repeat {
            return;
        }
        if let PhysicalKey::Code(code) = event.physical_key {
            self.handle_key(code, event.state == ElementState::Pressed);
        }
    }

    /// Register a key press or release
    pub fn handle_key(&self, code: KeyCode, pressed: bool) {
        let mut state = self.state.borrow_mut();
        if pressed {
            state.held.insert(code);
        } else {
            state.held.remove(&code);
        }
    }

    /// Remap a key code
    pub fn bind(&self, code: KeyCode, key: InputKey) {
        self.state.borrow_mut().bindings.bind(code, key);
    }

    /// Release everything (e.g. when the window loses focus)
    pub fn release_all(&self) {
        self.state.borrow_mut().held.clear();
    }
}

impl InputProvider for KeyboardInput {
    fn input_state(&self) -> InputState {
        let state = self.state.borrow();
        let mut input = InputState::default();
        for key in state.held.iter().filter_map(|code| state.bindings.get(*code)) {
            input.set(key, true);
        }
        input
    }

    fn name(&self) -> &'static str {
        "keyboard"
    }
}
