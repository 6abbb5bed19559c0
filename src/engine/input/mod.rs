// Input handling system
//
// Player input comes from an `InputProvider` (keyboard, scripted replay,
// settable mock, or goal-seeking AI). The `InputHandler` owns the active
// provider, turns its raw key state into `PlayerIntentions`, and can swap
// providers mid-session.
//
// ## Architecture
//
// - `action`: Input keys and default keyboard layout
// - `config`: Key binding remapping
// - `provider`: The provider contract and raw input state
// - `keyboard`: winit-backed keyboard provider
// - `scripted`: Mock and frame-script providers
// - `ai`: Goal-seeking provider
// - `handler`: Provider -> intentions
//
// ## Usage Example
//
// ```rust
// use engine::input::{InputHandler, KeyboardInput};
//
// let keyboard = KeyboardInput::new();
// let handler = InputHandler::new(Box::new(keyboard.clone()));
//
// // In your event loop, feed keyboard events
// keyboard.process_keyboard_event(&key_event);
//
// // Once per tick
// let intentions = handler.get_intentions();
// ```

pub mod action;
pub mod ai;
pub mod config;
pub mod handler;
pub mod keyboard;
pub mod provider;
pub mod scripted;

// Re-export commonly used types
pub use action::InputKey;
pub use ai::GoalSeekingInput;
pub use config::KeyBindings;
pub use handler::{InputHandler, PlayerIntentions};
pub use keyboard::KeyboardInput;
pub use provider::{InputProvider, InputState, Observation};
pub use scripted::{MockInput, ScriptedInput};

/// Input configuration and scripting errors
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Unknown input key: {0}")]
    UnknownKey(String),

    #[error("Invalid key '{key}' in script token '{token}'")]
    BadScriptKey { token: String, key: char },

    #[error("Invalid repeat count in script token '{0}'")]
    BadRepeat(String),
}
