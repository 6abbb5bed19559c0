// Input key definitions and default keyboard mappings

use std::fmt;
use std::str::FromStr;

use winit::keyboard::KeyCode;

use super::InputError;

/// Device-independent keys every input provider reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKey {
    Left,
    Right,
    Up,
    Down,
    Shoot,
}

impl InputKey {
    pub const ALL: [InputKey; 5] = [
        InputKey::Left,
        InputKey::Right,
        InputKey::Up,
        InputKey::Down,
        InputKey::Shoot,
    ];

    /// Name used by scripts and `is_key_pressed` lookups
    pub fn name(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
            Self::Shoot => "shoot",
        }
    }
}

impl fmt::Display for InputKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InputKey {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InputKey::ALL
            .into_iter()
            .find(|key| key.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| InputError::UnknownKey(s.to_string()))
    }
}

/// Default keyboard bindings (arrows and WASD, space to shoot)
pub fn default_keyboard_bindings() -> Vec<(KeyCode, InputKey)> {
    vec![
        (KeyCode::ArrowLeft, InputKey::Left),
        (KeyCode::ArrowRight, InputKey::Right),
        (KeyCode::ArrowUp, InputKey::Up),
        (KeyCode::ArrowDown, InputKey::Down),
        (KeyCode::KeyA, InputKey::Left),
        (KeyCode::KeyD, InputKey::Right),
        (KeyCode::KeyW, InputKey::Up),
        (KeyCode::KeyS, InputKey::Down),
        (KeyCode::Space, InputKey::Shoot),
    ]
}
