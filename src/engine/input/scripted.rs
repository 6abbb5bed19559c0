// Simulated input providers: a settable mock and a frame-by-frame script

use super::action::InputKey;
use super::provider::{InputProvider, InputState, Observation};
use super::InputError;
use std::cell::Cell;
use std::rc::Rc;

/// Test provider whose state is set directly.
/// Clones share state, so a test can keep a handle after boxing one.
#[derive(Debug, Clone, Default)]
pub struct MockInput {
    state: Rc<Cell<InputState>>,
}

impl MockInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&self, key: InputKey) {
        let mut state = self.state.get();
        state.set(key, true);
        self.state.set(state);
    }

    pub fn release(&self, key: InputKey) {
        let mut state = self.state.get();
        state.set(key, false);
        self.state.set(state);
    }

    pub fn set_state(&self, state: InputState) {
        self.state.set(state);
    }
}

impl InputProvider for MockInput {
    fn input_state(&self) -> InputState {
        self.state.get()
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

/// Replays a fixed sequence of input frames, one per tick.
/// After the last frame it reports no input, or starts over when looping.
#[derive(Debug, Clone)]
pub struct ScriptedInput {
    frames: Vec<InputState>,
    cursor: usize,
    looping: bool,
}

impl ScriptedInput {
    pub fn new(frames: Vec<InputState>) -> Self {
        Self {
            frames,
            cursor: 0,
            looping: false,
        }
    }

    /// Restart from the first frame after the last one
    pub fn looping(mut self) -> Self {
        self.looping = true;
        self
    }

    /// Parse a script such as `"U*20 RU*5 -*3 S"`.
    ///
    /// Each whitespace-separated token is a set of key letters
    /// (`L` left, `R` right, `U` up, `D` down, `S` shoot, or `-` for none)
    /// optionally followed by `*count` to hold it for several ticks.
    pub fn parse(script: &str) -> Result<Self, InputError> {
        let mut frames = Vec::new();
        for token in script.split_whitespace() {
            let (keys, count) = match token.split_once('*') {
                Some((keys, count)) => {
                    let count = count
                        .parse::<usize>()
                        .ok()
                        .filter(|count| *count > 0)
                        .ok_or_else(|| InputError::BadRepeat(token.to_string()))?;
                    (keys, count)
                }
                None => (token, 1),
            };

            let mut state = InputState::default();
            for letter in keys.chars() {
                let key = match letter.to_ascii_uppercase() {
                    'L' => InputKey::Left,
                    'R' => InputKey::Right,
                    'U' => InputKey::Up,
                    'D' => InputKey::Down,
                    'S' => InputKey::Shoot,
                    '-' => continue,
                    other => {
                        return Err(InputError::BadScriptKey {
                            token: token.to_string(),
                            key: other,
                        })
                    }
                };
                state.set(key, true);
            }
            frames.extend(std::iter::repeat(state).take(count));
        }
        Ok(Self::new(frames))
    }

    /// Number of frames in the script
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// True once a non-looping script has played every frame
    pub fn is_finished(&self) -> bool {
        !self.looping && self.cursor >= self.frames.len()
    }
}

impl InputProvider for ScriptedInput {
    fn input_state(&self) -> InputState {
        self.frames.get(self.cursor).copied().unwrap_or_default()
    }

    fn observe(&mut self, _observation: &Observation) {
        if self.frames.is_empty() {
            return;
        }
        self.cursor += 1;
        if self.looping && self.cursor >= self.frames.len() {
            self.cursor = 0;
        }
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}
