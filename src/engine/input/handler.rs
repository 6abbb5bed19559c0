// Input handler - turns provider state into player intentions

use super::provider::{InputProvider, Observation};

/// Device-independent requests for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayerIntentions {
    pub move_left: bool,
    pub move_right: bool,
    pub wants_to_fly: bool,
    pub wants_to_shoot: bool,
    pub wants_to_drop_bomb: bool,
}

/// Owns the active input provider and maps it to intentions
pub struct InputHandler {
    provider: Box<dyn InputProvider>,
}

impl InputHandler {
    pub fn new(provider: Box<dyn InputProvider>) -> Self {
        Self { provider }
    }

    /// Intentions for the current tick. Pure function of the provider state.
    pub fn get_intentions(&self) -> PlayerIntentions {
        let state = self.provider.input_state();
        PlayerIntentions {
            move_left: state.left,
            move_right: state.right,
            wants_to_fly: state.up,
            wants_to_shoot: state.shoot,
            wants_to_drop_bomb: state.down,
        }
    }

    /// Swap the provider at runtime, returning the previous one
    pub fn set_provider(&mut self, provider: Box<dyn InputProvider>) -> Box<dyn InputProvider> {
        log::info!(
            "Input provider switched: {} -> {}",
            self.provider.name(),
            provider.name()
        );
        std::mem::replace(&mut self.provider, provider)
    }

    /// Name of the active provider
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Forward the end-of-tick observation to the provider
    pub fn observe(&mut self, observation: &Observation) {
        self.provider.observe(observation);
    }
}

impl std::fmt::Debug for InputHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputHandler")
            .field("provider", &self.provider.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::{InputKey, InputState, MockInput, ScriptedInput};

    #[test]
    fn test_neutral_intentions() {
        let handler = InputHandler::new(Box::new(MockInput::new()));
        assert_eq!(handler.get_intentions(), PlayerIntentions::default());
    }

    #[test]
    fn test_key_to_intention_mapping() {
        let mock = MockInput::new();
        mock.press(InputKey::Left);
        mock.press(InputKey::Up);
        mock.press(InputKey::Down);
        let handler = InputHandler::new(Box::new(mock));

        let intentions = handler.get_intentions();
        assert!(intentions.move_left);
        assert!(!intentions.move_right);
        assert!(intentions.wants_to_fly);
        assert!(!intentions.wants_to_shoot);
        assert!(intentions.wants_to_drop_bomb);
    }

    #[test]
    fn test_get_intentions_has_no_memory() {
        let mock = MockInput::new();
        let handler = InputHandler::new(Box::new(mock.clone()));

        mock.press(InputKey::Shoot);
        assert!(handler.get_intentions().wants_to_shoot);
        assert!(handler.get_intentions().wants_to_shoot);

        mock.release(InputKey::Shoot);
        assert!(!handler.get_intentions().wants_to_shoot);
    }

    #[test]
    fn test_set_provider_swaps_without_rebuilding() {
        let mut handler = InputHandler::new(Box::new(MockInput::new()));
        assert_eq!(handler.provider_name(), "mock");

        let script = ScriptedInput::new(vec![InputState::default().with(InputKey::Right)]);
        let previous = handler.set_provider(Box::new(script));

        assert_eq!(previous.name(), "mock");
        assert_eq!(handler.provider_name(), "scripted");
        assert!(handler.get_intentions().move_right);
    }

    #[test]
    fn test_observe_advances_scripted_provider() {
        let frames = vec![
            InputState::default().with(InputKey::Up),
            InputState::default().with(InputKey::Shoot),
        ];
        let mut handler = InputHandler::new(Box::new(ScriptedInput::new(frames)));

        assert!(handler.get_intentions().wants_to_fly);
        handler.observe(&Observation::default());
        assert!(handler.get_intentions().wants_to_shoot);
        assert!(!handler.get_intentions().wants_to_fly);
    }
}
