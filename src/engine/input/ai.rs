// Goal-seeking input provider: steers the entity toward a target point

use super::provider::{InputProvider, InputState, Observation};
use glam::Vec2;

/// Distance (world units) inside which an axis counts as reached
const DEFAULT_TOLERANCE: f32 = 4.0;

#[derive(Debug, Clone)]
pub struct GoalSeekingInput {
    target: Vec2,
    tolerance: f32,
    /// Last observed position; `None` until the first tick completes
    position: Option<Vec2>,
}

impl GoalSeekingInput {
    pub fn new(target: Vec2) -> Self {
        Self {
            target,
            tolerance: DEFAULT_TOLERANCE,
            position: None,
        }
    }

    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance.abs();
        self
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    /// Whether the last observed position is within tolerance of the target
    pub fn has_arrived(&self) -> bool {
        self.position
            .map(|pos| pos.distance(self.target) <= self.tolerance)
            .unwrap_or(false)
    }
}

impl InputProvider for GoalSeekingInput {
    fn input_state(&self) -> InputState {
        let Some(pos) = self.position else {
            return InputState::default();
        };

        let delta = self.target - pos;
        InputState {
            left: delta.x < -self.tolerance,
            right: delta.x > self.tolerance,
            // Screen space: a target above us has a smaller y
            up: delta.y < -self.tolerance,
            down: false,
            shoot: false,
        }
    }

    fn observe(&mut self, observation: &Observation) {
        self.position = Some(Vec2::new(observation.x, observation.y));
    }

    fn name(&self) -> &'static str {
        "goal-seeking"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f32, y: f32) -> Observation {
        Observation {
            x,
            y,
            is_grounded: true,
        }
    }

    #[test]
    fn test_neutral_before_first_observation() {
        let ai = GoalSeekingInput::new(Vec2::new(100.0, 0.0));
        assert_eq!(ai.input_state(), InputState::default());
        assert!(!ai.has_arrived());
    }

    #[test]
    fn test_steers_horizontally() {
        let mut ai = GoalSeekingInput::new(Vec2::new(100.0, 50.0));
        ai.observe(&at(0.0, 50.0));
        let state = ai.input_state();
        assert!(state.right && !state.left && !state.up);

        ai.observe(&at(200.0, 50.0));
        let state = ai.input_state();
        assert!(state.left && !state.right);
    }

    #[test]
    fn test_flies_toward_higher_target() {
        let mut ai = GoalSeekingInput::new(Vec2::new(0.0, 0.0));
        ai.observe(&at(0.0, 100.0));
        assert!(ai.input_state().up);

        // Target below: let gravity do the work
        ai.set_target(Vec2::new(0.0, 300.0));
        assert!(!ai.input_state().up);
    }

    #[test]
    fn test_arrival_within_tolerance() {
        let mut ai = GoalSeekingInput::new(Vec2::new(10.0, 10.0)).with_tolerance(2.0);
        ai.observe(&at(11.0, 11.0));
        assert!(ai.has_arrived());
        assert_eq!(ai.input_state(), InputState::default());
    }
}
