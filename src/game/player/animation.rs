// Player animation - derives an animation state and frame from physics

use super::physics::PhysicsState;
use std::collections::HashMap;

/// Animation states the player sprite can be in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Stand,
    Walk,
    Jump,
    Fly,
}

impl AnimationState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Stand => "stand",
            Self::Walk => "walk",
            Self::Jump => "jump",
            Self::Fly => "fly",
        }
    }
}

/// Playback settings for one animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationConfig {
    /// Number of frames
    pub frames: usize,
    /// Ticks each frame is shown for
    pub speed: u32,
    pub looping: bool,
    /// Play frames backwards (wraps around regardless of `looping`)
    pub reverse: bool,
}

impl AnimationConfig {
    /// Looping, forward animation
    pub fn looping(frames: usize, speed: u32) -> Self {
        Self {
            frames,
            speed,
            looping: true,
            reverse: false,
        }
    }

    /// Plays once and holds the last frame
    pub fn one_shot(frames: usize, speed: u32) -> Self {
        Self {
            looping: false,
            ..Self::looping(frames, speed)
        }
    }

    pub fn reversed(mut self) -> Self {
        self.reverse = true;
        self
    }

    /// Zero frames or zero speed cannot be played
    pub fn is_playable(&self) -> bool {
        self.frames > 0 && self.speed > 0
    }

    pub fn last_frame(&self) -> usize {
        self.frames.saturating_sub(1)
    }

    /// Frame shown after `frame` once its time is up
    fn next_frame(&self, frame: usize) -> usize {
        if self.reverse {
            if frame == 0 {
                self.last_frame()
            } else {
                frame - 1
            }
        } else if !self.looping {
            (frame + 1).min(self.last_frame())
        } else {
            (frame + 1) % self.frames
        }
    }
}

/// Animation configs keyed by state
#[derive(Debug, Clone, Default)]
pub struct AnimationSet {
    animations: HashMap<AnimationState, AnimationConfig>,
}

impl AnimationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The player's standard sprite timings
    pub fn standard() -> Self {
        Self::new()
            .with(AnimationState::Stand, AnimationConfig::looping(4, 10))
            .with(AnimationState::Walk, AnimationConfig::looping(6, 6))
            // Has to hold its last frame so the hand-off to fly can happen
            .with(AnimationState::Jump, AnimationConfig::one_shot(4, 5))
            .with(AnimationState::Fly, AnimationConfig::looping(4, 4))
    }

    pub fn with(mut self, state: AnimationState, config: AnimationConfig) -> Self {
        self.insert(state, config);
        self
    }

    pub fn insert(&mut self, state: AnimationState, config: AnimationConfig) {
        self.animations.insert(state, config);
    }

    /// Config for a state, if present and playable
    pub fn get(&self, state: AnimationState) -> Option<&AnimationConfig> {
        self.animations
            .get(&state)
            .filter(|config| config.is_playable())
    }
}

/// What the renderer needs to draw the current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnimationSnapshot {
    pub state: AnimationState,
    pub frame: usize,
    /// Ticks spent on the current frame
    pub tick: u32,
}

/// Derives the animation state from physics snapshots.
/// Reads physics, never writes it.
#[derive(Debug, Clone)]
pub struct Animator {
    animations: AnimationSet,
    current: AnimationSnapshot,
}

impl Animator {
    pub fn new(animations: AnimationSet) -> Self {
        Self {
            animations,
            current: AnimationSnapshot::default(),
        }
    }

    /// Advance one tick using the post-collision physics state
    pub fn update(&mut self, physics: &PhysicsState) {
        let next = self.next_state(physics);

        if next != self.current.state {
            log::trace!(
                "Animation {} -> {}",
                self.current.state.name(),
                next.name()
            );
            self.current = AnimationSnapshot {
                state: next,
                frame: 0,
                tick: 0,
            };
            return;
        }

        // Missing or broken config: hold the frame
        let Some(config) = self.animations.get(self.current.state) else {
            return;
        };

        self.current.tick += 1;
        if self.current.tick >= config.speed {
            self.current.tick = 0;
            self.current.frame = config.next_frame(self.current.frame);
        }
    }

    fn next_state(&self, physics: &PhysicsState) -> AnimationState {
        let current = self.current.state;

        if physics.is_grounded {
            if physics.is_charging_fly {
                // The charge crouch reuses the jump pose
                AnimationState::Jump
            } else if physics.vx != 0.0 {
                AnimationState::Walk
            } else {
                AnimationState::Stand
            }
        } else if physics.is_applying_thrust || physics.is_charging_fly {
            if current == AnimationState::Jump && self.jump_finished() {
                AnimationState::Fly
            } else if current == AnimationState::Fly {
                AnimationState::Fly
            } else {
                AnimationState::Jump
            }
        } else {
            AnimationState::Jump
        }
    }

    /// Jump has reached its last frame. Without a jump config there is
    /// nothing to wait for.
    fn jump_finished(&self) -> bool {
        self.animations
            .get(AnimationState::Jump)
            .map(|config| self.current.frame >= config.last_frame())
            .unwrap_or(true)
    }

    /// Snapshot of the current animation
    pub fn get_state(&self) -> AnimationSnapshot {
        self.current
    }

    /// Back to standing on frame 0
    pub fn reset(&mut self) {
        self.current = AnimationSnapshot::default();
    }

    pub fn animations(&self) -> &AnimationSet {
        &self.animations
    }
}

impl Default for Animator {
    fn default() -> Self {
        Self::new(AnimationSet::standard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grounded() -> PhysicsState {
        PhysicsState {
            is_grounded: true,
            ..PhysicsState::default()
        }
    }

    fn thrusting_airborne() -> PhysicsState {
        PhysicsState {
            is_applying_thrust: true,
            ..PhysicsState::default()
        }
    }

    fn run(animator: &mut Animator, physics: &PhysicsState, ticks: usize) {
        for _ in 0..ticks {
            animator.update(physics);
        }
    }

    #[test]
    fn test_grounded_states() {
        let mut animator = Animator::default();

        animator.update(&grounded());
        assert_eq!(animator.get_state().state, AnimationState::Stand);

        animator.update(&PhysicsState {
            vx: 3.0,
            ..grounded()
        });
        assert_eq!(animator.get_state().state, AnimationState::Walk);

        animator.update(&PhysicsState {
            is_charging_fly: true,
            fly_charge_timer: 1,
            vx: 3.0,
            ..grounded()
        });
        assert_eq!(animator.get_state().state, AnimationState::Jump);
    }

    #[test]
    fn test_falling_is_jump() {
        let mut animator = Animator::default();
        animator.update(&PhysicsState {
            vy: 4.0,
            ..PhysicsState::default()
        });
        assert_eq!(animator.get_state().state, AnimationState::Jump);
    }

    #[test]
    fn test_state_change_resets_frame() {
        let mut animator = Animator::default();
        // Stand: 10 ticks per frame
        run(&mut animator, &grounded(), 25);
        assert_eq!(animator.get_state().frame, 2);

        animator.update(&PhysicsState {
            vx: -3.0,
            ..grounded()
        });
        let snapshot = animator.get_state();
        assert_eq!(snapshot.state, AnimationState::Walk);
        assert_eq!(snapshot.frame, 0);
        assert_eq!(snapshot.tick, 0);
    }

    #[test]
    fn test_jump_hands_off_to_fly_on_last_frame() {
        let mut animator = Animator::default();
        let airborne = thrusting_airborne();

        // Enter jump
        animator.update(&airborne);
        assert_eq!(animator.get_state().state, AnimationState::Jump);

        // 4 frames at 5 ticks each: frame 3 is reached after 15 more ticks
        run(&mut animator, &airborne, 14);
        assert_eq!(animator.get_state().frame, 2);
        animator.update(&airborne);
        assert_eq!(animator.get_state().frame, 3);
        assert_eq!(animator.get_state().state, AnimationState::Jump);

        animator.update(&airborne);
        let snapshot = animator.get_state();
        assert_eq!(snapshot.state, AnimationState::Fly);
        assert_eq!(snapshot.frame, 0);
    }

    #[test]
    fn test_fly_persists_while_thrusting() {
        let mut animator = Animator::default();
        run(&mut animator, &thrusting_airborne(), 17);
        assert_eq!(animator.get_state().state, AnimationState::Fly);

        run(&mut animator, &thrusting_airborne(), 40);
        assert_eq!(animator.get_state().state, AnimationState::Fly);
    }

    #[test]
    fn test_fly_drops_to_jump_when_thrust_stops() {
        let mut animator = Animator::default();
        run(&mut animator, &thrusting_airborne(), 17);
        assert_eq!(animator.get_state().state, AnimationState::Fly);

        animator.update(&PhysicsState::default());
        assert_eq!(animator.get_state().state, AnimationState::Jump);
        assert_eq!(animator.get_state().frame, 0);
    }

    #[test]
    fn test_looping_wraps() {
        let set = AnimationSet::new().with(AnimationState::Stand, AnimationConfig::looping(3, 1));
        let mut animator = Animator::new(set);
        let frames: Vec<usize> = (0..5)
            .map(|_| {
                animator.update(&grounded());
                animator.get_state().frame
            })
            .collect();
        assert_eq!(frames, vec![1, 2, 0, 1, 2]);
    }

    #[test]
    fn test_one_shot_clamps() {
        let set = AnimationSet::new().with(AnimationState::Stand, AnimationConfig::one_shot(3, 1));
        let mut animator = Animator::new(set);
        run(&mut animator, &grounded(), 10);
        assert_eq!(animator.get_state().frame, 2);
    }

    #[test]
    fn test_reverse_wraps_downward() {
        let set = AnimationSet::new().with(
            AnimationState::Stand,
            AnimationConfig::looping(3, 1).reversed(),
        );
        let mut animator = Animator::new(set);
        let frames: Vec<usize> = (0..4)
            .map(|_| {
                animator.update(&grounded());
                animator.get_state().frame
            })
            .collect();
        assert_eq!(frames, vec![2, 1, 0, 2]);
    }

    #[test]
    fn test_missing_config_freezes_frame() {
        let mut animator = Animator::new(AnimationSet::new());
        run(&mut animator, &grounded(), 50);
        let snapshot = animator.get_state();
        assert_eq!(snapshot.state, AnimationState::Stand);
        assert_eq!(snapshot.frame, 0);
        assert_eq!(snapshot.tick, 0);
    }

    #[test]
    fn test_unplayable_config_is_treated_as_missing() {
        let set = AnimationSet::new().with(AnimationState::Stand, AnimationConfig::looping(0, 5));
        assert!(set.get(AnimationState::Stand).is_none());

        let mut animator = Animator::new(set);
        run(&mut animator, &grounded(), 20);
        assert_eq!(animator.get_state().frame, 0);
    }

    #[test]
    fn test_missing_jump_config_goes_straight_to_fly() {
        let set = AnimationSet::new().with(AnimationState::Fly, AnimationConfig::looping(2, 2));
        let mut animator = Animator::new(set);
        animator.update(&thrusting_airborne());
        assert_eq!(animator.get_state().state, AnimationState::Jump);
        animator.update(&thrusting_airborne());
        assert_eq!(animator.get_state().state, AnimationState::Fly);
    }

    #[test]
    fn test_reset() {
        let mut animator = Animator::default();
        run(&mut animator, &thrusting_airborne(), 30);
        animator.reset();
        assert_eq!(animator.get_state(), AnimationSnapshot::default());
    }
}
