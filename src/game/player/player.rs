// Player entity - runs input, physics, collision and animation each tick

use crate::core::math::Rect;
use crate::engine::input::{InputHandler, InputProvider, Observation, PlayerIntentions};
use crate::game::collision::{Collider, CollisionLayer, CollisionResolver};
use crate::game::render::{RenderFrame, Renderable};

use super::animation::{AnimationSet, AnimationSnapshot, Animator};
use super::energy::EnergyPool;
use super::physics::{PhysicsEngine, PhysicsState, PhysicsStatePatch};
use super::stats::{EnergyConfig, Hitbox, PhysicsConfig, WeaponConfig};
use super::weapons::{PlayerAction, Weapons};

/// Unique identifier for a player
pub type PlayerId = u32;

/// Tuning a player is built from
#[derive(Debug, Clone, Default)]
pub struct PlayerConfig {
    pub physics: PhysicsConfig,
    pub energy: EnergyConfig,
    pub weapons: WeaponConfig,
    pub hitbox: Hitbox,
    pub animations: AnimationSet,
}

impl PlayerConfig {
    pub fn standard() -> Self {
        Self {
            animations: AnimationSet::standard(),
            ..Self::default()
        }
    }
}

/// A player-controlled (or AI-controlled) jetpack character
#[derive(Debug)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    hitbox: Hitbox,
    input: InputHandler,
    physics: PhysicsEngine,
    animator: Animator,
    energy: EnergyPool,
    weapons: Weapons,
    /// Intentions read on the last tick
    last_intentions: PlayerIntentions,
}

impl Player {
    pub fn new(
        id: PlayerId,
        name: &str,
        config: PlayerConfig,
        provider: Box<dyn InputProvider>,
        initial: PhysicsState,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            hitbox: config.hitbox,
            input: InputHandler::new(provider),
            physics: PhysicsEngine::new(config.physics, initial),
            animator: Animator::new(config.animations),
            energy: EnergyPool::new(config.energy),
            weapons: Weapons::new(config.weapons),
            last_intentions: PlayerIntentions::default(),
        }
    }

    /// Run one tick.
    ///
    /// Collision resolution happens between physics and animation so the
    /// animator sees the corrected grounded flag.
    pub fn update(&mut self, resolver: &dyn CollisionResolver) -> Vec<PlayerAction> {
        let intentions = self.input.get_intentions();

        self.physics.update(&intentions, self.energy.has_energy());
        resolver.resolve(self.bounds(), &mut self.physics);

        let state = self.physics.get_state();
        self.energy
            .tick(state.is_applying_thrust, state.is_grounded);
        self.animator.update(&state);

        let actions = self
            .weapons
            .tick(&intentions, self.bounds().center(), state.direction);

        self.input.observe(&Observation {
            x: state.x,
            y: state.y,
            is_grounded: state.is_grounded,
        });
        self.last_intentions = intentions;

        actions
    }

    /// Put the player back at (x, y) with a clean flight cycle and full tank
    pub fn respawn(&mut self, x: f32, y: f32) {
        log::info!("{} respawned at ({x:.0}, {y:.0})", self.name);
        self.physics.reset(PhysicsStatePatch::respawn_at(x, y));
        self.animator.reset();
        self.energy.refill();
        self.weapons.reset();
    }

    /// Swap the input source (keyboard, script, AI)
    pub fn set_input_provider(
        &mut self,
        provider: Box<dyn InputProvider>,
    ) -> Box<dyn InputProvider> {
        self.input.set_provider(provider)
    }

    pub fn input_provider_name(&self) -> &'static str {
        self.input.provider_name()
    }

    pub fn physics_state(&self) -> PhysicsState {
        self.physics.get_state()
    }

    pub fn animation_state(&self) -> AnimationSnapshot {
        self.animator.get_state()
    }

    pub fn energy(&self) -> &EnergyPool {
        &self.energy
    }

    pub fn last_intentions(&self) -> PlayerIntentions {
        self.last_intentions
    }
}

impl Collider for Player {
    fn bounds(&self) -> Rect {
        let state = self.physics.get_state();
        Rect::new(state.x, state.y, self.hitbox.width, self.hitbox.height)
    }

    fn layer(&self) -> CollisionLayer {
        CollisionLayer::Player
    }

    fn on_collision(&mut self, other: &dyn Collider) {
        match other.layer() {
            CollisionLayer::Pickup => {
                log::debug!("{} picked up an energy cell", self.name);
                self.energy.refill();
            }
            CollisionLayer::Hazard => {
                log::debug!("{} touched a hazard", self.name);
            }
            _ => {}
        }
    }
}

impl Renderable for Player {
    fn render_frame(&self) -> RenderFrame {
        let physics = self.physics.get_state();
        let animation = self.animator.get_state();
        RenderFrame {
            x: physics.x,
            y: physics.y,
            direction: physics.direction,
            animation: animation.state,
            frame: animation.frame,
        }
    }
}
