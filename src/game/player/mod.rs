// Player entity
//
// This module contains everything that simulates the player:
// - Physics engine with the charge/thrust flight cycle
// - Animator deriving sprite state from physics
// - Jetpack energy and weapons
// - Tuning values
// - The player entity tying them together

pub mod animation;
pub mod energy;
pub mod physics;
#[allow(clippy::module_inception)]
pub mod player;
pub mod stats;
pub mod weapons;

// Re-export commonly used types
pub use animation::{AnimationConfig, AnimationSet, AnimationSnapshot, AnimationState, Animator};
pub use energy::EnergyPool;
pub use physics::{Facing, FlightPhase, PhysicsEngine, PhysicsState, PhysicsStatePatch};
pub use player::{Player, PlayerConfig, PlayerId};
pub use stats::{EnergyConfig, Hitbox, PhysicsConfig, WeaponConfig};
pub use weapons::{PlayerAction, Weapons};
