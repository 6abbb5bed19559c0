// Rusted Thrust - player simulation core
//
// - `core`: shared math
// - `engine`: tick clock and input providers
// - `game`: player entity, collision/render contracts, level

pub mod core;
pub mod engine;
pub mod game;
