// Engine modules: game loop timing and input

pub mod game_loop;
pub mod input;
