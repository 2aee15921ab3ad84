// Engine modules: game loop, timers, input

pub mod game_loop;
pub mod input;
pub mod timer;
