// Lights Out game engine - pure state, no UI dependencies

pub mod error;
pub mod game;

pub use error::GameError;
pub use game::{LightsOutGame, MAX_GRID_SIZE, MIN_GRID_SIZE};
