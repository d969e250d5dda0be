//! Single-lane runner: jump over obstacles, score by surviving.

pub mod clock;
pub mod collision;
pub mod difficulty;
pub mod logic;
pub mod obstacles;
pub mod physics;
pub mod score;
pub mod snapshot;
pub mod types;

pub use logic::{game_over_message, process_input, tick_runner, RunnerInput};
pub use snapshot::{GameSnapshot, PlayerStatus};
pub use types::{Obstacle, Player, RunnerGame, RunnerPhase};
