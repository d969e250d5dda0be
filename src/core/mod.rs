//! Tunables shared by the game logic and every front end.

pub mod config;
pub mod constants;

pub use config::{ConfigError, RunnerConfig};
pub use constants::*;
