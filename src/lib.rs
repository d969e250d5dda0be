//! Ridge Runner - single-lane endless runner library
//!
//! The game core lives in `runner`; `ui` and `web` are front ends that
//! only read `GameSnapshot`s and feed `RunnerInput`s back.

pub mod core;
pub mod input;
pub mod logging;
pub mod runner;
pub mod simulator;
pub mod ui;

#[cfg(feature = "web")]
pub mod web;

pub use crate::core::{ConfigError, RunnerConfig};
pub use runner::{
    game_over_message, process_input, tick_runner, GameSnapshot, RunnerGame, RunnerInput,
    RunnerPhase,
};
