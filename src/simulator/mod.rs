//! Headless autopilot for balance checks.
//!
//! Plays whole sessions at a fixed 16 ms step with a look-ahead jumper and
//! aggregates the scores. Uses the same `tick_runner` the front ends do.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::{autopilot_wants_jump, run_session, run_simulation, RunStats};
