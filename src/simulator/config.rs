//! Simulation configuration.

use crate::core::config::RunnerConfig;

/// Configuration for a batch of autopilot runs.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of runs; run `i` uses seed `seed + i`
    pub num_runs: u32,

    /// Base seed (None = random)
    pub seed: Option<u64>,

    /// Stop a run that is still alive after this much game time
    pub max_ms_per_run: u64,

    /// Jump once the nearest obstacle is this close to the runner's front
    pub lookahead: f64,

    /// Game settings every run starts from
    pub runner: RunnerConfig,

    /// 0 = summary only, 1 = one line per run
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            seed: None,
            max_ms_per_run: 120_000,
            lookahead: 60.0,
            runner: RunnerConfig::default(),
            verbosity: 1,
        }
    }
}
