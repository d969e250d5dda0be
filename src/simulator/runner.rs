//! Autopilot runs at a fixed frame step.

use super::config::SimConfig;
use super::report::SimReport;
use crate::core::constants::REALTIME_FRAME_MS;
use crate::runner::{process_input, tick_runner, RunnerGame, RunnerInput};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Outcome of a single run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunStats {
    pub seed: u64,
    pub score: u32,
    pub elapsed_ms: f64,
    pub ticks: u64,
    pub jumps: u32,
    /// False if the run hit the time cap still alive.
    pub crashed: bool,
}

/// Whether the autopilot would jump right now.
///
/// Looks at obstacles whose right side is still ahead of the runner's back
/// and jumps when the nearest gap is at most `lookahead`.
pub fn autopilot_wants_jump(game: &RunnerGame, lookahead: f64) -> bool {
    if !game.is_running() || !game.is_on_ground() {
        return false;
    }
    let config = &game.config;
    let runner_front = config.player_left + config.player_width;

    game.obstacles
        .iter()
        .filter_map(|obstacle| {
            let right = config.play_area_width - obstacle.offset;
            let left = right - obstacle.width;
            (right > config.player_left).then_some(left - runner_front)
        })
        .any(|gap| gap <= lookahead)
}

/// Play one session from start until collision or the time cap.
pub fn run_session(sim: &SimConfig, seed: u64) -> RunStats {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = RunnerGame::new(sim.runner.clone());
    let step_ms = REALTIME_FRAME_MS as f64;
    let max_ms = sim.max_ms_per_run as f64;

    let mut now_ms = 0.0;
    let mut jumps = 0;
    process_input(&mut game, RunnerInput::Start, now_ms);

    while game.is_running() && now_ms < max_ms {
        if autopilot_wants_jump(&game, sim.lookahead)
            && process_input(&mut game, RunnerInput::Jump, now_ms)
        {
            jumps += 1;
        }
        now_ms += step_ms;
        if !tick_runner(&mut game, now_ms, &mut rng) {
            // An invalid config never recovers
            break;
        }
    }

    tracing::debug!(seed, score = game.score(), jumps, "run finished");

    RunStats {
        seed,
        score: game.score(),
        elapsed_ms: now_ms,
        ticks: game.tick_count,
        jumps,
        crashed: game.is_game_over(),
    }
}

/// Run `num_runs` sessions with consecutive seeds.
pub fn run_simulation(sim: &SimConfig) -> SimReport {
    let base_seed = sim.seed.unwrap_or_else(rand::random);
    let runs: Vec<RunStats> = (0..sim.num_runs)
        .map(|i| run_session(sim, base_seed.wrapping_add(u64::from(i))))
        .collect();
    SimReport::from_runs(runs, base_seed)
}
