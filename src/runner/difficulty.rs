//! Stepped difficulty: scroll speed and spawn interval as a pure function
//! of the score tier.
//!
//! | Score | Tier | Speed | Spawn interval |
//! |-------|------|-------|----------------|
//! | 0     | 0    | 4.0   | 1800ms |
//! | 500   | 1    | 4.5   | 1600ms |
//! | 2500  | 5    | 6.5   | 800ms (floor) |
//! | 6000  | 12   | 10.0 (cap) | 800ms |

use crate::core::config::RunnerConfig;

/// Speed and spawn interval for one tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    pub tier: u32,
    /// Scroll speed in units/frame.
    pub speed: f64,
    pub spawn_interval_ms: f64,
}

/// Score bucket driving the difficulty step.
pub fn tier_for_score(score: u32, tier_score_step: u32) -> u32 {
    score.checked_div(tier_score_step).unwrap_or(0)
}

/// Difficulty for a given score. Same tier, same result.
pub fn difficulty_for_score(score: u32, config: &RunnerConfig) -> Difficulty {
    let tier = tier_for_score(score, config.tier_score_step);
    let steps = tier as f64;
    Difficulty {
        tier,
        speed: (config.base_speed + steps * config.speed_per_tier).min(config.max_speed),
        spawn_interval_ms: (config.base_spawn_interval_ms - steps * config.spawn_interval_step_ms)
            .max(config.min_spawn_interval_ms),
    }
}
