//! Obstacle spawning and scrolling.

use super::types::{Obstacle, RunnerGame};
use crate::core::config::RunnerConfig;
use rand::Rng;

/// A fresh obstacle at the right edge with a random size.
pub fn random_obstacle<R: Rng>(config: &RunnerConfig, rng: &mut R) -> Obstacle {
    Obstacle {
        offset: 0.0,
        width: rng.gen_range(config.obstacle_width_min..=config.obstacle_width_max),
        height: rng.gen_range(config.obstacle_height_min..=config.obstacle_height_max),
    }
}

/// Feed elapsed time to the spawn timer and spawn when it is due.
///
/// Unlike the score timer, the remainder is dropped: the timer restarts
/// from zero after each spawn. Returns true if an obstacle was spawned.
pub fn tick_spawn<R: Rng>(game: &mut RunnerGame, delta_ms: f64, rng: &mut R) -> bool {
    game.spawn_timer_ms += delta_ms;
    if game.spawn_timer_ms < game.spawn_interval_ms {
        return false;
    }
    game.spawn_timer_ms = 0.0;
    let obstacle = random_obstacle(&game.config, rng);
    tracing::debug!(
        width = obstacle.width,
        height = obstacle.height,
        live = game.obstacles.len() + 1,
        "obstacle spawned"
    );
    game.obstacles.push(obstacle);
    true
}

/// Scroll every obstacle left by `speed` and drop the ones that have left
/// the play area. Returns how many were removed.
pub fn advance(obstacles: &mut Vec<Obstacle>, speed: f64, play_area_width: f64) -> usize {
    let before = obstacles.len();
    for obstacle in obstacles.iter_mut() {
        obstacle.offset += speed;
    }
    obstacles.retain(|o| o.offset <= play_area_width);
    before - obstacles.len()
}
