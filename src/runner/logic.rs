//! Runner game logic: input dispatch, the update cycle, and game over.

use super::collision::first_collision;
use super::difficulty::difficulty_for_score;
use super::types::*;
use super::{obstacles, physics};
use crate::core::constants::{RUN_ANIM_FRAMES, RUN_ANIM_PERIOD_TICKS};
use rand::Rng;

/// UI-agnostic input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerInput {
    /// Begin a session (only from Idle or GameOver).
    Start,
    /// Jump (only while running and on the ground).
    Jump,
}

/// Apply an input event. `now_ms` stamps the session start for `Start`.
///
/// Returns true if the input changed the session.
pub fn process_input(game: &mut RunnerGame, input: RunnerInput, now_ms: f64) -> bool {
    match input {
        RunnerInput::Start => {
            if game.is_running() {
                return false;
            }
            game.reset(now_ms);
            tracing::info!(best = game.best_score, "session started");
            true
        }
        RunnerInput::Jump => {
            if !game.is_running() {
                return false;
            }
            physics::jump(&mut game.player, game.config.jump_impulse)
        }
    }
}

/// Run one update cycle at timestamp `now_ms`.
///
/// Does nothing unless the session is running. A cycle with a bad
/// timestamp or a config that fails `RunnerConfig::validate` is skipped
/// without touching any state.
/// Returns true if the cycle ran.
pub fn tick_runner<R: Rng>(game: &mut RunnerGame, now_ms: f64, rng: &mut R) -> bool {
    if !game.is_running() {
        return false;
    }

    if let Err(e) = game.config.validate() {
        tracing::warn!(reason = e.message(), "config unusable, skipping cycle");
        return false;
    }

    let Some(delta_ms) = game.clock.advance(now_ms) else {
        tracing::warn!(
            now_ms,
            last_ms = game.clock.last_ms(),
            "timestamp not usable, skipping cycle"
        );
        return false;
    };

    step(game, delta_ms, rng);
    true
}

/// Single update cycle with a known elapsed time.
fn step<R: Rng>(game: &mut RunnerGame, delta_ms: f64, rng: &mut R) {
    game.tick_count += 1;
    tracing::trace!(tick = game.tick_count, delta_ms, "cycle");

    // 1. Score accrual
    let score_before = game.score();
    game.score.accrue(delta_ms);

    // 2. Difficulty from the (possibly new) score
    let difficulty = difficulty_for_score(game.score(), &game.config);
    if difficulty_for_score(score_before, &game.config).tier != difficulty.tier {
        tracing::debug!(
            tier = difficulty.tier,
            speed = difficulty.speed,
            spawn_interval_ms = difficulty.spawn_interval_ms,
            "difficulty stepped up"
        );
    }
    game.game_speed = difficulty.speed;
    game.spawn_interval_ms = difficulty.spawn_interval_ms;

    // 3. Physics
    physics::integrate(&mut game.player, &game.config, delta_ms);

    if game.is_on_ground() && game.tick_count % RUN_ANIM_PERIOD_TICKS == 0 {
        game.run_anim_frame = (game.run_anim_frame + 1) % RUN_ANIM_FRAMES;
    }

    // 4. Spawn
    obstacles::tick_spawn(game, delta_ms, rng);

    // 5. Scroll, cull, then collide against what is left
    obstacles::advance(
        &mut game.obstacles,
        game.game_speed,
        game.config.play_area_width,
    );
    if let Some(index) = first_collision(&game.player, &game.obstacles, &game.config) {
        end_session(game, index);
    }
}

/// Freeze the session after a collision and record the final score.
fn end_session(game: &mut RunnerGame, obstacle_index: usize) {
    let score = game.score();
    game.phase = RunnerPhase::GameOver;
    game.final_score = Some(score);
    game.best_score = game.best_score.max(score);
    tracing::info!(
        score,
        best = game.best_score,
        obstacle = obstacle_index,
        ticks = game.tick_count,
        "game over"
    );
}

/// Message shown once the session has ended.
pub fn game_over_message(game: &RunnerGame) -> Option<String> {
    if !game.is_game_over() {
        return None;
    }
    game.final_score
        .map(|score| format!("Game Over! Your score: {}", score))
}
