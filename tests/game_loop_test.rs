//! Integration test: runner update cycle
//!
//! Drives whole sessions through the public API the front ends use:
//! `process_input`, `tick_runner` and `GameSnapshot`.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ridge_runner::runner::collision::{first_collision, obstacle_box, player_box};
use ridge_runner::runner::difficulty::difficulty_for_score;
use ridge_runner::runner::Obstacle;
use ridge_runner::{
    process_input, tick_runner, GameSnapshot, RunnerConfig, RunnerGame, RunnerInput, RunnerPhase,
};

const FRAME_MS: f64 = 16.0;

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// A session started at t=0.
fn started_game() -> RunnerGame {
    let mut game = RunnerGame::default();
    assert!(process_input(&mut game, RunnerInput::Start, 0.0));
    game
}

/// Tick at `step_ms` intervals until `until_ms`, returning the final time.
fn run_until(game: &mut RunnerGame, rng: &mut ChaCha8Rng, step_ms: f64, until_ms: f64) -> f64 {
    let mut now = game.clock.last_ms().unwrap_or(0.0);
    while now + step_ms <= until_ms {
        now += step_ms;
        tick_runner(game, now, rng);
    }
    now
}

// =============================================================================
// Start-up scenario
// =============================================================================

#[test]
fn test_first_obstacle_after_1800ms_in_100ms_steps() {
    let mut game = started_game();
    let mut rng = rng(1);

    let mut now = 0.0;
    for _ in 0..17 {
        now += 100.0;
        assert!(tick_runner(&mut game, now, &mut rng));
        assert!(game.obstacles.is_empty(), "spawned early at {}ms", now);
    }
    now += 100.0;
    tick_runner(&mut game, now, &mut rng);

    assert_eq!(game.score(), 18);
    assert_eq!(game.obstacles.len(), 1);
    assert!((game.obstacles[0].offset - 4.0).abs() < 1e-9);
    assert_eq!(game.phase, RunnerPhase::Running);
}

#[test]
fn test_first_obstacle_after_1800ms_in_frame_steps() {
    let mut game = started_game();
    let mut rng = rng(2);

    // 112 frames of 16ms, then an 8ms frame lands exactly on 1800
    let now = run_until(&mut game, &mut rng, FRAME_MS, 1792.0);
    assert_eq!(now, 1792.0);
    assert!(game.obstacles.is_empty());
    tick_runner(&mut game, 1800.0, &mut rng);

    assert_eq!(game.score(), 18);
    assert_eq!(game.obstacles.len(), 1);
    assert_eq!(game.spawn_timer_ms, 0.0);
}

#[test]
fn test_idle_session_never_advances() {
    let mut game = RunnerGame::default();
    let mut rng = rng(3);
    for i in 1..=100 {
        assert!(!tick_runner(&mut game, i as f64 * FRAME_MS, &mut rng));
    }
    assert_eq!(game.score(), 0);
    assert!(game.obstacles.is_empty());
    assert_eq!(game.phase, RunnerPhase::Idle);
}

// =============================================================================
// Jump arc
// =============================================================================

#[test]
fn test_jump_lands_after_42_frames() {
    let mut game = started_game();
    let mut rng = rng(4);
    let ground = game.config.ground_level;

    assert!(process_input(&mut game, RunnerInput::Jump, 0.0));
    let mut frames = 0;
    let mut apex = ground;
    let mut now = 0.0;
    while game.player.airborne {
        now += FRAME_MS;
        tick_runner(&mut game, now, &mut rng);
        frames += 1;
        apex = apex.max(game.player.bottom);
        assert!(game.player.bottom >= ground);
        assert!(frames <= 100, "runner never landed");
    }

    assert_eq!(frames, 42);
    assert_eq!(game.player.bottom, ground);
    assert_eq!(game.player.velocity, 0.0);
    assert!(apex > ground + 100.0);
}

#[test]
fn test_double_jump_rejected_mid_air() {
    let mut game = started_game();
    let mut rng = rng(5);

    assert!(process_input(&mut game, RunnerInput::Jump, 0.0));
    tick_runner(&mut game, FRAME_MS, &mut rng);
    let velocity = game.player.velocity;

    assert!(!process_input(&mut game, RunnerInput::Jump, FRAME_MS));
    assert_eq!(game.player.velocity, velocity);
}

// =============================================================================
// Score and difficulty
// =============================================================================

#[test]
fn test_score_monotonic_under_uneven_frames() {
    let mut game = started_game();
    let mut rng = rng(6);
    // Jitter between 1 and 40ms
    let steps = [1.0, 7.5, 16.0, 33.3, 40.0, 12.25, 16.0, 0.5];

    let mut now = 0.0;
    let mut last_score = 0;
    for i in 0..400 {
        if !game.is_running() {
            break;
        }
        now += steps[i % steps.len()];
        tick_runner(&mut game, now, &mut rng);
        assert!(game.score() >= last_score);
        last_score = game.score();
    }
}

#[test]
fn test_score_has_no_drift_over_many_small_frames() {
    let mut game = started_game();
    let mut rng = rng(7);
    // Keep the lane clear so the run survives
    let mut now = 0.0;
    for _ in 0..1000 {
        now += 10.0;
        game.obstacles.clear();
        game.spawn_timer_ms = 0.0;
        tick_runner(&mut game, now, &mut rng);
    }
    assert_eq!(game.score(), 100);
}

#[test]
fn test_difficulty_follows_score_during_a_run() {
    let mut game = started_game();
    let mut rng = rng(8);
    let mut now = 0.0;
    while game.score() < 500 {
        now += 100.0;
        game.obstacles.clear();
        game.spawn_timer_ms = 0.0;
        tick_runner(&mut game, now, &mut rng);
    }
    assert!((game.game_speed - 4.5).abs() < 1e-9);
    assert!((game.spawn_interval_ms - 1600.0).abs() < 1e-9);
}

#[test]
fn test_difficulty_table() {
    let config = RunnerConfig::default();
    let at = |score| difficulty_for_score(score, &config);

    assert_eq!(at(0).speed, 4.0);
    assert_eq!(at(0).spawn_interval_ms, 1800.0);
    assert_eq!(at(500).speed, 4.5);
    assert_eq!(at(500).spawn_interval_ms, 1600.0);
    assert_eq!(at(2500).spawn_interval_ms, 800.0);
    assert_eq!(at(3000).spawn_interval_ms, 800.0);
    assert_eq!(at(3000).speed, 7.0);
    assert_eq!(at(6000).speed, 10.0);
    assert_eq!(at(60_000).speed, 10.0);
    assert_eq!(at(60_000).spawn_interval_ms, 800.0);
}

// =============================================================================
// Obstacles and collision
// =============================================================================

#[test]
fn test_obstacle_offsets_stay_in_bounds_and_grow() {
    let mut game = started_game();
    let mut rng = rng(9);
    let width = game.config.play_area_width;

    let mut now = 0.0;
    let mut previous: Vec<Obstacle> = Vec::new();
    while game.is_running() && now < 20_000.0 {
        // Jump constantly so the run lasts longer
        process_input(&mut game, RunnerInput::Jump, now);
        now += FRAME_MS;
        tick_runner(&mut game, now, &mut rng);

        for obstacle in &game.obstacles {
            assert!(obstacle.offset >= 0.0);
            assert!(obstacle.offset <= width);
        }
        // Survivors keep their order; each one moved left
        let survivors = previous
            .iter()
            .filter(|o| o.offset + game.game_speed <= width);
        for (old, new) in survivors.zip(game.obstacles.iter()) {
            assert!(new.offset > old.offset);
        }
        previous = game.obstacles.clone();
    }
}

#[test]
fn test_collision_iff_boxes_overlap() {
    for seed in 0..5 {
        let mut game = started_game();
        let mut rng = rng(100 + seed);
        let mut now = 0.0;

        while game.is_running() && now < 60_000.0 {
            now += FRAME_MS;
            tick_runner(&mut game, now, &mut rng);
            let hit = first_collision(&game.player, &game.obstacles, &game.config);
            if game.is_running() {
                assert!(hit.is_none(), "seed {} overlapped without game over", seed);
            }
        }

        assert!(game.is_game_over(), "seed {} never collided", seed);
        let runner = player_box(&game.player, &game.config);
        assert!(game
            .obstacles
            .iter()
            .any(|o| runner.overlaps(&obstacle_box(o, &game.config))));
    }
}

// =============================================================================
// Game over and restart
// =============================================================================

/// Put an obstacle where the next scroll step lands it on the runner.
fn force_collision(game: &mut RunnerGame) {
    let config = &game.config;
    game.obstacles.push(Obstacle {
        offset: config.play_area_width - config.player_left - 30.0 - game.game_speed,
        width: 20.0,
        height: 40.0,
    });
}

#[test]
fn test_forced_overlap_ends_run_in_same_cycle() {
    let mut game = started_game();
    let mut rng = rng(10);
    run_until(&mut game, &mut rng, 100.0, 500.0);
    force_collision(&mut game);

    assert!(tick_runner(&mut game, 600.0, &mut rng));
    assert!(game.is_game_over());
    assert_eq!(game.final_score, Some(6));

    let snap = GameSnapshot::capture(&game);
    assert_eq!(snap.message.as_deref(), Some("Game Over! Your score: 6"));
    assert!(snap.message_visible);
}

#[test]
fn test_game_over_freezes_state() {
    let mut game = started_game();
    let mut rng = rng(11);
    force_collision(&mut game);
    tick_runner(&mut game, FRAME_MS, &mut rng);
    assert!(game.is_game_over());

    let frozen = GameSnapshot::capture(&game);
    for i in 2..200 {
        assert!(!tick_runner(&mut game, i as f64 * FRAME_MS, &mut rng));
    }
    assert!(!process_input(&mut game, RunnerInput::Jump, 5_000.0));
    assert_eq!(GameSnapshot::capture(&game), frozen);
}

#[test]
fn test_restart_resets_session_and_keeps_best() {
    let mut game = started_game();
    let mut rng = rng(12);
    run_until(&mut game, &mut rng, 100.0, 2_000.0);
    force_collision(&mut game);
    tick_runner(&mut game, 2_100.0, &mut rng);
    assert!(game.is_game_over());
    let best = game.best_score;
    assert!(best >= 20);

    assert!(process_input(&mut game, RunnerInput::Start, 10_000.0));
    assert!(game.is_running());
    assert_eq!(game.score(), 0);
    assert!(game.obstacles.is_empty());
    assert_eq!(game.final_score, None);
    assert_eq!(game.game_speed, 4.0);
    assert_eq!(game.best_score, best);

    // The first cycle measures from the restart, not the old clock
    tick_runner(&mut game, 10_100.0, &mut rng);
    assert_eq!(game.score(), 1);
}

#[test]
fn test_bad_timestamps_skip_cycles() {
    let mut game = started_game();
    let mut rng = rng(13);
    tick_runner(&mut game, 500.0, &mut rng);
    let score = game.score();

    assert!(!tick_runner(&mut game, 400.0, &mut rng));
    assert!(!tick_runner(&mut game, f64::NAN, &mut rng));
    assert!(!tick_runner(&mut game, f64::INFINITY, &mut rng));
    assert_eq!(game.score(), score);

    tick_runner(&mut game, 600.0, &mut rng);
    assert_eq!(game.score(), 6);
}
