//! Runner session data structures.
//!
//! A single-lane endless runner: the player stands at a fixed column and
//! jumps over obstacles that scroll in from the right edge of the play area.

use super::clock::FrameClock;
use super::score::ScoreTracker;
use crate::core::config::RunnerConfig;
use serde::{Deserialize, Serialize};

/// Session phase. There is no paused state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunnerPhase {
    /// Before the first start input.
    Idle,
    Running,
    /// After a collision. Waits for a start input.
    GameOver,
}

/// The player-controlled runner.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Offset of the runner's feet from the bottom of the play area.
    pub bottom: f64,
    /// Vertical velocity in units/frame (positive = upward).
    pub velocity: f64,
    pub airborne: bool,
}

impl Player {
    /// A runner standing on the ground.
    pub fn grounded(ground_level: f64) -> Self {
        Self {
            bottom: ground_level,
            velocity: 0.0,
            airborne: false,
        }
    }
}

/// A single obstacle. Obstacles rest on the ground.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Distance from the right edge of the play area to the obstacle's
    /// right side. Grows every cycle as the obstacle scrolls left.
    pub offset: f64,
    pub width: f64,
    pub height: f64,
}

/// One runner session, owned by whichever front end drives it.
#[derive(Debug, Clone)]
pub struct RunnerGame {
    pub config: RunnerConfig,
    pub phase: RunnerPhase,

    // -- Runner state --
    pub player: Player,
    /// Animation frame for running (alternates every few grounded ticks).
    pub run_anim_frame: u32,

    // -- Obstacle state --
    /// Live obstacles, oldest first.
    pub obstacles: Vec<Obstacle>,
    /// Elapsed time since the last spawn (milliseconds).
    pub spawn_timer_ms: f64,

    // -- Scoring --
    pub score: ScoreTracker,
    /// Best final score seen by this process. Not persisted.
    pub best_score: u32,
    /// Score at the moment of the last collision.
    pub final_score: Option<u32>,

    // -- Difficulty --
    /// Current scroll speed in units/frame.
    pub game_speed: f64,
    /// Current time between obstacle spawns (milliseconds).
    pub spawn_interval_ms: f64,

    // -- Timing --
    pub clock: FrameClock,
    /// Update cycles run since the session started.
    pub tick_count: u64,
}

impl RunnerGame {
    /// Create an idle session. Nothing moves until a start input arrives.
    pub fn new(config: RunnerConfig) -> Self {
        let player = Player::grounded(config.ground_level);
        let score = ScoreTracker::new(config.score_interval_ms);
        let game_speed = config.base_speed;
        let spawn_interval_ms = config.base_spawn_interval_ms;
        Self {
            config,
            phase: RunnerPhase::Idle,
            player,
            run_anim_frame: 0,
            obstacles: Vec::new(),
            spawn_timer_ms: 0.0,
            score,
            best_score: 0,
            final_score: None,
            game_speed,
            spawn_interval_ms,
            clock: FrameClock::default(),
            tick_count: 0,
        }
    }

    /// Reset everything a session owns and begin running from `now_ms`.
    ///
    /// The best score survives the reset.
    pub fn reset(&mut self, now_ms: f64) {
        self.phase = RunnerPhase::Running;
        self.player = Player::grounded(self.config.ground_level);
        self.run_anim_frame = 0;
        self.obstacles.clear();
        self.spawn_timer_ms = 0.0;
        self.score = ScoreTracker::new(self.config.score_interval_ms);
        self.final_score = None;
        self.game_speed = self.config.base_speed;
        self.spawn_interval_ms = self.config.base_spawn_interval_ms;
        self.clock.restart(now_ms);
        self.tick_count = 0;
    }

    pub fn is_running(&self) -> bool {
        self.phase == RunnerPhase::Running
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == RunnerPhase::GameOver
    }

    /// Current score of the session.
    pub fn score(&self) -> u32 {
        self.score.score()
    }

    /// True if the runner is on the ground.
    pub fn is_on_ground(&self) -> bool {
        !self.player.airborne
    }
}

impl Default for RunnerGame {
    fn default() -> Self {
        Self::new(RunnerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::*;

    #[test]
    fn test_new_game_defaults() {
        let game = RunnerGame::default();
        assert_eq!(game.phase, RunnerPhase::Idle);
        assert_eq!(game.score(), 0);
        assert_eq!(game.best_score, 0);
        assert!(game.final_score.is_none());
        assert!(game.obstacles.is_empty());
        assert!(game.is_on_ground());
        assert!((game.player.bottom - GROUND_LEVEL).abs() < f64::EPSILON);
        assert!((game.game_speed - BASE_SPEED).abs() < f64::EPSILON);
        assert!((game.spawn_interval_ms - BASE_SPAWN_INTERVAL_MS).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reset_clears_session_but_keeps_best() {
        let mut game = RunnerGame::default();
        game.phase = RunnerPhase::GameOver;
        game.best_score = 42;
        game.final_score = Some(42);
        game.spawn_timer_ms = 700.0;
        game.game_speed = 7.0;
        game.player.bottom = 80.0;
        game.player.airborne = true;
        game.obstacles.push(Obstacle {
            offset: 100.0,
            width: 20.0,
            height: 40.0,
        });

        game.reset(5_000.0);

        assert!(game.is_running());
        assert_eq!(game.best_score, 42);
        assert!(game.final_score.is_none());
        assert!(game.obstacles.is_empty());
        assert!(game.is_on_ground());
        assert!((game.spawn_timer_ms).abs() < f64::EPSILON);
        assert!((game.game_speed - BASE_SPEED).abs() < f64::EPSILON);
        assert!((game.player.bottom - GROUND_LEVEL).abs() < f64::EPSILON);
        assert_eq!(game.clock.last_ms(), Some(5_000.0));
    }

    #[test]
    fn test_phase_serializes_snake_case() {
        let json = serde_json::to_string(&RunnerPhase::GameOver).unwrap();
        assert_eq!(json, "\"game_over\"");
    }
}
