//! Read-only view of a session for presentation layers.
//!
//! The terminal scene, the browser page and the simulator all read the
//! same snapshot; none of them touch `RunnerGame` directly.

use super::logic::game_over_message;
use super::types::{Obstacle, RunnerGame, RunnerPhase};
use serde::{Deserialize, Serialize};

/// Visual status of the runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerStatus {
    Normal,
    Dead,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    /// Offset of the runner's feet from the bottom of the play area.
    pub bottom: f64,
    pub airborne: bool,
    pub run_anim_frame: u32,
    pub status: PlayerStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: RunnerPhase,
    pub score: u32,
    pub best_score: u32,
    pub speed: f64,
    pub spawn_interval_ms: f64,
    pub player: PlayerSnapshot,
    pub obstacles: Vec<Obstacle>,
    pub message: Option<String>,
    pub message_visible: bool,
    pub play_area_width: f64,
    pub play_area_height: f64,
    pub ground_level: f64,
    pub player_left: f64,
    pub player_width: f64,
    pub player_height: f64,
}

impl GameSnapshot {
    pub fn capture(game: &RunnerGame) -> Self {
        let message = game_over_message(game);
        let status = if game.is_game_over() {
            PlayerStatus::Dead
        } else {
            PlayerStatus::Normal
        };
        Self {
            phase: game.phase,
            score: game.score(),
            best_score: game.best_score,
            speed: game.game_speed,
            spawn_interval_ms: game.spawn_interval_ms,
            player: PlayerSnapshot {
                bottom: game.player.bottom,
                airborne: game.player.airborne,
                run_anim_frame: game.run_anim_frame,
                status,
            },
            obstacles: game.obstacles.clone(),
            message_visible: message.is_some(),
            message,
            play_area_width: game.config.play_area_width,
            play_area_height: game.config.play_area_height,
            ground_level: game.config.ground_level,
            player_left: game.config.player_left,
            player_width: game.config.player_width,
            player_height: game.config.player_height,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
