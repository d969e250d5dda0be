//! Axis-aligned bounding boxes in screen space (y grows downward), built
//! from the same geometry the presentation layer draws.

use super::types::{Obstacle, Player};
use crate::core::config::RunnerConfig;

/// Edges of a box in play-area screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Aabb {
    /// Strict overlap: boxes that only share an edge do not collide.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.top < other.bottom
            && self.bottom > other.top
    }
}

/// The runner's box at its current height.
pub fn player_box(player: &Player, config: &RunnerConfig) -> Aabb {
    let bottom = config.play_area_height - player.bottom;
    Aabb {
        left: config.player_left,
        right: config.player_left + config.player_width,
        top: bottom - config.player_height,
        bottom,
    }
}

/// An obstacle's box. Obstacles stand on the ground line.
pub fn obstacle_box(obstacle: &Obstacle, config: &RunnerConfig) -> Aabb {
    let right = config.play_area_width - obstacle.offset;
    let bottom = config.play_area_height - config.ground_level;
    Aabb {
        left: right - obstacle.width,
        right,
        top: bottom - obstacle.height,
        bottom,
    }
}

/// Index of the first obstacle the runner overlaps, if any. Stops at the
/// first hit.
pub fn first_collision(
    player: &Player,
    obstacles: &[Obstacle],
    config: &RunnerConfig,
) -> Option<usize> {
    let runner = player_box(player, config);
    obstacles
        .iter()
        .position(|obstacle| runner.overlaps(&obstacle_box(obstacle, config)))
}
