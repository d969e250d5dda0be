//! Vertical physics for the runner: constant gravity, fixed jump impulse.
//!
//! Gravity and velocity are applied once per update cycle, not scaled by
//! elapsed time, so the jump arc is tied to the refresh rate. Setting
//! `time_scaled_physics` scales both by `delta / REFERENCE_FRAME_MS`.

use super::types::Player;
use crate::core::config::RunnerConfig;
use crate::core::constants::REFERENCE_FRAME_MS;

/// Launch the runner. Returns false (and does nothing) while airborne.
pub fn jump(player: &mut Player, impulse: f64) -> bool {
    if player.airborne {
        return false;
    }
    player.velocity = impulse;
    player.airborne = true;
    true
}

/// Advance one cycle. Returns true if the runner landed during this step.
pub fn integrate(player: &mut Player, config: &RunnerConfig, delta_ms: f64) -> bool {
    if !player.airborne {
        return false;
    }

    let scale = if config.time_scaled_physics {
        delta_ms / REFERENCE_FRAME_MS
    } else {
        1.0
    };

    player.bottom += player.velocity * scale;
    player.velocity -= config.gravity * scale;

    if player.bottom <= config.ground_level {
        player.bottom = config.ground_level;
        player.velocity = 0.0;
        player.airborne = false;
        return true;
    }
    false
}
