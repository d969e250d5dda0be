//! Runtime configuration for a runner session.
//!
//! Every field defaults to the constants in [`super::constants`], so an
//! empty JSON object (or no config file at all) gives the stock game.

use super::constants::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Tunables for one runner session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    // Geometry
    pub play_area_width: f64,
    pub play_area_height: f64,
    pub ground_level: f64,
    pub player_left: f64,
    pub player_width: f64,
    pub player_height: f64,

    // Physics
    pub gravity: f64,
    pub jump_impulse: f64,
    /// Scale gravity and velocity by elapsed time instead of applying them
    /// once per frame. Off by default.
    pub time_scaled_physics: bool,

    // Obstacles
    pub obstacle_width_min: f64,
    pub obstacle_width_max: f64,
    pub obstacle_height_min: f64,
    pub obstacle_height_max: f64,

    // Scoring and difficulty
    pub score_interval_ms: f64,
    pub tier_score_step: u32,
    pub base_speed: f64,
    pub speed_per_tier: f64,
    pub max_speed: f64,
    pub base_spawn_interval_ms: f64,
    pub spawn_interval_step_ms: f64,
    pub min_spawn_interval_ms: f64,

    /// RNG seed for reproducible obstacle sizes (None = random)
    pub seed: Option<u64>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            play_area_width: PLAY_AREA_WIDTH,
            play_area_height: PLAY_AREA_HEIGHT,
            ground_level: GROUND_LEVEL,
            player_left: PLAYER_LEFT,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,

            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            time_scaled_physics: false,

            obstacle_width_min: OBSTACLE_WIDTH_MIN,
            obstacle_width_max: OBSTACLE_WIDTH_MAX,
            obstacle_height_min: OBSTACLE_HEIGHT_MIN,
            obstacle_height_max: OBSTACLE_HEIGHT_MAX,

            score_interval_ms: SCORE_INTERVAL_MS,
            tier_score_step: TIER_SCORE_STEP,
            base_speed: BASE_SPEED,
            speed_per_tier: SPEED_PER_TIER,
            max_speed: MAX_SPEED,
            base_spawn_interval_ms: BASE_SPAWN_INTERVAL_MS,
            spawn_interval_step_ms: SPAWN_INTERVAL_STEP_MS,
            min_spawn_interval_ms: MIN_SPAWN_INTERVAL_MS,

            seed: None,
        }
    }
}

/// Reasons a configuration is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    NonPositiveGeometry,
    GroundOutsidePlayArea,
    PlayerOutsidePlayArea,
    ObstacleRangeInverted,
    ObstacleTooTall,
    InvalidPhysics,
    NonPositiveInterval,
    InvalidDifficulty,
}

impl ConfigError {
    pub fn message(self) -> &'static str {
        match self {
            ConfigError::NonPositiveGeometry => "play area and player sizes must be positive",
            ConfigError::GroundOutsidePlayArea => "ground level must lie inside the play area",
            ConfigError::PlayerOutsidePlayArea => "player box must fit inside the play area",
            ConfigError::ObstacleRangeInverted => "obstacle size ranges need 0 < min <= max",
            ConfigError::ObstacleTooTall => "tallest obstacle must fit above the ground",
            ConfigError::InvalidPhysics => "gravity and jump impulse must be positive",
            ConfigError::NonPositiveInterval => "score and spawn intervals must be positive",
            ConfigError::InvalidDifficulty => {
                "difficulty needs a non-zero tier step and base values inside their clamps"
            }
        }
    }
}

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn valid_range(min: f64, max: f64) -> bool {
    positive(min) && positive(max) && min <= max
}

impl RunnerConfig {
    /// Load a JSON config file. Missing fields take their defaults.
    pub fn load(path: &Path) -> io::Result<Self> {
        let json = fs::read_to_string(path)?;
        let config: RunnerConfig = serde_json::from_str(&json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        config
            .validate()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.message()))?;
        Ok(config)
    }

    /// Check the config for values the update cycle cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.has_playable_geometry() {
            return Err(ConfigError::NonPositiveGeometry);
        }
        if !self.ground_level.is_finite()
            || self.ground_level < 0.0
            || self.ground_level >= self.play_area_height
        {
            return Err(ConfigError::GroundOutsidePlayArea);
        }
        if !self.player_left.is_finite()
            || self.player_left < 0.0
            || self.player_left + self.player_width > self.play_area_width
            || self.ground_level + self.player_height > self.play_area_height
        {
            return Err(ConfigError::PlayerOutsidePlayArea);
        }
        if !valid_range(self.obstacle_width_min, self.obstacle_width_max)
            || !valid_range(self.obstacle_height_min, self.obstacle_height_max)
        {
            return Err(ConfigError::ObstacleRangeInverted);
        }
        if self.ground_level + self.obstacle_height_max > self.play_area_height {
            return Err(ConfigError::ObstacleTooTall);
        }
        if !positive(self.gravity) || !positive(self.jump_impulse) {
            return Err(ConfigError::InvalidPhysics);
        }
        if !positive(self.score_interval_ms)
            || !positive(self.base_spawn_interval_ms)
            || !positive(self.min_spawn_interval_ms)
        {
            return Err(ConfigError::NonPositiveInterval);
        }
        if self.tier_score_step == 0
            || !positive(self.base_speed)
            || !positive(self.max_speed)
            || self.base_speed > self.max_speed
            || !self.speed_per_tier.is_finite()
            || self.speed_per_tier < 0.0
            || !self.spawn_interval_step_ms.is_finite()
            || self.spawn_interval_step_ms < 0.0
            || self.base_spawn_interval_ms < self.min_spawn_interval_ms
        {
            return Err(ConfigError::InvalidDifficulty);
        }
        Ok(())
    }

    /// True when the play area and player box have finite, positive sizes.
    pub fn has_playable_geometry(&self) -> bool {
        positive(self.play_area_width)
            && positive(self.play_area_height)
            && positive(self.player_width)
            && positive(self.player_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = RunnerConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert!(!config.time_scaled_physics);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_empty_json_gives_defaults() {
        let config: RunnerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RunnerConfig::default());
    }

    #[test]
    fn test_partial_json_overrides_only_named_fields() {
        let config: RunnerConfig =
            serde_json::from_str(r#"{"seed": 7, "time_scaled_physics": true}"#).unwrap();
        assert_eq!(config.seed, Some(7));
        assert!(config.time_scaled_physics);
        assert!((config.gravity - GRAVITY).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_width_rejected() {
        let config = RunnerConfig {
            play_area_width: 0.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NonPositiveGeometry));
        assert!(!config.has_playable_geometry());
    }

    #[test]
    fn test_nan_geometry_not_playable() {
        let config = RunnerConfig {
            player_height: f64::NAN,
            ..Default::default()
        };
        assert!(!config.has_playable_geometry());
    }

    #[test]
    fn test_inverted_obstacle_range_rejected() {
        let config = RunnerConfig {
            obstacle_width_min: 30.0,
            obstacle_width_max: 20.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ObstacleRangeInverted));
    }

    #[test]
    fn test_zero_tier_step_rejected() {
        let config = RunnerConfig {
            tier_score_step: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidDifficulty));
    }

    #[test]
    fn test_negative_gravity_rejected() {
        let config = RunnerConfig {
            gravity: -0.6,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidPhysics));
    }

    #[test]
    fn test_load_reports_invalid_data() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("ridge_runner_cfg_{}.json", std::process::id()));
        fs::write(&path, r#"{"score_interval_ms": 0}"#).unwrap();

        let err = RunnerConfig::load(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let err = RunnerConfig::load(Path::new("/nonexistent/ridge_runner.json")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_error_messages_are_distinct() {
        let all = [
            ConfigError::NonPositiveGeometry,
            ConfigError::GroundOutsidePlayArea,
            ConfigError::PlayerOutsidePlayArea,
            ConfigError::ObstacleRangeInverted,
            ConfigError::ObstacleTooTall,
            ConfigError::InvalidPhysics,
            ConfigError::NonPositiveInterval,
            ConfigError::InvalidDifficulty,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.message(), b.message());
            }
        }
    }
}
