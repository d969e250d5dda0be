// Play area geometry (distance units, bottom-up offsets)
pub const PLAY_AREA_WIDTH: f64 = 800.0;
pub const PLAY_AREA_HEIGHT: f64 = 200.0;
pub const GROUND_LEVEL: f64 = 10.0;

// Player box
pub const PLAYER_LEFT: f64 = 50.0;
pub const PLAYER_WIDTH: f64 = 40.0;
pub const PLAYER_HEIGHT: f64 = 40.0;

// Physics (per frame, not scaled by elapsed time)
pub const GRAVITY: f64 = 0.6;
pub const JUMP_IMPULSE: f64 = 12.0;
/// Frame length the per-frame physics constants were tuned against.
pub const REFERENCE_FRAME_MS: f64 = 16.0;

// Obstacle sizes (inclusive ranges)
pub const OBSTACLE_WIDTH_MIN: f64 = 15.0;
pub const OBSTACLE_WIDTH_MAX: f64 = 25.0;
pub const OBSTACLE_HEIGHT_MIN: f64 = 30.0;
pub const OBSTACLE_HEIGHT_MAX: f64 = 50.0;

// Scoring
pub const SCORE_INTERVAL_MS: f64 = 100.0;

// Difficulty tiers: tier = score / TIER_SCORE_STEP
pub const TIER_SCORE_STEP: u32 = 500;
pub const BASE_SPEED: f64 = 4.0;
pub const SPEED_PER_TIER: f64 = 0.5;
pub const MAX_SPEED: f64 = 10.0;
pub const BASE_SPAWN_INTERVAL_MS: f64 = 1800.0;
pub const SPAWN_INTERVAL_STEP_MS: f64 = 200.0;
pub const MIN_SPAWN_INTERVAL_MS: f64 = 800.0;

// Front ends
pub const REALTIME_FRAME_MS: u64 = 16; // ~60 FPS
pub const RUN_ANIM_PERIOD_TICKS: u64 = 8;
pub const RUN_ANIM_FRAMES: u32 = 2;
pub const DEFAULT_WEB_PORT: u16 = 3000;
