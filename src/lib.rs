//! Brickfall - A single-screen brick breaker
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (paddle, ball, bricks, session lifecycle)
//! - `tuning`: Data-driven game balance, loadable from JSON
//! - `error`: Configuration errors
//!
//! Rendering, input wiring and frame scheduling live outside this crate. A
//! driver owns a [`sim::GameSession`], feeds it a [`sim::TickInput`] once per
//! frame and draws from [`sim::GameSession::snapshot`].

pub mod error;
pub mod sim;
pub mod tuning;

pub use error::{Error, Result};
pub use tuning::Tuning;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 110.0;
    pub const PADDLE_HEIGHT: f32 = 14.0;
    /// Units per frame
    pub const PADDLE_SPEED: f32 = 7.0;
    /// Distance from the paddle's top edge to the bottom of the playfield
    pub const PADDLE_BOTTOM_OFFSET: f32 = 50.0;
    /// Gap kept between paddle and side walls
    pub const PADDLE_MARGIN: f32 = 6.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 9.0;
    /// Gap between a stuck ball and the paddle's top edge
    pub const BALL_PADDLE_GAP: f32 = 4.0;
    pub const BALL_LAUNCH_LATERAL: f32 = 3.0;
    pub const BALL_LAUNCH_VERTICAL: f32 = 4.0;
    /// Minimum upward speed after a paddle rebound (scaled by speed multiplier)
    pub const BALL_MIN_RISE: f32 = 3.0;
    /// Rebound angle at the paddle's edge, in degrees
    pub const BALL_MAX_BOUNCE_DEG: f32 = 60.0;

    /// Brick grid defaults
    pub const BRICK_BASE_ROWS: u32 = 4;
    pub const BRICK_COLS: u32 = 8;
    pub const BRICK_WIDTH: f32 = 80.0;
    pub const BRICK_HEIGHT: f32 = 22.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_TOP: f32 = 60.0;
    pub const BRICK_OFFSET_LEFT: f32 = 46.0;
    /// Every Nth row (0-indexed) holds armoured bricks
    pub const ARMOURED_ROW_PERIOD: u32 = 3;
    pub const ARMOURED_HITS: u8 = 2;
    /// Upper bound on bricks in any level's grid
    pub const MAX_GRID_BRICKS: u32 = 4096;

    /// Scoring
    pub const SCORE_BRICK_HIT: u64 = 60;
    pub const SCORE_BRICK_DESTROYED: u64 = 100;

    /// Session defaults
    pub const STARTING_LIVES: u8 = 3;
    pub const MAX_LEVEL: u32 = 3;
    /// Ball speed multiplier growth per level
    pub const LEVEL_SPEED_FACTOR: f32 = 1.08;

    /// Background colour per level (0xRRGGBB), cycled past the end
    pub const LEVEL_BACKGROUNDS: [u32; 5] = [0x081227, 0x072a2a, 0x24121b, 0x082418, 0x2b0824];
}

/// Background colour for a 1-based level number
#[inline]
pub fn level_background(level: u32) -> u32 {
    let idx = level.saturating_sub(1) as usize % consts::LEVEL_BACKGROUNDS.len();
    consts::LEVEL_BACKGROUNDS[idx]
}
