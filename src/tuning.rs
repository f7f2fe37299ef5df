//! Game balance and layout
//!
//! Every value the simulation reads lives here so a driver can swap in a
//! JSON file instead of recompiling. Missing fields fall back to
//! [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};

/// Playfield size in world units (origin top-left, +y down)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayfieldTuning {
    pub width: f32,
    pub height: f32,
}

impl Default for PlayfieldTuning {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleTuning {
    pub width: f32,
    pub height: f32,
    /// Units moved per frame while a direction is held
    pub speed: f32,
    /// Paddle top edge sits this far above the playfield bottom
    pub bottom_offset: f32,
    /// Minimum gap to either side wall
    pub margin: f32,
}

impl Default for PaddleTuning {
    fn default() -> Self {
        Self {
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            speed: PADDLE_SPEED,
            bottom_offset: PADDLE_BOTTOM_OFFSET,
            margin: PADDLE_MARGIN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallTuning {
    pub radius: f32,
    /// Gap between a stuck ball and the paddle
    pub paddle_gap: f32,
    /// Peak lateral launch speed (actual value is uniform in ±this)
    pub launch_lateral: f32,
    /// Upward launch speed; also the rebound fallback speed
    pub launch_vertical: f32,
    /// Floor on upward speed after a paddle rebound
    pub min_rise: f32,
    /// Rebound angle at the paddle edge, degrees
    pub max_bounce_deg: f32,
}

impl Default for BallTuning {
    fn default() -> Self {
        Self {
            radius: BALL_RADIUS,
            paddle_gap: BALL_PADDLE_GAP,
            launch_lateral: BALL_LAUNCH_LATERAL,
            launch_vertical: BALL_LAUNCH_VERTICAL,
            min_rise: BALL_MIN_RISE,
            max_bounce_deg: BALL_MAX_BOUNCE_DEG,
        }
    }
}

/// Brick grid layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrickLayout {
    /// Rows on level 1; each later level adds one
    pub base_rows: u32,
    pub cols: u32,
    pub width: f32,
    pub height: f32,
    pub padding: f32,
    pub offset_top: f32,
    pub offset_left: f32,
    /// Rows whose index is a multiple of this are armoured
    pub armoured_row_period: u32,
    pub armoured_hits: u8,
}

impl Default for BrickLayout {
    fn default() -> Self {
        Self {
            base_rows: BRICK_BASE_ROWS,
            cols: BRICK_COLS,
            width: BRICK_WIDTH,
            height: BRICK_HEIGHT,
            padding: BRICK_PADDING,
            offset_top: BRICK_OFFSET_TOP,
            offset_left: BRICK_OFFSET_LEFT,
            armoured_row_period: ARMOURED_ROW_PERIOD,
            armoured_hits: ARMOURED_HITS,
        }
    }
}

impl BrickLayout {
    /// Row count for a 1-based level
    pub fn rows_for_level(&self, level: u32) -> u32 {
        self.base_rows.saturating_add(level.saturating_sub(1))
    }

    /// Brick count for a 1-based level, `None` on overflow
    pub fn bricks_for_level(&self, level: u32) -> Option<u32> {
        self.base_rows
            .checked_add(level.saturating_sub(1))?
            .checked_mul(self.cols)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringTuning {
    /// Awarded when a hit leaves the brick standing
    pub brick_hit: u64,
    /// Awarded for the hit that destroys a brick
    pub brick_destroyed: u64,
}

impl Default for ScoringTuning {
    fn default() -> Self {
        Self {
            brick_hit: SCORE_BRICK_HIT,
            brick_destroyed: SCORE_BRICK_DESTROYED,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionTuning {
    pub starting_lives: u8,
    pub max_level: u32,
    pub level_speed_factor: f32,
}

impl Default for SessionTuning {
    fn default() -> Self {
        Self {
            starting_lives: STARTING_LIVES,
            max_level: MAX_LEVEL,
            level_speed_factor: LEVEL_SPEED_FACTOR,
        }
    }
}

/// Complete game tuning
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub playfield: PlayfieldTuning,
    pub paddle: PaddleTuning,
    pub ball: BallTuning,
    pub bricks: BrickLayout,
    pub scoring: ScoringTuning,
    pub session: SessionTuning,
}

impl Tuning {
    /// Parse and validate tuning from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rebound angle at the paddle edge, radians
    pub fn max_bounce_angle(&self) -> f32 {
        self.ball.max_bounce_deg.to_radians()
    }

    /// Paddle's fixed top edge
    pub fn paddle_y(&self) -> f32 {
        self.playfield.height - self.paddle.bottom_offset
    }

    /// Reject values the simulation cannot run with.
    ///
    /// The step assumes a validated tuning and never re-checks per frame.
    pub fn validate(&self) -> Result<()> {
        positive("playfield.width", self.playfield.width)?;
        positive("playfield.height", self.playfield.height)?;
        positive("paddle.width", self.paddle.width)?;
        positive("paddle.height", self.paddle.height)?;
        positive("ball.radius", self.ball.radius)?;
        positive("bricks.width", self.bricks.width)?;
        positive("bricks.height", self.bricks.height)?;
        positive("session.level_speed_factor", self.session.level_speed_factor)?;
        non_negative("paddle.speed", self.paddle.speed)?;
        non_negative("paddle.margin", self.paddle.margin)?;
        non_negative("paddle.bottom_offset", self.paddle.bottom_offset)?;
        non_negative("ball.paddle_gap", self.ball.paddle_gap)?;
        non_negative("ball.launch_lateral", self.ball.launch_lateral)?;
        non_negative("ball.launch_vertical", self.ball.launch_vertical)?;
        non_negative("ball.min_rise", self.ball.min_rise)?;
        non_negative("bricks.padding", self.bricks.padding)?;

        if self.paddle.width + 2.0 * self.paddle.margin > self.playfield.width {
            return Err(invalid(format!(
                "paddle.width {} plus margins does not fit playfield.width {}",
                self.paddle.width, self.playfield.width
            )));
        }
        if self.paddle.bottom_offset > self.playfield.height {
            return Err(invalid("paddle.bottom_offset exceeds playfield.height"));
        }
        if !(0.0..90.0).contains(&self.ball.max_bounce_deg) {
            return Err(invalid("ball.max_bounce_deg must be in [0, 90)"));
        }
        if self.bricks.base_rows == 0 || self.bricks.cols == 0 {
            return Err(invalid("bricks.base_rows and bricks.cols must be > 0"));
        }
        if self.bricks.armoured_row_period == 0 {
            return Err(invalid("bricks.armoured_row_period must be > 0"));
        }
        if self.bricks.armoured_hits == 0 {
            return Err(invalid("bricks.armoured_hits must be > 0"));
        }
        if self.session.starting_lives == 0 {
            return Err(invalid("session.starting_lives must be > 0"));
        }
        if self.session.max_level == 0 {
            return Err(invalid("session.max_level must be > 0"));
        }
        // The last level has the most rows
        match self.bricks.bricks_for_level(self.session.max_level) {
            Some(n) if n <= MAX_GRID_BRICKS => {}
            _ => {
                return Err(invalid(format!(
                    "bricks on level {} exceed {MAX_GRID_BRICKS}",
                    self.session.max_level
                )));
            }
        }
        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> Error {
    Error::InvalidTuning(msg.into())
}

fn positive(name: &str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(format!("{name} must be > 0, got {value}")))
    }
}

fn non_negative(name: &str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(format!("{name} must be >= 0, got {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let tuning = Tuning::from_json(r#"{ "session": { "max_level": 5 }, "paddle": { "speed": 9.0 } }"#)
            .unwrap();
        assert_eq!(tuning.session.max_level, 5);
        assert_eq!(tuning.session.starting_lives, STARTING_LIVES);
        assert_eq!(tuning.paddle.speed, 9.0);
        assert_eq!(tuning.paddle.width, PADDLE_WIDTH);
        assert_eq!(tuning.bricks, BrickLayout::default());
    }

    #[test]
    fn test_json_round_trip() {
        let tuning = Tuning::default();
        let json = tuning.to_json().unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), tuning);
    }

    #[test]
    fn test_rejects_oversized_paddle() {
        let mut tuning = Tuning::default();
        tuning.paddle.width = 795.0;
        let err = tuning.validate().unwrap_err();
        assert!(err.to_string().contains("paddle.width"));
    }

    #[test]
    fn test_rejects_non_positive_sizes() {
        let mut tuning = Tuning::default();
        tuning.ball.radius = 0.0;
        assert!(matches!(tuning.validate(), Err(Error::InvalidTuning(_))));

        let mut tuning = Tuning::default();
        tuning.playfield.height = f32::NAN;
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_lives_and_levels() {
        let mut tuning = Tuning::default();
        tuning.session.starting_lives = 0;
        assert!(tuning.validate().is_err());

        let mut tuning = Tuning::default();
        tuning.session.max_level = 0;
        assert!(tuning.validate().is_err());

        let mut tuning = Tuning::default();
        tuning.bricks.armoured_row_period = 0;
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_from_json_reports_parse_errors() {
        assert!(matches!(Tuning::from_json("{ nope"), Err(Error::Parse(_))));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = Tuning::load("/definitely/not/here/tuning.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_rows_for_level() {
        let layout = BrickLayout::default();
        assert_eq!(layout.rows_for_level(1), 4);
        assert_eq!(layout.rows_for_level(3), 6);
        assert_eq!(layout.rows_for_level(u32::MAX), u32::MAX);
        assert_eq!(layout.bricks_for_level(3), Some(48));
        assert_eq!(layout.bricks_for_level(u32::MAX), None);
    }

    #[test]
    fn test_rejects_oversized_grid() {
        let mut tuning = Tuning::default();
        tuning.bricks.cols = u32::MAX;
        let err = tuning.validate().unwrap_err();
        assert!(err.to_string().contains("exceed"));

        let mut tuning = Tuning::default();
        tuning.session.max_level = u32::MAX;
        assert!(matches!(tuning.validate(), Err(Error::InvalidTuning(_))));

        // 64 rows x 64 cols sits exactly on the limit
        let mut tuning = Tuning::default();
        tuning.bricks.base_rows = 62;
        tuning.bricks.cols = 64;
        assert!(tuning.validate().is_ok());
        tuning.session.max_level = 4;
        assert!(tuning.validate().is_err());

        let json = r#"{ "bricks": { "base_rows": 100000, "cols": 100000 } }"#;
        assert!(Tuning::from_json(json).is_err());
    }

    #[test]
    fn test_derived_values() {
        let tuning = Tuning::default();
        assert_eq!(tuning.paddle_y(), 550.0);
        assert!((tuning.max_bounce_angle() - std::f32::consts::FRAC_PI_3).abs() < 1e-6);
    }
}
