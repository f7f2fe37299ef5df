//! Entity state and core simulation types
//!
//! Plain data plus small mutators. The session decides when these run.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{circle_intersects_rect, clamp};
use super::rect::Rect;
use crate::consts::MAX_GRID_BRICKS;
use crate::tuning::{BrickLayout, Tuning};

/// Session lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Built but not started; waiting for reset-and-start
    Idle,
    /// Active gameplay (ball may still be stuck to the paddle)
    Running,
    /// Final level cleared
    Won,
    /// Out of lives
    GameOver,
}

impl GamePhase {
    /// Won or GameOver
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::GameOver)
    }
}

/// Something observable that happened during a step.
///
/// Each variant is emitted at most once per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Stuck ball left the paddle
    Launched,
    /// Ball bounced off a side or top wall
    WallBounce,
    /// Ball rebounded off the paddle
    PaddleHit,
    /// Brick took a hit and is still standing
    BrickHit { score_delta: u64 },
    /// Brick took its last hit
    BrickDestroyed { score_delta: u64 },
    /// Ball fell out the bottom, lives remain
    LifeLost,
    /// Ball fell out the bottom with no lives left
    GameOver,
    /// Grid cleared, next level loaded
    LevelAdvanced { new_level: u32 },
    /// Final level cleared
    Won,
}

impl GameEvent {
    /// Message line a UI overlay shows for this event, if any
    pub fn banner(&self) -> Option<String> {
        match self {
            GameEvent::LevelAdvanced { new_level } => Some(format!("Level {new_level}!")),
            GameEvent::Won => Some("You Win! Press R to play again.".to_string()),
            GameEvent::GameOver => Some("Game Over - Press R to restart".to_string()),
            GameEvent::LifeLost => Some("Life lost! Press Space to continue.".to_string()),
            _ => None,
        }
    }
}

/// The player's paddle. Only `x` moves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Units per frame
    pub speed: f32,
}

impl Paddle {
    /// Paddle centred horizontally at its fixed height
    pub fn centered(tuning: &Tuning) -> Self {
        let p = &tuning.paddle;
        Self {
            x: tuning.playfield.width / 2.0 - p.width / 2.0,
            y: tuning.paddle_y(),
            width: p.width,
            height: p.height,
            speed: p.speed,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Apply one frame of movement intent then clamp inside the walls.
    ///
    /// Holding both directions cancels out.
    pub fn apply_intent(&mut self, move_left: bool, move_right: bool, field_width: f32, margin: f32) {
        if move_left {
            self.x -= self.speed;
        }
        if move_right {
            self.x += self.speed;
        }
        self.x = clamp(self.x, margin, field_width - self.width - margin);
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Riding on the paddle, waiting for launch
    pub stuck: bool,
}

impl Ball {
    /// Stuck ball resting on the paddle
    pub fn on_paddle(paddle: &Paddle, radius: f32, gap: f32) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius,
            stuck: true,
        };
        ball.reset(paddle, gap, true);
        ball
    }

    /// Recentre above the paddle with zero velocity
    pub fn reset(&mut self, paddle: &Paddle, gap: f32, sticky: bool) {
        self.track_paddle(paddle, gap);
        self.vel = Vec2::ZERO;
        self.stuck = sticky;
    }

    /// Sit just above the paddle centre
    pub fn track_paddle(&mut self, paddle: &Paddle, gap: f32) {
        self.pos = Vec2::new(paddle.center_x(), paddle.y - self.radius - gap);
    }

    /// Advance one frame. Motion is per frame, not per second.
    #[inline]
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }

    /// Reflect off the left, right and top walls, pushing the ball back inside.
    ///
    /// Returns true if any wall was touched. The bottom is open.
    pub fn bounce_off_walls(&mut self, field_width: f32) -> bool {
        let mut bounced = false;
        if self.pos.x - self.radius <= 0.0 {
            self.pos.x = self.radius;
            self.vel.x = -self.vel.x;
            bounced = true;
        } else if self.pos.x + self.radius >= field_width {
            self.pos.x = field_width - self.radius;
            self.vel.x = -self.vel.x;
            bounced = true;
        }
        if self.pos.y - self.radius <= 0.0 {
            self.pos.y = self.radius;
            self.vel.y = -self.vel.y;
            bounced = true;
        }
        bounced
    }

    /// Leading edge has cleared the bottom of the playfield
    pub fn is_below(&self, field_height: f32) -> bool {
        self.pos.y - self.radius > field_height
    }
}

/// Result of striking a brick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// Hits remain
    Cracked,
    /// That was the last one
    Destroyed,
}

/// A brick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    /// Hits left before it breaks
    pub hits: u8,
    pub destroyed: bool,
}

impl Brick {
    pub fn new(rect: Rect, hits: u8) -> Self {
        Self {
            rect,
            hits,
            destroyed: hits == 0,
        }
    }

    /// Take one hit. A destroyed brick stays destroyed.
    pub fn hit(&mut self) -> HitOutcome {
        self.hits = self.hits.saturating_sub(1);
        if self.hits == 0 {
            self.destroyed = true;
            HitOutcome::Destroyed
        } else {
            HitOutcome::Cracked
        }
    }

    /// More than one hit left (renderers tint these differently)
    pub fn is_armoured(&self) -> bool {
        self.hits > 1
    }
}

/// The bricks for one level, in row-major order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrickGrid {
    pub bricks: Vec<Brick>,
}

impl BrickGrid {
    /// Lay out the grid for a 1-based level
    ///
    /// One extra row per level past the first. Rows at multiples of the
    /// armoured period take extra hits. No randomness.
    pub fn build(level: u32, layout: &BrickLayout) -> Self {
        let rows = layout.rows_for_level(level);
        let capacity = rows.saturating_mul(layout.cols).min(MAX_GRID_BRICKS);
        let mut bricks = Vec::with_capacity(capacity as usize);
        for row in 0..rows {
            let hits = if row.is_multiple_of(layout.armoured_row_period) {
                layout.armoured_hits
            } else {
                1
            };
            for col in 0..layout.cols {
                let rect = Rect::new(
                    layout.offset_left + col as f32 * (layout.width + layout.padding),
                    layout.offset_top + row as f32 * (layout.height + layout.padding),
                    layout.width,
                    layout.height,
                );
                bricks.push(Brick::new(rect, hits));
            }
        }
        Self { bricks }
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    /// Bricks still standing
    pub fn remaining(&self) -> usize {
        self.bricks.iter().filter(|b| !b.destroyed).count()
    }

    /// Index of the first standing brick the circle overlaps, in grid order
    pub fn first_hit(&self, center: Vec2, radius: f32) -> Option<usize> {
        self.bricks
            .iter()
            .position(|b| !b.destroyed && circle_intersects_rect(center, radius, &b.rect))
    }
}
