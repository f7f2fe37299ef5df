//! Game session: the owner of all simulation state
//!
//! A driver constructs one [`GameSession`], calls [`GameSession::reset_and_start`],
//! then [`GameSession::step`] once per frame. Nothing here is global.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use super::state::{Ball, Brick, BrickGrid, GameEvent, GamePhase, HitOutcome, Paddle};
use super::tick::{TickInput, tick};
use crate::error::Result;
use crate::tuning::Tuning;

/// Read-only view for renderers and HUDs
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub paddle: &'a Paddle,
    pub ball: &'a Ball,
    pub bricks: &'a [Brick],
    pub score: u64,
    pub lives: u8,
    pub level: u32,
    pub phase: GamePhase,
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameSession {
    pub(crate) tuning: Tuning,
    /// Launch-angle RNG; only the initial trajectory is random
    pub(crate) rng: Pcg32,
    pub(crate) seed: u64,
    pub(crate) phase: GamePhase,
    pub(crate) score: u64,
    pub(crate) lives: u8,
    /// 1-based
    pub(crate) level: u32,
    /// Compounds by the level speed factor each level
    pub(crate) speed_multiplier: f32,
    /// Steps run since the last reset
    pub(crate) frame: u64,
    /// Wall-clock time reported by the driver since the last reset.
    /// Bookkeeping only: motion is per frame.
    pub(crate) elapsed_ms: f64,
    pub(crate) paddle: Paddle,
    pub(crate) ball: Ball,
    pub(crate) bricks: BrickGrid,
}

impl GameSession {
    /// Idle session with the default tuning
    pub fn new(seed: u64) -> Self {
        Self::build(Tuning::default(), seed)
    }

    /// Idle session with custom tuning, validated first
    pub fn with_tuning(tuning: Tuning, seed: u64) -> Result<Self> {
        tuning.validate()?;
        Ok(Self::build(tuning, seed))
    }

    fn build(tuning: Tuning, seed: u64) -> Self {
        let paddle = Paddle::centered(&tuning);
        let ball = Ball::on_paddle(&paddle, tuning.ball.radius, tuning.ball.paddle_gap);
        let bricks = BrickGrid::build(1, &tuning.bricks);
        Self {
            rng: Pcg32::seed_from_u64(seed),
            seed,
            phase: GamePhase::Idle,
            score: 0,
            lives: tuning.session.starting_lives,
            level: 1,
            speed_multiplier: 1.0,
            frame: 0,
            elapsed_ms: 0.0,
            paddle,
            ball,
            bricks,
            tuning,
        }
    }

    /// Reinitialise everything and enter `Running`.
    ///
    /// Accepted from any phase; this is the only way out of `Idle`, `Won`
    /// and `GameOver`. The RNG keeps its stream so consecutive games differ.
    pub fn reset_and_start(&mut self) {
        self.score = 0;
        self.lives = self.tuning.session.starting_lives;
        self.level = 1;
        self.speed_multiplier = 1.0;
        self.frame = 0;
        self.elapsed_ms = 0.0;
        self.paddle = Paddle::centered(&self.tuning);
        self.bricks = BrickGrid::build(self.level, &self.tuning.bricks);
        self.reset_ball(true);
        self.phase = GamePhase::Running;
        log::info!(
            "Started new game (seed {}, {} bricks, {} lives)",
            self.seed,
            self.bricks.len(),
            self.lives
        );
    }

    /// Put the ball back on the paddle centre with zero velocity
    pub fn reset_ball(&mut self, sticky: bool) {
        self.ball.reset(&self.paddle, self.tuning.ball.paddle_gap, sticky);
    }

    /// Release a stuck ball. Returns whether it launched.
    ///
    /// No-op if the ball is already free or the session isn't running.
    pub fn launch(&mut self) -> bool {
        if self.phase != GamePhase::Running || !self.ball.stuck {
            return false;
        }
        let b = &self.tuning.ball;
        let lateral: f32 = self.rng.random_range(-1.0..1.0);
        self.ball.vel.x = lateral * b.launch_lateral * self.speed_multiplier;
        self.ball.vel.y = -b.launch_vertical * self.speed_multiplier;
        self.ball.stuck = false;
        log::debug!("Launched ball with velocity {:?}", self.ball.vel);
        true
    }

    /// Advance one frame. See [`tick`].
    pub fn step(&mut self, input: &TickInput, elapsed_ms: f64) -> Vec<GameEvent> {
        tick(self, input, elapsed_ms)
    }

    /// Apply one hit to brick `index` and award points
    pub(crate) fn hit_brick(&mut self, index: usize) -> GameEvent {
        let scoring = &self.tuning.scoring;
        match self.bricks.bricks[index].hit() {
            HitOutcome::Cracked => {
                self.score += scoring.brick_hit;
                GameEvent::BrickHit {
                    score_delta: scoring.brick_hit,
                }
            }
            HitOutcome::Destroyed => {
                self.score += scoring.brick_destroyed;
                GameEvent::BrickDestroyed {
                    score_delta: scoring.brick_destroyed,
                }
            }
        }
    }

    /// Ball fell out the bottom
    pub(crate) fn lose_life(&mut self) -> GameEvent {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.phase = GamePhase::GameOver;
            log::info!("Game over at level {} with score {}", self.level, self.score);
            GameEvent::GameOver
        } else {
            self.reset_ball(true);
            log::debug!("Life lost, {} remaining", self.lives);
            GameEvent::LifeLost
        }
    }

    /// Grid cleared: win on the last level, otherwise load the next one
    pub(crate) fn complete_level(&mut self) -> GameEvent {
        if self.level >= self.tuning.session.max_level {
            self.phase = GamePhase::Won;
            log::info!("Won with score {}", self.score);
            return GameEvent::Won;
        }
        self.level += 1;
        self.speed_multiplier *= self.tuning.session.level_speed_factor;
        self.bricks = BrickGrid::build(self.level, &self.tuning.bricks);
        self.reset_ball(true);
        log::info!(
            "Level {}: {} bricks, speed x{:.3}",
            self.level,
            self.bricks.len(),
            self.speed_multiplier
        );
        GameEvent::LevelAdvanced {
            new_level: self.level,
        }
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            paddle: &self.paddle,
            ball: &self.ball,
            bricks: &self.bricks.bricks,
            score: self.score,
            lives: self.lives,
            level: self.level,
            phase: self.phase,
        }
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn speed_multiplier(&self) -> f32 {
        self.speed_multiplier
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn bricks(&self) -> &BrickGrid {
        &self.bricks
    }
}
