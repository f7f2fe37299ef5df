//! Per-frame simulation step
//!
//! Motion is frame-coupled: velocities are units per frame and the elapsed
//! time a driver reports is only recorded, never used to scale movement. A
//! faster display therefore runs a faster game.

use super::collision::{circle_intersects_rect, clamp, paddle_rebound};
use super::session::GameSession;
use super::state::{GameEvent, GamePhase};

/// Input intent for a single step
///
/// Taken by value-snapshot: the driver fills it between frames and the step
/// reads it once, so a step never sees a half-updated intent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Left held
    pub move_left: bool,
    /// Right held
    pub move_right: bool,
    /// Launch the ball if it is stuck (space)
    pub launch: bool,
}

/// Advance the session by one frame and report what happened
///
/// Does nothing outside `Running`. Order within a frame:
/// paddle, ball motion, walls, ball loss, paddle rebound, bricks, level clear.
///
/// At most one brick is resolved per step: bricks are scanned in grid order
/// and the first one the ball overlaps takes the hit, even if the ball also
/// touches a neighbour. Brick contact only flips the vertical velocity.
pub fn tick(session: &mut GameSession, input: &TickInput, elapsed_ms: f64) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if session.phase != GamePhase::Running {
        return events;
    }

    session.frame += 1;
    session.elapsed_ms += elapsed_ms;

    if input.launch && session.launch() {
        events.push(GameEvent::Launched);
    }

    let field_width = session.tuning.playfield.width;
    let field_height = session.tuning.playfield.height;

    // Paddle
    session.paddle.apply_intent(
        input.move_left,
        input.move_right,
        field_width,
        session.tuning.paddle.margin,
    );

    // Ball motion
    if session.ball.stuck {
        session
            .ball
            .track_paddle(&session.paddle, session.tuning.ball.paddle_gap);
    } else {
        session.ball.integrate();
    }

    if session.ball.bounce_off_walls(field_width) {
        events.push(GameEvent::WallBounce);
    }

    // Open bottom: nothing else resolves this frame
    if session.ball.is_below(field_height) {
        events.push(session.lose_life());
        return events;
    }

    // Paddle rebound, only while falling
    if session.ball.vel.y > 0.0
        && circle_intersects_rect(session.ball.pos, session.ball.radius, &session.paddle.rect())
    {
        let half_width = session.paddle.width / 2.0;
        let hit_pos = clamp(
            (session.ball.pos.x - session.paddle.center_x()) / half_width,
            -1.0,
            1.0,
        );
        let b = &session.tuning.ball;
        let multiplier = session.speed_multiplier;
        session.ball.vel = paddle_rebound(
            session.ball.vel,
            hit_pos,
            b.launch_vertical * multiplier,
            b.min_rise * multiplier,
            session.tuning.max_bounce_angle(),
        );
        events.push(GameEvent::PaddleHit);
    }

    // Bricks
    if let Some(index) = session
        .bricks
        .first_hit(session.ball.pos, session.ball.radius)
    {
        session.ball.vel.y = -session.ball.vel.y;
        events.push(session.hit_brick(index));
    }

    if session.bricks.remaining() == 0 {
        events.push(session.complete_level());
    }

    events
}
