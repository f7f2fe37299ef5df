//! Idle/demo mode - a simple AI that plays the game
//!
//! Produces the same [`TickInput`] a keyboard adapter would, so demos and
//! soak tests drive the session exactly like a player.

use super::session::GameSession;
use super::tick::TickInput;

/// Choose this frame's intent for `session`
///
/// Launches a stuck ball, otherwise steers the paddle under the ball's
/// predicted landing x. The aim point is nudged off-centre by a slow
/// oscillation so rallies don't settle into a single repeating loop.
pub fn autopilot(session: &GameSession) -> TickInput {
    let ball = session.ball();
    let paddle = session.paddle();

    if ball.stuck {
        return TickInput {
            launch: true,
            ..Default::default()
        };
    }

    let field_width = session.tuning().playfield.width;
    let target_x = if ball.vel.y > 0.0 {
        predict_landing_x(ball.pos.x, ball.pos.y, ball.vel.x, ball.vel.y, paddle.y, ball.radius, field_width)
    } else {
        ball.pos.x
    };

    let time_factor = session.frame() as f32 * 0.02;
    let offset = time_factor.sin() * paddle.width * 0.3;
    let aim = target_x + offset;

    let delta = aim - paddle.center_x();
    let deadzone = paddle.speed;
    TickInput {
        move_left: delta < -deadzone,
        move_right: delta > deadzone,
        launch: false,
    }
}

/// Where a falling ball will cross the paddle's height, folding side-wall
/// bounces back into the playfield
fn predict_landing_x(
    x: f32,
    y: f32,
    dx: f32,
    dy: f32,
    paddle_y: f32,
    radius: f32,
    field_width: f32,
) -> f32 {
    let frames = ((paddle_y - radius - y) / dy).max(0.0);
    let raw = x + dx * frames;

    // Reflect into [radius, width - radius]
    let lo = radius;
    let span = (field_width - 2.0 * radius).max(1.0);
    let t = (raw - lo).rem_euclid(2.0 * span);
    if t <= span { lo + t } else { lo + 2.0 * span - t }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GamePhase;

    #[test]
    fn test_autopilot_launches_stuck_ball() {
        let mut session = GameSession::new(1);
        session.reset_and_start();
        let input = autopilot(&session);
        assert!(input.launch);
        assert!(!input.move_left && !input.move_right);
    }

    #[test]
    fn test_predict_landing_without_walls() {
        let x = predict_landing_x(400.0, 100.0, 1.0, 4.0, 550.0, 9.0, 800.0);
        // (550 - 9 - 100) / 4 = 110.25 frames
        assert!((x - 510.25).abs() < 1e-3);
    }

    #[test]
    fn test_predict_landing_folds_off_walls() {
        // Heading right fast enough to hit the right wall once
        let x = predict_landing_x(700.0, 100.0, 2.0, 2.0, 550.0, 9.0, 800.0);
        assert!((9.0..=791.0).contains(&x));
        // raw = 700 + 441 = 1141, reflected off 791
        assert!((x - (2.0 * 791.0 - 1141.0)).abs() < 1e-3);
    }

    #[test]
    fn test_autopilot_scores_points() {
        let mut session = GameSession::new(2024);
        session.reset_and_start();
        for _ in 0..20_000 {
            if session.phase() != GamePhase::Running {
                break;
            }
            let input = autopilot(&session);
            session.step(&input, 16.0);
        }
        assert!(session.score() > 0);
    }
}
