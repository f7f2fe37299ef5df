//! Collision detection and response
//!
//! Circle-vs-rectangle overlap for ball against paddle and bricks, and the
//! angle-based paddle rebound. This is not rigid-body physics: bricks only
//! ever flip the vertical component, and the paddle picks a fresh direction
//! from where it was struck.

use glam::Vec2;

use super::rect::Rect;

/// Restrict `v` to `[lo, hi]`.
///
/// Total: the lower bound wins, so `lo > hi` yields `lo` rather than
/// panicking like `f32::clamp`.
#[inline]
pub fn clamp(v: f32, lo: f32, hi: f32) -> f32 {
    v.min(hi).max(lo)
}

/// Nearest point on (or in) `rect` to `point`
#[inline]
pub fn closest_point_on_rect(point: Vec2, rect: &Rect) -> Vec2 {
    Vec2::new(
        clamp(point.x, rect.x, rect.right()),
        clamp(point.y, rect.y, rect.bottom()),
    )
}

/// Check whether a circle overlaps a rectangle
///
/// Touching counts as overlap. A centre inside the rectangle is its own
/// nearest point, so fully-contained circles are detected too.
pub fn circle_intersects_rect(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let nearest = closest_point_on_rect(center, rect);
    center.distance_squared(nearest) <= radius * radius
}

/// Velocity after the ball strikes the paddle
///
/// - `hit_pos`: strike offset from the paddle centre in `[-1, 1]`
/// - `fallback_speed`: used when `vel` has no usable magnitude
/// - `min_rise`: floor on the upward component, keeps the ball from skimming
///   sideways forever
/// - `max_angle`: deflection from vertical at `hit_pos = ±1`, radians
///
/// The result always points up (negative y).
pub fn paddle_rebound(
    vel: Vec2,
    hit_pos: f32,
    fallback_speed: f32,
    min_rise: f32,
    max_angle: f32,
) -> Vec2 {
    let speed = vel.length();
    let speed = if speed.is_finite() && speed > 0.0 {
        speed
    } else {
        fallback_speed
    };

    let angle = hit_pos * max_angle;
    let dx = speed * angle.sin();
    let mut dy = -(speed * angle.cos()).abs();
    if dy.abs() < min_rise {
        dy = -min_rise;
    }
    Vec2::new(dx, dy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_3;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(11.0, 0.0, 10.0), 10.0);
        // Inverted bounds don't panic; the lower bound wins
        assert_eq!(clamp(5.0, 10.0, 0.0), 10.0);
        assert_eq!(clamp(-3.0, 10.0, 0.0), 10.0);
        assert_eq!(clamp(20.0, 10.0, 0.0), 10.0);
    }

    #[test]
    fn test_circle_rect_outside() {
        let rect = Rect::new(100.0, 100.0, 80.0, 22.0);
        assert!(!circle_intersects_rect(Vec2::new(50.0, 50.0), 9.0, &rect));
        // Just past the top edge
        assert!(!circle_intersects_rect(Vec2::new(140.0, 90.9), 9.0, &rect));
    }

    #[test]
    fn test_circle_rect_touching_edge() {
        let rect = Rect::new(100.0, 100.0, 80.0, 22.0);
        assert!(circle_intersects_rect(Vec2::new(140.0, 91.0), 9.0, &rect));
        assert!(circle_intersects_rect(Vec2::new(189.0, 111.0), 9.0, &rect));
    }

    #[test]
    fn test_circle_rect_corner() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Diagonal distance to the corner is ~7.07
        assert!(circle_intersects_rect(Vec2::new(15.0, 15.0), 7.1, &rect));
        assert!(!circle_intersects_rect(Vec2::new(15.0, 15.0), 7.0, &rect));
    }

    #[test]
    fn test_circle_inside_rect() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(circle_intersects_rect(Vec2::new(50.0, 50.0), 1.0, &rect));
        assert_eq!(closest_point_on_rect(Vec2::new(50.0, 50.0), &rect), Vec2::new(50.0, 50.0));
    }

    #[test]
    fn test_rebound_straight_down_center() {
        let vel = paddle_rebound(Vec2::new(0.0, 5.0), 0.0, 4.0, 3.0, FRAC_PI_3);
        assert!(vel.x.abs() < 1e-6);
        assert!((vel.y + 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_rebound_enforces_min_rise() {
        let vel = paddle_rebound(Vec2::new(0.0, 2.0), 0.0, 4.0, 3.0, FRAC_PI_3);
        assert!(vel.x.abs() < 1e-6);
        assert_eq!(vel.y, -3.0);
    }

    #[test]
    fn test_rebound_edge_angle() {
        let vel = paddle_rebound(Vec2::new(3.0, 4.0), 1.0, 4.0, 0.0, FRAC_PI_3);
        // 60 degrees from vertical, speed preserved
        assert!((vel.x - 5.0 * FRAC_PI_3.sin()).abs() < 1e-5);
        assert!((vel.y + 2.5).abs() < 1e-5);
        assert!((vel.length() - 5.0).abs() < 1e-5);

        let left = paddle_rebound(Vec2::new(3.0, 4.0), -1.0, 4.0, 0.0, FRAC_PI_3);
        assert!((left.x + vel.x).abs() < 1e-5);
    }

    #[test]
    fn test_rebound_min_rise_at_edge() {
        // cos(60°) * 5 = 2.5 < 3.0
        let vel = paddle_rebound(Vec2::new(3.0, 4.0), 1.0, 4.0, 3.0, FRAC_PI_3);
        assert_eq!(vel.y, -3.0);
    }

    #[test]
    fn test_rebound_degenerate_velocity_uses_fallback() {
        let vel = paddle_rebound(Vec2::ZERO, 0.0, 4.32, 3.0, FRAC_PI_3);
        assert!((vel.y + 4.32).abs() < 1e-6);

        let vel = paddle_rebound(Vec2::new(f32::NAN, 1.0), 0.0, 4.0, 3.0, FRAC_PI_3);
        assert!((vel.y + 4.0).abs() < 1e-6);
    }
}
