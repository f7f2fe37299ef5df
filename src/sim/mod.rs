//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. Rules for this module:
//! - One call to `tick` per rendered frame, motion in units per frame
//! - Seeded RNG only (the launch angle is the sole random input)
//! - Stable iteration order (bricks in row-major order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod rect;
pub mod session;
pub mod state;
pub mod tick;

pub use autopilot::autopilot;
pub use collision::{circle_intersects_rect, clamp, closest_point_on_rect, paddle_rebound};
pub use rect::Rect;
pub use session::{GameSession, Snapshot};
pub use state::{Ball, Brick, BrickGrid, GameEvent, GamePhase, HitOutcome, Paddle};
pub use tick::{TickInput, tick};
