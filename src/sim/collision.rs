//! Collision predicates for the rectangular arena
//!
//! Everything here is axis-aligned circle-vs-line. The predicates test the
//! ball center against bounds already shrunk by the ball radius, so callers
//! pass raw state and get back "did it hit". None of them reposition the
//! ball: a fast ball may overshoot a wall by up to one tick's displacement
//! before the bounce, which is accepted behavior.

use glam::Vec2;

use super::state::Paddle;
use crate::consts::*;

/// Ball center hits the left or right wall (inset by the ball radius)
#[inline]
pub fn hits_side_wall(pos: Vec2) -> bool {
    pos.x <= BALL_RADIUS || pos.x >= ARENA_WIDTH - BALL_RADIUS
}

/// Ball center hits the ceiling
#[inline]
pub fn hits_top_wall(pos: Vec2) -> bool {
    pos.y <= BALL_RADIUS
}

/// Ball is in the paddle's strike band and horizontally over the paddle.
///
/// The band is [PADDLE_Y - BALL_RADIUS, PADDLE_Y]: the ball's lower edge has
/// reached the paddle top but its center has not passed it. Horizontal bounds
/// are inclusive on both paddle edges.
#[inline]
pub fn hits_paddle(pos: Vec2, paddle: &Paddle) -> bool {
    pos.y >= PADDLE_Y - BALL_RADIUS
        && pos.y <= PADDLE_Y
        && pos.x >= paddle.x as f32
        && pos.x <= paddle.right() as f32
}

/// Ball center has fallen below the arena floor (terminal condition)
#[inline]
pub fn past_floor(pos: Vec2) -> bool {
    pos.y > ARENA_HEIGHT
}
