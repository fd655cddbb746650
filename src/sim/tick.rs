//! Fixed timestep simulation tick
//!
//! [`advance`] is the whole rulebook: one call moves the world forward by one
//! tick. It is total (no error paths) and deterministic, so two sessions fed
//! the same inputs produce bit-identical trajectories.

use super::collision::{hits_paddle, hits_side_wall, hits_top_wall, past_floor};
use super::state::GameState;
use crate::consts::*;

/// Advance the game state by one tick.
///
/// A no-op on terminal states. Otherwise the checks run in a fixed order -
/// integrate, side walls, ceiling, paddle, floor - and each later check sees
/// the velocity flips of the earlier ones. The order is part of the contract:
/// reordering changes trajectories.
pub fn advance(state: &mut GameState) {
    if state.over {
        return;
    }

    let ball = &mut state.ball;
    ball.pos += ball.vel.as_vec2();

    if hits_side_wall(ball.pos) {
        ball.vel.x = -ball.vel.x;
        log::debug!("wall bounce at x={:.0}", ball.pos.x);
    }

    if hits_top_wall(ball.pos) {
        ball.vel.y = -ball.vel.y;
        log::debug!("ceiling bounce at x={:.0}", ball.pos.x);
    }

    if hits_paddle(ball.pos, &state.paddle) {
        ball.vel.y = -ball.vel.y;
        state.score += POINTS_PER_HIT;

        // Every SPEED_UP_EVERY points, both axes gain one unit of speed away
        // from zero. Uses the post-increment score.
        if state.score % SPEED_UP_EVERY == 0 {
            ball.vel.x += if ball.vel.x > 0 { 1 } else { -1 };
            ball.vel.y += if ball.vel.y > 0 { 1 } else { -1 };
            log::info!("score {}: ball sped up to {:?}", state.score, ball.vel);
        }
    }

    if past_floor(ball.pos) {
        state.over = true;
        log::info!("game over, final score {}", state.score);
    }
}
