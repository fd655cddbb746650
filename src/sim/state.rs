//! Game state and core simulation types
//!
//! Everything the simulation reads or writes lives in [`GameState`]. There is
//! exactly one instance per session and it is mutated in place, never shared.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// The ball - continuous position, integer per-tick displacement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Signed displacement applied once per tick. Magnitude only grows
    /// (escalation) or flips sign (bounce); it never resets mid-game.
    pub vel: IVec2,
    pub radius: f32,
}

impl Ball {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(BALL_START_X, BALL_START_Y),
            vel: IVec2::new(BALL_START_VEL.0, BALL_START_VEL.1),
            radius: BALL_RADIUS,
        }
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

/// The player's paddle
///
/// A fixed-size bar held at y = `PADDLE_Y`; only its left edge moves, and only
/// the input layer moves it. The simulation reads it but never writes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge, clamped to [0, PADDLE_MAX_X]
    pub x: i32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self { x: PADDLE_START_X }
    }
}

impl Paddle {
    /// Right edge of the paddle
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + PADDLE_WIDTH
    }

    /// Move by a signed step, clamped to the arena
    pub fn nudge(&mut self, dx: i32) {
        self.x = (self.x + dx).clamp(0, PADDLE_MAX_X);
    }

    /// Center the paddle under an arbitrary x coordinate, clamped
    pub fn center_on(&mut self, x: f32) {
        self.x = ((x - PADDLE_WIDTH as f32 / 2.0) as i32).clamp(0, PADDLE_MAX_X);
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub ball: Ball,
    pub paddle: Paddle,
    /// Always a non-negative multiple of POINTS_PER_HIT; monotone until reset
    pub score: u32,
    /// Terminal flag. Monotone: once set, only an explicit reset clears it.
    pub over: bool,
}

impl GameState {
    /// Create a fresh session state with the documented initial values
    pub fn new() -> Self {
        Self {
            ball: Ball::new(),
            paddle: Paddle::default(),
            score: 0,
            over: false,
        }
    }

    /// Restore every field to its initial value (restart after game over)
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::new();
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.ball.vel, IVec2::new(4, 4));
        assert_eq!(state.paddle.x, 350);
        assert_eq!(state.score, 0);
        assert!(!state.over);
    }

    #[test]
    fn test_reset_restores_initial_values() {
        let mut state = GameState::new();
        state.ball.pos = Vec2::new(123.0, 605.0);
        state.ball.vel = IVec2::new(-7, 7);
        state.paddle.x = 0;
        state.score = 250;
        state.over = true;

        state.reset();
        assert_eq!(state, GameState::new());
    }

    #[test]
    fn test_paddle_nudge_clamps() {
        let mut paddle = Paddle { x: 10 };
        paddle.nudge(-20);
        assert_eq!(paddle.x, 0);

        paddle.x = 690;
        paddle.nudge(20);
        assert_eq!(paddle.x, 700);
    }

    #[test]
    fn test_paddle_center_on_clamps() {
        let mut paddle = Paddle::default();
        paddle.center_on(400.0);
        assert_eq!(paddle.x, 350);

        paddle.center_on(-500.0);
        assert_eq!(paddle.x, 0);

        paddle.center_on(5000.0);
        assert_eq!(paddle.x, 700);
    }
}
