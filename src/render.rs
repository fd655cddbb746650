//! Render collaborator boundary
//!
//! The core never draws. Once per tick it hands the renderer a read-only
//! snapshot and the renderer turns it into pixels, glyphs, or nothing at all.

use crate::sim::GameState;

/// A drawing backend for one game session.
///
/// Expected semantic content per frame (the core imposes no pixel or font
/// requirements):
/// - clear the surface;
/// - the ball as a filled circle of radius 10 at `state.ball.pos`;
/// - the paddle as a filled 100x10 rectangle at `(state.paddle.x, 550)`;
/// - the score as text;
/// - when `state.over`, a translucent full-surface overlay with "game over"
///   and the final score.
///
/// Implementations must not mutate game state; the `&GameState` borrow
/// enforces that for safe code.
pub trait RenderTarget {
    fn draw(&mut self, state: &GameState);
}

/// Renderer that discards every frame. Useful for headless runs and tests.
#[derive(Debug, Default)]
pub struct NullRenderer;

impl RenderTarget for NullRenderer {
    fn draw(&mut self, _state: &GameState) {}
}
