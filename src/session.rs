//! Session loop and scheduling contract
//!
//! A [`Session`] owns one game's state and its render collaborator. It does
//! not own a timer: each `tick()` reports through [`LoopControl`] whether the
//! host should arrange another call after [`FRAME_INTERVAL`]. That keeps the
//! loop flat (no self-rescheduling recursion) and makes dormancy an explicit,
//! observable state instead of a dangling callback.

use std::time::Duration;

use crate::input::{self, Key};
use crate::render::RenderTarget;
use crate::sim::{self, GameState};

/// Nominal delay between ticks (one 60 Hz display frame)
pub const FRAME_INTERVAL: Duration = Duration::from_nanos(1_000_000_000 / 60);

/// What the host should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "the host decides whether to re-arm the loop based on this"]
pub enum LoopControl {
    /// Schedule another `tick()` after `FRAME_INTERVAL`
    Continue,
    /// Game over: stop scheduling. The session is dormant until an input
    /// event resets the state; re-arming is the host's responsibility once
    /// it observes `is_over()` go false again.
    Stop,
}

/// One running game: state plus its render collaborator.
///
/// Single-threaded by construction. Input callbacks and `tick()` must come
/// from the same logical thread of control; any mutation applied before a
/// tick starts is visible to that tick.
pub struct Session<R: RenderTarget> {
    state: GameState,
    renderer: R,
}

impl<R: RenderTarget> Session<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            state: GameState::new(),
            renderer,
        }
    }

    /// Advance the simulation one tick, render the result, and tell the host
    /// whether to schedule the next one.
    pub fn tick(&mut self) -> LoopControl {
        sim::advance(&mut self.state);
        self.renderer.draw(&self.state);
        if self.state.over {
            LoopControl::Stop
        } else {
            LoopControl::Continue
        }
    }

    /// Forward a key press from the input source
    pub fn key(&mut self, key: Key) {
        input::on_key(&mut self.state, key);
    }

    /// Forward a raw key name; unrecognized names are dropped
    pub fn key_name(&mut self, name: &str) {
        if let Some(key) = Key::from_name(name) {
            self.key(key);
        }
    }

    /// Forward a pointer position from the input source
    pub fn pointer(&mut self, x: f32) {
        input::on_pointer_move(&mut self.state, x);
    }

    /// True while the session is dormant (terminal state, loop stopped)
    pub fn is_over(&self) -> bool {
        self.state.over
    }

    /// Read-only view of the current state
    pub fn state(&self) -> &GameState {
        &self.state
    }
}
