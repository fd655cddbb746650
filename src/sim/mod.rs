//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Integer velocities, so trajectories are bit-identical across runs
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{hits_paddle, hits_side_wall, hits_top_wall, past_floor};
pub use state::{Ball, GameState, Paddle};
pub use tick::advance;
