//! Solo Pong - a single-player paddle-and-ball arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `input`: Key/pointer event mapping onto game state
//! - `session`: Fixed-cadence tick loop and scheduling contract
//! - `render`: Render collaborator boundary
//!
//! The crate owns the rules of the game and nothing else: drawing, raw event
//! delivery, and the frame timer are collaborators the host plugs in at the
//! trait boundaries in `render` and `session`.

pub mod input;
pub mod render;
pub mod session;
pub mod settings;
pub mod sim;

pub use render::RenderTarget;
pub use session::{LoopControl, Session};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (pixels)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_START_X: f32 = 400.0;
    pub const BALL_START_Y: f32 = 300.0;
    /// Signed per-tick displacement at the start of a game
    pub const BALL_START_VEL: (i32, i32) = (4, 4);

    /// Paddle defaults - fixed-height bar near the arena floor
    pub const PADDLE_WIDTH: i32 = 100;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Top edge of the paddle (paddle occupies y = 550..560)
    pub const PADDLE_Y: f32 = 550.0;
    /// Paddle left edge stays in [0, PADDLE_MAX_X]
    pub const PADDLE_MAX_X: i32 = 700;
    pub const PADDLE_START_X: i32 = 350;
    /// Horizontal displacement per arrow-key press
    pub const PADDLE_STEP: i32 = 20;

    /// Scoring policy
    pub const POINTS_PER_HIT: u32 = 10;
    /// Ball speed grows by 1 per axis every this many points
    pub const SPEED_UP_EVERY: u32 = 50;
}
