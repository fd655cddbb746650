//! Solo Pong entry point
//!
//! Headless demo driver: owns the collaborators the core leaves abstract -
//! a text scoreboard for rendering, a sleep-based frame timer for scheduling,
//! and an autopilot standing in for the player's pointer.

use std::path::Path;
use std::time::Duration;

use solo_pong::render::RenderTarget;
use solo_pong::session::{LoopControl, Session};
use solo_pong::settings::Settings;
use solo_pong::sim::GameState;

/// Render collaborator that narrates the session instead of drawing it
#[derive(Default)]
struct Scoreboard {
    last_score: u32,
    announced_over: bool,
}

impl RenderTarget for Scoreboard {
    fn draw(&mut self, state: &GameState) {
        if state.score != self.last_score {
            println!("score: {}", state.score);
            self.last_score = state.score;
        }
        if state.over && !self.announced_over {
            println!("game over - final score {}", state.score);
            self.announced_over = true;
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Solo Pong (headless demo) starting...");
    log::info!("move the paddle with the mouse or arrow keys, keep the ball up");
    log::info!("after a game over, space starts a new game");

    let settings = Settings::load(Path::new(Settings::FILE_NAME));
    let frame = if settings.tick_rate_hz > 0 {
        Duration::from_secs_f64(1.0 / f64::from(settings.tick_rate_hz))
    } else {
        solo_pong::session::FRAME_INTERVAL
    };

    let mut session = Session::new(Scoreboard::default());
    log::info!(
        "running up to {} ticks at {} Hz (autopilot: {})",
        settings.max_ticks,
        settings.tick_rate_hz,
        settings.autopilot
    );

    // The scheduling collaborator: invoke one tick per frame interval until
    // the session goes dormant or the demo budget runs out.
    for _ in 0..settings.max_ticks {
        if settings.autopilot {
            let ball_x = session.state().ball.pos.x;
            session.pointer(ball_x);
        }
        if session.tick() == LoopControl::Stop {
            break;
        }
        std::thread::sleep(frame);
    }

    let state = session.state();
    if session.is_over() {
        log::info!("session ended at score {}", state.score);
    } else {
        log::info!(
            "demo budget exhausted at score {} (ball speed {:?})",
            state.score,
            state.ball.vel
        );
    }
}
