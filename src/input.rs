//! Input event mapping
//!
//! Translates the host's raw events (key name strings, pointer x coordinates)
//! into game state mutations. Key names are tightened into the [`Key`] action
//! enum at the boundary; unrecognized names drop out as `None` and become
//! no-ops. Everything here is defensively clamped - malformed input can never
//! push a field out of its documented range.

use crate::consts::*;
use crate::sim::GameState;

/// Recognized input actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Step the paddle left ("ArrowLeft")
    Left,
    /// Step the paddle right ("ArrowRight")
    Right,
    /// Restart after game over (space)
    Restart,
}

impl Key {
    /// Map a DOM-style key name to an action
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            " " => Some(Key::Restart),
            _ => None,
        }
    }
}

/// Apply a key press to the game state.
///
/// Safe to call at any time, including while the game is over: paddle moves
/// are harmless then (the simulation ignores them), and restart only takes
/// effect from the terminal state.
pub fn on_key(state: &mut GameState, key: Key) {
    match key {
        Key::Left => state.paddle.nudge(-PADDLE_STEP),
        Key::Right => state.paddle.nudge(PADDLE_STEP),
        Key::Restart => {
            if state.over {
                state.reset();
                log::info!("restarting game");
            }
        }
    }
}

/// Center the paddle under a pointer x coordinate (play-surface space)
pub fn on_pointer_move(state: &mut GameState, pointer_x: f32) {
    state.paddle.center_on(pointer_x);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_name_mapping() {
        assert_eq!(Key::from_name("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_name("ArrowRight"), Some(Key::Right));
        assert_eq!(Key::from_name(" "), Some(Key::Restart));
        assert_eq!(Key::from_name("ArrowUp"), None);
        assert_eq!(Key::from_name("Space"), None);
        assert_eq!(Key::from_name(""), None);
    }

    #[test]
    fn test_arrow_keys_step_paddle() {
        let mut state = GameState::new();
        on_key(&mut state, Key::Left);
        assert_eq!(state.paddle.x, 330);
        on_key(&mut state, Key::Right);
        on_key(&mut state, Key::Right);
        assert_eq!(state.paddle.x, 370);
    }

    #[test]
    fn test_left_key_clamps_at_zero() {
        let mut state = GameState::new();
        state.paddle.x = 10;
        on_key(&mut state, Key::Left);
        assert_eq!(state.paddle.x, 0);
        on_key(&mut state, Key::Left);
        assert_eq!(state.paddle.x, 0);
    }

    #[test]
    fn test_right_key_clamps_at_max() {
        let mut state = GameState::new();
        state.paddle.x = 695;
        on_key(&mut state, Key::Right);
        assert_eq!(state.paddle.x, 700);
    }

    #[test]
    fn test_restart_only_from_terminal_state() {
        let mut state = GameState::new();
        state.score = 120;
        on_key(&mut state, Key::Restart);
        // Mid-game space is ignored
        assert_eq!(state.score, 120);
        assert!(!state.over);

        state.over = true;
        on_key(&mut state, Key::Restart);
        assert_eq!(state, GameState::new());
    }

    #[test]
    fn test_pointer_move_centers_and_clamps() {
        let mut state = GameState::new();
        on_pointer_move(&mut state, 200.0);
        assert_eq!(state.paddle.x, 150);

        on_pointer_move(&mut state, 10.0);
        assert_eq!(state.paddle.x, 0);

        on_pointer_move(&mut state, 795.0);
        assert_eq!(state.paddle.x, 700);
    }

    #[test]
    fn test_pointer_move_is_idempotent() {
        let mut a = GameState::new();
        let mut b = GameState::new();
        on_pointer_move(&mut a, 412.5);
        on_pointer_move(&mut b, 412.5);
        on_pointer_move(&mut b, 412.5);
        assert_eq!(a.paddle.x, b.paddle.x);
    }

    #[test]
    fn test_paddle_moves_allowed_while_over() {
        let mut state = GameState::new();
        state.over = true;
        on_key(&mut state, Key::Left);
        assert_eq!(state.paddle.x, 330);
        on_pointer_move(&mut state, 100.0);
        assert_eq!(state.paddle.x, 50);
        // Still over - only restart clears it
        assert!(state.over);
    }
}
