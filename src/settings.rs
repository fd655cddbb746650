//! Shell settings and preferences
//!
//! These configure the host shell (tick cadence, demo behavior), never the
//! game rules - the simulation's policy constants are fixed in `consts`.
//! Persisted as JSON next to the binary; a missing or unreadable file falls
//! back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Host shell settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Target tick rate in Hz (display refresh the host aims for)
    pub tick_rate_hz: u32,
    /// Demo driver: keep the paddle tracking the ball
    pub autopilot: bool,
    /// Demo driver: stop after this many ticks even if the game is still live
    pub max_ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_rate_hz: 60,
            autopilot: true,
            max_ticks: 3600,
        }
    }
}

impl Settings {
    /// Settings file name, looked up in the working directory
    pub const FILE_NAME: &'static str = "solo-pong.json";

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("ignoring malformed {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("using default settings");
                Self::default()
            }
        }
    }

    /// Write settings out as pretty JSON
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }
}
