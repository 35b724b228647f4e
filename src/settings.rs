//! Demo shell settings and preferences
//!
//! Governs the headless demo loop only. Gameplay invariants (track ladder,
//! canvas bounds, respawn delay) are fixed constants in `crate::consts` and
//! are deliberately not configurable here.

use serde::{Deserialize, Serialize};

/// Preferences for the demo binary's frame loop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Simulation ticks per second
    pub tick_hz: u32,
    /// How long the demo runs (simulation seconds)
    pub run_secs: f32,
    /// Trace entity positions every N ticks (0 disables the trace)
    pub trace_every: u64,
    /// Dump the final state as JSON on exit
    pub dump_state: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_hz: 60,
            run_secs: 12.0,
            trace_every: 60,
            dump_state: false,
        }
    }
}

impl Settings {
    /// Environment variable naming a JSON settings file
    const SETTINGS_ENV: &'static str = "GRID_HOPPER_SETTINGS";

    /// Load settings from the file named by `GRID_HOPPER_SETTINGS`, falling
    /// back to defaults when unset, unreadable, or malformed.
    pub fn load() -> Self {
        if let Ok(path) = std::env::var(Self::SETTINGS_ENV) {
            match std::fs::read_to_string(&path) {
                Ok(json) => match serde_json::from_str(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from {}", path);
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring malformed settings file {}: {}", path, e),
                },
                Err(e) => log::warn!("Could not read settings file {}: {}", path, e),
            }
        }
        log::info!("Using default settings");
        Self::default()
    }

    /// Fixed timestep implied by `tick_hz`, in seconds
    pub fn dt(&self) -> f32 {
        1.0 / self.tick_hz.max(1) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dt_guards_zero_hz() {
        let mut settings = Settings::default();
        settings.tick_hz = 0;
        assert_eq!(settings.dt(), 1.0);
    }

    #[test]
    fn test_settings_round_trip() {
        let settings = Settings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.tick_hz, settings.tick_hz);
        assert_eq!(back.dump_state, settings.dump_state);
    }
}
