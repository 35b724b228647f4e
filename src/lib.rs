//! Grid Hopper - a lane-crossing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state)
//! - `settings`: Demo shell preferences
//!
//! Rendering, image caching, and input capture live with the embedding
//! application; this crate exposes entity positions and sprite handles for a
//! renderer to read, and a `tick` entry point for the frame loop to drive.

pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep for the demo loop (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Player spawn point, also the target of every respawn
    pub const PLAYER_START: Vec2 = Vec2::new(200.0, 380.0);
    /// Horizontal step per left/right input
    pub const PLAYER_STEP_X: f32 = 100.0;
    /// Rightmost column the player can still step right from
    pub const PLAYER_MAX_X: f32 = 400.0;
    /// Bottom row bound for downward steps
    pub const PLAYER_MAX_Y: f32 = 400.0;

    /// The winning row
    pub const GOAL_Y: f32 = -30.0;

    /// Collision footprint half-extents around the player
    pub const FOOTPRINT_HALF_X: f32 = 80.0;
    pub const FOOTPRINT_HALF_Y: f32 = 20.0;

    /// Obstacles wrap once their x exceeds this edge
    pub const WRAP_EDGE_X: f32 = 500.0;
    /// Off-screen x an obstacle wraps back to
    pub const WRAP_ENTRY_X: f32 = -100.0;

    /// Delay before a scheduled respawn lands (seconds)
    pub const RESPAWN_DELAY: f64 = 0.1;
}
