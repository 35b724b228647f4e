//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Motion scaled by the caller-supplied dt (frame-rate independent)
//! - Stable obstacle iteration order (roster order, by entity ID)
//! - Deferred respawns serialized through the tick, never a real timer
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;
pub mod track;

pub use collision::Footprint;
pub use state::{
    Direction, GameEvent, GameState, Obstacle, PendingRespawn, Player, OBSTACLE_SPRITE,
    PLAYER_SPRITE,
};
pub use tick::{TickInput, tick};
pub use track::{TRACKS, step_down, step_up};
