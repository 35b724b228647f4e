//! Per-frame simulation tick
//!
//! Advances the obstacle roster and then the player once per frame. Deferred
//! respawns are applied at the top of the tick, before any entity moves, so
//! a write scheduled on an earlier frame can never interleave with the
//! current frame's reads.

use crate::consts::PLAYER_START;

use super::state::{Direction, GameEvent, GameState};

/// Input buffered for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Most recent directional key since the previous tick, if any
    pub direction: Option<Direction>,
}

impl TickInput {
    /// Buffer a raw key code from the keyboard collaborator. Codes outside
    /// the arrow-key map are dropped.
    pub fn press_key(&mut self, code: u32) {
        if let Some(dir) = Direction::from_key_code(code) {
            self.direction = Some(dir);
        }
    }
}

/// Advance the game state by one frame.
///
/// `dt` is the elapsed time since the previous frame, in seconds. Negative
/// or non-finite values are treated as an empty frame.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    let dt = if dt.is_finite() && dt >= 0.0 { dt } else { 0.0 };

    state.clock += f64::from(dt);
    state.time_ticks += 1;

    apply_due_respawns(state);

    if let Some(dir) = input.direction {
        state.player.handle_input(dir);
    }

    // Obstacle pass: advance, wrap, then collide. The collision test runs on
    // the post-wrap position, and the footprint is rebuilt from the live
    // player position for every obstacle.
    let mut collisions: Vec<u32> = Vec::new();
    for obstacle in &mut state.obstacles {
        obstacle.advance(dt);
        obstacle.wrap();
        if state.player.footprint().contains(obstacle.pos) {
            collisions.push(obstacle.id);
        }
    }
    for id in collisions {
        log::debug!("Obstacle {} ran over the player", id);
        state.events.push(GameEvent::Collision { obstacle: id });
        state.schedule_respawn(PLAYER_START);
    }

    // Player pass: win check only; the player moves on input, not per tick
    if state.player.at_goal() {
        state.events.push(GameEvent::GoalReached);
        state.schedule_respawn(PLAYER_START);
    }
}

/// Apply every deferred respawn that has fallen due, in scheduling order.
///
/// Later tasks overwrite earlier ones, so when several are due at once the
/// last-scheduled target sticks. Tasks not yet due stay queued untouched.
fn apply_due_respawns(state: &mut GameState) {
    let clock = state.clock;
    let player = &mut state.player;
    let events = &mut state.events;
    state.pending_respawns.retain(|task| {
        if task.due <= clock {
            player.pos = task.target;
            events.push(GameEvent::Respawned);
            false
        } else {
            true
        }
    });
}
