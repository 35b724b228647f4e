//! Game state and core simulation types
//!
//! Everything the loop collaborator owns and passes into `tick` lives here.
//! There are no module-level globals: the embedding application holds one
//! [`GameState`] and threads it through update and render.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Footprint;
use super::track;
use crate::consts::*;

/// Sprite handle for the player, resolved by the embedding image cache
pub const PLAYER_SPRITE: &str = "sprites/hopper.png";
/// Sprite handle for obstacles
pub const OBSTACLE_SPRITE: &str = "sprites/beetle.png";

/// A directional input, decoded from the keyboard collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    /// Decode a raw arrow-key code (37..=40). Any other code yields `None`
    /// and is dropped by the caller, not treated as an error.
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            37 => Some(Direction::Left),
            38 => Some(Direction::Up),
            39 => Some(Direction::Right),
            40 => Some(Direction::Down),
            _ => None,
        }
    }
}

/// The player-controlled sprite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Opaque handle read by the render pass
    pub sprite: String,
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: PLAYER_START,
            sprite: PLAYER_SPRITE.to_string(),
        }
    }

    /// Apply one directional input.
    ///
    /// Horizontal steps move a full column and stop at the canvas edges;
    /// vertical steps snap along the track ladder. A step with no qualifying
    /// track is a silent no-op.
    pub fn handle_input(&mut self, dir: Direction) {
        match dir {
            Direction::Left => {
                if self.pos.x > 0.0 {
                    self.pos.x -= PLAYER_STEP_X;
                }
            }
            Direction::Right => {
                if self.pos.x < PLAYER_MAX_X {
                    self.pos.x += PLAYER_STEP_X;
                }
            }
            Direction::Up => {
                if self.pos.y > 0.0 {
                    if let Some(y) = track::step_up(self.pos.y) {
                        self.pos.y = y;
                    }
                }
            }
            Direction::Down => {
                if self.pos.y < PLAYER_MAX_Y {
                    if let Some(y) = track::step_down(self.pos.y) {
                        self.pos.y = y;
                    }
                }
            }
        }
    }

    /// The collision footprint at the current position, rebuilt fresh on
    /// every call
    pub fn footprint(&self) -> Footprint {
        Footprint::around(self.pos)
    }

    /// Win condition: exact equality with the goal row, no tolerance band
    pub fn at_goal(&self) -> bool {
        self.pos.y == GOAL_Y
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// A moving obstacle sprite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub pos: Vec2,
    /// Pixels per second, fixed for the obstacle's lifetime
    pub speed: f32,
    /// Opaque handle read by the render pass
    pub sprite: String,
}

impl Obstacle {
    pub fn new(id: u32, x: f32, y: f32, speed: f32) -> Self {
        Self {
            id,
            pos: Vec2::new(x, y),
            speed,
            sprite: OBSTACLE_SPRITE.to_string(),
        }
    }

    /// Advance rightward, scaled by dt so motion is frame-rate independent
    pub fn advance(&mut self, dt: f32) {
        self.pos.x += self.speed * dt;
    }

    /// Wrap back to the off-screen left entry once past the right edge
    pub fn wrap(&mut self) {
        if self.pos.x > WRAP_EDGE_X {
            self.pos.x = WRAP_ENTRY_X;
        }
    }
}

/// A deferred position write. The respawn is scheduled the instant a
/// collision or win is detected but only lands once `due` is reached on the
/// simulation clock, so the triggering frame still renders the old position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendingRespawn {
    /// Simulation clock time at which the write fires (seconds)
    pub due: f64,
    /// Position written when the task fires
    pub target: Vec2,
}

/// Things that happened during a tick, for the loop/render/audio collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// An obstacle overlapped the player's footprint
    Collision { obstacle: u32 },
    /// The player reached the goal row
    GoalReached,
    /// A deferred respawn was enqueued
    RespawnScheduled,
    /// A deferred respawn fired and repositioned the player
    Respawned,
}

/// Complete game state, owned by the loop collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// The single player instance
    pub player: Player,
    /// Fixed obstacle roster, stable order (by entity ID)
    pub obstacles: Vec<Obstacle>,
    /// Deferred respawns in scheduling order; never cancelled or coalesced
    pub pending_respawns: Vec<PendingRespawn>,
    /// Accumulated simulation time (seconds)
    pub clock: f64,
    /// Tick counter
    pub time_ticks: u64,
    /// Per-tick event log, cleared at the start of every tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a fresh game: player at the spawn point, full obstacle roster
    pub fn new() -> Self {
        let mut state = Self {
            player: Player::new(),
            obstacles: Vec::new(),
            pending_respawns: Vec::new(),
            clock: 0.0,
            time_ticks: 0,
            events: Vec::new(),
            next_id: 1,
        };
        state.spawn_roster();
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn the fixed roster: five beetles spread over three lanes with
    /// varying speeds. Lane y-coordinates sit a few pixels off the player
    /// tracks so the sprites align visually.
    pub fn spawn_roster(&mut self) {
        const ROSTER: [(f32, f32, f32); 5] = [
            (0.0, 55.0, 100.0),
            (0.0, 140.0, 200.0),
            (0.0, 220.0, 150.0),
            (0.0, 140.0, 50.0),
            (0.0, 55.0, 250.0),
        ];
        for (x, y, speed) in ROSTER {
            let id = self.next_entity_id();
            self.obstacles.push(Obstacle::new(id, x, y, speed));
        }
        log::info!("Spawned obstacle roster ({} beetles)", self.obstacles.len());
    }

    /// Enqueue a deferred respawn of the player to `target`.
    ///
    /// Returns immediately; the write lands `RESPAWN_DELAY` seconds later on
    /// the simulation clock. Overlapping schedules each enqueue their own
    /// task and the last one to fire wins.
    pub fn schedule_respawn(&mut self, target: Vec2) {
        self.pending_respawns.push(PendingRespawn {
            due: self.clock + RESPAWN_DELAY,
            target,
        });
        self.events.push(GameEvent::RespawnScheduled);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_code_decoding() {
        assert_eq!(Direction::from_key_code(37), Some(Direction::Left));
        assert_eq!(Direction::from_key_code(38), Some(Direction::Up));
        assert_eq!(Direction::from_key_code(39), Some(Direction::Right));
        assert_eq!(Direction::from_key_code(40), Some(Direction::Down));
        assert_eq!(Direction::from_key_code(13), None);
        assert_eq!(Direction::from_key_code(0), None);
    }

    #[test]
    fn test_new_game_layout() {
        let state = GameState::new();
        assert_eq!(state.player.pos, PLAYER_START);
        assert_eq!(state.obstacles.len(), 5);
        // IDs are stable and unique
        let ids: Vec<u32> = state.obstacles.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert!(state.pending_respawns.is_empty());
    }

    #[test]
    fn test_left_steps_until_edge() {
        let mut player = Player::new();
        player.handle_input(Direction::Left);
        assert_eq!(player.pos.x, 100.0);
        player.handle_input(Direction::Left);
        assert_eq!(player.pos.x, 0.0);
        // At the edge the guard makes it a no-op
        player.handle_input(Direction::Left);
        assert_eq!(player.pos.x, 0.0);
    }

    #[test]
    fn test_left_from_every_column() {
        for x in [100.0, 200.0, 300.0, 400.0] {
            let mut player = Player::new();
            player.pos.x = x;
            player.handle_input(Direction::Left);
            assert_eq!(player.pos.x, x - 100.0);
        }
    }

    #[test]
    fn test_right_steps_until_edge() {
        let mut player = Player::new();
        player.handle_input(Direction::Right);
        player.handle_input(Direction::Right);
        assert_eq!(player.pos.x, 400.0);
        player.handle_input(Direction::Right);
        assert_eq!(player.pos.x, 400.0);
    }

    #[test]
    fn test_up_climbs_ladder_to_goal() {
        let mut player = Player::new();
        let mut seen = Vec::new();
        for _ in 0..5 {
            let before = player.pos.y;
            player.handle_input(Direction::Up);
            assert!(player.pos.y < before);
            seen.push(player.pos.y);
        }
        assert_eq!(seen, vec![300.0, 210.0, 130.0, 50.0, -30.0]);
        assert!(player.at_goal());
        // A sixth press is a no-op
        player.handle_input(Direction::Up);
        assert_eq!(player.pos.y, -30.0);
    }

    #[test]
    fn test_down_is_noop_at_bottom() {
        let mut player = Player::new();
        player.handle_input(Direction::Down);
        assert_eq!(player.pos.y, 380.0);
    }
}
