//! Grid Hopper entry point
//!
//! Runs a headless demo of the simulation: a scripted pilot feeds raw
//! arrow-key codes while the beetle roster streams across the lanes. An
//! embedding application with a renderer would drive `sim::tick` the same
//! way, reading entity positions and sprite handles after each frame.

use grid_hopper::Settings;
use grid_hopper::sim::{GameEvent, GameState, TickInput, tick};

fn main() {
    env_logger::init();
    log::info!("Grid Hopper (headless) starting...");

    let settings = Settings::load();
    let dt = settings.dt();
    let total_ticks = (settings.run_secs / dt).ceil() as u64;

    let mut state = GameState::new();
    let mut input = TickInput::default();

    for n in 0..total_ticks {
        // The scripted pilot stands in for the keyboard collaborator,
        // delivering raw key codes that the decoder filters.
        if let Some(code) = scripted_key(n, settings.tick_hz) {
            input.press_key(code);
        }

        tick(&mut state, &input, dt);
        input.direction = None;

        for event in &state.events {
            match event {
                GameEvent::Collision { obstacle } => {
                    log::info!("tick {}: beetle {} ran over the player", n, obstacle)
                }
                GameEvent::GoalReached => log::info!("tick {}: reached the goal row!", n),
                GameEvent::Respawned => log::info!(
                    "tick {}: respawned at ({:.0}, {:.0})",
                    n,
                    state.player.pos.x,
                    state.player.pos.y
                ),
                GameEvent::RespawnScheduled => {}
            }
        }

        if settings.trace_every > 0 && n % settings.trace_every == 0 {
            log::debug!(
                "tick {}: player at ({:.0}, {:.0})",
                n,
                state.player.pos.x,
                state.player.pos.y
            );
        }
    }

    log::info!(
        "Demo finished after {} ticks ({:.1}s simulated)",
        state.time_ticks,
        state.clock
    );

    if settings.dump_state {
        match serde_json::to_string_pretty(&state) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Failed to serialize final state: {}", e),
        }
    }
}

/// The scripted pilot: hop one row up every second, with an occasional
/// sidestep, exactly as a keyboard would deliver the codes (37=left, 38=up,
/// 39=right, 40=down).
fn scripted_key(tick_n: u64, tick_hz: u32) -> Option<u32> {
    let hz = u64::from(tick_hz.max(1));
    if tick_n == 0 || tick_n % hz != 0 {
        return None;
    }
    match (tick_n / hz) % 4 {
        1 | 2 | 3 => Some(38),
        _ => Some(39),
    }
}
