//! Headless demo runner
//!
//! Drives the simulation with a scripted input instead of a keyboard and
//! logs the HUD as the battle unfolds. A real host replaces this loop with
//! its frame driver, key handling and rendering.

use tank_arena::GameConfig;
use tank_arena::sim::{GameState, TickInput, tick};
use tank_arena::view;

const DEMO_SEED: u64 = 0xA2EA;
/// Ten minutes at 60 ticks per second
const MAX_TICKS: u64 = 36_000;

/// A canned pilot: cruise in slow arcs and fire in bursts
fn scripted_input(t: u64) -> TickInput {
    TickInput {
        forward: t % 180 < 150,
        turn_right: t % 240 < 45,
        turn_left: t % 600 < 30,
        backward: false,
        fire: t % 30 == 0,
    }
}

fn main() {
    env_logger::init();

    let mut state = GameState::new(DEMO_SEED, GameConfig::default());
    log::info!("demo run: seed {DEMO_SEED:#x}, up to {MAX_TICKS} ticks");

    for t in 0..MAX_TICKS {
        tick(&mut state, &scripted_input(t));

        if t % 600 == 0 {
            let hud = view::snapshot(&state).hud;
            log::info!(
                "tick {t}: player hp {}, enemies alive {}, bullets in flight {}",
                hud.player_hp,
                state.enemies_alive(),
                state.player_bullets.len() + state.enemy_bullets.len()
            );
        }
        if state.outcome().is_terminal() {
            break;
        }
    }

    match state.outcome().banner() {
        Some(banner) => println!("{banner} (tick {})", state.time_ticks),
        None => println!("Stalemate - no winner after {MAX_TICKS} ticks"),
    }
}
