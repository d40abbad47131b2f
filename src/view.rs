//! Host-facing read surface
//!
//! After each tick the host reads the world back for drawing: one
//! [`Drawable`] per living entity plus the HUD numbers and the end-of-game
//! banner. Everything is plain serializable data so a host can forward it
//! over any boundary it likes.

use glam::Vec2;
use serde::Serialize;

use crate::sim::{Bullet, GameState, Tank};

/// What shape the host should draw for an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DrawKind {
    Tank,
    Bullet,
}

/// One entity's draw parameters for the current frame
#[derive(Debug, Clone, Serialize)]
pub struct Drawable {
    pub kind: DrawKind,
    pub pos: Vec2,
    /// Facing in degrees; bullets carry their flight heading
    pub heading: f32,
    pub radius: f32,
    pub color: [u8; 3],
}

/// Text and numbers for the overlay
#[derive(Debug, Clone, Serialize)]
pub struct Hud {
    pub player_hp: i32,
    /// One entry per enemy, spawn order, dead ones included at zero
    pub enemy_hp: Vec<i32>,
    /// Present only once the game has ended
    pub banner: Option<&'static str>,
}

/// Full per-frame read-out: draw list plus HUD
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub drawables: Vec<Drawable>,
    pub hud: Hud,
}

fn tank_drawable(tank: &Tank) -> Drawable {
    Drawable {
        kind: DrawKind::Tank,
        pos: tank.pos,
        heading: tank.heading,
        radius: tank.radius,
        color: tank.faction.color(),
    }
}

fn bullet_drawable(bullet: &Bullet) -> Drawable {
    Drawable {
        kind: DrawKind::Bullet,
        pos: bullet.pos,
        heading: bullet.heading,
        radius: bullet.radius,
        color: bullet.faction.color(),
    }
}

/// Visit every drawable entity in draw order: living tanks, then bullets
///
/// Dead tanks are skipped; their health still shows up in the HUD.
pub fn for_each_drawable<F: FnMut(Drawable)>(state: &GameState, mut f: F) {
    if state.player.alive() {
        f(tank_drawable(&state.player));
    }
    for enemy in state.enemies.iter().filter(|e| e.alive()) {
        f(tank_drawable(enemy));
    }
    for bullet in &state.player_bullets {
        f(bullet_drawable(bullet));
    }
    for bullet in &state.enemy_bullets {
        f(bullet_drawable(bullet));
    }
}

/// Collect the full frame read-out
pub fn snapshot(state: &GameState) -> Snapshot {
    let mut drawables = Vec::new();
    for_each_drawable(state, |d| drawables.push(d));

    Snapshot {
        drawables,
        hud: Hud {
            // Health is displayed floored at zero even when an extra hit
            // lands on the terminal tick
            player_hp: state.player.hp.max(0),
            enemy_hp: state.enemies.iter().map(|e| e.hp.max(0)).collect(),
            banner: state.outcome().banner(),
        },
    }
}
