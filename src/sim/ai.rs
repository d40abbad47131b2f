//! Enemy decision process
//!
//! A level-triggered two-state policy: the attack/wander choice is re-derived
//! from the distance to the player every tick (never stored), so an enemy can
//! flip mid-path. Only the wander sub-state and the shot counter persist on
//! the tank between ticks.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::arena::Arena;
use super::state::{Bullet, Tank};
use crate::config::GameConfig;
use crate::{bearing_deg, heading_vec, signed_angle_delta};

/// What an enemy does this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    /// Rotate toward the player and shoot on a timer; no movement
    Attack,
    /// Roam in a randomized direction for a randomized duration
    Wander,
}

/// Pick the behavior for a given distance to the player
#[inline]
pub fn classify(distance: f32, attack_range: f32) -> Behavior {
    if distance < attack_range {
        Behavior::Attack
    } else {
        Behavior::Wander
    }
}

/// Advance one enemy by one tick
///
/// Runs the behavior branch, then the shared post-move fixups: wall rollback
/// against the position from before this tick, then the arena clamp. Dead
/// enemies do nothing.
pub fn drive_enemy(
    enemy: &mut Tank,
    player_pos: Vec2,
    enemy_bullets: &mut Vec<Bullet>,
    arena: &Arena,
    rng: &mut Pcg32,
    cfg: &GameConfig,
) {
    if !enemy.alive() {
        return;
    }
    let prior = enemy.pos;

    match classify(enemy.pos.distance(player_pos), cfg.attack_range) {
        Behavior::Attack => {
            let bearing = bearing_deg(enemy.pos, player_pos);
            let delta = signed_angle_delta(enemy.heading, bearing);
            enemy.heading += delta.clamp(-enemy.turn_speed, enemy.turn_speed);

            enemy.shoot_timer += 1;
            if enemy.shoot_timer > cfg.shoot_interval_ticks {
                enemy.shoot_timer = 0;
                enemy.fire(enemy_bullets, cfg);
                log::debug!("enemy at {:?} fired", enemy.pos);
            }
        }
        Behavior::Wander => {
            if enemy.roam_timer <= 0 {
                enemy.roam_heading = rng.random_range(0.0..360.0);
                enemy.roam_timer = rng.random_range(cfg.roam_ticks_min..cfg.roam_ticks_max);
            }
            enemy.heading = enemy.roam_heading;
            enemy.pos += heading_vec(enemy.heading) * (enemy.speed * cfg.wander_speed_factor);
            enemy.roam_timer -= 1;
        }
    }

    enemy.resolve_wall_collision(arena, prior);
    enemy.clamp_to_arena(arena);
}
