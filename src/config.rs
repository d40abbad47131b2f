//! Game setup and tuning
//!
//! Everything the host supplies at initialization: arena dimensions, the wall
//! list, and the numeric knobs of the simulation. Serializable so hosts can
//! ship layouts as plain JSON instead of code.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{Arena, Wall};

/// Simulation setup, supplied by the host once at initialization
///
/// `Default` mirrors the stock game: 800x600 field, the 8-wall cross layout,
/// five enemies, three health each side. Any field may be overridden; omitted
/// fields in a JSON document keep their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Arena width in arena units
    pub arena_width: f32,
    /// Arena height in arena units
    pub arena_height: f32,
    /// Wall rectangles, boundary and interior alike. Collision scans honor
    /// list order, so boundaries conventionally come first.
    pub walls: Vec<Wall>,

    /// Number of enemy tanks spawned at start
    pub enemy_count: usize,
    pub player_hp: i32,
    pub enemy_hp: i32,

    /// Tank kinematics
    pub tank_radius: f32,
    pub tank_speed: f32,
    /// Degrees per tick
    pub tank_turn_speed: f32,

    /// Bullet kinematics
    pub bullet_speed: f32,
    pub bullet_radius: f32,

    /// Enemy behavior tuning
    pub attack_range: f32,
    pub shoot_interval_ticks: u32,
    pub roam_ticks_min: i32,
    pub roam_ticks_max: i32,
    pub wander_speed_factor: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            walls: Arena::default_layout(ARENA_WIDTH, ARENA_HEIGHT),
            enemy_count: ENEMY_COUNT,
            player_hp: TANK_HP,
            enemy_hp: TANK_HP,
            tank_radius: TANK_RADIUS,
            tank_speed: TANK_SPEED,
            tank_turn_speed: TANK_TURN_SPEED,
            bullet_speed: BULLET_SPEED,
            bullet_radius: BULLET_RADIUS,
            attack_range: ATTACK_RANGE,
            shoot_interval_ticks: SHOOT_INTERVAL_TICKS,
            roam_ticks_min: ROAM_TICKS_MIN,
            roam_ticks_max: ROAM_TICKS_MAX,
            wander_speed_factor: WANDER_SPEED_FACTOR,
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Build the arena described by this config
    pub fn arena(&self) -> Arena {
        Arena::new(self.arena_width, self.arena_height, self.walls.clone())
    }
}
