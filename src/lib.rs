//! Tank Arena - a single-screen arcade tank combat simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (tank kinematics, collisions, enemy AI)
//! - `config`: Data-driven game setup (arena size, wall layout, tuning)
//! - `view`: Host-facing draw snapshots and HUD data
//!
//! Rendering, keyboard wiring and the frame driver live in the host. The host
//! pushes a [`sim::TickInput`] once per tick and reads back positions,
//! headings and health through [`view`] after the tick settles.

pub mod config;
pub mod sim;
pub mod view;

pub use config::GameConfig;

use glam::Vec2;

/// Game tuning constants (defaults; `GameConfig` can override most of them)
pub mod consts {
    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;
    /// Thickness of the four boundary walls
    pub const BOUNDARY_THICKNESS: f32 = 20.0;

    /// Tank defaults
    pub const TANK_RADIUS: f32 = 20.0;
    /// Degrees of rotation per tick while a turn flag is held
    pub const TANK_TURN_SPEED: f32 = 3.0;
    /// Arena units per tick while a move flag is held
    pub const TANK_SPEED: f32 = 2.0;
    pub const TANK_HP: i32 = 3;
    pub const ENEMY_COUNT: usize = 5;

    /// Bullet defaults
    pub const BULLET_RADIUS: f32 = 5.0;
    pub const BULLET_SPEED: f32 = 5.0;
    /// Bullets spawn this far beyond the shooter's collision radius
    pub const MUZZLE_OFFSET: f32 = 15.0;

    /// Enemies attack instead of wandering inside this distance to the player
    pub const ATTACK_RANGE: f32 = 200.0;
    /// An attacking enemy fires once its shot counter exceeds this
    pub const SHOOT_INTERVAL_TICKS: u32 = 60;
    /// Bounds for the randomized wander duration, in ticks
    pub const ROAM_TICKS_MIN: i32 = 60;
    pub const ROAM_TICKS_MAX: i32 = 180;
    /// Enemies move at this fraction of their speed while wandering
    pub const WANDER_SPEED_FACTOR: f32 = 0.5;
}

/// Unit vector for a heading in degrees (0 = +x, clockwise in screen coords)
#[inline]
pub fn heading_vec(heading_deg: f32) -> Vec2 {
    let rad = heading_deg.to_radians();
    Vec2::new(rad.cos(), rad.sin())
}

/// Heading in degrees from one point toward another
#[inline]
pub fn bearing_deg(from: Vec2, to: Vec2) -> f32 {
    (to.y - from.y).atan2(to.x - from.x).to_degrees()
}

/// Signed shortest rotation from one heading to another, in (-180, 180]
#[inline]
pub fn signed_angle_delta(from_deg: f32, to_deg: f32) -> f32 {
    let mut delta = (to_deg - from_deg).rem_euclid(360.0);
    if delta > 180.0 {
        delta -= 360.0;
    }
    delta
}
