//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One discrete step per host frame, no sub-stepping
//! - Seeded RNG only
//! - Fixed update order (player, enemies, player bullets, enemy bullets)
//! - No rendering or platform dependencies

pub mod ai;
pub mod arena;
pub mod collision;
pub mod state;
pub mod tick;

pub use ai::{Behavior, classify};
pub use arena::{Arena, Wall};
pub use collision::{circle_intersects_rect, circles_overlap};
pub use state::{Bullet, Faction, GameState, Outcome, Tank};
pub use tick::{TickInput, tick};
