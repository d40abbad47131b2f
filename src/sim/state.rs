//! Entities and the simulation state aggregate
//!
//! One `GameState` owns everything that changes from tick to tick: the player
//! tank, the enemy batch, both faction-scoped bullet collections, the arena,
//! and the seeded RNG. There are no globals; subsystems borrow what they need
//! from the aggregate.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use super::arena::Arena;
use crate::config::GameConfig;
use crate::heading_vec;

/// Which side an entity fights for
///
/// Bullets carry their shooter's faction as a color tag; hit routing is by
/// collection membership, never by shooter identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Faction {
    Player,
    Enemy,
}

impl Faction {
    /// Draw color for this faction's tanks and bullets
    pub fn color(&self) -> [u8; 3] {
        match self {
            Faction::Player => [0, 200, 0],
            Faction::Enemy => [200, 0, 0],
        }
    }
}

/// Whether the simulation is still running or reached its end state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Ongoing,
    Win,
    Loss,
}

impl Outcome {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// End-of-game text, the only UI string the core owns
    pub fn banner(&self) -> Option<&'static str> {
        match self {
            Outcome::Ongoing => None,
            Outcome::Win => Some("You won!"),
            Outcome::Loss => Some("You lost!"),
        }
    }
}

/// A tank, player- or AI-controlled
///
/// `hp > 0` is the sole liveness predicate. Dead tanks stay in their
/// collection but stop acting, firing and drawing.
#[derive(Debug, Clone)]
pub struct Tank {
    pub pos: Vec2,
    /// Collision radius, constant after construction
    pub radius: f32,
    /// Facing in degrees, 0 = +x, clockwise in screen coords
    pub heading: f32,
    /// Degrees of rotation per tick
    pub turn_speed: f32,
    /// Arena units per tick
    pub speed: f32,
    pub hp: i32,
    pub faction: Faction,

    // Wander sub-state, meaningful for enemies only. Persists across ticks
    // while the attack/wander choice itself is re-derived every tick.
    pub roam_timer: i32,
    pub roam_heading: f32,
    pub shoot_timer: u32,
}

impl Tank {
    pub fn new(pos: Vec2, faction: Faction, hp: i32, cfg: &GameConfig) -> Self {
        Self {
            pos,
            radius: cfg.tank_radius,
            heading: 0.0,
            turn_speed: cfg.tank_turn_speed,
            speed: cfg.tank_speed,
            hp,
            faction,
            roam_timer: 0,
            roam_heading: 0.0,
            shoot_timer: 0,
        }
    }

    #[inline]
    pub fn alive(&self) -> bool {
        self.hp > 0
    }

    /// Keep the tank's circle fully inside the arena bounds
    pub fn clamp_to_arena(&mut self, arena: &Arena) {
        self.pos.x = self.pos.x.clamp(self.radius, arena.width - self.radius);
        self.pos.y = self.pos.y.clamp(self.radius, arena.height - self.radius);
    }

    /// Revert to `prior` wholesale if the tank overlaps any wall
    ///
    /// First overlapping wall in list order wins and stops the scan; there is
    /// no sliding resolution.
    pub fn resolve_wall_collision(&mut self, arena: &Arena, prior: Vec2) {
        if arena.first_wall_hit(self.pos, self.radius).is_some() {
            self.pos = prior;
        }
    }

    /// Spawn one bullet just past the muzzle into the given collection
    ///
    /// The bullet snapshots the tank's current heading and never tracks the
    /// shooter afterwards. Dead tanks fire nothing.
    pub fn fire(&self, bullets: &mut Vec<Bullet>, cfg: &GameConfig) {
        if !self.alive() {
            return;
        }
        bullets.push(Bullet::spawn_from(self, cfg));
    }
}

/// A projectile in flight
///
/// Lives in exactly one of the two faction-scoped collections and is removed
/// on wall hit, target hit, or leaving the arena.
#[derive(Debug, Clone)]
pub struct Bullet {
    pub pos: Vec2,
    /// Flight direction in degrees, fixed at spawn
    pub heading: f32,
    pub speed: f32,
    pub radius: f32,
    pub faction: Faction,
}

impl Bullet {
    /// Build a bullet at the shooter's muzzle, inheriting heading and faction
    pub fn spawn_from(tank: &Tank, cfg: &GameConfig) -> Self {
        let muzzle = tank.pos + heading_vec(tank.heading) * (tank.radius + crate::consts::MUZZLE_OFFSET);
        Self {
            pos: muzzle,
            heading: tank.heading,
            speed: cfg.bullet_speed,
            radius: cfg.bullet_radius,
            faction: tank.faction,
        }
    }

    /// Move one tick along the fixed heading
    pub fn advance(&mut self) {
        self.pos += heading_vec(self.heading) * self.speed;
    }

    /// True once the center leaves [0, width] x [0, height] (not
    /// radius-adjusted)
    pub fn out_of_bounds(&self, width: f32, height: f32) -> bool {
        self.pos.x < 0.0 || self.pos.x > width || self.pos.y < 0.0 || self.pos.y > height
    }
}

/// Complete simulation state
///
/// Created once at setup; the host advances it through [`super::tick::tick`]
/// and reads results back through [`crate::view`].
#[derive(Debug)]
pub struct GameState {
    pub config: GameConfig,
    pub arena: Arena,
    pub player: Tank,
    /// Fixed batch, never shrinks; dead enemies are flagged by `hp <= 0`
    pub enemies: Vec<Tank>,
    pub player_bullets: Vec<Bullet>,
    pub enemy_bullets: Vec<Bullet>,
    pub outcome: Outcome,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a fresh simulation: player on the left, a randomized batch of
    /// enemies on the right half
    pub fn new(seed: u64, config: GameConfig) -> Self {
        let arena = config.arena();
        let mut rng = Pcg32::seed_from_u64(seed);

        let player = Tank::new(
            Vec2::new(80.0, arena.height / 2.0),
            Faction::Player,
            config.player_hp,
            &config,
        );

        let enemies = (0..config.enemy_count)
            .map(|_| {
                let x = rng.random_range(arena.width * 0.5..arena.width - 100.0);
                let y = rng.random_range(80.0..arena.height - 80.0);
                Tank::new(Vec2::new(x, y), Faction::Enemy, config.enemy_hp, &config)
            })
            .collect::<Vec<_>>();

        log::info!(
            "new game: seed {seed}, {} enemies, {} walls",
            enemies.len(),
            arena.walls.len()
        );

        Self {
            config,
            arena,
            player,
            enemies,
            player_bullets: Vec::new(),
            enemy_bullets: Vec::new(),
            outcome: Outcome::Ongoing,
            time_ticks: 0,
            seed,
            rng,
        }
    }

    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Living enemies remaining
    pub fn enemies_alive(&self) -> usize {
        self.enemies.iter().filter(|e| e.alive()).count()
    }
}
