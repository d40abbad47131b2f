//! Per-frame simulation step
//!
//! The host calls [`tick`] once per rendered frame with its current input
//! snapshot. Everything inside a tick runs synchronously in a fixed order:
//! player, enemies, player bullets, enemy bullets, terminal check.

use super::ai;
use super::arena::Arena;
use super::state::{Bullet, GameState, Outcome, Tank};
use crate::heading_vec;

/// The player's intent for a single tick
///
/// Movement flags are level-triggered (held keys); `fire` is edge-triggered
/// and spawns exactly one bullet for the tick it is set. Opposing flags held
/// together cancel per-tick rather than one taking precedence.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub turn_left: bool,
    pub turn_right: bool,
    pub forward: bool,
    pub backward: bool,
    pub fire: bool,
}

/// Advance the simulation by one tick
///
/// Once a terminal outcome is reached this becomes a no-op; the host may keep
/// calling it while showing the final frame.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.outcome.is_terminal() {
        return;
    }
    state.time_ticks += 1;

    // Player: turn, move, clamp, wall rollback, then the fire edge
    if state.player.alive() {
        let prior = state.player.pos;
        if input.turn_left {
            state.player.heading -= state.player.turn_speed;
        }
        if input.turn_right {
            state.player.heading += state.player.turn_speed;
        }
        let dir = heading_vec(state.player.heading);
        if input.forward {
            state.player.pos += dir * state.player.speed;
        }
        if input.backward {
            state.player.pos -= dir * state.player.speed;
        }
        state.player.clamp_to_arena(&state.arena);
        state.player.resolve_wall_collision(&state.arena, prior);

        if input.fire {
            state.player.fire(&mut state.player_bullets, &state.config);
        }
    }

    // Enemies: the AI owns their movement entirely
    let player_pos = state.player.pos;
    for enemy in state.enemies.iter_mut() {
        ai::drive_enemy(
            enemy,
            player_pos,
            &mut state.enemy_bullets,
            &state.arena,
            &mut state.rng,
            &state.config,
        );
    }

    // Bullets: each faction's collection against the opposing tanks
    sweep_bullets(&mut state.player_bullets, &mut state.enemies, &state.arena);
    sweep_bullets(
        &mut state.enemy_bullets,
        std::slice::from_mut(&mut state.player),
        &state.arena,
    );

    // Terminal evaluation; later ticks become no-ops
    if state.player.hp <= 0 {
        state.outcome = Outcome::Loss;
        log::info!("player destroyed at tick {}", state.time_ticks);
    } else if state.enemies.iter().all(|e| !e.alive()) {
        state.outcome = Outcome::Win;
        log::info!("last enemy destroyed at tick {}", state.time_ticks);
    }
}

/// Advance and prune one bullet collection against a set of opposing tanks
///
/// Reverse index order keeps in-place removal safe: positions below the
/// cursor never shift. Per bullet the checks run wall, then target, then
/// out-of-bounds; the first hit removes the bullet, and one bullet damages
/// at most one tank.
fn sweep_bullets(bullets: &mut Vec<Bullet>, targets: &mut [Tank], arena: &Arena) {
    for i in (0..bullets.len()).rev() {
        bullets[i].advance();
        let (pos, radius) = (bullets[i].pos, bullets[i].radius);

        if arena.first_wall_hit(pos, radius).is_some() {
            bullets.remove(i);
            continue;
        }

        let victim = targets
            .iter_mut()
            .find(|t| t.alive() && super::collision::circles_overlap(pos, radius, t.pos, t.radius));
        if let Some(tank) = victim {
            tank.hp -= 1;
            log::debug!("{:?} tank hit, hp now {}", tank.faction, tank.hp);
            bullets.remove(i);
            continue;
        }

        if bullets[i].out_of_bounds(arena.width, arena.height) {
            bullets.remove(i);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameConfig;
    use crate::sim::arena::Wall;
    use crate::sim::state::Faction;
    use glam::Vec2;

    /// Config with no walls so motion runs unobstructed
    fn open_cfg(enemy_count: usize) -> GameConfig {
        GameConfig {
            walls: Vec::new(),
            enemy_count,
            ..GameConfig::default()
        }
    }

    /// An enemy bullet sitting on the player's center; the next advance
    /// leaves it well within the combined radii.
    fn bullet_on_player(state: &GameState) -> Bullet {
        Bullet {
            pos: state.player.pos,
            heading: 0.0,
            speed: state.config.bullet_speed,
            radius: state.config.bullet_radius,
            faction: Faction::Enemy,
        }
    }

    #[test]
    fn test_opposing_flags_cancel() {
        let mut state = GameState::new(3, open_cfg(1));
        state.enemies[0].pos = Vec2::new(700.0, 500.0);
        let before = (state.player.pos, state.player.heading);

        let input = TickInput {
            turn_left: true,
            turn_right: true,
            forward: true,
            backward: true,
            fire: false,
        };
        tick(&mut state, &input);
        assert_eq!(state.player.pos, before.0);
        assert_eq!(state.player.heading, before.1);
    }

    #[test]
    fn test_forward_moves_along_heading() {
        let mut state = GameState::new(3, open_cfg(1));
        state.enemies[0].pos = Vec2::new(700.0, 500.0);
        let start = state.player.pos;

        let input = TickInput {
            forward: true,
            ..TickInput::default()
        };
        tick(&mut state, &input);
        // Heading 0 points down +x
        assert!((state.player.pos.x - (start.x + state.config.tank_speed)).abs() < 1e-4);
        assert_eq!(state.player.pos.y, start.y);
    }

    #[test]
    fn test_player_stalls_against_wall() {
        let cfg = GameConfig {
            enemy_count: 1,
            ..GameConfig::default()
        };
        let mut state = GameState::new(3, cfg);
        state.enemies[0].pos = Vec2::new(700.0, 500.0);
        state.player.heading = 180.0;

        let input = TickInput {
            forward: true,
            ..TickInput::default()
        };
        for _ in 0..100 {
            tick(&mut state, &input);
        }
        // Left boundary wall ends at x=20; the tank circle stops touching it
        // at center x=40 and the rollback pins it there.
        assert!(state.player.pos.x >= 40.0);
        assert!(state.player.pos.x <= 44.0);
    }

    #[test]
    fn test_fire_is_one_bullet_per_edge() {
        let mut state = GameState::new(3, open_cfg(1));
        state.enemies[0].pos = Vec2::new(700.0, 500.0);

        let fire = TickInput {
            fire: true,
            ..TickInput::default()
        };
        tick(&mut state, &fire);
        assert_eq!(state.player_bullets.len(), 1);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.player_bullets.len(), 1);
    }

    #[test]
    fn test_loss_after_three_hits_then_halt() {
        let mut state = GameState::new(3, open_cfg(1));
        state.enemies[0].pos = Vec2::new(700.0, 500.0);

        for expected_hp in [2, 1, 0] {
            let b = bullet_on_player(&state);
            state.enemy_bullets.push(b);
            tick(&mut state, &TickInput::default());
            assert_eq!(state.player.hp, expected_hp);
        }
        assert_eq!(state.outcome(), Outcome::Loss);
        assert_eq!(state.outcome().banner(), Some("You lost!"));

        // Halted: further ticks change nothing
        let ticks = state.time_ticks;
        let enemy_pos = state.enemies[0].pos;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.time_ticks, ticks);
        assert_eq!(state.enemies[0].pos, enemy_pos);
    }

    #[test]
    fn test_win_exactly_on_last_kill() {
        let mut state = GameState::new(3, open_cfg(5));
        for enemy in &mut state.enemies {
            enemy.pos = Vec2::new(700.0, 500.0);
        }

        // Four down, one standing: still ongoing
        for enemy in &mut state.enemies[..4] {
            enemy.hp = 0;
        }
        tick(&mut state, &TickInput::default());
        assert_eq!(state.outcome(), Outcome::Ongoing);

        // Finish the last one with a player bullet dropped on its center
        state.enemies[4].hp = 1;
        let target = state.enemies[4].pos;
        state.player_bullets.push(Bullet {
            pos: target,
            heading: 0.0,
            speed: state.config.bullet_speed,
            radius: state.config.bullet_radius,
            faction: Faction::Player,
        });
        tick(&mut state, &TickInput::default());
        assert_eq!(state.outcome(), Outcome::Win);
        assert_eq!(state.outcome().banner(), Some("You won!"));
    }

    #[test]
    fn test_wall_hit_removes_bullet_before_target_check() {
        let mut state = GameState::new(3, open_cfg(1));
        state.config.walls = vec![Wall::new(100.0, 100.0, 50.0, 20.0)];
        state.arena = state.config.arena();

        // After one advance the bullet sits inside the wall and within the
        // combined radii of the enemy behind it.
        state.enemies[0].pos = Vec2::new(140.0, 110.0);
        state.player_bullets.push(Bullet {
            pos: Vec2::new(120.0, 110.0),
            heading: 0.0,
            speed: state.config.bullet_speed,
            radius: state.config.bullet_radius,
            faction: Faction::Player,
        });

        tick(&mut state, &TickInput::default());
        assert!(state.player_bullets.is_empty());
        // The wall ate the bullet; the enemy takes no damage
        assert_eq!(state.enemies[0].hp, 3);
    }

    #[test]
    fn test_bullet_leaves_arena() {
        let mut state = GameState::new(3, open_cfg(1));
        state.enemies[0].pos = Vec2::new(700.0, 500.0);
        state.player.pos = Vec2::new(760.0, 100.0);

        let fire = TickInput {
            fire: true,
            ..TickInput::default()
        };
        tick(&mut state, &fire);
        assert_eq!(state.player_bullets.len(), 1);

        // The fire-tick advance parked it exactly on x=800, which still
        // counts as inside; the next advance crosses out.
        tick(&mut state, &TickInput::default());
        assert!(state.player_bullets.is_empty());
    }

    #[test]
    fn test_one_bullet_damages_one_enemy() {
        let mut state = GameState::new(3, open_cfg(2));
        // Two enemies stacked on the same spot
        state.enemies[0].pos = Vec2::new(300.0, 300.0);
        state.enemies[1].pos = Vec2::new(300.0, 300.0);

        state.player_bullets.push(Bullet {
            pos: Vec2::new(300.0, 300.0),
            heading: 0.0,
            speed: state.config.bullet_speed,
            radius: state.config.bullet_radius,
            faction: Faction::Player,
        });
        tick(&mut state, &TickInput::default());

        let total_hp: i32 = state.enemies.iter().map(|e| e.hp).sum();
        assert_eq!(total_hp, 5);
    }

    #[test]
    fn test_determinism() {
        let script = |t: u64| TickInput {
            forward: t % 7 != 0,
            turn_right: t % 13 < 5,
            turn_left: t % 31 == 0,
            fire: t % 20 == 0,
            backward: false,
        };

        let mut a = GameState::new(99, GameConfig::default());
        let mut b = GameState::new(99, GameConfig::default());
        for t in 0..500 {
            let input = script(t);
            tick(&mut a, &input);
            tick(&mut b, &input);
        }

        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.player.pos, b.player.pos);
        assert_eq!(a.player_bullets.len(), b.player_bullets.len());
        for (ea, eb) in a.enemies.iter().zip(&b.enemies) {
            assert_eq!(ea.pos, eb.pos);
            assert_eq!(ea.heading, eb.heading);
            assert_eq!(ea.hp, eb.hp);
        }
    }
}
