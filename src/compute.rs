/// Pure game-logic functions.
///
/// Every function here mutates a `WorldState` in place (or builds a fresh
/// one) and draws randomness only from an injected RNG, so tests can pin
/// behaviour with a seeded generator.

use rand::Rng;

use crate::config::{
    ENEMY_COUNT, HEIGHT, PLAYER_START_X, PLAYER_START_Y, SIM_DIVISOR, SPAWN_JITTER, WIDTH,
};
use crate::entities::{Bullet, Enemy, Player, Position, RunState, WorldState};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial world: player mid-left, a full enemy pool queued off
/// the right edge, no bullets, frame 0.
pub fn init_world(rng: &mut impl Rng) -> WorldState {
    let enemies: [Enemy; ENEMY_COUNT] = std::array::from_fn(|_| Enemy {
        pos: spawn_position(rng),
    });
    WorldState {
        player: Player {
            pos: Position::new(PLAYER_START_X, PLAYER_START_Y),
        },
        enemies,
        bullets: Vec::new(),
        frame: 0,
        run_state: RunState::Running,
    }
}

/// A fresh off-screen spawn point: `x` in `[WIDTH, WIDTH + SPAWN_JITTER)`,
/// `y` in `[0, HEIGHT)`.
pub fn spawn_position(rng: &mut impl Rng) -> Position {
    Position::new(
        WIDTH + rng.gen_range(0..SPAWN_JITTER),
        rng.gen_range(0..HEIGHT),
    )
}

pub fn respawn_enemy(enemy: &mut Enemy, rng: &mut impl Rng) {
    enemy.pos = spawn_position(rng);
    log::trace!("enemy respawned at ({}, {})", enemy.pos.x, enemy.pos.y);
}

// ── Collision ────────────────────────────────────────────────────────────────

/// One column of slack either side, none vertically.
pub fn is_hit(bullet: &Bullet, enemy: &Enemy) -> bool {
    (bullet.pos.x - enemy.pos.x).abs() <= 1 && (bullet.pos.y - enemy.pos.y).abs() <= 0
}

// ── Simulation step ──────────────────────────────────────────────────────────

/// True on the frames the simulation is allowed to advance.
pub fn should_simulate(frame: u64) -> bool {
    frame % SIM_DIVISOR == 0
}

/// Advance the world by one simulation step.  Phase order matters: bullets
/// move and are culled before enemies move, and hits are resolved last
/// against the post-move positions.
pub fn simulate(world: &mut WorldState, rng: &mut impl Rng) {
    advance_bullets(world);
    cull_bullets(world);
    advance_enemies(world, rng);
    resolve_collisions(world, rng);
}

pub fn advance_bullets(world: &mut WorldState) {
    for bullet in &mut world.bullets {
        bullet.pos.x += 1;
    }
}

/// Drop every bullet that has left through the right edge.
pub fn cull_bullets(world: &mut WorldState) {
    world.bullets.retain(|b| b.pos.x < WIDTH);
}

/// Move every enemy one column left; an enemy past the left edge respawns.
pub fn advance_enemies(world: &mut WorldState, rng: &mut impl Rng) {
    for enemy in &mut world.enemies {
        enemy.pos.x -= 1;
        if enemy.pos.x < 0 {
            respawn_enemy(enemy, rng);
        }
    }
}

/// Each bullet, in firing order, takes out the first enemy (in pool order)
/// it touches.  The enemy respawns immediately, so later bullets in the same
/// step test against its new position.  Spent bullets are removed.
pub fn resolve_collisions(world: &mut WorldState, rng: &mut impl Rng) {
    let WorldState {
        bullets, enemies, ..
    } = world;

    bullets.retain(|bullet| {
        let Some((index, enemy)) = enemies
            .iter_mut()
            .enumerate()
            .find(|(_, enemy)| is_hit(bullet, enemy))
        else {
            return true;
        };
        log::debug!(
            "bullet at ({}, {}) hit enemy {}",
            bullet.pos.x,
            bullet.pos.y,
            index
        );
        respawn_enemy(enemy, rng);
        false
    });
}
