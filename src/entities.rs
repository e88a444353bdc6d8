/// All game entity types — pure data, no logic.

use crate::config::ENEMY_COUNT;

/// A grid cell.  Integer columns/rows only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Running,
    Stopped,
}

// ── Player, enemies & projectiles ─────────────────────────────────────────────

/// Only `pos.y` ever changes; the player is pinned to its starting column.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub pos: Position,
}

/// Enemies are never destroyed.  A hit or an exit through the left edge
/// moves the same slot back to the right.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Enemy {
    pub pos: Position,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bullet {
    pub pos: Position,
}

// ── World ─────────────────────────────────────────────────────────────────────

/// The entire game state.
#[derive(Clone, Debug, PartialEq)]
pub struct WorldState {
    pub player: Player,
    /// Fixed pool; slots are recycled in place.
    pub enemies: [Enemy; ENEMY_COUNT],
    /// Ordered by firing time.
    pub bullets: Vec<Bullet>,
    /// Incremented once per rendered frame.
    pub frame: u64,
    pub run_state: RunState,
}

impl WorldState {
    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }
}
