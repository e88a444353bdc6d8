/// Fixed game constants.  There is no runtime configuration.

use std::time::Duration;

// ── Field ─────────────────────────────────────────────────────────────────────

/// Interior columns of the play field.
pub const WIDTH: i32 = 50;
/// Interior rows of the play field.
pub const HEIGHT: i32 = 20;

// ── Entities ──────────────────────────────────────────────────────────────────

pub const ENEMY_COUNT: usize = 3;

/// Respawned enemies land this many columns (at most, exclusive) past the
/// right edge, so they stagger their entry.
pub const SPAWN_JITTER: i32 = 20;

pub const PLAYER_START_X: i32 = 5;
pub const PLAYER_START_Y: i32 = HEIGHT / 2;

/// Bullets appear this many columns in front of the player.
pub const MUZZLE_OFFSET: i32 = 2;

// ── Timing ────────────────────────────────────────────────────────────────────

/// Fixed sleep at the end of every tick.
pub const TICK: Duration = Duration::from_millis(50);

/// The simulation advances on every `SIM_DIVISOR`-th frame; rendering runs
/// on all of them.
pub const SIM_DIVISOR: u64 = 2;

// ── Glyphs ────────────────────────────────────────────────────────────────────

pub const GLYPH_BORDER_H: char = '=';
pub const GLYPH_BORDER_V: char = '|';
pub const GLYPH_PLAYER: char = '>';
pub const GLYPH_TAIL: char = '=';
pub const GLYPH_BULLET: char = '-';
pub const GLYPH_ENEMY: char = '<';
pub const GLYPH_BLANK: char = ' ';

pub const CONTROLS_HINT: &str = "Controls: W/S or Up/Down - Move, SPACE - Shoot, ESC - Quit";
