/// Keyboard input: key → action mapping and action → world mutation.

use std::io;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::config::{HEIGHT, MUZZLE_OFFSET};
use crate::console::Console;
use crate::entities::{Bullet, Position, RunState, WorldState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    MoveUp,
    MoveDown,
    Fire,
    Quit,
}

/// Map a key press to an action.  Unbound keys yield `None`.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Action::MoveDown),
        KeyCode::Char(' ') => Some(Action::Fire),
        KeyCode::Esc => Some(Action::Quit),
        // Raw mode swallows SIGINT.
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        _ => None,
    }
}

/// Consume at most one pending event and translate it.
///
/// Whatever event is read uses up this tick's input slot, even when it maps
/// to nothing; further queued keys wait for later ticks.
pub fn poll_action<C: Console>(console: &mut C) -> io::Result<Option<Action>> {
    Ok(match console.poll_event()? {
        Some(Event::Key(key)) => map_key(key),
        _ => None,
    })
}

// ── Input-driven state transitions ──────────────────────────────────────────

pub fn apply_action(world: &mut WorldState, action: Action) {
    match action {
        Action::MoveUp => move_player_up(world),
        Action::MoveDown => move_player_down(world),
        Action::Fire => player_shoot(world),
        Action::Quit => {
            log::info!("quit requested at frame {}", world.frame);
            world.run_state = RunState::Stopped;
        }
    }
}

/// Clamped at the top row.
pub fn move_player_up(world: &mut WorldState) {
    if world.player.pos.y > 0 {
        world.player.pos.y -= 1;
    }
}

/// Clamped at the bottom row.
pub fn move_player_down(world: &mut WorldState) {
    if world.player.pos.y < HEIGHT - 1 {
        world.player.pos.y += 1;
    }
}

/// Spawn a bullet just ahead of the player.  No cap on bullets in flight.
pub fn player_shoot(world: &mut WorldState) {
    let p = world.player.pos;
    world.bullets.push(Bullet {
        pos: Position::new(p.x + MUZZLE_OFFSET, p.y),
    });
}
