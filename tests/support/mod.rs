#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use rand::rngs::StdRng;
use rand::SeedableRng;

use side_shooter::config::{ENEMY_COUNT, PLAYER_START_X, PLAYER_START_Y};
use side_shooter::console::Console;
use side_shooter::display::Frame;
use side_shooter::entities::{Enemy, Player, Position, RunState, WorldState};

/// Console double: hands out queued events one per poll and records every
/// presented frame.
#[derive(Default)]
pub struct ScriptedConsole {
    pub events: VecDeque<Event>,
    pub frames: Vec<Frame>,
}

impl ScriptedConsole {
    pub fn with_keys(keys: &[KeyCode]) -> Self {
        Self {
            events: keys.iter().map(|&code| key(code)).collect(),
            frames: Vec::new(),
        }
    }
}

impl Console for ScriptedConsole {
    fn poll_event(&mut self) -> io::Result<Option<Event>> {
        Ok(self.events.pop_front())
    }

    fn present(&mut self, frame: &Frame) -> io::Result<()> {
        self.frames.push(frame.clone());
        Ok(())
    }
}

pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// Enemies parked far off-screen so they never interfere.
pub fn parked_enemies() -> [Enemy; ENEMY_COUNT] {
    [Enemy { pos: Position::new(500, 0) }; ENEMY_COUNT]
}

/// Deterministic world: player at the start cell, enemies parked, no bullets.
pub fn make_world() -> WorldState {
    WorldState {
        player: Player {
            pos: Position::new(PLAYER_START_X, PLAYER_START_Y),
        },
        enemies: parked_enemies(),
        bullets: Vec::new(),
        frame: 0,
        run_state: RunState::Running,
    }
}
