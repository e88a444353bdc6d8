mod support;

use std::time::Duration;

use crossterm::event::KeyCode;

use side_shooter::config::{ENEMY_COUNT, HEIGHT};
use side_shooter::entities::*;
use side_shooter::game::Game;
use side_shooter::input::Action;
use support::{make_world, seeded_rng, ScriptedConsole};

fn game_with(keys: &[KeyCode]) -> Game<ScriptedConsole, rand::rngs::StdRng> {
    Game::with_world(make_world(), ScriptedConsole::with_keys(keys), seeded_rng())
        .tick_duration(Duration::ZERO)
}

#[test]
fn new_game_starts_running() {
    let game = Game::new(ScriptedConsole::default(), seeded_rng());
    let w = game.world();
    assert!(w.is_running());
    assert_eq!(w.player.pos, Position::new(5, HEIGHT / 2));
    assert_eq!(w.enemies.len(), ENEMY_COUNT);
    assert!(w.bullets.is_empty());
    assert_eq!(w.frame, 0);
}

#[test]
fn step_renders_and_counts_frames() {
    let mut game = game_with(&[]);
    game.step().unwrap();
    game.step().unwrap();
    game.step().unwrap();
    assert_eq!(game.world().frame, 3);
    assert_eq!(game.console().frames.len(), 3);
}

#[test]
fn simulation_runs_every_other_frame() {
    let mut game = game_with(&[]);
    game.world_mut().bullets.push(Bullet { pos: Position::new(10, 0) });

    game.step().unwrap(); // frame 0: simulates
    assert_eq!(game.world().bullets[0].pos.x, 11);
    game.step().unwrap(); // frame 1: render only
    assert_eq!(game.world().bullets[0].pos.x, 11);
    game.step().unwrap(); // frame 2: simulates
    assert_eq!(game.world().bullets[0].pos.x, 12);
}

#[test]
fn fired_bullet_moves_on_same_simulated_tick() {
    let mut game = game_with(&[KeyCode::Char(' ')]);
    assert_eq!(game.step().unwrap(), Some(Action::Fire));
    // Input is applied before the simulation on frame 0.
    assert_eq!(game.world().bullets, vec![Bullet { pos: Position::new(8, 10) }]);
}

#[test]
fn queued_keys_apply_one_per_tick() {
    let mut game = game_with(&[KeyCode::Up, KeyCode::Down, KeyCode::Char(' '), KeyCode::Esc]);

    assert_eq!(game.step().unwrap(), Some(Action::MoveUp));
    assert_eq!(game.world().player.pos.y, 9);
    assert!(game.world().bullets.is_empty());

    assert_eq!(game.step().unwrap(), Some(Action::MoveDown));
    assert_eq!(game.world().player.pos.y, 10);

    assert_eq!(game.step().unwrap(), Some(Action::Fire));
    assert_eq!(game.world().bullets.len(), 1);
    assert!(game.world().is_running());

    assert_eq!(game.step().unwrap(), Some(Action::Quit));
    assert!(!game.world().is_running());
}

#[test]
fn run_stops_on_quit() {
    let mut game = game_with(&[KeyCode::Char(' '), KeyCode::Char('x'), KeyCode::Esc]);
    game.run().unwrap();

    let (world, console, _) = game.into_parts();
    assert_eq!(world.run_state, RunState::Stopped);
    assert_eq!(world.frame, 3);
    assert_eq!(console.frames.len(), 3);
    assert!(console.events.is_empty());
}

#[test]
fn quit_tick_still_renders_final_frame() {
    let mut game = game_with(&[KeyCode::Esc]);
    game.run().unwrap();
    assert_eq!(game.console().frames.len(), 1);
    assert_eq!(game.world().frame, 1);
}

#[test]
fn presented_frame_reflects_world() {
    let mut game = game_with(&[KeyCode::Char(' ')]);
    game.step().unwrap();
    let text = game.console().frames[0].to_text();
    let row = text.lines().nth(11).unwrap();
    // Tail, body, gap, bullet already advanced one column.
    assert_eq!(&row[5..10], "=>  -");
}
