//! Side-scrolling terminal shooter.
//!
//! The player sits on the left edge of a fixed grid and fires rightward at
//! enemies drifting in from the right.  Game logic (`compute`, `input`) and
//! frame composition (`display::render_frame`) are pure; terminal I/O is
//! confined to `console` and `display::draw`.

pub mod compute;
pub mod config;
pub mod console;
pub mod display;
pub mod entities;
pub mod game;
pub mod input;
