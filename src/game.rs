//! Loop driver.
//!
//! One tick is: read at most one input action, apply it, advance the
//! simulation on even frames, render, bump the frame counter.  `run` repeats
//! that with a fixed sleep until a quit action stops the world.

use std::io;
use std::thread;
use std::time::Duration;

use rand::Rng;

use crate::compute::{init_world, should_simulate, simulate};
use crate::config::TICK;
use crate::console::Console;
use crate::display::render_frame;
use crate::entities::WorldState;
use crate::input::{apply_action, poll_action, Action};

pub struct Game<C: Console, R: Rng> {
    world: WorldState,
    console: C,
    rng: R,
    tick: Duration,
}

impl<C: Console, R: Rng> Game<C, R> {
    /// Start a fresh game.  Enemy placement draws from `rng`.
    pub fn new(console: C, mut rng: R) -> Self {
        let world = init_world(&mut rng);
        Self::with_world(world, console, rng)
    }

    /// Resume from an existing world.
    pub fn with_world(world: WorldState, console: C, rng: R) -> Self {
        Self {
            world,
            console,
            rng,
            tick: TICK,
        }
    }

    /// Override the per-tick sleep.
    pub fn tick_duration(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    pub fn world(&self) -> &WorldState {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut WorldState {
        &mut self.world
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_parts(self) -> (WorldState, C, R) {
        (self.world, self.console, self.rng)
    }

    /// Run one tick without pacing.  Returns the action applied, if any.
    pub fn step(&mut self) -> io::Result<Option<Action>> {
        let action = poll_action(&mut self.console)?;
        if let Some(action) = action {
            apply_action(&mut self.world, action);
        }

        if should_simulate(self.world.frame) {
            simulate(&mut self.world, &mut self.rng);
        }

        let frame = render_frame(&self.world);
        self.console.present(&frame)?;

        self.world.frame += 1;
        Ok(action)
    }

    /// Tick until the world stops.
    pub fn run(&mut self) -> io::Result<()> {
        log::info!("game started");
        while self.world.is_running() {
            self.step()?;
            if self.world.is_running() && !self.tick.is_zero() {
                thread::sleep(self.tick);
            }
        }
        log::info!("game stopped after {} frames", self.world.frame);
        Ok(())
    }
}
