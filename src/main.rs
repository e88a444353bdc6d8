use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use side_shooter::console::TerminalConsole;
use side_shooter::game::Game;

/// One process-wide seed, taken from the wall clock.
fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn main() -> Result<()> {
    // Quiet unless RUST_LOG is set; redirect stderr to keep the screen clean.
    env_logger::init();

    let mut console = TerminalConsole::new();
    if let Err(err) = console.enter() {
        let _ = console.exit();
        return Err(err).context("failed to prepare the terminal");
    }

    let seed = time_seed();
    log::info!("rng seed {}", seed);
    let mut game = Game::new(console, StdRng::seed_from_u64(seed));
    let result = game.run();

    // Always restore the terminal
    let (_, mut console, _) = game.into_parts();
    let restored = console.exit();

    result.context("game loop failed")?;
    restored.context("failed to restore the terminal")?;
    Ok(())
}
