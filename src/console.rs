//! Platform console seam.
//!
//! The game loop only needs two things from the outside world: the next
//! pending terminal event (without blocking) and a way to put a finished
//! frame on screen.  `TerminalConsole` provides both over crossterm; tests
//! substitute a scripted implementation.

use std::io::{self, BufWriter, Stdout, Write};
use std::time::Duration;

use crossterm::{cursor, event, event::Event, style, terminal, ExecutableCommand, QueueableCommand};

use crate::display::{self, Frame};

pub trait Console {
    /// Return the next pending event, or `None` if nothing is queued.
    /// Must not block.
    fn poll_event(&mut self) -> io::Result<Option<Event>>;

    /// Clear the screen and draw `frame` from the top-left corner.
    fn present(&mut self, frame: &Frame) -> io::Result<()>;
}

/// Crossterm-backed console on stdout.
pub struct TerminalConsole {
    out: BufWriter<Stdout>,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self {
            out: BufWriter::new(io::stdout()),
        }
    }

    /// Switch to raw mode on the alternate screen with the cursor hidden.
    pub fn enter(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        self.out.queue(terminal::EnterAlternateScreen)?;
        self.out.queue(cursor::Hide)?;
        self.out.flush()
    }

    /// Undo `enter`.  Safe to call even if `enter` failed part-way.
    pub fn exit(&mut self) -> io::Result<()> {
        self.out.queue(style::ResetColor)?;
        self.out.queue(cursor::Show)?;
        self.out.execute(terminal::LeaveAlternateScreen)?;
        terminal::disable_raw_mode()
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TerminalConsole {
    fn poll_event(&mut self) -> io::Result<Option<Event>> {
        if event::poll(Duration::ZERO)? {
            event::read().map(Some)
        } else {
            Ok(None)
        }
    }

    fn present(&mut self, frame: &Frame) -> io::Result<()> {
        display::draw(&mut self.out, frame)
    }
}
