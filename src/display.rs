/// Rendering layer.
///
/// `render_frame` turns the world into a `Frame` (a full character grid,
/// rebuilt from scratch every tick) without touching the terminal.  `draw`
/// is the only place terminal commands are issued.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use crate::config::{
    CONTROLS_HINT, GLYPH_BLANK, GLYPH_BORDER_H, GLYPH_BORDER_V, GLYPH_BULLET, GLYPH_ENEMY,
    GLYPH_PLAYER, GLYPH_TAIL, HEIGHT, WIDTH,
};
use crate::entities::WorldState;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_PLAYER: Color = Color::White;
const C_TAIL: Color = Color::Grey;
const C_BULLET: Color = Color::Cyan;
const C_ENEMY: Color = Color::Green;
const C_HINT: Color = Color::DarkGrey;

// ── Frame ─────────────────────────────────────────────────────────────────────

/// What occupies a single cell of the frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    BorderHorizontal,
    BorderVertical,
    Player,
    Tail,
    Bullet,
    Enemy,
    Blank,
}

impl Glyph {
    pub fn ch(self) -> char {
        match self {
            Glyph::BorderHorizontal => GLYPH_BORDER_H,
            Glyph::BorderVertical => GLYPH_BORDER_V,
            Glyph::Player => GLYPH_PLAYER,
            Glyph::Tail => GLYPH_TAIL,
            Glyph::Bullet => GLYPH_BULLET,
            Glyph::Enemy => GLYPH_ENEMY,
            Glyph::Blank => GLYPH_BLANK,
        }
    }

    fn color(self) -> Color {
        match self {
            Glyph::BorderHorizontal | Glyph::BorderVertical => C_BORDER,
            Glyph::Player => C_PLAYER,
            Glyph::Tail => C_TAIL,
            Glyph::Bullet => C_BULLET,
            Glyph::Enemy => C_ENEMY,
            Glyph::Blank => Color::Reset,
        }
    }
}

/// A complete screen: bordered grid rows followed by the controls hint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// `HEIGHT + 2` rows of `WIDTH + 2` glyphs, borders included.
    pub rows: Vec<Vec<Glyph>>,
    pub hint: &'static str,
}

impl Frame {
    /// Glyph at frame coordinates (borders included), if in range.
    pub fn get(&self, col: usize, row: usize) -> Option<Glyph> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Plain-text form, one line per row, hint last.
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(self.rows.len() * (WIDTH as usize + 3));
        for row in &self.rows {
            text.extend(row.iter().map(|g| g.ch()));
            text.push('\n');
        }
        text.push_str(self.hint);
        text.push('\n');
        text
    }
}

// ── Composition ───────────────────────────────────────────────────────────────

/// Build the frame for the current world.
pub fn render_frame(world: &WorldState) -> Frame {
    let full_width = WIDTH as usize + 2;
    let mut rows = Vec::with_capacity(HEIGHT as usize + 2);

    rows.push(vec![Glyph::BorderHorizontal; full_width]);
    for y in 0..HEIGHT {
        let mut row = Vec::with_capacity(full_width);
        row.push(Glyph::BorderVertical);
        row.extend((0..WIDTH).map(|x| cell_glyph(world, x, y)));
        row.push(Glyph::BorderVertical);
        rows.push(row);
    }
    rows.push(vec![Glyph::BorderHorizontal; full_width]);

    Frame {
        rows,
        hint: CONTROLS_HINT,
    }
}

/// Resolve one interior cell.  First match wins:
/// player > tail > bullet > enemy > blank.
pub fn cell_glyph(world: &WorldState, x: i32, y: i32) -> Glyph {
    let p = world.player.pos;
    if x == p.x && y == p.y {
        Glyph::Player
    } else if x == p.x - 1 && y == p.y {
        Glyph::Tail
    } else if world.bullets.iter().any(|b| b.pos.x == x && b.pos.y == y) {
        Glyph::Bullet
    } else if world.enemies.iter().any(|e| e.pos.x == x && e.pos.y == y) {
        Glyph::Enemy
    } else {
        Glyph::Blank
    }
}

// ── Terminal output ───────────────────────────────────────────────────────────

/// Clear the screen and draw `frame` from the top-left corner.
pub fn draw<W: Write>(out: &mut W, frame: &Frame) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    for (row_idx, row) in frame.rows.iter().enumerate() {
        out.queue(cursor::MoveTo(0, row_idx as u16))?;
        draw_row(out, row)?;
    }

    out.queue(cursor::MoveTo(0, frame.rows.len() as u16))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(frame.hint))?;

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

/// Print a row as runs of same-coloured glyphs.
fn draw_row<W: Write>(out: &mut W, row: &[Glyph]) -> std::io::Result<()> {
    let mut run = String::with_capacity(row.len());
    let mut run_color: Option<Color> = None;

    for glyph in row {
        let color = glyph.color();
        if run_color != Some(color) {
            if let Some(prev) = run_color {
                out.queue(style::SetForegroundColor(prev))?;
                out.queue(Print(&run))?;
                run.clear();
            }
            run_color = Some(color);
        }
        run.push(glyph.ch());
    }
    if let Some(color) = run_color {
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(&run))?;
    }
    Ok(())
}
