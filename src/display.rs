//! Terminal rendering layer.
//!
//! The game draws in window pixels. This renderer scales every call onto a
//! grid of character cells, then `present` writes the whole grid with a
//! single flush. No game logic lives here.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use side_scroller::object::Sprite;
use side_scroller::render::{Renderer, Rgb, TextStyle};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_PLAYER: Color = Color::White;
const C_BOSS: Color = Color::Red;
const C_ENEMY: Color = Color::Green;
const C_COIN: Color = Color::Yellow;
const C_INVINCIBLE: Color = Color::Cyan;
const C_DOUBLE_SCORE: Color = Color::Magenta;
const C_PLATFORM: Color = Color::DarkYellow;
const C_FLYING_PLATFORM: Color = Color::DarkCyan;
const C_FLAG: Color = Color::Blue;
const C_FIREBALL: Color = Color::DarkRed;
const C_TEXT: Color = Color::White;

/// Glyph and colour for an image id. `None` is not drawn at all.
fn glyph(image: &str) -> Option<(char, Color)> {
    match image {
        "background" => None,
        "player_left" | "player_right" => Some(('@', C_PLAYER)),
        "enemy_boss" => Some(('B', C_BOSS)),
        "enemy" => Some(('s', C_ENEMY)),
        "coin" => Some(('o', C_COIN)),
        "invincible_power" => Some(('*', C_INVINCIBLE)),
        "double_score" => Some(('$', C_DOUBLE_SCORE)),
        "platform" => Some(('#', C_PLATFORM)),
        "flying_platform" => Some(('=', C_FLYING_PLATFORM)),
        "end_flag" => Some(('F', C_FLAG)),
        "fireball" => Some(('~', C_FIREBALL)),
        _ => Some(('?', C_TEXT)),
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.0,
        g: rgb.1,
        b: rgb.2,
    }
}

#[derive(Clone, Copy, PartialEq)]
struct Cell {
    ch: char,
    color: Color,
}

const BLANK: Cell = Cell {
    ch: ' ',
    color: C_TEXT,
};

// ── Renderer ──────────────────────────────────────────────────────────────────

pub struct TerminalRenderer {
    cols: u16,
    rows: u16,
    /// Window pixels per cell on each axis.
    cell_w: f64,
    cell_h: f64,
    cells: Vec<Cell>,
}

impl TerminalRenderer {
    pub fn new(window_width: f64, window_height: f64, cols: u16, rows: u16) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            cell_w: window_width / cols as f64,
            cell_h: window_height / rows as f64,
            cells: vec![BLANK; cols as usize * rows as usize],
        }
    }

    /// Start a new frame.
    pub fn clear(&mut self) {
        self.cells.fill(BLANK);
    }

    fn put(&mut self, col: i64, row: i64, cell: Cell) {
        if col < 0 || row < 0 || col >= self.cols as i64 || row >= self.rows as i64 {
            return;
        }
        let index = row as usize * self.cols as usize + col as usize;
        self.cells[index] = cell;
    }

    /// Write the grid to `out` and flush.
    pub fn present<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        out.queue(terminal::Clear(terminal::ClearType::All))?;

        for (row, line) in self.cells.chunks(self.cols as usize).enumerate() {
            out.queue(cursor::MoveTo(0, row as u16))?;
            let mut current = None;
            for cell in line {
                if current != Some(cell.color) {
                    out.queue(style::SetForegroundColor(cell.color))?;
                    current = Some(cell.color);
                }
                out.queue(Print(cell.ch))?;
            }
        }

        out.queue(style::ResetColor)?;
        out.queue(cursor::MoveTo(0, self.rows.saturating_sub(1)))?;
        out.flush()?;
        Ok(())
    }
}

impl Renderer for TerminalRenderer {
    fn draw_image(&mut self, sprite: &Sprite, x: f64, y: f64) {
        let Some((ch, color)) = glyph(&sprite.image) else {
            return;
        };
        let cell = Cell { ch, color };

        // Footprint in cells, never smaller than one.
        let half_w = (sprite.width / self.cell_w / 2.0).max(0.5);
        let half_h = (sprite.height / self.cell_h / 2.0).max(0.5);
        let (cx, cy) = (x / self.cell_w, y / self.cell_h);

        let left = (cx - half_w).floor().max(0.0) as i64;
        let right = (cx + half_w).ceil().min(self.cols as f64) as i64;
        let top = (cy - half_h).floor().max(0.0) as i64;
        let bottom = (cy + half_h).ceil().min(self.rows as f64) as i64;

        for row in top..bottom.max(top + 1) {
            for col in left..right.max(left + 1) {
                self.put(col, row, cell);
            }
        }
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) {
        let color = style.color.map(to_color).unwrap_or(C_TEXT);
        let row = (y / self.cell_h).floor() as i64;
        let col = (x / self.cell_w).floor() as i64;
        for (i, ch) in text.chars().enumerate() {
            self.put(col + i as i64, row, Cell { ch, color });
        }
    }

    /// One cell per character, whatever the font size.
    fn text_width(&self, text: &str, _size: u32) -> f64 {
        text.chars().count() as f64 * self.cell_w
    }
}
