/// Terminal rendering. All crossterm output lives here.
///
/// `TerminalScreen` implements the `Screen` services by recording what the
/// game asked for (tiles, sprite positions, status text, overlays).  `render`
/// then translates that record into terminal commands once per frame.  No
/// game logic is performed here.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use crate::room::{Room, Tile, SPRITE_ORIGIN_X, SPRITE_ORIGIN_Y, TILE_SHIFT, UI_ROWS};
use crate::screen::{Palette, Screen, Sprite};

/// Terminal columns per room cell, so cells come out roughly square.
const CELL_COLS: u16 = 2;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_DOOR: Color = Color::Yellow;
const C_WALL: Color = Color::DarkCyan;
const C_WALL2: Color = Color::DarkMagenta;
const C_FLOOR: Color = Color::DarkGrey;
const C_STATUS: Color = Color::White;
const C_MONK: Color = Color::Rgb { r: 200, g: 170, b: 110 };
const C_MONK_FLASH: Color = Color::Rgb { r: 190, g: 110, b: 190 };
const C_KI: Color = Color::Rgb { r: 120, g: 190, b: 210 };
const C_SPIRIT: Color = Color::Rgb { r: 150, g: 90, b: 170 };
const C_HINT: Color = Color::DarkGrey;

// ── Screen model ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct TerminalScreen {
    width: usize,
    rows: Vec<Vec<Tile>>,
    sprites: [(i32, i32); 3],
    status: String,
    death: bool,
    palette: Palette,
}

impl TerminalScreen {
    pub fn new() -> Self {
        TerminalScreen::default()
    }

    /// Terminal cell of a sprite, or `None` if it is parked off-screen.
    fn sprite_cell(&self, sprite: Sprite) -> Option<(u16, u16)> {
        let (x, y) = self.sprites[sprite.slot()];
        if x < SPRITE_ORIGIN_X || y < SPRITE_ORIGIN_Y {
            return None;
        }
        let col = (x - SPRITE_ORIGIN_X) >> TILE_SHIFT;
        let row = (y - SPRITE_ORIGIN_Y) >> TILE_SHIFT;
        let max_row = self.rows.len() as i32 + UI_ROWS;
        if col >= self.width as i32 || row < UI_ROWS || row >= max_row {
            return None;
        }
        Some((col as u16 * CELL_COLS, row as u16))
    }
}

impl Screen for TerminalScreen {
    fn move_sprite(&mut self, sprite: Sprite, x: i32, y: i32) {
        self.sprites[sprite.slot()] = (x, y);
    }

    fn draw_room(&mut self, room: &Room) {
        self.width = room.width();
        self.rows = room.rows().map(|row| row.to_vec()).collect();
    }

    fn print_status(&mut self, line: &str) {
        self.status = line.to_string();
    }

    fn show_death(&mut self) {
        self.death = true;
    }

    fn clear_death(&mut self) {
        self.death = false;
    }

    fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, screen: &TerminalScreen) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_status(out, screen)?;
    draw_room(out, screen)?;
    draw_sprites(out, screen)?;
    draw_controls_hint(out, screen)?;

    if screen.death {
        draw_death(out, screen)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, hint_row(screen) + 1))?;
    out.flush()?;
    Ok(())
}

fn hint_row(screen: &TerminalScreen) -> u16 {
    screen.rows.len() as u16 + UI_ROWS as u16 + 1
}

// ── Status line (row 0) ───────────────────────────────────────────────────────

fn draw_status<W: Write>(out: &mut W, screen: &TerminalScreen) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(style::SetForegroundColor(C_STATUS))?;
    out.queue(Print(&screen.status))?;
    Ok(())
}

// ── Background ────────────────────────────────────────────────────────────────

fn draw_room<W: Write>(out: &mut W, screen: &TerminalScreen) -> std::io::Result<()> {
    for (y, row) in screen.rows.iter().enumerate() {
        out.queue(cursor::MoveTo(0, y as u16 + UI_ROWS as u16))?;
        for tile in row {
            let (glyph, color) = match tile {
                Tile::Door => ("▒▒", C_DOOR),
                Tile::Wall => ("██", C_WALL),
                Tile::Wall2 => ("▓▓", C_WALL2),
                Tile::Floor => ("· ", C_FLOOR),
            };
            out.queue(style::SetForegroundColor(color))?;
            out.queue(Print(glyph))?;
        }
    }
    Ok(())
}

// ── Sprites ───────────────────────────────────────────────────────────────────

fn draw_sprites<W: Write>(out: &mut W, screen: &TerminalScreen) -> std::io::Result<()> {
    let monk_color = match screen.palette {
        Palette::Normal => C_MONK,
        Palette::Flash => C_MONK_FLASH,
    };
    let sprites = [
        (Sprite::Spirit, "& ", C_SPIRIT),
        (Sprite::Ki, "* ", C_KI),
        (Sprite::Monk, "@ ", monk_color),
    ];

    for (sprite, glyph, color) in sprites {
        if let Some((col, row)) = screen.sprite_cell(sprite) {
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(style::SetForegroundColor(color))?;
            out.queue(Print(glyph))?;
        }
    }
    Ok(())
}

// ── Controls hint ─────────────────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, screen: &TerminalScreen) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(0, hint_row(screen)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(
        "←↑→↓/WASD Move  J Ki  K Pulse  L Special  Enter Restart  Q Quit",
    ))?;
    Ok(())
}

// ── Death overlay ─────────────────────────────────────────────────────────────

fn draw_death<W: Write>(out: &mut W, screen: &TerminalScreen) -> std::io::Result<()> {
    let lines: &[(&str, Color)] = &[
        ("╔════════════════╗", Color::Red),
        ("║    YOU DIED    ║", Color::Red),
        ("╚════════════════╝", Color::Red),
        ("  PRESS START", Color::White),
    ];

    let cx = (screen.width as u16 * CELL_COLS) / 2;
    let start_row = (screen.rows.len() as u16 / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}
