/// Tile map and collision probe.
///
/// The room is a fixed 20 × 18 grid drawn one cell row below the status line.
/// Actor positions are sprite coordinates in pixels, with the handheld's
/// sprite origin offset of (8, 16): the pixel (8, 16) is the top-left corner
/// of screen cell (0, 0).

use crate::entities::Pos;

pub const MAP_W: usize = 20;
pub const MAP_H: usize = 18;
/// Screen rows above the room reserved for the status line.
pub const UI_ROWS: i32 = 1;

pub const SPRITE_ORIGIN_X: i32 = 8;
pub const SPRITE_ORIGIN_Y: i32 = 16;
/// log2 of the tile edge in pixels.
pub const TILE_SHIFT: i32 = 3;

// ── Fixed placements (sprite pixels) ──────────────────────────────────────────

pub const PLAYER_START: Pos = Pos::new(80, 80);
pub const SPIRIT_START: Pos = Pos::new(40, 60);
/// Where the spirit is put back when the player walks through the door.
pub const SPIRIT_ROOM_ENTRY: Pos = Pos::new(40, 80);
/// Player y just inside the room after a door transition.
pub const PLAYER_ROOM_ENTRY_Y: i32 = 40;
/// Candidate spots for a sealed spirit to reappear, one per quadrant.
pub const SPIRIT_SPAWNS: [Pos; 4] = [
    Pos::new(40, 60),
    Pos::new(136, 60),
    Pos::new(40, 120),
    Pos::new(136, 120),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    Door,
    Wall,
    Wall2,
    Floor,
}

impl Tile {
    pub fn is_solid(self) -> bool {
        !matches!(self, Tile::Door | Tile::Floor)
    }
}

// ── Pixel → cell projection ───────────────────────────────────────────────────

/// Room cell column under a sprite x coordinate, clamped at zero.
pub fn cell_x(px: i32) -> i32 {
    ((px - SPRITE_ORIGIN_X) >> TILE_SHIFT).max(0)
}

/// Room cell row under a sprite y coordinate, clamped at zero.
pub fn cell_y(py: i32) -> i32 {
    (((py - SPRITE_ORIGIN_Y) >> TILE_SHIFT) - UI_ROWS).max(0)
}

// ── Room ──────────────────────────────────────────────────────────────────────

/// Dense row-major grid of tiles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Room {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl Room {
    /// A grid of one tile kind.  Mostly useful for tests and custom layouts.
    pub fn filled(width: usize, height: usize, tile: Tile) -> Self {
        Room {
            width,
            height,
            tiles: vec![tile; width * height],
        }
    }

    /// The fixed room layout.
    ///
    /// ```text
    /// row 0        Wall2 strip
    /// row 1        Wall strip, Door at column W/2
    /// row 2        Wall2 strip, Floor threshold under the door
    /// rows 3..H-1  Wall | Floor ... Floor | Wall
    /// row H-1      Wall2 strip
    /// ```
    pub fn build() -> Self {
        let mut room = Room::filled(MAP_W, MAP_H, Tile::Floor);
        room.stamp();
        room
    }

    /// Overwrite every cell with the fixed layout.
    pub fn rebuild(&mut self) {
        self.tiles.fill(Tile::Floor);
        self.stamp();
    }

    fn stamp(&mut self) {
        let (w, h) = (self.width, self.height);
        if w == 0 || h < 3 {
            return;
        }
        let door_x = w / 2;

        for x in 0..w {
            self.put(x, 0, Tile::Wall2);
            self.put(x, 1, Tile::Wall);
            self.put(x, 2, Tile::Wall2);
            self.put(x, h - 1, Tile::Wall2);
        }
        self.put(door_x, 1, Tile::Door);
        self.put(door_x, 2, Tile::Floor);

        for y in 3..h - 1 {
            self.put(0, y, Tile::Wall);
            self.put(w - 1, y, Tile::Wall);
        }
    }

    fn put(&mut self, x: usize, y: usize, tile: Tile) {
        self.tiles[y * self.width + x] = tile;
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell of the single door in the back wall.
    pub fn door_cell(&self) -> (usize, usize) {
        (self.width / 2, 1)
    }

    /// Tile at a cell.  Anything outside the grid reads as `Tile::Wall`.
    pub fn tile_at(&self, cx: i32, cy: i32) -> Tile {
        if cx < 0 || cy < 0 || cx as usize >= self.width || cy as usize >= self.height {
            return Tile::Wall;
        }
        self.tiles[cy as usize * self.width + cx as usize]
    }

    /// Replace one cell.  Out-of-range writes are ignored.
    pub fn set_tile(&mut self, cx: i32, cy: i32, tile: Tile) {
        if cx < 0 || cy < 0 || cx as usize >= self.width || cy as usize >= self.height {
            return;
        }
        self.put(cx as usize, cy as usize, tile);
    }

    /// Tile under a sprite position.
    pub fn tile_under(&self, pos: Pos) -> Tile {
        self.tile_at(cell_x(pos.x), cell_y(pos.y))
    }

    pub fn is_blocked_at_pixel(&self, px: i32, py: i32) -> bool {
        self.tile_at(cell_x(px), cell_y(py)).is_solid()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.width.max(1))
    }
}

impl Default for Room {
    fn default() -> Self {
        Room::build()
    }
}
