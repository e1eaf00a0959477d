use spirit_seal::room::*;

// ── Layout ────────────────────────────────────────────────────────────────────

#[test]
fn build_has_fixed_dimensions() {
    let room = Room::build();
    assert_eq!(room.width(), MAP_W);
    assert_eq!(room.height(), MAP_H);
    assert_eq!(room.rows().count(), MAP_H);
}

#[test]
fn exactly_one_door_centered_in_back_wall() {
    let room = Room::build();
    let doors: Vec<(usize, usize)> = room
        .rows()
        .enumerate()
        .flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, t)| **t == Tile::Door)
                .map(move |(x, _)| (x, y))
        })
        .collect();
    assert_eq!(doors, vec![(MAP_W / 2, 1)]);
    assert_eq!(room.door_cell(), (MAP_W / 2, 1));
}

#[test]
fn back_wall_rows_are_solid_except_door_passage() {
    let room = Room::build();
    let door_x = (MAP_W / 2) as i32;
    for x in 0..MAP_W as i32 {
        assert_eq!(room.tile_at(x, 0), Tile::Wall2);
        if x != door_x {
            assert_eq!(room.tile_at(x, 1), Tile::Wall);
            assert_eq!(room.tile_at(x, 2), Tile::Wall2);
        }
    }
    // Threshold under the door keeps it reachable
    assert_eq!(room.tile_at(door_x, 2), Tile::Floor);
}

#[test]
fn side_columns_and_bottom_are_solid() {
    let room = Room::build();
    for y in 3..MAP_H as i32 - 1 {
        assert!(room.tile_at(0, y).is_solid());
        assert!(room.tile_at(MAP_W as i32 - 1, y).is_solid());
    }
    for x in 0..MAP_W as i32 {
        assert!(room.tile_at(x, MAP_H as i32 - 1).is_solid());
    }
}

#[test]
fn interior_is_floor() {
    let room = Room::build();
    for y in 3..MAP_H as i32 - 1 {
        for x in 1..MAP_W as i32 - 1 {
            assert_eq!(room.tile_at(x, y), Tile::Floor, "cell ({x}, {y})");
        }
    }
}

#[test]
fn rebuild_restores_layout() {
    let mut room = Room::build();
    room.set_tile(5, 5, Tile::Wall);
    room.set_tile(10, 1, Tile::Wall);
    room.rebuild();
    assert_eq!(room, Room::build());
}

// ── Solidity ──────────────────────────────────────────────────────────────────

#[test]
fn solidity_by_kind() {
    assert!(Tile::Wall.is_solid());
    assert!(Tile::Wall2.is_solid());
    assert!(!Tile::Door.is_solid());
    assert!(!Tile::Floor.is_solid());
}

#[test]
fn out_of_range_reads_as_wall() {
    let room = Room::filled(4, 4, Tile::Floor);
    assert_eq!(room.tile_at(-1, 0), Tile::Wall);
    assert_eq!(room.tile_at(0, -1), Tile::Wall);
    assert_eq!(room.tile_at(4, 0), Tile::Wall);
    assert_eq!(room.tile_at(0, 4), Tile::Wall);
    assert_eq!(room.tile_at(i32::MAX, i32::MIN), Tile::Wall);
}

#[test]
fn out_of_range_write_is_ignored() {
    let mut room = Room::filled(4, 4, Tile::Floor);
    room.set_tile(9, 9, Tile::Wall);
    room.set_tile(-1, 2, Tile::Wall);
    assert_eq!(room, Room::filled(4, 4, Tile::Floor));
}

// ── Pixel projection ──────────────────────────────────────────────────────────

#[test]
fn cell_projection_uses_sprite_origin_and_ui_row() {
    // (8, 16) is screen cell (0, 0), which is the UI row
    assert_eq!(cell_x(8), 0);
    assert_eq!(cell_x(15), 0);
    assert_eq!(cell_x(16), 1);
    assert_eq!(cell_y(24), 0);
    assert_eq!(cell_y(32), 1);
    assert_eq!(cell_y(80), 7);
}

#[test]
fn cell_projection_clamps_negative_to_zero() {
    assert_eq!(cell_x(0), 0);
    assert_eq!(cell_x(-100), 0);
    assert_eq!(cell_y(0), 0);
    assert_eq!(cell_y(16), 0);
}

#[test]
fn blocked_at_pixel_follows_tiles() {
    let room = Room::build();
    // Player start is open floor
    assert!(!room.is_blocked_at_pixel(PLAYER_START.x, PLAYER_START.y));
    // Row 2 (y 40..47) is the Wall2 strip, except under the door
    assert!(room.is_blocked_at_pixel(80, 47));
    assert!(!room.is_blocked_at_pixel(88, 47));
    // Door itself is passable
    assert!(!room.is_blocked_at_pixel(88, 32));
    // Left side column
    assert!(room.is_blocked_at_pixel(8, 80));
}

#[test]
fn fixed_placements_are_open() {
    let room = Room::build();
    for pos in [PLAYER_START, SPIRIT_START, SPIRIT_ROOM_ENTRY]
        .into_iter()
        .chain(SPIRIT_SPAWNS)
    {
        assert!(!room.is_blocked_at_pixel(pos.x, pos.y), "{pos:?}");
    }
}
