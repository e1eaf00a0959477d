/// Actor motion.
///
/// Movement is resolved one axis at a time, X then Y, and each axis is only
/// committed if the destination pixel is open, so walking or chasing into a
/// wall slides along it.  Player knockback is stricter: an impulse whose
/// landing pixel is solid is cancelled outright.

use crate::combat::overlaps;
use crate::entities::{Direction, GameState, Knockback, Pos};
use crate::input::{Buttons, Pad};
use crate::room::Room;

// Hard bounds for the player, matching the inside of the solid border.
pub const PLAYER_MIN_X: i32 = 16;
pub const PLAYER_MAX_X: i32 = 152;
pub const PLAYER_MIN_Y: i32 = 32;
pub const PLAYER_MAX_Y: i32 = 136;

/// Which axes of a step were committed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Moved {
    pub x: bool,
    pub y: bool,
}

impl Moved {
    pub fn any(self) -> bool {
        self.x || self.y
    }
}

/// Try `dx` then `dy`, committing each axis only onto an open pixel.
pub fn step_axes(room: &Room, pos: &mut Pos, dx: i32, dy: i32) -> Moved {
    let mut moved = Moved::default();
    if dx != 0 && !room.is_blocked_at_pixel(pos.x + dx, pos.y) {
        pos.x += dx;
        moved.x = true;
    }
    if dy != 0 && !room.is_blocked_at_pixel(pos.x, pos.y + dy) {
        pos.y += dy;
        moved.y = true;
    }
    moved
}

/// Spend one frame of a knockback impulse.
pub fn apply_knockback(room: &Room, pos: &mut Pos, knockback: &mut Knockback) -> Moved {
    if !knockback.is_active() {
        return Moved::default();
    }
    knockback.frames.tick();
    step_axes(room, pos, knockback.dx, knockback.dy)
}

pub fn clamp_player(pos: &mut Pos) {
    pos.x = pos.x.clamp(PLAYER_MIN_X, PLAYER_MAX_X);
    pos.y = pos.y.clamp(PLAYER_MIN_Y, PLAYER_MAX_Y);
}

/// Movement intent from held buttons.  One direction per frame, checked in
/// the order Left, Right, Up, Down.
pub fn intent(held: Buttons) -> Option<Direction> {
    if held.contains(Buttons::LEFT) {
        Some(Direction::Left)
    } else if held.contains(Buttons::RIGHT) {
        Some(Direction::Right)
    } else if held.contains(Buttons::UP) {
        Some(Direction::Up)
    } else if held.contains(Buttons::DOWN) {
        Some(Direction::Down)
    } else {
        None
    }
}

/// Player motion for one frame: knockback if one is running, otherwise the
/// pad's direction.  The player may not walk into the spirit, only out of it.
pub fn move_player(state: &mut GameState, pad: &Pad) {
    let player = &mut state.player;

    if player.knockback.is_active() {
        let (dx, dy) = (player.knockback.dx, player.knockback.dy);
        let landing = player.pos.offset(dx, dy);
        if state.room.is_blocked_at_pixel(landing.x, landing.y) {
            // Knocked into a wall: stay put and drop the rest of the impulse.
            player.knockback.cancel();
        } else {
            apply_knockback(&state.room, &mut player.pos, &mut player.knockback);
        }
    } else if let Some(dir) = intent(pad.held()) {
        player.facing = dir;
        let (dx, dy) = dir.delta();
        let next = player.pos.offset(dx, dy);

        let spirit = state.spirit.active.then_some(state.spirit.pos);
        let already_touching = spirit.is_some_and(|s| overlaps(player.pos, s));
        let walks_into = spirit.is_some_and(|s| overlaps(next, s));

        if already_touching || !walks_into {
            step_axes(&state.room, &mut player.pos, dx, dy);
        }
    }

    clamp_player(&mut player.pos);
}

/// Spirit motion for one frame: knockback if one is running, otherwise a
/// throttled chase step toward the player.
pub fn move_spirit(state: &mut GameState) {
    let spirit = &mut state.spirit;
    if !spirit.active {
        return;
    }

    if spirit.knockback.is_active() {
        apply_knockback(&state.room, &mut spirit.pos, &mut spirit.knockback);
        return;
    }

    let timers = &mut state.timers;
    if timers.spirit_stun.is_running()
        || timers.spirit_attack_cooldown.is_running()
        || timers.spirit_step.is_running()
    {
        return;
    }
    timers.spirit_step.set(state.tuning.spirit_step_interval);

    let target = state.player.pos;
    let dx = (target.x - spirit.pos.x).signum();
    let dy = (target.y - spirit.pos.y).signum();
    step_axes(&state.room, &mut spirit.pos, dx, dy);
}
