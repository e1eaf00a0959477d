/// Render services and the per-frame presentation pass.
///
/// The simulation never draws.  After each `tick` the host calls `present`,
/// which turns the state and the frame's events into fire-and-forget calls
/// on a `Screen`.

use crate::entities::{GameEvent, GamePhase, GameState, MAX_FOCUS};
use crate::room::Room;

/// Off-screen sentinel: a sprite moved here is hidden.
pub const HIDDEN: (i32, i32) = (0, 0);

/// Hardware sprite slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sprite {
    Monk = 0,
    Ki = 1,
    Spirit = 2,
}

impl Sprite {
    pub const ALL: [Sprite; 3] = [Sprite::Monk, Sprite::Ki, Sprite::Spirit];

    pub fn slot(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Palette {
    #[default]
    Normal,
    /// Shown while an attack's effect window is open.
    Flash,
}

pub trait Screen {
    fn move_sprite(&mut self, sprite: Sprite, x: i32, y: i32);

    fn hide_sprite(&mut self, sprite: Sprite) {
        self.move_sprite(sprite, HIDDEN.0, HIDDEN.1);
    }

    fn draw_room(&mut self, room: &Room);

    fn print_status(&mut self, line: &str);

    fn show_death(&mut self);

    fn clear_death(&mut self);

    /// Optional capability; screens without palettes ignore it.
    fn set_palette(&mut self, _palette: Palette) {}
}

/// `HP:3  ROOM:1  FOCUS:[#--]`
pub fn status_line(state: &GameState) -> String {
    let filled = state.focus.min(MAX_FOCUS) as usize;
    let empty = MAX_FOCUS as usize - filled;
    format!(
        "HP:{}  ROOM:{}  FOCUS:[{}{}]",
        state.player.hp,
        state.room_id,
        "#".repeat(filled),
        "-".repeat(empty)
    )
}

/// Issue the render calls for one frame.
pub fn present(state: &GameState, events: &[GameEvent], screen: &mut impl Screen) {
    for event in events {
        match event {
            GameEvent::RoomBuilt => screen.draw_room(&state.room),
            GameEvent::StatusChanged => screen.print_status(&status_line(state)),
            GameEvent::Died => screen.show_death(),
            GameEvent::Restarted => screen.clear_death(),
            _ => {}
        }
    }

    if state.phase == GamePhase::Dead {
        for sprite in Sprite::ALL {
            screen.hide_sprite(sprite);
        }
        screen.set_palette(Palette::Normal);
        return;
    }

    // Blink while invincible: hidden on odd frames.
    let blink = state.timers.invincible.get() % 2 == 1;
    if blink {
        screen.hide_sprite(Sprite::Monk);
    } else {
        screen.move_sprite(Sprite::Monk, state.player.pos.x, state.player.pos.y);
    }

    if state.ki.active {
        screen.move_sprite(Sprite::Ki, state.ki.pos.x, state.ki.pos.y);
    } else {
        screen.hide_sprite(Sprite::Ki);
    }

    if state.spirit.active {
        screen.move_sprite(Sprite::Spirit, state.spirit.pos.x, state.spirit.pos.y);
    } else {
        screen.hide_sprite(Sprite::Spirit);
    }

    screen.set_palette(if state.timers.effect_window_open() {
        Palette::Flash
    } else {
        Palette::Normal
    });
}
