/// Game records: actors, events and the state aggregate.

use crate::config::Tuning;
use crate::room::Room;
use crate::timers::{Countdown, Timers};

/// Focus is capped at this many charges.
pub const MAX_FOCUS: u8 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step in screen space (y grows downward).
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    Dead,
}

/// Sprite position in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Pos { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Pos::new(self.x + dx, self.y + dy)
    }

    pub fn distance_sq(self, other: Pos) -> i32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }
}

/// Forced movement: `(dx, dy)` pixels per frame for `frames` more frames.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Knockback {
    pub dx: i32,
    pub dy: i32,
    pub frames: Countdown,
}

impl Knockback {
    pub fn new(dx: i32, dy: i32, frames: u32) -> Self {
        Knockback {
            dx,
            dy,
            frames: Countdown::from_frames(frames),
        }
    }

    pub fn is_active(&self) -> bool {
        self.frames.is_running()
    }

    pub fn cancel(&mut self) {
        self.frames.clear();
    }
}

// ── Actors ────────────────────────────────────────────────────────────────────

/// The monk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub pos: Pos,
    pub hp: u32,
    pub facing: Direction,
    pub knockback: Knockback,
}

/// The pursuing enemy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Spirit {
    pub pos: Pos,
    /// Inactive spirits are sealed (or the player is dead) and not drawn.
    pub active: bool,
    pub knockback: Knockback,
}

/// The ki projectile.  At most one is in flight.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ki {
    pub pos: Pos,
    pub dx: i32,
    pub dy: i32,
    pub active: bool,
}

// ── Frame events ──────────────────────────────────────────────────────────────

/// Things that happened during one `tick`, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// The room grid was (re)built and must be redrawn.
    RoomBuilt,
    /// Hit points, room number or focus changed.
    StatusChanged,
    RoomEntered { room_id: u32 },
    PulseFired,
    /// The pulse's latched hit landed on the spirit.
    PulseHit,
    SpecialFired { hit: bool },
    KiFired,
    KiRetracted,
    Sealed { focus: u8 },
    SpiritRespawned { at: Pos },
    PlayerHit { hp: u32 },
    Died,
    Restarted,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  One value owns every position, timer and flag, so
/// a restart is a single assignment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub room: Room,
    pub player: Player,
    pub spirit: Spirit,
    pub ki: Ki,
    pub timers: Timers,
    /// Charges for the special move, `0..=MAX_FOCUS`.
    pub focus: u8,
    /// Set when a pulse fires, cleared by its first hit.
    pub pulse_latch: bool,
    pub phase: GamePhase,
    pub room_id: u32,
    /// Simulated Playing frames since the last restart.
    pub frame: u64,
    pub tuning: Tuning,
}
