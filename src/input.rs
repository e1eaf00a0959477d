/// Button state supplied by the host once per frame.

use std::ops::{BitAnd, BitOr, BitOrAssign};

/// A set of logical buttons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Buttons(u8);

impl Buttons {
    pub const NONE: Buttons = Buttons(0);
    pub const RIGHT: Buttons = Buttons(1 << 0);
    pub const LEFT: Buttons = Buttons(1 << 1);
    pub const UP: Buttons = Buttons(1 << 2);
    pub const DOWN: Buttons = Buttons(1 << 3);
    /// Fire ki.
    pub const A: Buttons = Buttons(1 << 4);
    /// Area pulse.
    pub const B: Buttons = Buttons(1 << 5);
    /// Special move.
    pub const SELECT: Buttons = Buttons(1 << 6);
    /// Restart after death.
    pub const START: Buttons = Buttons(1 << 7);

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn from_bits(bits: u8) -> Self {
        Buttons(bits)
    }

    pub const fn contains(self, other: Buttons) -> bool {
        self.0 & other.0 == other.0 && other.0 != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn insert(&mut self, other: Buttons) {
        self.0 |= other.0;
    }
}

impl BitOr for Buttons {
    type Output = Buttons;

    fn bitor(self, rhs: Buttons) -> Buttons {
        Buttons(self.0 | rhs.0)
    }
}

impl BitOrAssign for Buttons {
    fn bitor_assign(&mut self, rhs: Buttons) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Buttons {
    type Output = Buttons;

    fn bitand(self, rhs: Buttons) -> Buttons {
        Buttons(self.0 & rhs.0)
    }
}

// ── Pad ───────────────────────────────────────────────────────────────────────

/// Held buttons for the current frame plus the previous frame's, so that
/// one-shot actions can react to the press edge only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pad {
    held: Buttons,
    prev: Buttons,
}

impl Pad {
    pub fn new() -> Self {
        Pad::default()
    }

    /// A pad whose previous frame held `prev` and current frame holds `held`.
    pub fn from_frames(prev: Buttons, held: Buttons) -> Self {
        Pad { held, prev }
    }

    /// Start a new frame with the buttons the host reports as held.
    pub fn update(&mut self, held: Buttons) {
        self.prev = self.held;
        self.held = held;
    }

    pub fn held(&self) -> Buttons {
        self.held
    }

    /// Buttons that went down this frame: `(curr ^ prev) & curr`.
    pub fn pressed(&self) -> Buttons {
        Buttons((self.held.0 ^ self.prev.0) & self.held.0)
    }

    pub fn is_held(&self, button: Buttons) -> bool {
        self.held.contains(button)
    }

    pub fn is_pressed(&self, button: Buttons) -> bool {
        self.pressed().contains(button)
    }
}
