/// Frame-count countdowns.
///
/// Every timer in the game is a `Countdown`: a non-negative frame count that
/// is decremented once per simulated frame and sticks at zero.  Each one gates
/// exactly one behaviour (invincibility, a cooldown, stun, step pacing, ...).

// ── Countdown ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Countdown(u32);

impl Countdown {
    pub const fn idle() -> Self {
        Countdown(0)
    }

    pub const fn from_frames(frames: u32) -> Self {
        Countdown(frames)
    }

    /// Remaining frames.
    pub fn get(self) -> u32 {
        self.0
    }

    pub fn set(&mut self, frames: u32) {
        self.0 = frames;
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    pub fn is_idle(self) -> bool {
        self.0 == 0
    }

    pub fn is_running(self) -> bool {
        self.0 > 0
    }

    /// Decrement by one frame, clamped at zero.  Returns `true` only on the
    /// frame the countdown reaches zero.
    pub fn tick(&mut self) -> bool {
        if self.0 == 0 {
            return false;
        }
        self.0 -= 1;
        self.0 == 0
    }
}

// ── Timer bank ────────────────────────────────────────────────────────────────

/// Countdowns that expired during a `Timers::tick`, for timers whose expiry
/// is itself an event rather than a gate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Expired {
    pub respawn: bool,
}

/// The global timer set.  Knockback counters live on the actors' impulses
/// because actor motion consumes them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Timers {
    /// Player cannot be hit while running.
    pub invincible: Countdown,
    /// Spirit AI suppressed while running.
    pub spirit_stun: Countdown,
    /// Spirit may only take an AI step when idle.
    pub spirit_step: Countdown,
    /// Spirit AI suppressed after it lands a hit.
    pub spirit_attack_cooldown: Countdown,
    pub pulse_cooldown: Countdown,
    pub pulse_window: Countdown,
    pub special_cooldown: Countdown,
    pub special_window: Countdown,
    /// Frames until a sealed spirit reappears.
    pub respawn_delay: Countdown,
}

impl Timers {
    /// Advance every countdown by one frame.
    pub fn tick(&mut self) -> Expired {
        self.invincible.tick();
        self.spirit_stun.tick();
        self.spirit_step.tick();
        self.spirit_attack_cooldown.tick();
        self.pulse_cooldown.tick();
        self.pulse_window.tick();
        self.special_cooldown.tick();
        self.special_window.tick();
        Expired {
            respawn: self.respawn_delay.tick(),
        }
    }

    /// True while either attack's effect window is open.
    pub fn effect_window_open(&self) -> bool {
        self.pulse_window.is_running() || self.special_window.is_running()
    }
}
