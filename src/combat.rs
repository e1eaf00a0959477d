/// Combat resolution.
///
/// Two geometric predicates (a small box overlap and a radius test) and the
/// attack rules built on them.  The frame loop calls the rules in this order:
/// pulse, special, ki launch/flight, seal, spirit contact.

use rand::Rng;

use crate::entities::{GameEvent, GamePhase, GameState, Ki, Knockback, Pos, Spirit, MAX_FOCUS};
use crate::input::{Buttons, Pad};
use crate::room::SPIRIT_SPAWNS;
use crate::timers::Expired;

/// Hitbox edge in pixels.  Smaller than the 8px sprite so grazes don't count.
pub const HITBOX: i32 = 6;

// Ki flight bounds.
pub const KI_MIN_X: i32 = 1;
pub const KI_MAX_X: i32 = 167;
pub const KI_MIN_Y: i32 = 1;
pub const KI_MAX_Y: i32 = 151;

// ── Predicates ────────────────────────────────────────────────────────────────

pub fn overlaps(a: Pos, b: Pos) -> bool {
    a.x + HITBOX > b.x && a.x < b.x + HITBOX && a.y + HITBOX > b.y && a.y < b.y + HITBOX
}

pub fn within_radius(a: Pos, b: Pos, radius: i32) -> bool {
    let r = i64::from(radius);
    i64::from(a.distance_sq(b)) <= r * r
}

/// Per-frame impulse that pushes `target` directly away from `source`.
pub fn push_away(source: Pos, target: Pos, speed: i32) -> (i32, i32) {
    (
        (target.x - source.x).signum() * speed,
        (target.y - source.y).signum() * speed,
    )
}

// ── Area pulse ────────────────────────────────────────────────────────────────

pub fn fire_pulse(state: &mut GameState, pad: &Pad, events: &mut Vec<GameEvent>) {
    if !pad.is_pressed(Buttons::B) || state.timers.pulse_cooldown.is_running() {
        return;
    }
    state.timers.pulse_cooldown.set(state.tuning.pulse_cooldown);
    state.timers.pulse_window.set(state.tuning.pulse_window);
    state.pulse_latch = true;
    events.push(GameEvent::PulseFired);
}

/// While the pulse window is open, the first frame the spirit is in range
/// takes the hit and spends the latch.
pub fn resolve_pulse(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if !state.pulse_latch || state.timers.pulse_window.is_idle() || !state.spirit.active {
        return;
    }
    let t = &state.tuning;
    if !within_radius(state.player.pos, state.spirit.pos, t.pulse_radius) {
        return;
    }

    let (dx, dy) = push_away(state.player.pos, state.spirit.pos, t.pulse_knockback_speed);
    state.spirit.knockback = Knockback::new(dx, dy, t.pulse_knockback_frames);
    state.timers.spirit_stun.set(t.pulse_stun);
    state.pulse_latch = false;
    events.push(GameEvent::PulseHit);
}

// ── Special move ──────────────────────────────────────────────────────────────

/// Spends all focus.  The range check happens once, on activation.
pub fn fire_special(state: &mut GameState, pad: &Pad, events: &mut Vec<GameEvent>) {
    if !pad.is_pressed(Buttons::SELECT)
        || state.focus == 0
        || state.timers.special_cooldown.is_running()
    {
        return;
    }
    let t = &state.tuning;
    state.focus = 0;
    state.timers.special_cooldown.set(t.special_cooldown);
    state.timers.special_window.set(t.special_window);

    let hit = state.spirit.active
        && within_radius(state.player.pos, state.spirit.pos, t.special_radius);
    if hit {
        let (dx, dy) = push_away(state.player.pos, state.spirit.pos, t.special_knockback_speed);
        state.spirit.knockback = Knockback::new(dx, dy, t.special_knockback_frames);
        state.timers.spirit_stun.set(t.special_stun);
    }

    log::debug!("special fired (hit: {})", hit);
    events.push(GameEvent::SpecialFired { hit });
    events.push(GameEvent::StatusChanged);
}

// ── Ki ────────────────────────────────────────────────────────────────────────

pub fn launch_ki(state: &mut GameState, pad: &Pad, events: &mut Vec<GameEvent>) {
    if state.ki.active || !pad.is_pressed(Buttons::A) {
        return;
    }
    let (dx, dy) = state.player.facing.delta();
    let speed = state.tuning.ki_speed;
    state.ki = Ki {
        pos: state.player.pos,
        dx: dx * speed,
        dy: dy * speed,
        active: true,
    };
    events.push(GameEvent::KiFired);
}

/// Move the ki one frame; retract it instead if the next spot is off the
/// playfield or solid.
pub fn advance_ki(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let ki = &mut state.ki;
    if !ki.active {
        return;
    }
    let next = ki.pos.offset(ki.dx, ki.dy);
    let out_of_bounds =
        next.x < KI_MIN_X || next.x > KI_MAX_X || next.y < KI_MIN_Y || next.y > KI_MAX_Y;

    if out_of_bounds || state.room.is_blocked_at_pixel(next.x, next.y) {
        ki.active = false;
        events.push(GameEvent::KiRetracted);
    } else {
        ki.pos = next;
    }
}

// ── Seal ──────────────────────────────────────────────────────────────────────

pub fn resolve_seal(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if !state.spirit.active || !state.ki.active || !overlaps(state.ki.pos, state.spirit.pos) {
        return;
    }
    state.spirit.active = false;
    state.spirit.knockback.cancel();
    state.ki.active = false;
    state.focus = (state.focus + 1).min(MAX_FOCUS);
    state.timers.respawn_delay.set(state.tuning.respawn_delay);

    log::debug!("spirit sealed, focus now {}", state.focus);
    events.push(GameEvent::Sealed { focus: state.focus });
    events.push(GameEvent::StatusChanged);
}

/// Bring a sealed spirit back once its respawn delay runs out.
pub fn resolve_respawn(
    state: &mut GameState,
    expired: Expired,
    rng: &mut impl Rng,
    events: &mut Vec<GameEvent>,
) {
    if !expired.respawn || state.spirit.active {
        return;
    }
    let at = pick_spawn(state.player.pos, rng);
    state.spirit = Spirit {
        pos: at,
        active: true,
        knockback: Knockback::default(),
    };
    state.timers.spirit_stun.set(state.tuning.respawn_stun);
    state.timers.spirit_attack_cooldown.set(state.tuning.respawn_cooldown);
    state.timers.spirit_step.clear();

    log::debug!("spirit respawned at ({}, {})", at.x, at.y);
    events.push(GameEvent::SpiritRespawned { at });
}

/// Draw two spawn candidates and keep the one farther from the player.
pub fn pick_spawn(player: Pos, rng: &mut impl Rng) -> Pos {
    let a = SPIRIT_SPAWNS[rng.gen_range(0..SPIRIT_SPAWNS.len())];
    let b = SPIRIT_SPAWNS[rng.gen_range(0..SPIRIT_SPAWNS.len())];
    if a.distance_sq(player) >= b.distance_sq(player) {
        a
    } else {
        b
    }
}

// ── Spirit contact ────────────────────────────────────────────────────────────

/// Spirit touching a vulnerable player.  Returns `true` if the hit was fatal.
pub fn resolve_contact(state: &mut GameState, events: &mut Vec<GameEvent>) -> bool {
    if !state.spirit.active
        || state.timers.invincible.is_running()
        || !overlaps(state.player.pos, state.spirit.pos)
    {
        return false;
    }

    state.player.hp = state.player.hp.saturating_sub(1);
    events.push(GameEvent::PlayerHit { hp: state.player.hp });
    events.push(GameEvent::StatusChanged);

    if state.player.hp == 0 {
        state.phase = GamePhase::Dead;
        state.player.knockback.cancel();
        state.spirit.active = false;
        state.ki.active = false;
        log::info!("player died in room {}", state.room_id);
        events.push(GameEvent::Died);
        return true;
    }

    let t = &state.tuning;
    state.timers.invincible.set(t.hit_invincibility);
    let (dx, dy) = push_away(state.spirit.pos, state.player.pos, t.hit_knockback_speed);
    state.player.knockback = Knockback::new(dx, dy, t.hit_knockback_frames);
    state.timers.spirit_attack_cooldown.set(t.spirit_attack_cooldown);
    state.timers.spirit_stun.set(t.spirit_hit_stun);
    false
}
