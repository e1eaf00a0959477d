use spirit_seal::compute::init_state;
use spirit_seal::config::Tuning;
use spirit_seal::entities::*;
use spirit_seal::timers::{Countdown, Timers};

#[test]
fn direction_deltas_are_unit_steps() {
    assert_eq!(Direction::Up.delta(), (0, -1));
    assert_eq!(Direction::Down.delta(), (0, 1));
    assert_eq!(Direction::Left.delta(), (-1, 0));
    assert_eq!(Direction::Right.delta(), (1, 0));
}

#[test]
fn pos_offset_and_distance() {
    let p = Pos::new(10, 20);
    assert_eq!(p.offset(3, -4), Pos::new(13, 16));
    assert_eq!(p.distance_sq(Pos::new(13, 16)), 25);
    assert_eq!(p.distance_sq(p), 0);
}

#[test]
fn knockback_activity_and_cancel() {
    let mut kb = Knockback::new(3, 0, 2);
    assert!(kb.is_active());
    kb.cancel();
    assert!(!kb.is_active());
    assert!(!Knockback::default().is_active());
}

// ── Countdown ─────────────────────────────────────────────────────────────────

#[test]
fn countdown_reports_expiry_once_and_sticks_at_zero() {
    let mut c = Countdown::from_frames(2);
    assert!(c.is_running());
    assert!(!c.tick());
    assert_eq!(c.get(), 1);
    assert!(c.tick());
    assert!(c.is_idle());
    assert!(!c.tick());
    assert_eq!(c.get(), 0);
}

#[test]
fn idle_countdown_never_expires() {
    let mut c = Countdown::idle();
    for _ in 0..5 {
        assert!(!c.tick());
    }
}

#[test]
fn timer_bank_ticks_every_countdown() {
    let mut t = Timers::default();
    t.invincible.set(2);
    t.spirit_stun.set(2);
    t.spirit_step.set(2);
    t.spirit_attack_cooldown.set(2);
    t.pulse_cooldown.set(2);
    t.pulse_window.set(2);
    t.special_cooldown.set(2);
    t.special_window.set(2);
    t.respawn_delay.set(2);

    let expired = t.tick();
    assert!(!expired.respawn);
    assert_eq!(t.invincible.get(), 1);
    assert_eq!(t.pulse_cooldown.get(), 1);
    assert_eq!(t.special_window.get(), 1);

    let expired = t.tick();
    assert!(expired.respawn);
    assert_eq!(t, Timers::default());
}

#[test]
fn effect_window_open_tracks_either_window() {
    let mut t = Timers::default();
    assert!(!t.effect_window_open());
    t.special_window.set(1);
    assert!(t.effect_window_open());
    t.tick();
    t.pulse_window.set(1);
    assert!(t.effect_window_open());
}

// ── Game state ────────────────────────────────────────────────────────────────

#[test]
fn game_state_clone_is_independent() {
    let original = init_state(Tuning::default());
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.pos.x = 99;
    cloned.focus = 3;
    cloned.room.set_tile(5, 5, spirit_seal::room::Tile::Wall);

    assert_eq!(original.player.pos.x, 80);
    assert_eq!(original.focus, 0);
    assert_ne!(original, cloned);
}
