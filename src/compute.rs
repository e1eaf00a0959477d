/// Game state machine and the per-frame update.
///
/// `tick` takes the state by mutable reference together with the frame's pad
/// and an RNG handle, and returns the events the frame produced.  Randomness
/// only enters through `rng`, so callers control determinism (tests use a
/// seeded RNG).

use rand::Rng;

use crate::combat;
use crate::config::Tuning;
use crate::entities::{
    Direction, GameEvent, GamePhase, GameState, Ki, Knockback, Player, Spirit,
};
use crate::input::{Buttons, Pad};
use crate::motion;
use crate::room::{
    self, Room, Tile, PLAYER_ROOM_ENTRY_Y, PLAYER_START, SPIRIT_ROOM_ENTRY, SPIRIT_START,
};
use crate::timers::Timers;

/// Events a host should present before the first frame.
pub const OPENING_EVENTS: [GameEvent; 2] = [GameEvent::RoomBuilt, GameEvent::StatusChanged];

// ── Constructors ─────────────────────────────────────────────────────────────

/// Start-of-game state: fresh room, full hit points, no focus, and a short
/// grace period before the spirit can act or hurt the player.
pub fn init_state(tuning: Tuning) -> GameState {
    let mut timers = Timers::default();
    timers.invincible.set(tuning.start_invincibility);
    timers.spirit_stun.set(tuning.start_spirit_stun);
    timers.spirit_attack_cooldown.set(tuning.start_spirit_cooldown);

    GameState {
        room: Room::build(),
        player: Player {
            pos: PLAYER_START,
            hp: tuning.max_hp,
            facing: Direction::Down,
            knockback: Knockback::default(),
        },
        spirit: Spirit {
            pos: SPIRIT_START,
            active: true,
            knockback: Knockback::default(),
        },
        ki: Ki::default(),
        timers,
        focus: 0,
        pulse_latch: false,
        phase: GamePhase::Playing,
        room_id: 1,
        frame: 0,
        tuning,
    }
}

/// Reset every piece of state to its start-of-game value.
pub fn restart(state: &mut GameState) {
    *state = init_state(state.tuning.clone());
    log::info!("restarted");
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the game by one frame.
pub fn tick(state: &mut GameState, pad: &Pad, rng: &mut impl Rng) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase == GamePhase::Dead {
        if pad.is_pressed(Buttons::START) {
            restart(state);
            events.push(GameEvent::Restarted);
            events.extend(OPENING_EVENTS);
        }
        return events;
    }

    state.frame += 1;

    // ── 1. Timers ─────────────────────────────────────────────────────────────
    let expired = state.timers.tick();
    combat::resolve_respawn(state, expired, rng, &mut events);

    // ── 2. Player motion & door ───────────────────────────────────────────────
    motion::move_player(state, pad);
    if on_door(state) {
        enter_next_room(state, &mut events);
    }

    // ── 3. Attacks ────────────────────────────────────────────────────────────
    combat::fire_pulse(state, pad, &mut events);
    combat::resolve_pulse(state, &mut events);
    combat::fire_special(state, pad, &mut events);
    combat::launch_ki(state, pad, &mut events);
    combat::advance_ki(state, &mut events);

    // ── 4. Spirit motion ──────────────────────────────────────────────────────
    motion::move_spirit(state);

    // ── 5. Contacts ───────────────────────────────────────────────────────────
    combat::resolve_seal(state, &mut events);
    combat::resolve_contact(state, &mut events);

    events
}

// ── Room transition ──────────────────────────────────────────────────────────

/// Standing on the door tile in the back-wall row.
fn on_door(state: &GameState) -> bool {
    let pos = state.player.pos;
    let (_, door_row) = state.room.door_cell();
    state.room.tile_under(pos) == Tile::Door && room::cell_y(pos.y) == door_row as i32
}

fn enter_next_room(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.room_id += 1;
    state.room.rebuild();
    state.player.pos.y = PLAYER_ROOM_ENTRY_Y;
    state.player.knockback.cancel();

    state.spirit = Spirit {
        pos: SPIRIT_ROOM_ENTRY,
        active: true,
        knockback: Knockback::default(),
    };
    state.timers.spirit_stun.set(state.tuning.door_spirit_stun);
    state.timers.spirit_attack_cooldown.set(state.tuning.door_spirit_cooldown);
    state.timers.respawn_delay.clear();
    state.ki.active = false;

    log::info!("entered room {}", state.room_id);
    events.push(GameEvent::RoomEntered { room_id: state.room_id });
    events.push(GameEvent::RoomBuilt);
    events.push(GameEvent::StatusChanged);
}
