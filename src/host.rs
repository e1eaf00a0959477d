/// Terminal host: key map, input draining and the fixed-rate frame loop.
///
/// Key events arrive on a channel fed by a dedicated reader thread.  Each
/// frame drains whatever is pending, turns the keys seen recently into a
/// `Pad`, runs one `tick` and renders.

use std::collections::HashMap;
use std::io::Write;
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::thread_rng;

use crate::compute::{init_state, tick, OPENING_EVENTS};
use crate::config::Config;
use crate::display::{self, TerminalScreen};
use crate::input::{Buttons, Pad};
use crate::screen::present;

// ── Key map ───────────────────────────────────────────────────────────────────

/// Logical buttons driven by a terminal key.
pub fn button_for(code: &KeyCode) -> Buttons {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Buttons::UP,
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Buttons::DOWN,
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Buttons::LEFT,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Buttons::RIGHT,
        KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('z') | KeyCode::Char('Z') => {
            Buttons::A
        }
        KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('x') | KeyCode::Char('X') => {
            Buttons::B
        }
        KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('c') | KeyCode::Char('C')
        | KeyCode::Tab => Buttons::SELECT,
        KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => Buttons::START,
        _ => Buttons::NONE,
    }
}

/// Buttons whose key was seen within the last `hold_window` frames.
///
/// Terminals without key-release reporting only send repeated presses while a
/// key is down, so a key stays held as long as repeats keep arriving.
pub fn held_buttons(key_frame: &HashMap<KeyCode, u64>, frame: u64, hold_window: u64) -> Buttons {
    let mut held = Buttons::NONE;
    for (code, &last) in key_frame {
        if frame.saturating_sub(last) <= hold_window {
            held |= button_for(code);
        }
    }
    held
}

// ── Input draining ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Drain every pending event without blocking.  Non-key events are skipped.
/// Stops early with `Flow::Quit` on q, Esc or Ctrl-C.
pub fn drain_keys(
    rx: &mpsc::Receiver<Event>,
    key_frame: &mut HashMap<KeyCode, u64>,
    frame: u64,
) -> Flow {
    while let Ok(ev) = rx.try_recv() {
        let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev else {
            continue;
        };
        match kind {
            KeyEventKind::Press => {
                match code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Flow::Quit,
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        return Flow::Quit;
                    }
                    _ => {}
                }
                key_frame.insert(code, frame);
            }
            KeyEventKind::Repeat => {
                key_frame.insert(code, frame);
            }
            KeyEventKind::Release => {
                key_frame.remove(&code);
            }
        }
    }
    Flow::Continue
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
pub fn game_loop<W: Write>(
    out: &mut W,
    config: &Config,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let mut rng = thread_rng();
    let mut state = init_state(config.tuning.clone());
    let mut screen = TerminalScreen::new();
    let mut pad = Pad::new();

    present(&state, &OPENING_EVENTS, &mut screen);
    display::render(out, &screen)?;

    // Maps each held key → the frame it was last seen (press or repeat).
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;
    let frame_period = config.frame();

    loop {
        let frame_start = Instant::now();
        frame += 1;

        if drain_keys(rx, &mut key_frame, frame) == Flow::Quit {
            return Ok(());
        }

        pad.update(held_buttons(&key_frame, frame, config.hold_window));
        let events = tick(&mut state, &pad, &mut rng);
        present(&state, &events, &mut screen);
        display::render(out, &screen)?;

        // Wait out the rest of the frame: the loop's only suspension point.
        let elapsed = frame_start.elapsed();
        if elapsed < frame_period {
            thread::sleep(frame_period - elapsed);
        }
    }
}

/// Everything between entering and leaving raw mode.  Errors are returned,
/// never short-circuited past the caller's terminal restore.
pub fn run<W: Write>(
    out: &mut W,
    config: &Config,
    keyboard_enhanced: &mut bool,
) -> std::io::Result<()> {
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Key-release events let held buttons end precisely; terminals without
    // the kitty protocol fall back to the hold window.
    *keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break;
            }
        }
    });

    game_loop(out, config, &rx)
}
