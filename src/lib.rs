//! Spirit Seal - a single-room action game for a handheld-sized screen
//!
//! Core modules:
//! - `room`: tile map and collision probe
//! - `timers`: frame countdowns
//! - `motion`: per-axis actor movement and knockback
//! - `combat`: pulse, special, ki, seal and contact rules
//! - `compute`: the game state machine and per-frame tick
//! - `screen`: render services and the presentation pass
//! - `display`: crossterm implementation of the render services
//! - `host`: terminal key map and the fixed-rate frame loop

pub mod combat;
pub mod compute;
pub mod config;
pub mod display;
pub mod entities;
pub mod host;
pub mod input;
pub mod motion;
pub mod room;
pub mod screen;
pub mod timers;

pub use config::{Config, ConfigError, Tuning};
pub use entities::{GameEvent, GamePhase, GameState};
pub use input::{Buttons, Pad};
