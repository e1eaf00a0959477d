/// Tuning values and host settings.
///
/// Everything here has a built-in default; a JSON file only needs to name the
/// fields it overrides.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound for the effect radii.  Wider than the room's diagonal.
pub const MAX_RADIUS: i32 = 512;

/// Environment variable naming a config file when `--config` is not given.
pub const CONFIG_ENV: &str = "SPIRIT_SEAL_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Gameplay numbers.  Durations are in frames, distances in pixels, speeds in
/// pixels per frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub max_hp: u32,

    // === New game / restart grace ===
    pub start_invincibility: u32,
    pub start_spirit_stun: u32,
    pub start_spirit_cooldown: u32,

    // === Spirit contact ===
    pub hit_invincibility: u32,
    pub hit_knockback_speed: i32,
    pub hit_knockback_frames: u32,
    /// Spirit AI pause after it lands a hit.
    pub spirit_attack_cooldown: u32,
    pub spirit_hit_stun: u32,
    /// Frames between spirit AI steps.  The player moves every frame.
    pub spirit_step_interval: u32,

    // === Area pulse ===
    pub pulse_cooldown: u32,
    pub pulse_window: u32,
    pub pulse_radius: i32,
    pub pulse_knockback_speed: i32,
    pub pulse_knockback_frames: u32,
    pub pulse_stun: u32,

    // === Special move ===
    pub special_cooldown: u32,
    pub special_window: u32,
    pub special_radius: i32,
    pub special_knockback_speed: i32,
    pub special_knockback_frames: u32,
    pub special_stun: u32,

    // === Ki ===
    pub ki_speed: i32,

    // === Spirit lifecycle ===
    pub respawn_delay: u32,
    pub respawn_stun: u32,
    pub respawn_cooldown: u32,
    /// Stun applied when the spirit is reset on entering a new room.
    pub door_spirit_stun: u32,
    pub door_spirit_cooldown: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            max_hp: 3,

            start_invincibility: 30,
            start_spirit_stun: 30,
            start_spirit_cooldown: 30,

            hit_invincibility: 75,
            hit_knockback_speed: 3,
            hit_knockback_frames: 14,
            spirit_attack_cooldown: 30,
            spirit_hit_stun: 10,
            spirit_step_interval: 3,

            pulse_cooldown: 90,
            pulse_window: 10,
            pulse_radius: 20,
            pulse_knockback_speed: 3,
            pulse_knockback_frames: 8,
            pulse_stun: 25,

            special_cooldown: 240,
            special_window: 20,
            special_radius: 40,
            special_knockback_speed: 5,
            special_knockback_frames: 12,
            special_stun: 60,

            ki_speed: 2,

            respawn_delay: 120,
            respawn_stun: 30,
            respawn_cooldown: 30,
            door_spirit_stun: 20,
            door_spirit_cooldown: 30,
        }
    }
}

/// Host settings plus the gameplay tuning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fixed frame period in milliseconds.
    pub frame_ms: u64,
    /// A key counts as held if its last press/repeat arrived within this many
    /// frames.  Covers terminals that never report key releases.
    pub hold_window: u64,
    pub tuning: Tuning,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frame_ms: 16,
            hold_window: 8,
            tuning: Tuning::default(),
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject values the frame loop cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.tuning;
        if self.frame_ms == 0 {
            return Err(ConfigError::Invalid("frame_ms must be at least 1".into()));
        }
        if t.max_hp == 0 {
            return Err(ConfigError::Invalid("max_hp must be at least 1".into()));
        }
        if t.ki_speed <= 0 {
            return Err(ConfigError::Invalid("ki_speed must be positive".into()));
        }
        if t.respawn_delay == 0 {
            return Err(ConfigError::Invalid("respawn_delay must be at least 1".into()));
        }
        if t.pulse_radius < 0 {
            return Err(ConfigError::Invalid("pulse_radius must not be negative".into()));
        }
        if t.special_radius > MAX_RADIUS {
            return Err(ConfigError::Invalid(format!(
                "special_radius must not exceed {MAX_RADIUS}"
            )));
        }
        if t.special_radius <= t.pulse_radius {
            return Err(ConfigError::Invalid(format!(
                "special_radius ({}) must exceed pulse_radius ({})",
                t.special_radius, t.pulse_radius
            )));
        }
        Ok(())
    }

    pub fn frame(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }
}
