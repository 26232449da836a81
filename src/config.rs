//! Tunable game constants.
//!
//! Defaults reproduce the classic game exactly. A TOML file may override any
//! subset of fields; missing fields fall back to the defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Largest window or sprite dimension accepted. Keeps the active area
/// (three windows wide) and spawn ranges well inside `i32`.
const MAX_DIMENSION: i32 = 100_000;
/// Largest player size accepted, so `size * size` cannot overflow.
const MAX_PLAYER_SIZE: i32 = 10_000;
/// Longest timer accepted, in seconds.
const MAX_TIMER_SECS: f64 = 3600.0;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Viewport width in world pixels.
    pub window_width: i32,
    /// Viewport height in world pixels.
    pub window_height: i32,
    pub fps: u32,

    /// How far the player's center may drift from the viewport center
    /// before the camera follows.
    pub camera_slack: i32,
    /// Pixels per frame per held direction.
    pub move_rate: i32,
    /// Frames in one player hop (larger is slower).
    pub bounce_rate: i32,
    /// Peak height of the player hop in pixels.
    pub bounce_height: i32,

    pub start_size: i32,
    /// Size the player must exceed to win.
    pub win_size: i32,
    pub max_health: i32,

    /// Seconds of invulnerability after taking damage.
    pub invuln_time: f64,
    /// Seconds the game-over banner stays up before a new round.
    pub game_over_time: f64,

    pub num_grass: usize,
    pub num_creatures: usize,
    pub creature_min_speed: i32,
    pub creature_max_speed: i32,
    /// Percent chance per creature per frame of picking a new heading.
    pub dir_change_freq: u32,

    pub grass_width: i32,
    pub grass_height: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: 640,
            window_height: 480,
            fps: 30,
            camera_slack: 90,
            move_rate: 9,
            bounce_rate: 6,
            bounce_height: 30,
            start_size: 50,
            win_size: 300,
            max_health: 3,
            invuln_time: 2.0,
            game_over_time: 4.0,
            num_grass: 80,
            num_creatures: 30,
            creature_min_speed: 3,
            creature_max_speed: 7,
            dir_change_freq: 2,
            grass_width: 32,
            grass_height: 32,
        }
    }
}

impl Config {
    pub fn half_width(&self) -> i32 {
        self.window_width / 2
    }

    pub fn half_height(&self) -> i32 {
        self.window_height / 2
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.fps as f64)
    }

    pub fn invuln_duration(&self) -> Duration {
        Duration::from_secs_f64(self.invuln_time)
    }

    pub fn game_over_duration(&self) -> Duration {
        Duration::from_secs_f64(self.game_over_time)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("window_width", self.window_width),
            ("window_height", self.window_height),
            ("move_rate", self.move_rate),
            ("bounce_rate", self.bounce_rate),
            ("start_size", self.start_size),
            ("win_size", self.win_size),
            ("max_health", self.max_health),
            ("creature_min_speed", self.creature_min_speed),
            ("grass_width", self.grass_width),
            ("grass_height", self.grass_height),
        ];
        for (name, value) in positive {
            if value <= 0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        let dimensions = [
            ("window_width", self.window_width),
            ("window_height", self.window_height),
            ("grass_width", self.grass_width),
            ("grass_height", self.grass_height),
            ("camera_slack", self.camera_slack),
            ("move_rate", self.move_rate),
            ("bounce_height", self.bounce_height),
            ("creature_max_speed", self.creature_max_speed),
        ];
        for (name, value) in dimensions {
            if value > MAX_DIMENSION {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be at most {MAX_DIMENSION}, got {value}"
                )));
            }
        }

        if self.start_size > MAX_PLAYER_SIZE || self.win_size > MAX_PLAYER_SIZE {
            return Err(ConfigError::Invalid(format!(
                "start_size and win_size must be at most {MAX_PLAYER_SIZE}"
            )));
        }

        if self.camera_slack < 0 || self.bounce_height < 0 {
            return Err(ConfigError::Invalid(
                "camera_slack and bounce_height must not be negative".to_string(),
            ));
        }

        if self.fps == 0 {
            return Err(ConfigError::Invalid("fps must be positive".to_string()));
        }

        if self.creature_min_speed > self.creature_max_speed {
            return Err(ConfigError::Invalid(format!(
                "creature_min_speed ({}) exceeds creature_max_speed ({})",
                self.creature_min_speed, self.creature_max_speed
            )));
        }

        if self.dir_change_freq > 100 {
            return Err(ConfigError::Invalid(format!(
                "dir_change_freq is a percentage, got {}",
                self.dir_change_freq
            )));
        }

        let timings = [self.invuln_time, self.game_over_time];
        if timings
            .iter()
            .any(|t| !t.is_finite() || *t <= 0.0 || *t > MAX_TIMER_SECS)
        {
            return Err(ConfigError::Invalid(format!(
                "invuln_time and game_over_time must be between 0 and {MAX_TIMER_SECS} seconds"
            )));
        }

        Ok(())
    }
}
