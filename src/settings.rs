//! Presentation settings loaded from TOML.
//!
//! Only presentation is configurable. The guess range and attempt budget
//! are fixed by the game crate.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Upper limit on confetti particles per celebration.
const MAX_PARTICLES: u16 = 500;

/// Upper limit on every celebration timing, in milliseconds.
const MAX_TIMING_MS: u64 = 60_000;

/// Settings for the terminal and plain front ends.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// File the terminal UI writes its logs to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Redraw interval of the terminal UI, in milliseconds.
    #[serde(default = "default_tick_ms")]
    tick_ms: u64,

    /// Win celebration timing.
    #[serde(default)]
    celebration: CelebrationSettings,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_guess_tui.log")
}

fn default_tick_ms() -> u64 {
    50
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            tick_ms: default_tick_ms(),
            celebration: CelebrationSettings::default(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        debug!("Loading settings from file");

        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SettingsError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&contents)
            .map_err(|e| SettingsError::new(format!("Failed to parse settings TOML: {}", e)))?;

        settings.validate()?;
        info!(tick_ms = settings.tick_ms, "Settings loaded");
        Ok(settings)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Settings file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the log file destination.
    pub fn with_log_file(mut self, log_file: PathBuf) -> Self {
        self.log_file = log_file;
        self
    }

    /// Redraw interval as a [`Duration`].
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.tick_ms == 0 {
            return Err(SettingsError::new("tick_ms must be at least 1"));
        }
        if self.celebration.particles > MAX_PARTICLES {
            return Err(SettingsError::new(format!(
                "celebration.particles must be at most {}",
                MAX_PARTICLES
            )));
        }
        if self.celebration.min_fall_ms == 0 {
            return Err(SettingsError::new("celebration.min_fall_ms must be at least 1"));
        }
        let c = &self.celebration;
        for (key, value) in [
            ("spawn_interval_ms", c.spawn_interval_ms),
            ("max_delay_ms", c.max_delay_ms),
            ("min_fall_ms", c.min_fall_ms),
            ("fall_jitter_ms", c.fall_jitter_ms),
            ("lifetime_ms", c.lifetime_ms),
        ] {
            if value > MAX_TIMING_MS {
                return Err(SettingsError::new(format!(
                    "celebration.{} must be at most {}",
                    key, MAX_TIMING_MS
                )));
            }
        }
        Ok(())
    }
}

/// Timing of the confetti shown after a win.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct CelebrationSettings {
    /// Number of particles.
    particles: u16,
    /// Gap between consecutive particle spawns, in milliseconds.
    spawn_interval_ms: u64,
    /// Upper bound of the random start delay, in milliseconds.
    max_delay_ms: u64,
    /// Shortest fall, in milliseconds.
    min_fall_ms: u64,
    /// Random extra fall time, in milliseconds.
    fall_jitter_ms: u64,
    /// Time from spawn until a particle is removed, in milliseconds.
    lifetime_ms: u64,
}

impl Default for CelebrationSettings {
    fn default() -> Self {
        Self {
            particles: 50,
            spawn_interval_ms: 100,
            max_delay_ms: 2_000,
            min_fall_ms: 2_000,
            fall_jitter_ms: 2_000,
            lifetime_ms: 5_000,
        }
    }
}

/// Settings error.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
