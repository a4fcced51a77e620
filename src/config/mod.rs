//! Application configuration.
//!
//! Settings come from, in increasing priority: built-in defaults, a JSON
//! file, and command-line flags. The file is either given explicitly with
//! `--config` or looked up in the platform config directory
//! (`<config_dir>/tabclock/config.json`), where it is optional.
//!
//! ```
//! use tabclock::config::AppConfig;
//! use tabclock::types::HourCycle;
//!
//! let config = AppConfig::from_json(r#"{"hour_cycle": "twenty_four_hour"}"#).unwrap();
//! assert_eq!(config.hour_cycle, HourCycle::TwentyFourHour);
//! assert_eq!(config.timer_input, "00:05");
//! ```

mod error;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::parse_timer_input;
use crate::types::{DisplayMode, HourCycle};

pub use error::ConfigError;

/// Directory name under the platform config dir.
pub const APP_DIR_NAME: &str = "tabclock";

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default duration input (five minutes).
pub const DEFAULT_TIMER_INPUT: &str = "00:05";

fn default_timer_input() -> String {
    DEFAULT_TIMER_INPUT.to_string()
}

fn default_sound() -> bool {
    true
}

/// Startup settings for the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Initial clock format.
    #[serde(default)]
    pub hour_cycle: HourCycle,

    /// View shown at startup.
    #[serde(default)]
    pub start_mode: DisplayMode,

    /// Initial `HH:MM` value of the duration input.
    #[serde(default = "default_timer_input")]
    pub timer_input: String,

    /// Whether the expiry alarm makes a sound.
    #[serde(default = "default_sound")]
    pub sound: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            hour_cycle: HourCycle::default(),
            start_mode: DisplayMode::default(),
            timer_input: default_timer_input(),
            sound: default_sound(),
        }
    }
}

impl AppConfig {
    pub fn with_hour_cycle(mut self, cycle: HourCycle) -> Self {
        self.hour_cycle = cycle;
        self
    }

    pub fn with_start_mode(mut self, mode: DisplayMode) -> Self {
        self.start_mode = mode;
        self
    }

    pub fn with_timer_input(mut self, input: impl Into<String>) -> Self {
        self.timer_input = input.into();
        self
    }

    pub fn with_sound(mut self, sound: bool) -> Self {
        self.sound = sound;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidTimerInput` if `timer_input` is not `HH:MM`.
    /// `"00:00"` is accepted; starting such a timer is rejected later.
    pub fn validate(&self) -> Result<(), ConfigError> {
        parse_timer_input(&self.timer_input)
            .map(|_| ())
            .ok_or_else(|| ConfigError::InvalidTimerInput(self.timer_input.clone()))
    }

    /// Parses and validates configuration JSON. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or fails validation.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is invalid.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Loaded config file");
        Self::from_json(&json)
    }

    /// Loads `explicit` if given, otherwise the default file if it exists,
    /// otherwise the built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit file is missing, or if any file that
    /// is read is invalid.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::load_from(&path),
            _ => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Default config file location, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }
}
