//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid configuration JSON.
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// `timer_input` is not an `HH:MM` duration.
    #[error("invalid timer_input {0:?}: expected HH:MM (00:00-23:59)")]
    InvalidTimerInput(String),
}
