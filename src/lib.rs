//! Tab Clock Library
//!
//! This library provides the core functionality for the Tab Clock widget.
//! It includes:
//! - Mode controller switching between the clock and the countdown timer
//! - Clock engine rendering wall-clock time in 12h or 24h format
//! - Timer engine with start/stop/resume/reset and the expiry alarm
//! - Presentation surface trait and the terminal frontend
//! - Sound playback for the expiry tone
//! - Configuration loading and CLI command parsing

pub mod cli;
pub mod config;
pub mod engine;
pub mod sound;
pub mod surface;
pub mod tui;
pub mod types;

// Re-export commonly used types for convenience
pub use config::{AppConfig, ConfigError};
pub use engine::{App, AppEvent, FixedClock, SystemClock, TimerError, WallClock};
pub use surface::{MockSurface, Surface};
pub use types::{ControlLabel, DisplayMode, HourCycle, TimerPhase, TimerState};

// Re-export sound types
pub use sound::{MockSoundPlayer, RodioSoundPlayer, SoundError, SoundPlayer, Tone};
