//! Events consumed by the application loop.
//!
//! User interactions from the frontend and ticks from scheduled tasks share
//! one channel, so every transition runs to completion before the next one
//! starts.

use std::fmt;

use crate::types::{DisplayMode, HourCycle};

use super::schedule::Tick;

/// Everything the application reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A mode tab was selected
    SelectMode(DisplayMode),
    /// One of the clock format controls was selected
    SelectHourCycle(HourCycle),
    /// The start/stop/resume control was pressed
    ToggleStartStop,
    /// The reset control was pressed
    Reset,
    /// The duration input was committed with a new value
    InputChanged(String),
    /// A scheduled task fired
    Tick(Tick),
    /// The user asked to leave
    Quit,
}

impl AppEvent {
    /// Returns true for events produced by user interaction.
    pub fn is_user_action(&self) -> bool {
        !matches!(self, AppEvent::Tick(_))
    }
}

impl fmt::Display for AppEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppEvent::SelectMode(mode) => write!(f, "select mode {}", mode),
            AppEvent::SelectHourCycle(cycle) => write!(f, "select {}", cycle.label()),
            AppEvent::ToggleStartStop => write!(f, "start/stop"),
            AppEvent::Reset => write!(f, "reset"),
            AppEvent::InputChanged(value) => write!(f, "input {:?}", value),
            AppEvent::Tick(tick) => write!(f, "tick {:?}", tick.kind),
            AppEvent::Quit => write!(f, "quit"),
        }
    }
}
