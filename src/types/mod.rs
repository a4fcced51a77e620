//! Core data types for the clock and countdown timer.
//!
//! This module defines the data structures used for:
//! - Display mode and clock settings
//! - Countdown phase and state transitions
//! - Expiry blink bookkeeping

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of highlight toggles performed by one expiry blink.
pub const BLINK_TOGGLES: u32 = 20;

// ============================================================================
// DisplayMode
// ============================================================================

/// Which of the two views is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// Live wall clock
    #[default]
    Clock,
    /// Countdown timer
    Timer,
}

impl DisplayMode {
    /// Returns the string representation of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Clock => "clock",
            DisplayMode::Timer => "timer",
        }
    }

    /// Returns the other mode.
    pub fn toggled(&self) -> Self {
        match self {
            DisplayMode::Clock => DisplayMode::Timer,
            DisplayMode::Timer => DisplayMode::Clock,
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// HourCycle / ClockSettings
// ============================================================================

/// Display convention for clock hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HourCycle {
    /// 12-hour clock with an AM/PM suffix
    #[default]
    TwelveHour,
    /// 24-hour clock, no suffix
    TwentyFourHour,
}

impl HourCycle {
    /// Returns the string representation of the hour cycle.
    pub fn as_str(&self) -> &'static str {
        match self {
            HourCycle::TwelveHour => "twelve_hour",
            HourCycle::TwentyFourHour => "twenty_four_hour",
        }
    }

    /// Short label used by the format controls.
    pub fn label(&self) -> &'static str {
        match self {
            HourCycle::TwelveHour => "AM/PM",
            HourCycle::TwentyFourHour => "24H",
        }
    }
}

/// Session-scoped clock settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClockSettings {
    pub hour_cycle: HourCycle,
}

// ============================================================================
// TimerPhase / ControlLabel
// ============================================================================

/// Current phase of the countdown timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerPhase {
    /// Armed from the input, waiting for start
    #[default]
    Idle,
    /// Counting down once per second
    Running,
    /// Countdown frozen by the stop action
    Paused,
    /// Countdown went past zero
    Expired,
}

impl TimerPhase {
    /// Returns the string representation of the phase.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerPhase::Idle => "idle",
            TimerPhase::Running => "running",
            TimerPhase::Paused => "paused",
            TimerPhase::Expired => "expired",
        }
    }

    /// Label shown on the start/stop control for this phase.
    pub fn control_label(&self) -> ControlLabel {
        match self {
            TimerPhase::Idle | TimerPhase::Expired => ControlLabel::Start,
            TimerPhase::Running => ControlLabel::Stop,
            TimerPhase::Paused => ControlLabel::Resume,
        }
    }

    /// Returns true if the duration input accepts edits in this phase.
    pub fn input_enabled(&self) -> bool {
        matches!(self, TimerPhase::Idle | TimerPhase::Expired)
    }
}

/// Text of the start/stop/resume control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlLabel {
    #[default]
    Start,
    Stop,
    Resume,
}

impl ControlLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlLabel::Start => "start",
            ControlLabel::Stop => "stop",
            ControlLabel::Resume => "resume",
        }
    }
}

impl fmt::Display for ControlLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// TimerState
// ============================================================================

/// Result of one countdown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still counting; carries the new remaining seconds
    Counting(u32),
    /// The tick would have gone below zero
    Expired,
}

/// Countdown state owned by the timer engine.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimerState {
    /// Current phase of the timer
    pub phase: TimerPhase,
    /// Seconds left on the countdown
    pub remaining_seconds: u32,
    /// Seconds the countdown was last armed with
    pub initial_seconds: u32,
}

impl TimerState {
    /// Creates an idle state armed with the given duration.
    pub fn new(seconds: u32) -> Self {
        Self {
            phase: TimerPhase::Idle,
            remaining_seconds: seconds,
            initial_seconds: seconds,
        }
    }

    /// Returns to Idle with a freshly armed duration.
    pub fn reset(&mut self, seconds: u32) {
        self.phase = TimerPhase::Idle;
        self.arm(seconds);
    }

    /// Arms a fresh countdown and starts running.
    pub fn start(&mut self, seconds: u32) {
        self.arm(seconds);
        self.phase = TimerPhase::Running;
    }

    /// Freezes a running countdown.
    ///
    /// Only works if the timer is currently running.
    pub fn pause(&mut self) {
        if self.phase == TimerPhase::Running {
            self.phase = TimerPhase::Paused;
        }
    }

    /// Continues a paused countdown from the frozen remaining value.
    pub fn resume(&mut self) {
        if self.phase == TimerPhase::Paused {
            self.phase = TimerPhase::Running;
        }
    }

    /// Decrements the countdown by one second.
    ///
    /// A tick taken at zero moves the state to Expired; `remaining_seconds`
    /// stays clamped at 0.
    pub fn tick(&mut self) -> TickOutcome {
        match self.remaining_seconds.checked_sub(1) {
            Some(remaining) => {
                self.remaining_seconds = remaining;
                TickOutcome::Counting(remaining)
            }
            None => {
                self.phase = TimerPhase::Expired;
                TickOutcome::Expired
            }
        }
    }

    /// Returns true if the countdown is actively running.
    pub fn is_running(&self) -> bool {
        self.phase == TimerPhase::Running
    }

    /// Returns true if the countdown is paused.
    pub fn is_paused(&self) -> bool {
        self.phase == TimerPhase::Paused
    }

    fn arm(&mut self, seconds: u32) {
        self.initial_seconds = seconds;
        self.remaining_seconds = seconds;
    }
}

// ============================================================================
// BlinkState
// ============================================================================

/// Highlight toggling that follows an expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlinkState {
    /// Whether the highlight is currently on
    pub active: bool,
    /// Toggles performed so far
    pub tick_count: u32,
}

impl BlinkState {
    /// Flips the highlight. Returns true once the blink has run its course.
    pub fn toggle(&mut self) -> bool {
        self.active = !self.active;
        self.tick_count += 1;
        self.is_finished()
    }

    pub fn is_finished(&self) -> bool {
        self.tick_count >= BLINK_TOGGLES
    }
}

// ============================================================================
// Tests
// ============================================================================
