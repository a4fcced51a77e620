//! Display utilities for the Tab Clock CLI.
//!
//! This module provides formatted output for:
//! - Error messages
//! - One-shot clock output

use chrono::NaiveTime;

use crate::engine::format_clock;
use crate::types::HourCycle;

// ============================================================================
// Display
// ============================================================================

/// Display utilities for CLI output.
pub struct Display;

impl Display {
    /// Prints the given time in the requested format.
    pub fn show_clock(time: NaiveTime, cycle: HourCycle) {
        println!("{}", Self::clock_line(time, cycle));
    }

    /// Shows an error message.
    pub fn show_error(message: &str) {
        eprintln!("error: {}", message);
    }

    fn clock_line(time: NaiveTime, cycle: HourCycle) -> String {
        format_clock(time, cycle)
    }
}

// ============================================================================
// Tests
// ============================================================================
