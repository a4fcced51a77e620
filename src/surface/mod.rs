//! Presentation surface capabilities.
//!
//! The engines never draw anything themselves; they push formatted text and
//! state flags through the [`Surface`] trait. The terminal frontend is one
//! implementation, [`MockSurface`] records everything for tests.

use crate::types::{ControlLabel, DisplayMode, HourCycle};

/// Write-only view the engines render into.
pub trait Surface {
    /// Shows the view for `mode`, hides the other and marks its tab active.
    fn show_mode(&mut self, mode: DisplayMode);

    /// Replaces the clock display text.
    fn set_clock_text(&mut self, text: &str);

    /// Marks exactly one of the two clock format controls active.
    fn set_hour_cycle(&mut self, cycle: HourCycle);

    /// Replaces the timer display text.
    fn set_timer_text(&mut self, text: &str);

    /// Sets the start/stop/resume control label.
    fn set_control_label(&mut self, label: ControlLabel);

    /// Shows the duration input value and whether it accepts edits.
    fn set_input(&mut self, value: &str, enabled: bool);

    /// Turns the expiry highlight on or off.
    fn set_highlight(&mut self, on: bool);

    /// Shows a blocking notice to the user.
    fn show_notice(&mut self, message: &str);
}

/// Surface that records every call for assertions.
#[derive(Debug, Clone, Default)]
pub struct MockSurface {
    pub mode: Option<DisplayMode>,
    pub clock_text: String,
    pub clock_renders: usize,
    pub hour_cycle: Option<HourCycle>,
    pub timer_text: String,
    pub control_label: Option<ControlLabel>,
    pub input: String,
    pub input_enabled: bool,
    pub highlight: bool,
    /// Every `set_highlight` call in order
    pub highlight_calls: Vec<bool>,
    pub notices: Vec<String>,
}

impl MockSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times the highlight was switched on.
    #[must_use]
    pub fn highlight_on_count(&self) -> usize {
        self.highlight_calls.iter().filter(|on| **on).count()
    }

    pub fn clear_highlight_calls(&mut self) {
        self.highlight_calls.clear();
    }
}

impl Surface for MockSurface {
    fn show_mode(&mut self, mode: DisplayMode) {
        self.mode = Some(mode);
    }

    fn set_clock_text(&mut self, text: &str) {
        self.clock_text = text.to_string();
        self.clock_renders += 1;
    }

    fn set_hour_cycle(&mut self, cycle: HourCycle) {
        self.hour_cycle = Some(cycle);
    }

    fn set_timer_text(&mut self, text: &str) {
        self.timer_text = text.to_string();
    }

    fn set_control_label(&mut self, label: ControlLabel) {
        self.control_label = Some(label);
    }

    fn set_input(&mut self, value: &str, enabled: bool) {
        self.input = value.to_string();
        self.input_enabled = enabled;
    }

    fn set_highlight(&mut self, on: bool) {
        self.highlight = on;
        self.highlight_calls.push(on);
    }

    fn show_notice(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_records_text() {
        let mut surface = MockSurface::new();
        surface.set_clock_text("12:00:00 AM");
        surface.set_clock_text("12:00:01 AM");
        surface.set_timer_text("05:00");

        assert_eq!(surface.clock_text, "12:00:01 AM");
        assert_eq!(surface.clock_renders, 2);
        assert_eq!(surface.timer_text, "05:00");
    }

    #[test]
    fn test_mock_records_highlight_calls() {
        let mut surface = MockSurface::new();
        surface.set_highlight(true);
        surface.set_highlight(false);
        surface.set_highlight(true);

        assert!(surface.highlight);
        assert_eq!(surface.highlight_on_count(), 2);

        surface.clear_highlight_calls();
        assert!(surface.highlight_calls.is_empty());
    }

    #[test]
    fn test_mock_records_input_and_notices() {
        let mut surface = MockSurface::new();
        surface.set_input("00:05", false);
        surface.show_notice("hello");

        assert_eq!(surface.input, "00:05");
        assert!(!surface.input_enabled);
        assert_eq!(surface.notices, vec!["hello".to_string()]);
    }
}
