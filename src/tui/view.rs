//! Terminal view state and key mapping.
//!
//! [`View`] is the [`Surface`] the engines render into. It keeps the last
//! value pushed for every widget so the renderer can repaint the whole
//! screen, and it turns key presses into [`AppEvent`]s.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::engine::AppEvent;
use crate::surface::Surface;
use crate::types::{ControlLabel, DisplayMode, HourCycle};

/// Longest value the duration input accepts (`HH:MM`).
pub const INPUT_MAX_LEN: usize = 5;

/// Widget state mirrored from the engines.
#[derive(Debug, Clone, Default)]
pub struct View {
    pub mode: DisplayMode,
    pub clock_text: String,
    pub hour_cycle: HourCycle,
    pub timer_text: String,
    pub control_label: ControlLabel,
    pub input: String,
    pub input_enabled: bool,
    pub highlight: bool,
    /// Modal message, dismissed by any key
    pub notice: Option<String>,
    /// Pending input while the duration field is being edited
    pub editing: Option<String>,
}

impl View {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Maps a key press to an application event.
    ///
    /// Returns `None` when the key only changed local view state (notice
    /// dismissal, edit buffer) or is unbound.
    pub fn on_key(&mut self, key: KeyEvent) -> Option<AppEvent> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(AppEvent::Quit);
        }

        if self.notice.take().is_some() {
            return None;
        }

        if self.editing.is_some() {
            return self.on_edit_key(key);
        }

        match key.code {
            KeyCode::Char('q') => Some(AppEvent::Quit),
            KeyCode::Char('c') => Some(AppEvent::SelectMode(DisplayMode::Clock)),
            KeyCode::Char('t') => Some(AppEvent::SelectMode(DisplayMode::Timer)),
            KeyCode::Tab => Some(AppEvent::SelectMode(self.mode.toggled())),
            KeyCode::Char('a') => Some(AppEvent::SelectHourCycle(HourCycle::TwelveHour)),
            KeyCode::Char('h') => Some(AppEvent::SelectHourCycle(HourCycle::TwentyFourHour)),
            KeyCode::Char(' ') | KeyCode::Enter if self.mode == DisplayMode::Timer => {
                Some(AppEvent::ToggleStartStop)
            }
            KeyCode::Char('r') if self.mode == DisplayMode::Timer => Some(AppEvent::Reset),
            KeyCode::Char('e') if self.mode == DisplayMode::Timer && self.input_enabled => {
                self.editing = Some(self.input.clone());
                None
            }
            _ => None,
        }
    }

    fn on_edit_key(&mut self, key: KeyEvent) -> Option<AppEvent> {
        let buffer = self.editing.as_mut()?;
        match key.code {
            KeyCode::Char(ch) if ch.is_ascii_digit() || ch == ':' => {
                if buffer.len() < INPUT_MAX_LEN {
                    buffer.push(ch);
                }
                None
            }
            KeyCode::Backspace => {
                buffer.pop();
                None
            }
            KeyCode::Enter => self.editing.take().map(AppEvent::InputChanged),
            KeyCode::Esc => {
                self.editing = None;
                None
            }
            _ => None,
        }
    }
}

impl Surface for View {
    fn show_mode(&mut self, mode: DisplayMode) {
        self.mode = mode;
        self.editing = None;
    }

    fn set_clock_text(&mut self, text: &str) {
        self.clock_text = text.to_string();
    }

    fn set_hour_cycle(&mut self, cycle: HourCycle) {
        self.hour_cycle = cycle;
    }

    fn set_timer_text(&mut self, text: &str) {
        self.timer_text = text.to_string();
    }

    fn set_control_label(&mut self, label: ControlLabel) {
        self.control_label = label;
    }

    fn set_input(&mut self, value: &str, enabled: bool) {
        self.input = value.to_string();
        self.input_enabled = enabled;
        if !enabled {
            self.editing = None;
        }
    }

    fn set_highlight(&mut self, on: bool) {
        self.highlight = on;
    }

    fn show_notice(&mut self, message: &str) {
        self.notice = Some(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn timer_view() -> View {
        let mut view = View::new();
        view.show_mode(DisplayMode::Timer);
        view.set_input("00:05", true);
        view
    }

    mod key_tests {
        use super::*;

        #[test]
        fn test_quit_keys() {
            let mut view = View::new();
            assert_eq!(view.on_key(press(KeyCode::Char('q'))), Some(AppEvent::Quit));

            let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
            assert_eq!(view.on_key(ctrl_c), Some(AppEvent::Quit));
        }

        #[test]
        fn test_mode_keys() {
            let mut view = View::new();
            assert_eq!(
                view.on_key(press(KeyCode::Char('t'))),
                Some(AppEvent::SelectMode(DisplayMode::Timer))
            );
            assert_eq!(
                view.on_key(press(KeyCode::Char('c'))),
                Some(AppEvent::SelectMode(DisplayMode::Clock))
            );
            assert_eq!(
                view.on_key(press(KeyCode::Tab)),
                Some(AppEvent::SelectMode(DisplayMode::Timer))
            );
        }

        #[test]
        fn test_hour_cycle_keys() {
            let mut view = View::new();
            assert_eq!(
                view.on_key(press(KeyCode::Char('h'))),
                Some(AppEvent::SelectHourCycle(HourCycle::TwentyFourHour))
            );
            assert_eq!(
                view.on_key(press(KeyCode::Char('a'))),
                Some(AppEvent::SelectHourCycle(HourCycle::TwelveHour))
            );
        }

        #[test]
        fn test_timer_controls_only_in_timer_mode() {
            let mut view = View::new();
            assert_eq!(view.on_key(press(KeyCode::Char(' '))), None);
            assert_eq!(view.on_key(press(KeyCode::Char('r'))), None);

            let mut view = timer_view();
            assert_eq!(
                view.on_key(press(KeyCode::Char(' '))),
                Some(AppEvent::ToggleStartStop)
            );
            assert_eq!(view.on_key(press(KeyCode::Char('r'))), Some(AppEvent::Reset));
        }

        #[test]
        fn test_release_events_ignored() {
            let mut view = View::new();
            let mut key = press(KeyCode::Char('q'));
            key.kind = KeyEventKind::Release;
            assert_eq!(view.on_key(key), None);
        }

        #[test]
        fn test_notice_swallows_next_key() {
            let mut view = timer_view();
            view.show_notice("nope");

            assert_eq!(view.on_key(press(KeyCode::Char('q'))), None);
            assert!(view.notice.is_none());
            assert_eq!(view.on_key(press(KeyCode::Char('q'))), Some(AppEvent::Quit));
        }
    }

    mod edit_tests {
        use super::*;

        #[test]
        fn test_edit_and_commit() {
            let mut view = timer_view();
            assert_eq!(view.on_key(press(KeyCode::Char('e'))), None);
            assert!(view.is_editing());

            for _ in 0..5 {
                view.on_key(press(KeyCode::Backspace));
            }
            for ch in "01:30".chars() {
                view.on_key(press(KeyCode::Char(ch)));
            }
            assert_eq!(
                view.on_key(press(KeyCode::Enter)),
                Some(AppEvent::InputChanged("01:30".to_string()))
            );
            assert!(!view.is_editing());
        }

        #[test]
        fn test_edit_rejects_letters_and_overflow() {
            let mut view = timer_view();
            view.on_key(press(KeyCode::Char('e')));
            view.on_key(press(KeyCode::Char('x')));
            view.on_key(press(KeyCode::Char('9')));
            assert_eq!(view.editing.as_deref(), Some("00:05"));
        }

        #[test]
        fn test_escape_cancels_edit() {
            let mut view = timer_view();
            view.on_key(press(KeyCode::Char('e')));
            view.on_key(press(KeyCode::Backspace));
            assert_eq!(view.on_key(press(KeyCode::Esc)), None);
            assert!(!view.is_editing());
            assert_eq!(view.input, "00:05");
        }

        #[test]
        fn test_edit_keys_do_not_trigger_controls() {
            let mut view = timer_view();
            view.on_key(press(KeyCode::Char('e')));
            assert_eq!(view.on_key(press(KeyCode::Char('q'))), None);
            assert_eq!(view.on_key(press(KeyCode::Char('r'))), None);
        }

        #[test]
        fn test_cannot_edit_disabled_input() {
            let mut view = timer_view();
            view.set_input("00:05", false);
            view.on_key(press(KeyCode::Char('e')));
            assert!(!view.is_editing());
        }

        #[test]
        fn test_disabling_input_ends_edit() {
            let mut view = timer_view();
            view.on_key(press(KeyCode::Char('e')));
            view.set_input("00:05", false);
            assert!(!view.is_editing());
        }
    }
}
