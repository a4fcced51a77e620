//! Time formatting and duration input parsing.

use chrono::{NaiveTime, Timelike};

use crate::types::HourCycle;

/// Duration entered in the `HH:MM` input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerInput {
    pub hours: u32,
    pub minutes: u32,
}

impl TimerInput {
    pub fn total_seconds(&self) -> u32 {
        self.hours * 3600 + self.minutes * 60
    }
}

/// Parses an `HH:MM` duration.
///
/// Hours are 0-23 and minutes 0-59, one or two digits each. Returns `None`
/// for anything else.
pub fn parse_timer_input(input: &str) -> Option<TimerInput> {
    let (hours, minutes) = input.trim().split_once(':')?;
    let hours = parse_field(hours, 23)?;
    let minutes = parse_field(minutes, 59)?;
    Some(TimerInput { hours, minutes })
}

/// Seconds armed from the input field; malformed text counts as zero.
pub fn input_seconds(input: &str) -> u32 {
    parse_timer_input(input).map_or(0, |parsed| parsed.total_seconds())
}

fn parse_field(field: &str, max: u32) -> Option<u32> {
    if field.is_empty() || field.len() > 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok().filter(|value| *value <= max)
}

/// Formats a countdown as `MM:SS`, or `HH:MM:SS` when hours are nonzero.
pub fn format_countdown(total_seconds: u32) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

/// Formats a wall-clock time as `HH:MM:SS`, with ` AM`/` PM` in 12-hour mode.
pub fn format_clock(time: NaiveTime, cycle: HourCycle) -> String {
    let hour = time.hour();
    let (hour, suffix) = match cycle {
        HourCycle::TwentyFourHour => (hour, ""),
        HourCycle::TwelveHour => {
            let suffix = if hour >= 12 { " PM" } else { " AM" };
            match hour % 12 {
                0 => (12, suffix),
                h => (h, suffix),
            }
        }
    };

    format!(
        "{:02}:{:02}:{:02}{}",
        hour,
        time.minute(),
        time.second(),
        suffix
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    mod countdown_tests {
        use super::*;

        #[test]
        fn test_minutes_and_seconds_only() {
            assert_eq!(format_countdown(0), "00:00");
            assert_eq!(format_countdown(59), "00:59");
            assert_eq!(format_countdown(299), "04:59");
            assert_eq!(format_countdown(3599), "59:59");
        }

        #[test]
        fn test_hours_shown_when_nonzero() {
            assert_eq!(format_countdown(3600), "01:00:00");
            assert_eq!(format_countdown(3 * 3600 + 7 * 60 + 9), "03:07:09");
            assert_eq!(format_countdown(23 * 3600 + 59 * 60), "23:59:00");
        }

        #[test]
        fn test_layout_matches_components() {
            for h in [0u32, 1, 12, 99] {
                for m in [0u32, 9, 59] {
                    for s in [0u32, 30, 59] {
                        let text = format_countdown(h * 3600 + m * 60 + s);
                        let expected = if h > 0 {
                            format!("{:02}:{:02}:{:02}", h, m, s)
                        } else {
                            format!("{:02}:{:02}", m, s)
                        };
                        assert_eq!(text, expected);
                    }
                }
            }
        }
    }

    mod clock_tests {
        use super::*;

        #[test]
        fn test_midnight_twelve_hour() {
            assert_eq!(format_clock(at(0, 5, 9), HourCycle::TwelveHour), "12:05:09 AM");
        }

        #[test]
        fn test_noon_twelve_hour() {
            assert_eq!(format_clock(at(12, 0, 0), HourCycle::TwelveHour), "12:00:00 PM");
        }

        #[test]
        fn test_afternoon_twelve_hour() {
            assert_eq!(format_clock(at(13, 30, 1), HourCycle::TwelveHour), "01:30:01 PM");
            assert_eq!(format_clock(at(23, 59, 59), HourCycle::TwelveHour), "11:59:59 PM");
        }

        #[test]
        fn test_morning_twelve_hour() {
            assert_eq!(format_clock(at(9, 8, 7), HourCycle::TwelveHour), "09:08:07 AM");
        }

        #[test]
        fn test_twenty_four_hour_has_no_suffix() {
            assert_eq!(format_clock(at(0, 0, 0), HourCycle::TwentyFourHour), "00:00:00");
            assert_eq!(format_clock(at(13, 4, 5), HourCycle::TwentyFourHour), "13:04:05");
        }
    }

    mod parse_tests {
        use super::*;

        #[test]
        fn test_parse_valid() {
            assert_eq!(
                parse_timer_input("00:05"),
                Some(TimerInput { hours: 0, minutes: 5 })
            );
            assert_eq!(
                parse_timer_input("1:30"),
                Some(TimerInput { hours: 1, minutes: 30 })
            );
            assert_eq!(parse_timer_input(" 23:59 ").map(|i| i.total_seconds()), Some(86_340));
        }

        #[test]
        fn test_parse_rejects_malformed() {
            let malformed = [
                "", ":", "5", "00:", ":05", "aa:bb", "00:60", "24:00", "000:05", "-1:05",
                "00:05:00",
            ];
            for input in malformed {
                assert_eq!(parse_timer_input(input), None, "input {:?}", input);
            }
        }

        #[test]
        fn test_input_seconds() {
            assert_eq!(input_seconds("00:05"), 300);
            assert_eq!(input_seconds("01:00"), 3600);
            assert_eq!(input_seconds("00:00"), 0);
            assert_eq!(input_seconds("garbage"), 0);
        }
    }
}
