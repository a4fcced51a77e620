//! Synthesized tone description.

use std::time::Duration;

/// A sine beep with a linear fade-in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    /// Pitch in Hz
    pub frequency_hz: f32,
    /// Peak amplitude reached after the fade-in (0.0-1.0)
    pub gain: f32,
    /// Length of the fade-in ramp from silence
    pub fade_in: Duration,
    /// Total length of the beep
    pub duration: Duration,
}

impl Tone {
    /// The expiry alarm: 800 Hz for one second, 10ms ramp up to 0.3 gain.
    pub const ALARM: Tone = Tone {
        frequency_hz: 800.0,
        gain: 0.3,
        fade_in: Duration::from_millis(10),
        duration: Duration::from_secs(1),
    };

    #[must_use]
    pub fn alarm() -> Self {
        Self::ALARM
    }
}
