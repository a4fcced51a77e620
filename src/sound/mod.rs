//! Sound playback for the expiry alarm.
//!
//! This module provides:
//!
//! - Tone synthesis and non-blocking playback through rodio
//! - A `SoundPlayer` trait so the timer engine can be tested without audio
//! - Graceful degradation when no audio device is present
//!
//! # Usage
//!
//! ```rust,no_run
//! use tabclock::sound::{RodioSoundPlayer, Tone};
//!
//! let player = RodioSoundPlayer::new().expect("audio init");
//! player.play(&Tone::alarm()).expect("playback failed");
//! ```

mod error;
mod player;
mod tone;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

pub use error::SoundError;
pub use player::{try_create_player, RodioSoundPlayer};
pub use tone::Tone;

/// Trait for sound playback implementations.
pub trait SoundPlayer {
    /// Plays a tone. Must not block until the tone ends.
    ///
    /// # Errors
    ///
    /// Returns an error if playback fails.
    fn play(&self, tone: &Tone) -> Result<(), SoundError>;
}

impl SoundPlayer for RodioSoundPlayer {
    fn play(&self, tone: &Tone) -> Result<(), SoundError> {
        RodioSoundPlayer::play(self, tone)
    }
}

/// Mock sound player for testing.
#[derive(Debug, Default)]
pub struct MockSoundPlayer {
    play_calls: Mutex<Vec<Tone>>,
    should_fail: AtomicBool,
}

impl MockSoundPlayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    #[must_use]
    pub fn play_count(&self) -> usize {
        self.play_calls.lock().unwrap().len()
    }

    #[must_use]
    pub fn get_play_calls(&self) -> Vec<Tone> {
        self.play_calls.lock().unwrap().clone()
    }
}

impl SoundPlayer for MockSoundPlayer {
    fn play(&self, tone: &Tone) -> Result<(), SoundError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(SoundError::PlaybackError("Mock failure".to_string()));
        }
        self.play_calls.lock().unwrap().push(*tone);
        Ok(())
    }
}
