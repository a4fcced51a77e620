//! Sound player implementation using rodio.
//!
//! This module provides the `RodioSoundPlayer`, which synthesizes tones with
//! rodio's sine generator and plays them on a detached sink.

use std::sync::Arc;

use rodio::source::SineWave;
use rodio::{OutputStream, OutputStreamHandle, Sink, Source};
use tracing::{debug, warn};

use super::error::SoundError;
use super::tone::Tone;

/// A sound player that uses rodio for audio playback.
///
/// Playback is non-blocking; a tone keeps sounding after `play` returns.
pub struct RodioSoundPlayer {
    /// The audio output stream (must be kept alive for playback).
    _stream: OutputStream,
    /// Handle to the output stream for creating sinks.
    stream_handle: OutputStreamHandle,
}

impl RodioSoundPlayer {
    /// Opens the default audio output.
    ///
    /// # Errors
    ///
    /// Returns `SoundError::DeviceNotAvailable` if no audio output device
    /// is available.
    pub fn new() -> Result<Self, SoundError> {
        let (stream, stream_handle) = OutputStream::try_default()
            .map_err(|e| SoundError::DeviceNotAvailable(e.to_string()))?;

        debug!("Audio output stream initialized");

        Ok(Self {
            _stream: stream,
            stream_handle,
        })
    }

    /// Plays a tone.
    ///
    /// # Errors
    ///
    /// Returns `SoundError::StreamError` if no sink can be attached to the
    /// output stream.
    pub fn play(&self, tone: &Tone) -> Result<(), SoundError> {
        let source = SineWave::new(tone.frequency_hz)
            .take_duration(tone.duration)
            .fade_in(tone.fade_in)
            .amplify(tone.gain);

        let sink = Sink::try_new(&self.stream_handle)
            .map_err(|e| SoundError::StreamError(e.to_string()))?;

        sink.append(source);
        sink.detach(); // Non-blocking: tone continues after function returns

        debug!(frequency = tone.frequency_hz, "Tone playback started (detached)");
        Ok(())
    }
}

impl std::fmt::Debug for RodioSoundPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RodioSoundPlayer").finish_non_exhaustive()
    }
}

/// Creates a sound player, returning None if audio is unavailable.
///
/// If audio initialization fails, a warning is logged and None is returned.
#[must_use]
pub fn try_create_player() -> Option<Arc<RodioSoundPlayer>> {
    match RodioSoundPlayer::new() {
        Ok(player) => Some(Arc::new(player)),
        Err(e) => {
            warn!("Audio not available, alarm will be silent: {} ({})", e, e.suggestion());
            None
        }
    }
}
