//! Audio collaborator contract.
//!
//! The engine does not decode or buffer audio; it only tells an external
//! player when the performance starts, pauses, and rewinds. Playback
//! failures are the host environment's business — the engine logs them and
//! the performance proceeds silently, never desynchronizing the timeline.

use std::fmt;

/// Failure reported by an audio sink.
#[derive(Debug, Clone)]
pub struct AudioError(String);

impl AudioError {
    /// Wrap a host playback failure message.
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "audio playback failure: {}", self.0)
    }
}

impl std::error::Error for AudioError {}

/// External audio player reacting to performance transitions.
pub trait AudioSink {
    /// Begin (or continue) playback.
    fn play(&mut self) -> Result<(), AudioError>;

    /// Pause playback, keeping position.
    fn pause(&mut self) -> Result<(), AudioError>;

    /// Rewind to position zero.
    fn rewind(&mut self) -> Result<(), AudioError>;
}

/// Sink that does nothing; useful for headless runs and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self) -> Result<(), AudioError> {
        Ok(())
    }

    fn pause(&mut self) -> Result<(), AudioError> {
        Ok(())
    }

    fn rewind(&mut self) -> Result<(), AudioError> {
        Ok(())
    }
}
