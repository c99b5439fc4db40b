//! The engine's complete operator-facing vocabulary.
//!
//! Every external control — whether triggered by a UI button, key press, or
//! programmatic call — is represented as an [`EngineCommand`]. Consumers
//! construct commands and pass them to
//! [`PerformanceEngine::execute`](super::PerformanceEngine::execute). The
//! engine never cares *how* a command was triggered.

use glam::Vec2;

/// A discrete operation the engine can perform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngineCommand {
    /// Pause the performance clock, or resume it if already paused.
    ///
    /// Only meaningful during the main phase; ignored elsewhere.
    TogglePause,

    /// Restart the whole presentation from the top of the intro.
    ///
    /// Re-anchors every clock, snaps all blended parameters back to their
    /// initial values, and rewinds audio to position zero.
    Reset,

    /// Update the pointer-follow target.
    PointerMoved {
        /// Cursor position normalized to `[-1, 1]²`, +y up
        /// (see [`crate::input::normalize_pointer`]).
        position: Vec2,
    },
}
