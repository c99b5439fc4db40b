//! The per-frame parameter snapshot handed to the rig adapter.

use crate::phase::Phase;

/// Immutable bundle of computed parameters for one rendered frame.
///
/// The engine makes no assumption about how the snapshot is consumed; the
/// rig adapter owns all visual interpretation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSnapshot {
    /// Jaw-open amount (0 closed, ~0.6 fully open while grinning).
    pub jaw_open: f32,
    /// Smoothed angry-eyebrow blend, 0 to 1.
    pub angry_blend: f32,
    /// Smoothed grin blend, 0 to 1.
    pub grin_blend: f32,
    /// Smoothed camera distance.
    pub camera_zoom: f32,
    /// Smoothed head yaw from pointer follow (radians).
    pub head_yaw: f32,
    /// Smoothed head pitch from pointer follow (radians).
    pub head_pitch: f32,
    /// Internal phase accumulator; drives speech oscillation and the rig's
    /// idle motion (breathing, bobbing, swaying).
    pub phase: f32,
    /// Performance clock reading in seconds.
    pub elapsed_seconds: f64,
    /// Current macro-phase of the presentation.
    pub phase_state: Phase,
}
