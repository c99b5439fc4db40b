use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Smoothing", inline)]
#[serde(default)]
/// Per-frame exponential smoothing coefficients.
///
/// Each coefficient is the fraction of the remaining distance to a target
/// closed per rendered frame. Coefficients are frame-coupled (applied once
/// per frame, not per unit time); hosts running far from the reference
/// refresh rate can compensate here.
pub struct SmoothingOptions {
    /// Approach rate for the angry/grin emotion blends.
    #[schemars(title = "Emotion", range(min = 0.005, max = 1.0), extend("step" = 0.005))]
    pub emotion: f32,
    /// Approach rate for the camera zoom.
    #[schemars(title = "Zoom", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub zoom: f32,
    /// Approach rate for pointer-follow head rotation.
    #[schemars(title = "Follow", range(min = 0.005, max = 1.0), extend("step" = 0.005))]
    pub follow: f32,
    /// Pointer-x to head-yaw scale.
    #[schemars(skip)]
    pub follow_yaw_scale: f32,
    /// Pointer-y to head-pitch scale.
    #[schemars(skip)]
    pub follow_pitch_scale: f32,
}

impl Default for SmoothingOptions {
    fn default() -> Self {
        Self {
            emotion: 0.03,
            zoom: 0.1,
            follow: 0.03,
            follow_yaw_scale: 0.25,
            follow_pitch_scale: 0.15,
        }
    }
}
