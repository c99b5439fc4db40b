use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Playback", inline)]
#[serde(default)]
/// Performance playback parameters.
pub struct PlaybackOptions {
    /// Phase accumulator increment per rendered frame. Cadence speed
    /// multiplies this, so visual speech tempo is controlled purely by the
    /// script's cadence table.
    #[schemars(title = "Frame Step", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub frame_step: f32,
}

impl Default for PlaybackOptions {
    fn default() -> Self {
        Self { frame_step: 0.08 }
    }
}
