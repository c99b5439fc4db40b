use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera zoom schedule parameters.
///
/// The zoom target is a three-segment schedule on absolute performance time:
/// `default_zoom` outside the window, a linear ramp in over
/// `[zoom_in_start, zoom_in_end)`, a hold at `close_zoom`, and a linear ramp
/// back out over `[zoom_out_start, zoom_out_end)`.
pub struct CameraOptions {
    /// Resting camera distance.
    #[schemars(title = "Default Zoom", range(min = 4.0, max = 30.0), extend("step" = 0.5))]
    pub default_zoom: f32,
    /// Close-up camera distance held through the zoom window.
    #[schemars(title = "Close Zoom", range(min = 2.0, max = 20.0), extend("step" = 0.5))]
    pub close_zoom: f32,
    /// Performance time the zoom-in ramp begins.
    #[schemars(skip)]
    pub zoom_in_start: f32,
    /// Performance time the zoom-in ramp completes.
    #[schemars(skip)]
    pub zoom_in_end: f32,
    /// Performance time the zoom-out ramp begins.
    #[schemars(skip)]
    pub zoom_out_start: f32,
    /// Performance time the zoom-out ramp completes.
    #[schemars(skip)]
    pub zoom_out_end: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            default_zoom: 10.5,
            close_zoom: 6.5,
            zoom_in_start: 80.0,
            zoom_in_end: 82.0,
            zoom_out_start: 90.0,
            zoom_out_end: 92.0,
        }
    }
}
