//! Centralized engine tuning options with TOML preset support.
//!
//! All tweakable settings (playback tempo, smoothing coefficients, the
//! camera zoom schedule) are consolidated here. Options serialize to/from
//! TOML; partial files fill missing fields with defaults.

mod camera;
mod playback;
mod smoothing;

use std::path::Path;

pub use camera::CameraOptions;
pub use playback::PlaybackOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use smoothing::SmoothingOptions;

use crate::error::OrationError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[smoothing]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Performance playback parameters.
    pub playback: PlaybackOptions,
    /// Per-frame smoothing coefficients.
    pub smoothing: SmoothingOptions,
    /// Camera zoom schedule parameters.
    pub camera: CameraOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, OrationError> {
        let content = std::fs::read_to_string(path).map_err(OrationError::Io)?;
        toml::from_str(&content)
            .map_err(|e| OrationError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), OrationError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| OrationError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(OrationError::Io)?;
        }
        std::fs::write(path, content).map_err(OrationError::Io)
    }
}
