//! Controller configuration with TOML preset support.
//!
//! All tweakable settings (control switches, orbit limits and reference
//! plane, camera projection) are consolidated here. Options serialize
//! to/from TOML so a host can ship presets alongside its scenes.

mod camera;
mod controls;
mod orbit;

use std::path::Path;

pub use camera::CameraOptions;
pub use controls::ControlOptions;
pub use orbit::OrbitOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::GestureError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[orbit]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Master enable and scroll-wheel switches.
    pub controls: ControlOptions,
    /// Pose limits, damping and reference plane.
    pub orbit: OrbitOptions,
    /// Camera projection parameters.
    pub camera: CameraOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Check every section for values the controller cannot honor.
    pub fn validate(&self) -> Result<(), GestureError> {
        self.orbit.validate()?;
        self.camera.validate()
    }

    /// Load and validate options from a TOML file. Missing fields use
    /// defaults.
    pub fn load(path: &Path) -> Result<Self, GestureError> {
        let content = std::fs::read_to_string(path).map_err(GestureError::Io)?;
        let options = Self::from_toml(&content)?;
        log::info!("Loaded gesture options from {}", path.display());
        Ok(options)
    }

    /// Parse and validate options from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, GestureError> {
        let options: Self = toml::from_str(content)
            .map_err(|e| GestureError::OptionsParse(e.to_string()))?;
        if let Err(e) = options.validate() {
            log::warn!("Rejected gesture options: {e}");
            return Err(e);
        }
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), GestureError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GestureError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(GestureError::Io)?;
        }
        std::fs::write(path, content).map_err(GestureError::Io)?;
        log::info!("Saved gesture options to {}", path.display());
        Ok(())
    }
}
