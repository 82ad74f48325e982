use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Master switches for the gesture classifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Controls", inline)]
#[serde(default)]
pub struct ControlOptions {
    /// When false every input handler is a no-op.
    #[schemars(title = "Enabled")]
    pub enabled: bool,
    /// Whether the scroll wheel zooms the camera.
    #[schemars(title = "Scroll Wheel Zoom")]
    pub scroll_wheel_zoom: bool,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            scroll_wheel_zoom: true,
        }
    }
}
