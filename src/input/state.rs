use serde::Serialize;

/// The single discrete interaction the classifier is in.
///
/// `Click` and `RightClick` are tentative: movement beyond the click slop
/// promotes them to `Pan` and `Rotate` respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Primary press or single touch that has not moved past the slop.
    Click,
    /// Secondary press that has not moved past the slop.
    RightClick,
    /// Orbit/tilt drag.
    Rotate,
    /// Middle-button drag zoom or two-finger pinch.
    Zoom,
    /// Drag panning the ground plane.
    Pan,
    /// Three-finger orbit/tilt drag.
    TouchRotate,
    /// Two-finger pinch that also pans with the fingers' centroid.
    TouchZoomPan,
}

impl InteractionState {
    /// Whether a gesture is in progress.
    #[must_use]
    pub fn is_active(self) -> bool {
        self != Self::Idle
    }

    /// Whether a zoom gesture owns the scale, so the wheel must not
    /// fight it.
    #[must_use]
    pub fn is_pinching(self) -> bool {
        matches!(self, Self::Zoom | Self::TouchZoomPan)
    }

    /// Whether multi-touch moves go to the multi-touch path rather than
    /// the single-pointer path.
    #[must_use]
    pub fn routes_multi_touch(self) -> bool {
        matches!(
            self,
            Self::Rotate | Self::Zoom | Self::TouchRotate | Self::TouchZoomPan
        )
    }

    /// Whether deltas stay measured from the original press (needed for
    /// slop checks and pan tracking) instead of the previous sample.
    #[must_use]
    pub fn keeps_press_origin(self) -> bool {
        matches!(self, Self::Click | Self::Pan | Self::RightClick)
    }
}
