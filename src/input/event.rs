use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Platform-agnostic input events.
///
/// These are fed into a
/// [`GestureController`](crate::controller::GestureController) through its
/// single `handle` entry point.
///
/// # Example
///
/// ```ignore
/// let suppress_default = controller.handle(InputEvent::PointerDown(
///     PointerInput::at(MouseButton::Left, Vec2::new(100.0, 200.0)),
/// ));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// Mouse button pressed over the surface.
    PointerDown(PointerInput),
    /// Pointer moved (anywhere; `over_surface` says whether it is over
    /// the controlled surface).
    PointerMove(PointerInput),
    /// Mouse button released.
    PointerUp(PointerInput),
    /// Pointer left the surface; abandons the current gesture.
    PointerLeave,
    /// One or more touches began. Carries every active touch.
    TouchDown(TouchInput),
    /// Active touches moved. Carries every active touch.
    TouchMove(TouchInput),
    /// A touch ended. Carries the touches that remain.
    TouchUp(TouchInput),
    /// Scroll wheel.
    Wheel {
        /// Scroll amount in platform units.
        delta: WheelDelta,
    },
    /// The platform is about to open a context menu.
    ContextMenu,
}

/// A single pointer sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerInput {
    /// Button that changed (ignored for moves).
    pub button: MouseButton,
    /// Position relative to the controlled surface, in pixels.
    pub position: Vec2,
    /// Position relative to the window/page, in pixels. Frame-to-frame
    /// deltas are taken from this coordinate.
    pub client: Vec2,
    /// Whether the pointer is currently over the controlled surface.
    pub over_surface: bool,
}

impl PointerInput {
    /// Sample over the surface whose client and surface coordinates
    /// coincide.
    #[must_use]
    pub fn at(button: MouseButton, position: Vec2) -> Self {
        Self {
            button,
            position,
            client: position,
            over_surface: true,
        }
    }
}

/// One touch contact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    /// Position relative to the controlled surface, in pixels.
    pub position: Vec2,
    /// Position relative to the window/page, in pixels.
    pub client: Vec2,
}

impl TouchPoint {
    /// Touch whose client and surface coordinates coincide.
    #[must_use]
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            client: position,
        }
    }
}

/// The active touch list of a touch event.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TouchInput {
    /// Active touches, in arrival order.
    pub touches: Vec<TouchPoint>,
    /// Whether the touch target is the controlled surface.
    #[serde(default = "default_over_surface")]
    pub over_surface: bool,
}

fn default_over_surface() -> bool {
    true
}

impl TouchInput {
    /// Touch list over the surface.
    #[must_use]
    pub fn new(touches: Vec<TouchPoint>) -> Self {
        Self {
            touches,
            over_surface: true,
        }
    }

    /// Number of active touches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.touches.len()
    }

    /// Whether no touch is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.touches.is_empty()
    }

    /// First touch, if any.
    #[must_use]
    pub fn first(&self) -> Option<&TouchPoint> {
        self.touches.first()
    }
}

/// Platform-agnostic mouse button identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    /// Primary (left) mouse button.
    #[default]
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
    /// Any other button (back, forward, ...).
    Other(u16),
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => Self::Left,
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            winit::event::MouseButton::Back => Self::Other(3),
            winit::event::MouseButton::Forward => Self::Other(4),
            winit::event::MouseButton::Other(id) => Self::Other(id),
        }
    }
}

/// Lines a wheel notch scrolls in line-based platform units.
pub const LINES_PER_NOTCH: f32 = 3.0;
/// Legacy wheel-delta units per notch.
pub const PIXELS_PER_NOTCH: f32 = 120.0;

/// Scroll amount in one of the platform conventions. Positive values
/// scroll up/away from the user, which zooms in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WheelDelta {
    /// Wheel detents.
    Notches(f32),
    /// Lines, [`LINES_PER_NOTCH`] per detent.
    Lines(f32),
    /// Legacy wheel-delta units, [`PIXELS_PER_NOTCH`] per detent.
    Pixels(f32),
}

impl WheelDelta {
    /// Convert to the canonical unit: notches.
    #[must_use]
    pub fn notches(self) -> f32 {
        match self {
            Self::Notches(n) => n,
            Self::Lines(lines) => lines / LINES_PER_NOTCH,
            Self::Pixels(px) => px / PIXELS_PER_NOTCH,
        }
    }
}
