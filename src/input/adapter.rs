use glam::Vec2;
use winit::event::{
    ElementState, MouseScrollDelta, Touch, TouchPhase, WindowEvent,
};

use super::event::{
    InputEvent, MouseButton, PointerInput, TouchInput, TouchPoint, WheelDelta,
};
use super::touch::TouchTracker;

/// Translates winit window events into [`InputEvent`]s.
///
/// winit reports button changes without a position and touches one finger
/// at a time; the adapter remembers the cursor and the active fingers so
/// every translated event carries the full picture. Window and surface
/// coordinates coincide.
#[derive(Debug, Clone, Default)]
pub struct WinitInputAdapter {
    cursor: Vec2,
    touches: TouchTracker,
}

impl WinitInputAdapter {
    /// Create an adapter with the cursor at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate a window event, or `None` if it is not gesture input.
    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(position.x as f32, position.y as f32);
                Some(InputEvent::PointerMove(PointerInput::at(
                    MouseButton::Left,
                    self.cursor,
                )))
            }
            WindowEvent::MouseInput { button, state, .. } => {
                let input = PointerInput::at((*button).into(), self.cursor);
                Some(match state {
                    ElementState::Pressed => InputEvent::PointerDown(input),
                    ElementState::Released => InputEvent::PointerUp(input),
                })
            }
            WindowEvent::CursorLeft { .. } => Some(InputEvent::PointerLeave),
            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => {
                        WheelDelta::Notches(*y)
                    }
                    MouseScrollDelta::PixelDelta(pos) => {
                        WheelDelta::Pixels(pos.y as f32)
                    }
                };
                Some(InputEvent::Wheel { delta })
            }
            WindowEvent::Touch(touch) => self.translate_touch(touch),
            _ => None,
        }
    }

    fn translate_touch(&mut self, touch: &Touch) -> Option<InputEvent> {
        let point = TouchPoint::at(Vec2::new(
            touch.location.x as f32,
            touch.location.y as f32,
        ));
        match touch.phase {
            TouchPhase::Started => {
                Some(InputEvent::TouchDown(self.touches.start(touch.id, point)))
            }
            TouchPhase::Moved => self
                .touches
                .update(touch.id, point)
                .map(InputEvent::TouchMove),
            TouchPhase::Ended | TouchPhase::Cancelled => {
                Some(InputEvent::TouchUp(self.touches.end(touch.id)))
            }
        }
    }

    /// Number of fingers currently down.
    #[must_use]
    pub fn active_touches(&self) -> usize {
        self.touches.len()
    }
}
