//! Classifies raw input into gestures and drives the camera pose.
//!
//! The `GestureClassifier` owns all transient input state (interaction
//! state, press/cursor tracking, touch snapshots). It sits between raw
//! platform events and the [`CameraPose`]: moves become clamped parameter
//! changes, releases become semantic [`GestureEvent`]s.

use glam::{Vec2, Vec3};

use super::event::{InputEvent, MouseButton, TouchInput, WheelDelta};
use super::state::InteractionState;
use super::touch::TouchSet;
use crate::camera::CameraPose;
use crate::events::GestureEvent;
use crate::options::ControlOptions;

/// Movement (pixels) a tentative click tolerates before it becomes a drag.
pub const CLICK_SLOP_PX: f32 = 2.0;
/// Drag distance (pixels) for one full orbit turn, before the speed
/// multiplier.
pub const PIXELS_PER_ROUND: f32 = 1800.0;
/// Rotate sensitivity multiplier.
pub const ROTATE_SPEED: f32 = 2.0;
/// Scale factor per wheel notch.
pub const WHEEL_SCALE_STEP: f32 = 1.07;
/// Scale factor per drag-zoom or pinch step.
pub const DRAG_SCALE_STEP: f32 = 1.03;
/// Pinch distance changes below this are treated as finger jitter.
pub const PINCH_NOISE_PX: f32 = 5.0;

/// What a handled event asks the controller to emit.
enum Emit {
    Hover,
    Click(Option<Vec3>),
    RightClick,
}

impl Emit {
    fn into_event(self, input: InputEvent) -> GestureEvent {
        match self {
            Self::Hover => GestureEvent::Hover { input },
            Self::Click(world_point) => {
                GestureEvent::Click { input, world_point }
            }
            Self::RightClick => GestureEvent::RightClick { input },
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// GestureClassifier
// ─────────────────────────────────────────────────────────────────────────────

/// Input state machine resolving presses into click, pan, rotate and zoom.
///
/// # Usage
///
/// ```ignore
/// if let Some(event) = classifier.handle(input, &mut pose, &controls) {
///     emitter.emit(&event);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct GestureClassifier {
    state: InteractionState,
    /// Reference position deltas are measured from. Stays at the press
    /// for click/pan/right-click, follows the cursor otherwise.
    start: Vec2,
    /// Surface-space cursor, integrated from client deltas.
    cursor: Vec2,
    /// Client position of the previous sample.
    last_client: Vec2,
    touches: TouchSet,
}

impl GestureClassifier {
    /// Create an idle classifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current interaction state.
    #[must_use]
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Surface-space cursor of the active gesture.
    #[must_use]
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Drop any gesture in progress and all tracking state.
    pub fn reset(&mut self) {
        self.transition(InteractionState::Idle);
        *self = Self::default();
    }

    /// Process a raw input event, mutating `pose` and returning the
    /// semantic event to emit, if any.
    pub fn handle(
        &mut self,
        event: InputEvent,
        pose: &mut CameraPose,
        controls: &ControlOptions,
    ) -> Option<GestureEvent> {
        if !controls.enabled {
            return None;
        }

        let emit = match &event {
            InputEvent::PointerDown(input) => {
                self.press_start(
                    initial_state_for(input.button),
                    input.position,
                    input.client,
                );
                None
            }
            InputEvent::PointerMove(input) => {
                self.pointer_move(input.client, input.over_surface, pose)
            }
            InputEvent::PointerUp(input) => self.release(input.position, pose),
            InputEvent::PointerLeave => {
                self.transition(InteractionState::Idle);
                None
            }
            InputEvent::TouchDown(input) => {
                self.touch_start(input);
                None
            }
            InputEvent::TouchMove(input) => self.touch_move(input, pose),
            InputEvent::TouchUp(_) => self.release(self.cursor, pose),
            InputEvent::Wheel { delta } => {
                self.wheel(*delta, pose, controls);
                None
            }
            InputEvent::ContextMenu => None,
        };

        emit.map(|e| e.into_event(event))
    }

    fn transition(&mut self, next: InteractionState) {
        if self.state != next {
            log::debug!("gesture {:?} -> {next:?}", self.state);
            self.state = next;
        }
    }

    /// Single press (mouse button or lone touch).
    fn press_start(
        &mut self,
        initial: InteractionState,
        position: Vec2,
        client: Vec2,
    ) {
        if self.state.is_active() || !initial.is_active() {
            return;
        }
        self.transition(initial);
        self.start = position;
        self.cursor = position;
        self.last_client = client;
    }

    fn touch_start(&mut self, input: &TouchInput) {
        let Some(first) = input.first() else {
            return;
        };
        if input.len() == 1 {
            self.press_start(
                InteractionState::Click,
                first.position,
                first.client,
            );
            return;
        }

        self.touches.record_start(&input.touches);
        self.start = first.position;
        self.cursor = first.position;
        self.last_client = first.client;
        if input.len() == 2 {
            self.transition(InteractionState::Zoom);
        } else {
            self.transition(InteractionState::TouchRotate);
        }
    }

    fn touch_move(
        &mut self,
        input: &TouchInput,
        pose: &mut CameraPose,
    ) -> Option<Emit> {
        if input.len() > 1 && self.state.routes_multi_touch() {
            self.multi_touch_move(input, pose);
            return None;
        }
        let first = input.first()?;
        self.pointer_move(first.client, input.over_surface, pose)
    }

    /// Single-pointer move: promote tentative gestures and apply the
    /// committed one.
    fn pointer_move(
        &mut self,
        client: Vec2,
        over_surface: bool,
        pose: &mut CameraPose,
    ) -> Option<Emit> {
        if self.state.is_active() {
            self.cursor += client - self.last_client;
            self.last_client = client;

            let delta = self.cursor - self.start;
            let distance = delta.length();
            if distance > 0.0 {
                self.drive(delta, distance, pose);
                if !self.state.keeps_press_origin() {
                    self.start = self.cursor;
                }
            }
        }
        over_surface.then_some(Emit::Hover)
    }

    fn drive(&mut self, delta: Vec2, distance: f32, pose: &mut CameraPose) {
        match self.state {
            InteractionState::RightClick if distance > CLICK_SLOP_PX => {
                self.transition(InteractionState::Rotate);
                rotate_by(pose, delta);
            }
            InteractionState::Rotate => rotate_by(pose, delta),
            InteractionState::Zoom => zoom_step(pose, delta.y > 0.0),
            InteractionState::Click if distance > CLICK_SLOP_PX => {
                self.transition(InteractionState::Pan);
                pose.begin_pan(self.start);
                pose.drag_pan_to(self.cursor);
            }
            InteractionState::Pan => pose.drag_pan_to(self.cursor),
            _ => {}
        }
    }

    fn multi_touch_move(&mut self, input: &TouchInput, pose: &mut CameraPose) {
        self.touches.record_end(&input.touches);
        match self.state {
            InteractionState::Zoom | InteractionState::TouchZoomPan => {
                self.pinch(pose);
            }
            InteractionState::TouchRotate => {
                rotate_by(pose, self.touches.centroid_delta());
            }
            _ => {}
        }
        self.touches.roll_forward();
    }

    /// Pinch zoom; a steady-distance two-finger drag turns into a pan.
    fn pinch(&mut self, pose: &mut CameraPose) {
        let zoomed = match self.touches.pinch_distances() {
            Some((start, end)) if (start - end).abs() >= PINCH_NOISE_PX => {
                zoom_step(pose, end < start);
                true
            }
            _ => false,
        };

        let (Some(from), Some(to)) =
            (self.touches.start_centroid(), self.touches.end_centroid())
        else {
            return;
        };
        match self.state {
            InteractionState::Zoom
                if !zoomed && from.distance(to) > CLICK_SLOP_PX =>
            {
                self.transition(InteractionState::TouchZoomPan);
                pose.begin_pan(from);
                pose.drag_pan_to(to);
            }
            InteractionState::TouchZoomPan => pose.drag_pan_to(to),
            _ => {}
        }
    }

    fn release(&mut self, at: Vec2, pose: &CameraPose) -> Option<Emit> {
        let ended = self.state;
        if !ended.is_active() {
            return None;
        }
        self.transition(InteractionState::Idle);
        match ended {
            InteractionState::Click => {
                Some(Emit::Click(pose.screen_to_world(at)))
            }
            InteractionState::RightClick => Some(Emit::RightClick),
            _ => None,
        }
    }

    fn wheel(
        &self,
        delta: WheelDelta,
        pose: &mut CameraPose,
        controls: &ControlOptions,
    ) {
        if !controls.scroll_wheel_zoom || self.state.is_pinching() {
            return;
        }
        let factor = WHEEL_SCALE_STEP.powf(delta.notches());
        pose.set_scale(pose.scale() * factor);
    }
}

fn initial_state_for(button: MouseButton) -> InteractionState {
    match button {
        MouseButton::Left => InteractionState::Click,
        MouseButton::Right => InteractionState::RightClick,
        MouseButton::Middle => InteractionState::Zoom,
        MouseButton::Other(_) => InteractionState::Idle,
    }
}

/// Degrees of rotation for a drag of `pixels`.
fn drag_degrees(pixels: f32) -> f32 {
    (360.0 * pixels / PIXELS_PER_ROUND) * ROTATE_SPEED
}

fn rotate_by(pose: &mut CameraPose, delta: Vec2) {
    pose.set_orbit_angle(pose.orbit_angle() - drag_degrees(delta.x));
    pose.set_tilt_angle(pose.tilt_angle() - drag_degrees(delta.y));
}

fn zoom_step(pose: &mut CameraPose, zoom_out: bool) {
    let factor = if zoom_out {
        1.0 / DRAG_SCALE_STEP
    } else {
        DRAG_SCALE_STEP
    };
    pose.set_scale(pose.scale() * factor);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::event::{PointerInput, TouchPoint};
    use crate::options::{CameraOptions, OrbitOptions};

    fn pose() -> CameraPose {
        CameraPose::new(
            OrbitOptions::default(),
            &CameraOptions::default(),
            (800, 600),
        )
    }

    fn down(button: MouseButton, x: f32, y: f32) -> InputEvent {
        InputEvent::PointerDown(PointerInput::at(button, Vec2::new(x, y)))
    }

    fn moved(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerMove(PointerInput::at(
            MouseButton::Left,
            Vec2::new(x, y),
        ))
    }

    fn up(button: MouseButton, x: f32, y: f32) -> InputEvent {
        InputEvent::PointerUp(PointerInput::at(button, Vec2::new(x, y)))
    }

    fn touch(points: &[(f32, f32)]) -> TouchInput {
        TouchInput::new(
            points
                .iter()
                .map(|&(x, y)| TouchPoint::at(Vec2::new(x, y)))
                .collect(),
        )
    }

    fn touch_down(points: &[(f32, f32)]) -> InputEvent {
        InputEvent::TouchDown(touch(points))
    }

    fn touch_move(points: &[(f32, f32)]) -> InputEvent {
        InputEvent::TouchMove(touch(points))
    }

    fn touch_up(points: &[(f32, f32)]) -> InputEvent {
        InputEvent::TouchUp(touch(points))
    }

    struct Rig {
        classifier: GestureClassifier,
        pose: CameraPose,
        controls: ControlOptions,
    }

    impl Rig {
        fn new() -> Self {
            Self {
                classifier: GestureClassifier::new(),
                pose: pose(),
                controls: ControlOptions::default(),
            }
        }

        fn send(&mut self, event: InputEvent) -> Option<GestureEvent> {
            self.classifier.handle(event, &mut self.pose, &self.controls)
        }

        fn state(&self) -> InteractionState {
            self.classifier.state()
        }
    }

    #[test]
    fn button_selects_tentative_state() {
        for (button, expected) in [
            (MouseButton::Left, InteractionState::Click),
            (MouseButton::Right, InteractionState::RightClick),
            (MouseButton::Middle, InteractionState::Zoom),
            (MouseButton::Other(4), InteractionState::Idle),
        ] {
            let mut rig = Rig::new();
            let _ = rig.send(down(button, 10.0, 10.0));
            assert_eq!(rig.state(), expected, "{button:?}");
        }
    }

    #[test]
    fn press_mid_gesture_is_ignored() {
        let mut rig = Rig::new();
        let _ = rig.send(down(MouseButton::Left, 10.0, 10.0));
        let _ = rig.send(down(MouseButton::Right, 50.0, 50.0));
        assert_eq!(rig.state(), InteractionState::Click);
        assert_eq!(rig.classifier.cursor(), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn small_wobble_still_clicks() {
        let mut rig = Rig::new();
        let _ = rig.send(down(MouseButton::Left, 400.0, 300.0));
        let _ = rig.send(moved(401.0, 301.0));
        assert_eq!(rig.state(), InteractionState::Click);
        assert_eq!(rig.pose.offset(), Vec3::ZERO);

        let event = rig.send(up(MouseButton::Left, 401.0, 301.0)).unwrap();
        let GestureEvent::Click { world_point, .. } = event else {
            panic!("expected click, got {event:?}");
        };
        assert!(world_point.is_some());
        assert_eq!(rig.state(), InteractionState::Idle);
    }

    #[test]
    fn drag_past_slop_pans_without_click() {
        let mut rig = Rig::new();
        let _ = rig.send(down(MouseButton::Left, 400.0, 300.0));
        let _ = rig.send(moved(410.0, 300.0));
        assert_eq!(rig.state(), InteractionState::Pan);
        assert!(rig.pose.offset().x < 0.0);
        assert!(rig.send(up(MouseButton::Left, 410.0, 300.0)).is_none());
        assert_eq!(rig.state(), InteractionState::Idle);
    }

    #[test]
    fn cursor_integrates_client_deltas() {
        let mut rig = Rig::new();
        let press = PointerInput {
            button: MouseButton::Left,
            position: Vec2::new(100.0, 100.0),
            client: Vec2::new(300.0, 200.0),
            over_surface: true,
        };
        let _ = rig.send(InputEvent::PointerDown(press));
        let _ = rig.send(InputEvent::PointerMove(PointerInput {
            client: Vec2::new(320.0, 205.0),
            position: Vec2::ZERO,
            ..press
        }));
        assert_eq!(rig.classifier.cursor(), Vec2::new(120.0, 105.0));
    }

    #[test]
    fn right_drag_rotates_with_drag_direction() {
        let mut rig = Rig::new();
        let _ = rig.send(down(MouseButton::Right, 400.0, 300.0));
        // Drag up-left: orbit and tilt both increase
        let _ = rig.send(moved(390.0, 290.0));
        assert_eq!(rig.state(), InteractionState::Rotate);
        let orbit_1 = rig.pose.orbit_angle();
        let tilt_1 = rig.pose.tilt_angle();
        assert!((orbit_1 - 4.0).abs() < 1e-4);
        assert!((tilt_1 - 4.0).abs() < 1e-4);

        let _ = rig.send(moved(380.0, 280.0));
        assert!(rig.pose.orbit_angle() > orbit_1);
        assert!(rig.pose.tilt_angle() > tilt_1);

        assert!(rig.send(up(MouseButton::Right, 380.0, 280.0)).is_none());
    }

    #[test]
    fn rotate_deltas_are_incremental() {
        let mut rig = Rig::new();
        let _ = rig.send(down(MouseButton::Right, 400.0, 300.0));
        let _ = rig.send(moved(395.0, 300.0));
        let _ = rig.send(moved(390.0, 300.0));
        // Two 5px steps, not 5px then 10px
        assert!((rig.pose.orbit_angle() - 4.0).abs() < 1e-4);
    }

    #[test]
    fn right_click_without_drag_emits_right_click() {
        let mut rig = Rig::new();
        let _ = rig.send(down(MouseButton::Right, 400.0, 300.0));
        let _ = rig.send(moved(401.0, 300.0));
        let event = rig.send(up(MouseButton::Right, 401.0, 300.0));
        assert!(matches!(event, Some(GestureEvent::RightClick { .. })));
        assert_eq!(rig.pose.orbit_angle(), 0.0);
    }

    #[test]
    fn middle_drag_zooms_by_vertical_direction() {
        let mut rig = Rig::new();
        let _ = rig.send(down(MouseButton::Middle, 400.0, 300.0));
        let _ = rig.send(moved(400.0, 290.0));
        assert!((rig.pose.scale() - DRAG_SCALE_STEP).abs() < 1e-5);
        let _ = rig.send(moved(400.0, 300.0));
        assert!((rig.pose.scale() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn hover_only_over_surface() {
        let mut rig = Rig::new();
        assert!(matches!(
            rig.send(moved(5.0, 5.0)),
            Some(GestureEvent::Hover { .. })
        ));
        let outside = InputEvent::PointerMove(PointerInput {
            over_surface: false,
            ..PointerInput::at(MouseButton::Left, Vec2::new(5.0, 5.0))
        });
        assert!(rig.send(outside).is_none());
    }

    #[test]
    fn disabled_controls_ignore_everything() {
        let mut rig = Rig::new();
        rig.controls.enabled = false;
        let _ = rig.send(down(MouseButton::Left, 10.0, 10.0));
        assert_eq!(rig.state(), InteractionState::Idle);
        assert!(rig.send(moved(20.0, 20.0)).is_none());
        let _ = rig.send(InputEvent::Wheel {
            delta: WheelDelta::Notches(1.0),
        });
        assert_eq!(rig.pose.scale(), 1.0);
    }

    #[test]
    fn pointer_leave_abandons_gesture() {
        let mut rig = Rig::new();
        let _ = rig.send(down(MouseButton::Left, 10.0, 10.0));
        let _ = rig.send(InputEvent::PointerLeave);
        assert_eq!(rig.state(), InteractionState::Idle);
        assert!(rig.send(up(MouseButton::Left, 10.0, 10.0)).is_none());
    }

    #[test]
    fn wheel_zooms_by_notches() {
        let mut rig = Rig::new();
        let _ = rig.send(InputEvent::Wheel {
            delta: WheelDelta::Pixels(240.0),
        });
        assert!((rig.pose.scale() - WHEEL_SCALE_STEP.powi(2)).abs() < 1e-5);
        let _ = rig.send(InputEvent::Wheel {
            delta: WheelDelta::Lines(-6.0),
        });
        assert!((rig.pose.scale() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn wheel_respects_switch_and_pinch() {
        let mut rig = Rig::new();
        rig.controls.scroll_wheel_zoom = false;
        let _ = rig.send(InputEvent::Wheel {
            delta: WheelDelta::Notches(1.0),
        });
        assert_eq!(rig.pose.scale(), 1.0);

        rig.controls.scroll_wheel_zoom = true;
        let _ = rig.send(touch_down(&[(0.0, 0.0), (100.0, 0.0)]));
        assert_eq!(rig.state(), InteractionState::Zoom);
        let _ = rig.send(InputEvent::Wheel {
            delta: WheelDelta::Notches(3.0),
        });
        assert_eq!(rig.pose.scale(), 1.0);
    }

    #[test]
    fn single_touch_tap_clicks() {
        let mut rig = Rig::new();
        let _ = rig.send(touch_down(&[(400.0, 300.0)]));
        assert_eq!(rig.state(), InteractionState::Click);
        let event = rig.send(touch_up(&[]));
        assert!(matches!(
            event,
            Some(GestureEvent::Click {
                world_point: Some(_),
                ..
            })
        ));
    }

    #[test]
    fn pinch_ignores_jitter_then_zooms() {
        let mut rig = Rig::new();
        let _ = rig.send(touch_down(&[(0.0, 0.0), (100.0, 0.0)]));
        assert_eq!(rig.state(), InteractionState::Zoom);

        let _ = rig.send(touch_move(&[(0.0, 0.0), (96.0, 0.0)]));
        assert_eq!(rig.pose.scale(), 1.0);
        assert_eq!(rig.state(), InteractionState::Zoom);

        let _ = rig.send(touch_move(&[(0.0, 0.0), (80.0, 0.0)]));
        assert!(rig.pose.scale() < 1.0);

        let closed = rig.pose.scale();
        let _ = rig.send(touch_move(&[(0.0, 0.0), (120.0, 0.0)]));
        assert!(rig.pose.scale() > closed);
    }

    #[test]
    fn pinch_baseline_rolls_forward_each_sample() {
        let mut rig = Rig::new();
        let _ = rig.send(touch_down(&[(0.0, 0.0), (100.0, 0.0)]));
        // Each sample is within the noise band of the previous one, even
        // though the total change exceeds it.
        for x in [97.0, 94.0, 91.0] {
            let _ = rig.send(touch_move(&[(0.0, 0.0), (x, 0.0)]));
        }
        assert_eq!(rig.pose.scale(), 1.0);
    }

    #[test]
    fn two_finger_drag_pans() {
        let mut rig = Rig::new();
        let _ = rig.send(touch_down(&[(380.0, 300.0), (420.0, 300.0)]));
        let _ = rig.send(touch_move(&[(390.0, 300.0), (430.0, 300.0)]));
        assert_eq!(rig.state(), InteractionState::TouchZoomPan);
        assert_eq!(rig.pose.scale(), 1.0);
        assert!(rig.pose.offset().x < 0.0);
        assert!(rig.send(touch_up(&[(390.0, 300.0)])).is_none());
        assert_eq!(rig.state(), InteractionState::Idle);
    }

    #[test]
    fn three_finger_drag_rotates() {
        let mut rig = Rig::new();
        let _ = rig.send(InputEvent::TouchDown(touch(&[
            (100.0, 100.0),
            (200.0, 100.0),
            (150.0, 200.0),
        ])));
        assert_eq!(rig.state(), InteractionState::TouchRotate);
        let _ = rig.send(InputEvent::TouchMove(touch(&[
            (90.0, 90.0),
            (190.0, 90.0),
            (140.0, 190.0),
        ])));
        assert!((rig.pose.orbit_angle() - 4.0).abs() < 1e-3);
        assert!((rig.pose.tilt_angle() - 4.0).abs() < 1e-3);
    }

    #[test]
    fn second_finger_turns_tap_into_pinch() {
        let mut rig = Rig::new();
        let _ = rig.send(touch_down(&[(0.0, 0.0)]));
        let _ = rig.send(touch_down(&[(0.0, 0.0), (100.0, 0.0)]));
        assert_eq!(rig.state(), InteractionState::Zoom);
        assert!(rig.send(touch_up(&[(0.0, 0.0)])).is_none());
    }

    #[test]
    fn multi_touch_move_while_idle_falls_through() {
        let mut rig = Rig::new();
        let event = rig.send(touch_move(&[(0.0, 0.0), (100.0, 0.0)]));
        assert!(matches!(event, Some(GestureEvent::Hover { .. })));
        assert_eq!(rig.pose.scale(), 1.0);
    }

    #[test]
    fn empty_touch_lists_are_harmless() {
        let mut rig = Rig::new();
        let _ = rig.send(touch_down(&[]));
        assert_eq!(rig.state(), InteractionState::Idle);
        assert!(rig.send(touch_move(&[])).is_none());
        assert!(rig.send(touch_up(&[])).is_none());
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut rig = Rig::new();
        let _ = rig.send(down(MouseButton::Right, 10.0, 10.0));
        rig.classifier.reset();
        assert_eq!(rig.state(), InteractionState::Idle);
        assert_eq!(rig.classifier.cursor(), Vec2::ZERO);
    }
}
