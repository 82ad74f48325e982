//! The host-facing gesture controller.
//!
//! Owns the classifier, the camera pose and the event emitter. Hosts feed
//! every raw input event through [`GestureController::handle`], call
//! [`GestureController::update`] once per frame, and read the camera back.

use glam::{Vec2, Vec3};

use crate::camera::{Camera, CameraPose};
use crate::error::GestureError;
use crate::events::{EventEmitter, GestureEvent, GestureEventKind, ListenerId};
use crate::input::{GestureClassifier, InputEvent, InteractionState};
use crate::options::{ControlOptions, Options};

/// Pointer/touch gesture controller driving an orbit camera.
#[derive(Debug)]
pub struct GestureController {
    controls: ControlOptions,
    classifier: GestureClassifier,
    pose: CameraPose,
    emitter: EventEmitter,
    attached: bool,
}

impl GestureController {
    /// Validate `options` and build an attached controller for a surface
    /// of `viewport` pixels.
    ///
    /// # Errors
    ///
    /// Returns [`GestureError::InvalidOptions`] if any range or projection
    /// parameter is out of bounds.
    pub fn new(
        options: Options,
        viewport: (u32, u32),
    ) -> Result<Self, GestureError> {
        options.validate()?;
        let pose = CameraPose::new(options.orbit, &options.camera, viewport);
        log::debug!(
            "gesture controller attached ({}x{})",
            viewport.0,
            viewport.1
        );
        Ok(Self {
            controls: options.controls,
            classifier: GestureClassifier::new(),
            pose,
            emitter: EventEmitter::new(),
            attached: true,
        })
    }

    /// Process one raw input event.
    ///
    /// Returns `true` when the host should suppress the platform default
    /// action (currently only the context menu while attached).
    pub fn handle(&mut self, event: InputEvent) -> bool {
        if !self.attached {
            return false;
        }
        let suppress = matches!(event, InputEvent::ContextMenu);
        if let Some(gesture) =
            self.classifier
                .handle(event, &mut self.pose, &self.controls)
        {
            self.emitter.emit(&gesture);
        }
        suppress
    }

    // ── Listeners ──────────────────────────────────────────────────────

    /// Subscribe to gesture events of `kind`.
    pub fn on<F>(&mut self, kind: GestureEventKind, handler: F) -> ListenerId
    where
        F: FnMut(&GestureEvent) + 'static,
    {
        self.emitter.on(kind, handler)
    }

    /// Unsubscribe a listener. Returns whether it was registered.
    pub fn off(&mut self, id: ListenerId) -> bool {
        self.emitter.off(id)
    }

    /// Whether anything listens for `kind`.
    #[must_use]
    pub fn has_listeners(&self, kind: GestureEventKind) -> bool {
        self.emitter.has_listeners(kind)
    }

    /// Deliver a gesture event to listeners directly.
    pub fn emit(&mut self, event: &GestureEvent) {
        self.emitter.emit(event);
    }

    // ── Lifecycle ──────────────────────────────────────────────────────

    /// Per-frame tick. Returns whether the camera was recomputed.
    pub fn update(&mut self) -> bool {
        self.pose.update()
    }

    /// Abandon any gesture and restore the default pose. Listeners stay
    /// subscribed.
    pub fn reset(&mut self) {
        self.classifier.reset();
        self.pose.reset();
        log::debug!("gesture controller reset");
    }

    /// Detach from input. Later events are ignored; calling again is a
    /// no-op.
    pub fn destroy(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;
        self.classifier.reset();
        log::debug!("gesture controller detached");
    }

    /// Whether the controller still accepts input.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    // ── Pose delegation ────────────────────────────────────────────────

    /// Set the orbit angle in degrees.
    pub fn set_orbit_angle(&mut self, degrees: f32) {
        self.pose.set_orbit_angle(degrees);
    }

    /// Set the tilt angle in degrees (clamped).
    pub fn set_tilt_angle(&mut self, degrees: f32) {
        self.pose.set_tilt_angle(degrees);
    }

    /// Set the zoom scale (clamped).
    pub fn set_scale(&mut self, scale: f32) {
        self.pose.set_scale(scale);
    }

    /// Pan so the world point under `screen_start` moves under
    /// `screen_end`.
    pub fn pan(&mut self, screen_start: Vec2, screen_end: Vec2) {
        self.pose.pan(screen_start, screen_end);
    }

    /// The surface was resized.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.pose.set_viewport(width, height);
    }

    /// World point on the reference plane under a screen position.
    #[must_use]
    pub fn screen_to_world(&self, screen: Vec2) -> Option<Vec3> {
        self.pose.screen_to_world(screen)
    }

    // ── Accessors ──────────────────────────────────────────────────────

    /// Current interaction state.
    #[must_use]
    pub fn state(&self) -> InteractionState {
        self.classifier.state()
    }

    /// Camera as of the last update.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        self.pose.camera()
    }

    /// Read-only access to the pose.
    #[must_use]
    pub fn pose(&self) -> &CameraPose {
        &self.pose
    }

    /// Mutable access to the pose.
    pub fn pose_mut(&mut self) -> &mut CameraPose {
        &mut self.pose
    }

    /// Read-only access to the input switches.
    #[must_use]
    pub fn controls(&self) -> &ControlOptions {
        &self.controls
    }

    /// Mutable access to the input switches. Changes apply to the next
    /// event.
    pub fn controls_mut(&mut self) -> &mut ControlOptions {
        &mut self.controls
    }

    /// Snapshot of the current options.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            controls: self.controls.clone(),
            orbit: self.pose.options().clone(),
            camera: self.pose.camera().options(),
        }
    }

    /// Replace all options at once.
    ///
    /// # Errors
    ///
    /// Returns [`GestureError::InvalidOptions`] and leaves the controller
    /// untouched if `options` do not validate.
    pub fn apply_options(
        &mut self,
        options: Options,
    ) -> Result<(), GestureError> {
        options.validate()?;
        self.controls = options.controls;
        *self.pose.options_mut() = options.orbit;
        self.pose.apply_camera_options(&options.camera);
        // Re-clamp under the new limits
        self.pose.set_tilt_angle(self.pose.tilt_angle());
        self.pose.set_scale(self.pose.scale());
        Ok(())
    }
}
