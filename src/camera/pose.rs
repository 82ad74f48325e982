//! Orbit pose model: clamped orbit/tilt/scale parameters, accumulated pan
//! offset, and the integrator that turns them into a camera transform.

use glam::{Vec2, Vec3};

use super::core::Camera;
use crate::options::{CameraOptions, OrbitOptions};

/// Screen-space distance below which a pending pan is ignored.
const PAN_EPSILON: f32 = 1.0e-3;

/// Owns the orbit parameters and the camera they drive.
///
/// Every setter stores its (clamped) value and then either recomputes the
/// camera immediately or, with damping enabled, marks the pose dirty for
/// the next [`CameraPose::update`] tick.
#[derive(Debug, Clone)]
pub struct CameraPose {
    options: OrbitOptions,
    camera: Camera,
    /// Surface size in pixels, used for screen → NDC conversion.
    viewport: Vec2,

    orbit_angle: f32,
    tilt_angle: f32,
    scale: f32,
    offset: Vec3,

    /// Screen position the last folded pan ended at.
    pan_anchor: Vec2,
    /// Latest screen position reported by a pan gesture.
    pan_cursor: Vec2,

    needs_update: bool,
}

impl CameraPose {
    /// Create a pose at the default parameters and compute the initial
    /// camera transform.
    #[must_use]
    pub fn new(
        options: OrbitOptions,
        camera_options: &CameraOptions,
        viewport: (u32, u32),
    ) -> Self {
        let viewport = Vec2::new(viewport.0 as f32, viewport.1 as f32);
        let mut pose = Self {
            options,
            camera: Camera::new(camera_options, aspect_of(viewport)),
            viewport,
            orbit_angle: 0.0,
            tilt_angle: 0.0,
            scale: 1.0,
            offset: Vec3::ZERO,
            pan_anchor: Vec2::ZERO,
            pan_cursor: Vec2::ZERO,
            needs_update: true,
        };
        pose.integrate();
        pose
    }

    /// Restore default parameters, drop any pending pan and request an
    /// update.
    pub fn reset(&mut self) {
        self.orbit_angle = 0.0;
        self.tilt_angle = 0.0;
        self.scale = 1.0;
        self.offset = Vec3::ZERO;
        self.pan_anchor = Vec2::ZERO;
        self.pan_cursor = Vec2::ZERO;
        self.request_update();
    }

    // ── Accessors ──────────────────────────────────────────────────────

    /// Camera as of the last update.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Orbit angle in degrees (unbounded).
    #[must_use]
    pub fn orbit_angle(&self) -> f32 {
        self.orbit_angle
    }

    /// Tilt angle in degrees, within the configured range.
    #[must_use]
    pub fn tilt_angle(&self) -> f32 {
        self.tilt_angle
    }

    /// Tilt actually applied to the camera: the configured range further
    /// limited to [0°, 90°].
    #[must_use]
    pub fn effective_tilt(&self) -> f32 {
        bound(self.tilt_angle, self.options.min_tilt, self.options.max_tilt)
            .clamp(0.0, 90.0)
    }

    /// Zoom scale.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Accumulated world-space pan offset.
    #[must_use]
    pub fn offset(&self) -> Vec3 {
        self.offset
    }

    /// Whether a damped change is waiting for the next update.
    #[must_use]
    pub fn needs_update(&self) -> bool {
        self.needs_update
    }

    /// Viewport size in pixels.
    #[must_use]
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Read-only access to the orbit options.
    #[must_use]
    pub fn options(&self) -> &OrbitOptions {
        &self.options
    }

    /// Mutable access to the orbit options. New limits apply on the next
    /// setter call.
    pub fn options_mut(&mut self) -> &mut OrbitOptions {
        &mut self.options
    }

    /// Copy projection parameters into the camera.
    pub fn apply_camera_options(&mut self, options: &CameraOptions) {
        self.camera.apply_options(options);
        self.request_update();
    }

    // ── Setters ────────────────────────────────────────────────────────

    /// Set the orbit angle in degrees.
    pub fn set_orbit_angle(&mut self, degrees: f32) {
        self.orbit_angle = degrees;
        self.request_update();
    }

    /// Set the tilt angle in degrees, clamped to the configured range.
    pub fn set_tilt_angle(&mut self, degrees: f32) {
        self.tilt_angle =
            bound(degrees, self.options.min_tilt, self.options.max_tilt);
        self.request_update();
    }

    /// Set the zoom scale, clamped to the configured range.
    pub fn set_scale(&mut self, scale: f32) {
        self.scale =
            bound(scale, self.options.min_scale, self.options.max_scale);
        self.request_update();
    }

    /// Resize the viewport used for screen → world mapping.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = Vec2::new(width as f32, height as f32);
        self.camera.aspect = aspect_of(self.viewport);
        self.request_update();
    }

    /// Drag the ground plane so the world point under `screen_start` ends
    /// up under `screen_end`.
    pub fn pan(&mut self, screen_start: Vec2, screen_end: Vec2) {
        if let Some(displacement) =
            self.world_displacement(screen_start, screen_end)
        {
            self.offset += displacement;
        }
        self.request_update();
    }

    /// Start tracking a pan gesture anchored at `screen`.
    pub fn begin_pan(&mut self, screen: Vec2) {
        self.pan_anchor = screen;
        self.pan_cursor = screen;
    }

    /// Move the tracked pan cursor; the displacement is folded into the
    /// offset by the integrator.
    pub fn drag_pan_to(&mut self, screen: Vec2) {
        self.pan_cursor = screen;
        self.request_update();
    }

    /// Recompute now, or mark dirty when damping is on.
    pub fn request_update(&mut self) {
        if self.options.enable_damping {
            self.needs_update = true;
        } else {
            self.integrate();
        }
    }

    /// Per-tick entry point. Returns whether the camera was recomputed.
    ///
    /// With damping enabled this is a no-op unless a parameter changed
    /// since the previous call.
    pub fn update(&mut self) -> bool {
        if self.options.enable_damping && !self.needs_update {
            return false;
        }
        self.integrate();
        true
    }

    // ── Screen ↔ world ─────────────────────────────────────────────────

    /// World point on the reference plane under a screen position (pixels,
    /// origin top-left).
    ///
    /// `None` when the viewport is empty or the view ray misses the plane.
    #[must_use]
    pub fn screen_to_world(&self, screen: Vec2) -> Option<Vec3> {
        if self.viewport.x <= 0.0 || self.viewport.y <= 0.0 {
            return None;
        }
        let ndc = Vec2::new(
            (screen.x / self.viewport.x) * 2.0 - 1.0,
            -(screen.y / self.viewport.y) * 2.0 + 1.0,
        );
        self.camera
            .ray_through_ndc(ndc)
            .intersect_plane(&self.options.plane())
    }

    fn world_displacement(&self, start: Vec2, end: Vec2) -> Option<Vec3> {
        Some(self.screen_to_world(start)? - self.screen_to_world(end)?)
    }

    // ── Integrator ─────────────────────────────────────────────────────

    fn integrate(&mut self) {
        self.needs_update = false;

        if self.pan_anchor.distance(self.pan_cursor) > PAN_EPSILON {
            if let Some(displacement) =
                self.world_displacement(self.pan_anchor, self.pan_cursor)
            {
                self.offset += displacement;
            }
            self.pan_anchor = self.pan_cursor;
        }

        let plane = self.options.plane();
        let scale =
            bound(self.scale, self.options.min_scale, self.options.max_scale);
        let distance = self.options.base_distance / scale;
        let radius = (self.options.base_distance - plane.constant) / scale;
        let tilt = self.effective_tilt().to_radians();
        let orbit = self.orbit_angle.to_radians();

        let pivot = plane.reference_point();
        self.camera.position = pivot + plane.normal * distance;
        self.camera.look_at(pivot);
        self.camera.rotate_on_axis(Vec3::Z, orbit);
        self.camera.rotate_on_axis(Vec3::X, tilt);

        let (sin_tilt, cos_tilt) = tilt.sin_cos();
        let (sin_orbit, cos_orbit) = orbit.sin_cos();
        let spherical = Vec3::new(
            radius * sin_tilt * sin_orbit,
            radius * (cos_tilt - 1.0),
            radius * sin_tilt * cos_orbit,
        );
        self.camera.position += spherical + self.offset;
    }
}

/// Clamp that tolerates an inverted range; `min` wins.
fn bound(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}

fn aspect_of(viewport: Vec2) -> f32 {
    if viewport.y > 0.0 {
        viewport.x / viewport.y
    } else {
        1.0
    }
}
