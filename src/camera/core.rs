use glam::{Mat3, Mat4, Quat, Vec2, Vec3};

use super::plane::Ray;
use crate::options::CameraOptions;

/// Perspective camera defined by a world transform and projection
/// parameters.
///
/// The camera looks down its local -Z axis with local +Y up, so
/// `orientation * Vec3::Z` points from the look-at target back towards
/// the eye.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub position: Vec3,
    /// World-space rotation of the camera's local frame.
    pub orientation: Quat,
    /// Up direction used by [`Camera::look_at`].
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Create a camera at the origin with identity orientation.
    #[must_use]
    pub fn new(options: &CameraOptions, aspect: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            up: Vec3::Y,
            aspect,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Copy projection parameters from `options`.
    pub fn apply_options(&mut self, options: &CameraOptions) {
        self.fovy = options.fovy;
        self.znear = options.znear;
        self.zfar = options.zfar;
    }

    /// Projection parameters as options.
    #[must_use]
    pub fn options(&self) -> CameraOptions {
        CameraOptions {
            fovy: self.fovy,
            znear: self.znear,
            zfar: self.zfar,
        }
    }

    /// Rotate the camera so it looks at `target` from its current
    /// position.
    ///
    /// When the view direction is parallel to `up` the side axis falls
    /// back to world +X (or +Z if that is parallel too); the view
    /// direction itself is never altered.
    pub fn look_at(&mut self, target: Vec3) {
        let mut z = self.position - target;
        if z.length_squared() == 0.0 {
            z.z = 1.0;
        }
        z = z.normalize();

        let mut x = self.up.cross(z);
        if x.length_squared() <= f32::EPSILON {
            let fallback = if z.x.abs() < 0.9 { Vec3::X } else { Vec3::Z };
            x = fallback - z * fallback.dot(z);
        }
        x = x.normalize();
        let y = z.cross(x);

        self.orientation = Quat::from_mat3(&Mat3::from_cols(x, y, z));
    }

    /// Rotate about an axis expressed in the camera's local frame.
    pub fn rotate_on_axis(&mut self, axis: Vec3, angle: f32) {
        self.orientation =
            (self.orientation * Quat::from_axis_angle(axis, angle)).normalize();
    }

    /// Unit view direction (local -Z in world space).
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// World-to-view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation, self.position)
            .inverse()
    }

    /// Get just the projection matrix.
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        // perspective_rh uses a [0,1] depth range (wgpu/Vulkan convention)
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.view_matrix()
    }

    /// Ray from the eye through a point in normalized device coordinates.
    #[must_use]
    pub fn ray_through_ndc(&self, ndc: Vec2) -> Ray {
        let inverse = self.build_matrix().inverse();
        let through = inverse.project_point3(ndc.extend(0.5));
        Ray {
            origin: self.position,
            direction: (through - self.position).normalize_or_zero(),
        }
    }
}
