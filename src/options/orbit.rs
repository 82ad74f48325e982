use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::plane::Plane;
use crate::error::GestureError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Orbit", inline)]
#[serde(default)]
/// Orbit pose limits, damping and the reference plane.
pub struct OrbitOptions {
    /// Defer pose recomputation to the next `update()` tick.
    #[schemars(title = "Damping")]
    pub enable_damping: bool,
    /// Lowest tilt (degrees above the plane) the setter accepts.
    #[schemars(
        title = "Min Tilt",
        range(min = 0.0, max = 90.0),
        extend("step" = 1.0)
    )]
    pub min_tilt: f32,
    /// Highest tilt (degrees above the plane) the setter accepts.
    #[schemars(
        title = "Max Tilt",
        range(min = 0.0, max = 90.0),
        extend("step" = 1.0)
    )]
    pub max_tilt: f32,
    /// Smallest zoom scale (farthest camera).
    #[schemars(
        title = "Min Scale",
        range(min = 0.01, max = 1.0),
        extend("step" = 0.01)
    )]
    pub min_scale: f32,
    /// Largest zoom scale (closest camera).
    #[schemars(
        title = "Max Scale",
        range(min = 1.0, max = 50.0),
        extend("step" = 0.1)
    )]
    pub max_scale: f32,
    /// Camera distance from the reference point at scale 1.
    #[schemars(skip)]
    pub base_distance: f32,
    /// Reference plane normal (need not be unit length).
    #[schemars(skip)]
    pub plane_normal: [f32; 3],
    /// Signed height of the reference plane along its normal.
    #[schemars(skip)]
    pub plane_constant: f32,
}

impl Default for OrbitOptions {
    fn default() -> Self {
        Self {
            enable_damping: false,
            min_tilt: 0.0,
            max_tilt: 75.0,
            min_scale: 0.2,
            max_scale: 5.0,
            base_distance: 500.0,
            plane_normal: [0.0, 1.0, 0.0],
            plane_constant: 0.0,
        }
    }
}

impl OrbitOptions {
    /// The reference plane described by `plane_normal`/`plane_constant`.
    #[must_use]
    pub fn plane(&self) -> Plane {
        Plane::new(Vec3::from_array(self.plane_normal), self.plane_constant)
    }

    /// Reject limits the pose model cannot honor.
    pub fn validate(&self) -> Result<(), GestureError> {
        let limits = [
            ("min_tilt", self.min_tilt),
            ("max_tilt", self.max_tilt),
            ("min_scale", self.min_scale),
            ("max_scale", self.max_scale),
            ("plane_constant", self.plane_constant),
        ];
        if let Some((name, value)) =
            limits.into_iter().find(|(_, value)| !value.is_finite())
        {
            return Err(GestureError::InvalidOptions(format!(
                "{name} must be finite, got {value}"
            )));
        }
        if !Vec3::from_array(self.plane_normal).is_finite() {
            return Err(GestureError::InvalidOptions(
                "plane_normal must be finite".into(),
            ));
        }
        if self.min_tilt > self.max_tilt {
            return Err(GestureError::InvalidOptions(format!(
                "min_tilt {} exceeds max_tilt {}",
                self.min_tilt, self.max_tilt
            )));
        }
        if self.min_scale <= 0.0 || self.min_scale > self.max_scale {
            return Err(GestureError::InvalidOptions(format!(
                "scale range [{}, {}] is empty or non-positive",
                self.min_scale, self.max_scale
            )));
        }
        if self.base_distance <= 0.0 || !self.base_distance.is_finite() {
            return Err(GestureError::InvalidOptions(format!(
                "base_distance must be positive, got {}",
                self.base_distance
            )));
        }
        if Vec3::from_array(self.plane_normal).length_squared() == 0.0 {
            return Err(GestureError::InvalidOptions(
                "plane_normal must be non-zero".into(),
            ));
        }
        Ok(())
    }
}
