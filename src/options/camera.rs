use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::GestureError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(
        title = "Field of View",
        range(min = 20.0, max = 90.0),
        extend("step" = 1.0)
    )]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 1.0,
            zfar: 10_000.0,
        }
    }
}

impl CameraOptions {
    /// Reject projections that cannot produce a finite matrix.
    pub fn validate(&self) -> Result<(), GestureError> {
        if !(self.fovy > 0.0 && self.fovy < 180.0) {
            return Err(GestureError::InvalidOptions(format!(
                "fovy must lie in (0, 180), got {}",
                self.fovy
            )));
        }
        let finite_range = self.znear > 0.0
            && self.zfar > self.znear
            && self.zfar.is_finite();
        if !finite_range {
            return Err(GestureError::InvalidOptions(format!(
                "clip range [{}, {}] is invalid",
                self.znear, self.zfar
            )));
        }
        Ok(())
    }
}
