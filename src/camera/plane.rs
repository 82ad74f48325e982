//! Reference plane and ray primitives used by the screen-to-world mapper.

use glam::Vec3;

/// A plane in 3D space holding every point `p` with `normal · p = constant`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal.
    pub normal: Vec3,
    /// Signed distance of the plane from the origin along `normal`.
    pub constant: f32,
}

impl Plane {
    /// Create a plane, normalizing `normal` and rescaling `constant` to
    /// match.
    #[must_use]
    pub fn new(normal: Vec3, constant: f32) -> Self {
        let len = normal.length();
        if len > 0.0 {
            Self {
                normal: normal / len,
                constant: constant / len,
            }
        } else {
            Self {
                normal: Vec3::ZERO,
                constant: 0.0,
            }
        }
    }

    /// Point on the plane closest to the origin; the orbit pivot.
    #[must_use]
    pub fn reference_point(&self) -> Vec3 {
        self.normal * self.constant
    }

    /// Signed distance from point to plane (positive = in front of the
    /// normal).
    #[inline]
    #[must_use]
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) - self.constant
    }
}

/// Half-line starting at `origin` heading along `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point.
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl Ray {
    /// First point where the ray meets `plane`.
    ///
    /// Returns `None` when the ray runs parallel to the plane or the plane
    /// lies behind the origin. An origin already on the plane is its own
    /// intersection.
    #[must_use]
    pub fn intersect_plane(&self, plane: &Plane) -> Option<Vec3> {
        let start = plane.distance_to_point(self.origin);
        if start == 0.0 {
            return Some(self.origin);
        }
        let denominator = plane.normal.dot(self.direction);
        if denominator == 0.0 {
            return None;
        }
        let t = -start / denominator;
        if t < 0.0 {
            return None;
        }
        Some(self.origin + self.direction * t)
    }
}
