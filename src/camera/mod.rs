//! Orbit camera around a ground plane.
//!
//! Provides the camera value the host renders from, the reference plane
//! and ray primitives, and the pose model that integrates orbit, tilt,
//! zoom and pan into a camera transform.

/// Core camera struct and projection helpers.
pub mod core;
/// Reference plane and view ray.
pub mod plane;
/// Clamped orbit parameters and the pose integrator.
pub mod pose;

pub use self::core::Camera;
pub use plane::{Plane, Ray};
pub use pose::CameraPose;
