//! Recorded input traces and their deterministic playback.
//!
//! A trace is a JSON array of steps:
//!
//! ```json
//! [
//!   {"step": "resize", "width": 800, "height": 600},
//!   {"step": "input", "event": {"type": "pointer_down", "button": "left",
//!     "position": [400.0, 300.0], "client": [400.0, 300.0],
//!     "over_surface": true}},
//!   {"step": "tick"}
//! ]
//! ```

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::controller::GestureController;
use crate::error::GestureError;
use crate::events::{GestureEvent, GestureEventKind};
use crate::input::{InputEvent, InteractionState};

/// One step of a recorded session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum TraceStep {
    /// Feed a raw input event.
    Input {
        /// The event to feed.
        event: InputEvent,
    },
    /// Advance one frame.
    Tick,
    /// Resize the surface.
    Resize {
        /// New width in pixels.
        width: u32,
        /// New height in pixels.
        height: u32,
    },
    /// Reset the controller.
    Reset,
}

/// An ordered list of steps.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace {
    /// Steps in playback order.
    pub steps: Vec<TraceStep>,
}

impl Trace {
    /// Parse a trace from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`GestureError::TraceParse`] if `json` is not a valid trace.
    pub fn from_json(json: &str) -> Result<Self, GestureError> {
        serde_json::from_str(json)
            .map_err(|e| GestureError::TraceParse(e.to_string()))
    }

    /// Load a trace from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`GestureError::Io`] if the file cannot be read, or
    /// [`GestureError::TraceParse`] if it is not a valid trace.
    pub fn load(path: &Path) -> Result<Self, GestureError> {
        let content = std::fs::read_to_string(path)?;
        let trace = Self::from_json(&content)?;
        log::info!(
            "Loaded trace with {} steps from {}",
            trace.steps.len(),
            path.display()
        );
        Ok(trace)
    }
}

/// Pose parameters and camera position after playback.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PoseSnapshot {
    /// Orbit angle in degrees.
    pub orbit_angle: f32,
    /// Tilt angle in degrees.
    pub tilt_angle: f32,
    /// Zoom scale.
    pub scale: f32,
    /// Accumulated pan offset.
    pub offset: Vec3,
    /// Camera eye position.
    pub camera_position: Vec3,
}

impl PoseSnapshot {
    /// Capture the controller's current pose.
    #[must_use]
    pub fn capture(controller: &GestureController) -> Self {
        let pose = controller.pose();
        Self {
            orbit_angle: pose.orbit_angle(),
            tilt_angle: pose.tilt_angle(),
            scale: pose.scale(),
            offset: pose.offset(),
            camera_position: pose.camera().position,
        }
    }
}

/// Everything observable from a playback.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplaySummary {
    /// Gesture events in emission order.
    pub events: Vec<GestureEvent>,
    /// Interaction state after the last step.
    pub state: InteractionState,
    /// Final pose.
    pub pose: PoseSnapshot,
}

/// Play `trace` through `controller`, collecting every emitted event.
///
/// Listeners already registered on the controller still fire; the
/// collectors added here are removed before returning.
pub fn replay(
    controller: &mut GestureController,
    trace: &Trace,
) -> ReplaySummary {
    let collected = Rc::new(RefCell::new(Vec::new()));
    let ids: Vec<_> = [
        GestureEventKind::Hover,
        GestureEventKind::Click,
        GestureEventKind::RightClick,
    ]
    .into_iter()
    .map(|kind| {
        let sink = Rc::clone(&collected);
        controller.on(kind, move |event| sink.borrow_mut().push(event.clone()))
    })
    .collect();

    for step in &trace.steps {
        match step {
            TraceStep::Input { event } => {
                let _ = controller.handle(event.clone());
            }
            TraceStep::Tick => {
                let _ = controller.update();
            }
            TraceStep::Resize { width, height } => {
                controller.resize(*width, *height);
            }
            TraceStep::Reset => controller.reset(),
        }
    }

    for id in ids {
        let _ = controller.off(id);
    }
    log::debug!("replayed {} steps", trace.steps.len());

    let events = collected.take();
    ReplaySummary {
        events,
        state: controller.state(),
        pose: PoseSnapshot::capture(controller),
    }
}
