//! Input handling: event types, the interaction state machine, and the
//! gesture classifier that turns raw pointer/touch/wheel events into
//! camera motion and semantic gesture events.

/// Platform-agnostic input events.
pub mod event;
/// Converts raw events into pose changes and gesture events.
pub mod processor;
/// Interaction states of the classifier.
pub mod state;
/// Touch snapshots and per-finger aggregation.
pub mod touch;

/// Translation from winit window events.
#[cfg(feature = "viewer")]
pub mod adapter;

#[cfg(feature = "viewer")]
pub use adapter::WinitInputAdapter;
pub use event::{
    InputEvent, MouseButton, PointerInput, TouchInput, TouchPoint, WheelDelta,
};
pub use processor::GestureClassifier;
pub use state::InteractionState;
pub use touch::{TouchSet, TouchTracker};
