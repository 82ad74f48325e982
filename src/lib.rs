// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Pointer and touch gesture interpreter driving an orbit camera.
//!
//! Raw mouse, touch and wheel events are classified into click, pan,
//! rotate and zoom gestures. Gestures move a camera that orbits a pivot on
//! a reference ground plane; clicks are reported with the world point
//! under the cursor.
//!
//! # Key entry points
//!
//! - [`controller::GestureController`] - owns the whole pipeline; feed it
//!   [`input::InputEvent`]s and read back the camera
//! - [`camera::CameraPose`] - clamped orbit/tilt/scale/pan parameters and
//!   the screen → world mapper
//! - [`options::Options`] - runtime configuration with TOML presets
//! - [`replay`] - deterministic playback of recorded input traces
//!
//! # Architecture
//!
//! Everything runs on the caller's thread. `handle` runs the
//! [`input::GestureClassifier`] state machine, which mutates the pose and
//! may produce a [`events::GestureEvent`] for subscribed listeners. With
//! damping enabled, pose changes are batched until the host's per-frame
//! [`controller::GestureController::update`] call.

pub mod camera;
pub mod controller;
pub mod error;
pub mod events;
pub mod input;
pub mod options;
pub mod replay;

pub use controller::GestureController;
pub use error::GestureError;
pub use events::{GestureEvent, GestureEventKind, ListenerId};
pub use input::{InputEvent, InteractionState};
pub use options::Options;
