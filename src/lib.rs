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

//! Quaternion-based 3D camera.
//!
//! A [`Camera`] keeps an orientation quaternion, a target point and a target
//! distance. Movement and rotation requests are queued and applied together
//! by [`Camera::resolve`], once per frame, which renormalizes the
//! orientation and returns a [`ViewMatrix`] ready for upload.
//!
//! # Key entry points
//!
//! - [`camera::Camera`] - the camera state engine
//! - [`camera::CameraMode`] - behaviour flags (roll lock, level movement,
//!   angle clamping) and the first person, third person and orbital presets
//! - [`math::CameraMath`] - the pluggable vector/quaternion backend
//! - [`options::CameraOptions`] - TOML-backed configuration
//!
//! # Example
//!
//! ```
//! use glam::Vec3;
//! use quatcam::{AngleLimits, Camera, CameraMode};
//!
//! let mut camera: Camera = Camera::new();
//! camera.set_mode(CameraMode::FIRST_PERSON);
//! camera.set_limits(AngleLimits::HALF_TURN_PITCH);
//!
//! // Queue this frame's input...
//! camera.rotate(Vec3::new(0.1, 0.25, 0.0));
//! camera.move_by(Vec3::new(1.0, 0.0, 0.0));
//!
//! // ...and apply it.
//! let view = camera.resolve();
//! assert_eq!(view.as_array()[15], 1.0);
//! ```
//!
//! # Coordinate system
//!
//! The world is left-handed: +Z is forward, +Y up and +X right. Angles
//! are in radians.

pub mod camera;
pub mod error;
pub mod math;
pub mod options;

pub use camera::{AngleLimits, AxisRange, Camera, CameraMode, ViewMatrix};
pub use error::CameraError;
pub use math::{ArrayMath, CameraMath, GlamMath};
pub use options::CameraOptions;
