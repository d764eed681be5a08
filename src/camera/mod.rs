//! Quaternion camera state engine.
//!
//! Input is accumulated with [`Camera::move_by`] and [`Camera::rotate`] and
//! applied once per frame by [`Camera::resolve`], which also produces the
//! [`ViewMatrix`]. [`CameraMode`] flags and [`AngleLimits`] shape how the
//! pending input is applied.

/// Clamp limits for world-space angles.
pub mod limits;
mod look_at;
/// View matrix output type.
pub mod matrix;
/// Mode flags and presets.
pub mod mode;
mod resolve;
/// Camera state, accessors and input accumulation.
pub mod state;

pub use limits::{AngleLimits, AxisRange};
pub use matrix::ViewMatrix;
pub use mode::CameraMode;
pub use state::Camera;
