use std::f32::consts::FRAC_PI_2;

use crate::math::CameraMath;

/// Allowed world-space range for one rotation axis, in radians.
///
/// Expected within `[-π, π]` with `min < max`. Neither is checked; an
/// inverted range restricts every delta toward `max`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AxisRange {
    /// Lower bound.
    pub min: f32,
    /// Upper bound.
    pub max: f32,
}

impl AxisRange {
    /// Range from `min` to `max`.
    #[must_use]
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Limit a pending `delta` so `current + delta` stays in range, using
    /// the backend's scalar `min`/`max`.
    ///
    /// The lower bound is applied first, so an inverted range ends at `max`.
    /// A NaN `delta` passes through.
    #[inline]
    #[must_use]
    pub fn clamp_delta<M: CameraMath>(self, current: f32, delta: f32) -> f32 {
        let delta = M::max(self.min - current, delta);
        M::min(self.max - current, delta)
    }
}

/// Clamp limits for all three rotation axes.
///
/// Only the axes whose clamp flag is set in the camera mode are consulted.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AngleLimits {
    /// Pitch range ("look up/down").
    pub pitch: AxisRange,
    /// Yaw range ("look left/right").
    pub yaw: AxisRange,
    /// Roll range ("tilt head").
    pub roll: AxisRange,
}

impl AngleLimits {
    /// ±90° pitch, the usual range for first person, third person and
    /// orbital cameras.
    pub const HALF_TURN_PITCH: Self = Self::pitch_only(-FRAC_PI_2, FRAC_PI_2);

    /// Limits with only the pitch range set.
    #[must_use]
    pub const fn pitch_only(min: f32, max: f32) -> Self {
        Self {
            pitch: AxisRange::new(min, max),
            yaw: AxisRange::new(0.0, 0.0),
            roll: AxisRange::new(0.0, 0.0),
        }
    }
}
