use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::{AngleLimits, AxisRange};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
#[schemars(title = "Angle Limits", inline)]
#[serde(default)]
/// World-space angle limits in radians. Only consulted for axes whose clamp
/// toggle is on.
pub struct LimitOptions {
    /// Lowest pitch (looking up).
    #[schemars(title = "Min Pitch", range(min = -3.1416, max = 3.1416), extend("step" = 0.01))]
    pub pitch_min: f32,
    /// Highest pitch (looking down).
    #[schemars(title = "Max Pitch", range(min = -3.1416, max = 3.1416), extend("step" = 0.01))]
    pub pitch_max: f32,
    /// Lowest yaw.
    #[schemars(title = "Min Yaw", range(min = -3.1416, max = 3.1416), extend("step" = 0.01))]
    pub yaw_min: f32,
    /// Highest yaw.
    #[schemars(title = "Max Yaw", range(min = -3.1416, max = 3.1416), extend("step" = 0.01))]
    pub yaw_max: f32,
    /// Lowest roll.
    #[schemars(title = "Min Roll", range(min = -3.1416, max = 3.1416), extend("step" = 0.01))]
    pub roll_min: f32,
    /// Highest roll.
    #[schemars(title = "Max Roll", range(min = -3.1416, max = 3.1416), extend("step" = 0.01))]
    pub roll_max: f32,
}

impl LimitOptions {
    /// Options mirroring `limits`.
    #[must_use]
    pub const fn from_limits(limits: AngleLimits) -> Self {
        Self {
            pitch_min: limits.pitch.min,
            pitch_max: limits.pitch.max,
            yaw_min: limits.yaw.min,
            yaw_max: limits.yaw.max,
            roll_min: limits.roll.min,
            roll_max: limits.roll.max,
        }
    }

    /// The limits these options describe.
    #[must_use]
    pub const fn to_limits(&self) -> AngleLimits {
        AngleLimits {
            pitch: AxisRange::new(self.pitch_min, self.pitch_max),
            yaw: AxisRange::new(self.yaw_min, self.yaw_max),
            roll: AxisRange::new(self.roll_min, self.roll_max),
        }
    }

    /// Ranges with `min > max`. Such limits are accepted but restrict the
    /// axis in surprising ways.
    #[must_use]
    pub fn inverted_axes(&self) -> Vec<&'static str> {
        [
            ("pitch", self.pitch_min, self.pitch_max),
            ("yaw", self.yaw_min, self.yaw_max),
            ("roll", self.roll_min, self.roll_max),
        ]
        .into_iter()
        .filter(|(_, min, max)| min > max)
        .map(|(axis, _, _)| axis)
        .collect()
    }
}
