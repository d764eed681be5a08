use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::CameraMode;

/// Named mode presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModePreset {
    /// No restrictions.
    #[default]
    Free,
    /// Level movement, no roll, clamped pitch.
    FirstPerson,
    /// First person flags, viewed from behind the target.
    ThirdPerson,
    /// Orbit around the target.
    Orbital,
}

impl ModePreset {
    /// The mode flags this preset stands for.
    #[must_use]
    pub const fn mode(self) -> CameraMode {
        match self {
            Self::Free => CameraMode::FREE,
            Self::FirstPerson => CameraMode::FIRST_PERSON,
            Self::ThirdPerson => CameraMode::THIRD_PERSON,
            Self::Orbital => CameraMode::ORBITAL,
        }
    }
}

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[schemars(title = "Mode", inline)]
#[serde(default)]
/// Camera mode flags, one toggle each.
#[allow(clippy::struct_excessive_bools)]
pub struct ModeOptions {
    /// Ignore roll input.
    #[schemars(title = "Disable Roll")]
    pub disable_roll: bool,
    /// Keep forward/right movement level.
    #[schemars(title = "Move In World Plane")]
    pub move_in_world_plane: bool,
    /// Enforce the pitch limits.
    #[schemars(title = "Clamp Pitch")]
    pub clamp_pitch: bool,
    /// Enforce the yaw limits.
    #[schemars(title = "Clamp Yaw")]
    pub clamp_yaw: bool,
    /// Enforce the roll limits.
    #[schemars(title = "Clamp Roll")]
    pub clamp_roll: bool,
}

impl ModeOptions {
    /// Toggles matching `mode`.
    #[must_use]
    pub const fn from_mode(mode: CameraMode) -> Self {
        Self {
            disable_roll: mode.contains(CameraMode::DISABLE_ROLL),
            move_in_world_plane: mode.contains(CameraMode::MOVE_IN_WORLD_PLANE),
            clamp_pitch: mode.contains(CameraMode::CLAMP_PITCH),
            clamp_yaw: mode.contains(CameraMode::CLAMP_YAW),
            clamp_roll: mode.contains(CameraMode::CLAMP_ROLL),
        }
    }

    /// Combine the toggles into mode flags.
    #[must_use]
    pub fn to_mode(&self) -> CameraMode {
        let mut mode = CameraMode::FREE;
        mode.set(CameraMode::DISABLE_ROLL, self.disable_roll);
        mode.set(CameraMode::MOVE_IN_WORLD_PLANE, self.move_in_world_plane);
        mode.set(CameraMode::CLAMP_PITCH, self.clamp_pitch);
        mode.set(CameraMode::CLAMP_YAW, self.clamp_yaw);
        mode.set(CameraMode::CLAMP_ROLL, self.clamp_roll);
        mode
    }
}

impl From<ModePreset> for ModeOptions {
    fn from(preset: ModePreset) -> Self {
        Self::from_mode(preset.mode())
    }
}
