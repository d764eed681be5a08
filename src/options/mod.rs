//! Camera configuration with TOML preset support.
//!
//! Mode toggles, angle limits and the initial target serialize to/from TOML
//! so camera setups can be stored as presets. All structs use
//! `#[serde(default)]`, so partial files only override what they name.

mod limits;
mod mode;

use std::path::Path;

pub use limits::LimitOptions;
pub use mode::{ModeOptions, ModePreset};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::{AngleLimits, CameraMode};
use crate::error::CameraError;

/// Default target distance for the third person preset.
const THIRD_PERSON_DISTANCE: f32 = 5.0;

/// Top-level camera options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
#[serde(default)]
pub struct CameraOptions {
    /// Initial target position.
    #[schemars(skip)]
    pub target_position: [f32; 3],
    /// Eye-to-target distance. Negative values zoom through the target.
    #[schemars(title = "Target Distance", range(min = -100.0, max = 100.0), extend("step" = 0.1))]
    pub target_distance: f32,
    /// Mode flag toggles.
    pub mode: ModeOptions,
    /// World-space angle limits.
    pub limits: LimitOptions,
}

impl CameraOptions {
    /// Options for a named preset, with the limits that preset expects.
    #[must_use]
    pub fn from_preset(preset: ModePreset) -> Self {
        let limits = match preset {
            ModePreset::Free => AngleLimits::default(),
            ModePreset::FirstPerson
            | ModePreset::ThirdPerson
            | ModePreset::Orbital => AngleLimits::HALF_TURN_PITCH,
        };
        let target_distance = match preset {
            ModePreset::ThirdPerson => THIRD_PERSON_DISTANCE,
            _ => 0.0,
        };
        Self {
            target_position: [0.0; 3],
            target_distance,
            mode: preset.into(),
            limits: LimitOptions::from_limits(limits),
        }
    }

    /// The mode flags these options select.
    #[must_use]
    pub fn camera_mode(&self) -> CameraMode {
        self.mode.to_mode()
    }

    /// Generate JSON Schema describing the options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(CameraOptions)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`CameraError::Io`] if the file cannot be read and
    /// [`CameraError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, CameraError> {
        let content = std::fs::read_to_string(path).map_err(CameraError::Io)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| CameraError::OptionsParse(e.to_string()))?;
        for axis in options.limits.inverted_axes() {
            log::warn!(
                "{}: {axis} limits have min > max",
                path.display()
            );
        }
        log::debug!("loaded camera options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed), creating parent
    /// directories as needed.
    ///
    /// # Errors
    ///
    /// [`CameraError::Io`] if the file or its directories cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), CameraError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CameraError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(CameraError::Io)?;
        }
        std::fs::write(path, content).map_err(CameraError::Io)?;
        log::debug!("saved camera options to {}", path.display());
        Ok(())
    }

    /// Names of the saved camera setups (`*.toml` stems) in `dir`, sorted.
    /// An unreadable or missing directory has none.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                log::debug!("no camera presets in {}: {e}", dir.display());
                return Vec::new();
            }
        };
        let mut names: Vec<String> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
            .filter_map(|path| {
                path.file_stem().and_then(|s| s.to_str()).map(str::to_owned)
            })
            .collect();
        names.sort();
        names
    }
}
