//! Centralized scene options with TOML preset support.
//!
//! All tweakable settings (camera, movement bounds, motion coefficients,
//! feeding behavior, population, keybindings) are consolidated here.
//! Options serialize to/from TOML so a tank setup can be stored as a
//! preset and reloaded.

mod bounds;
mod camera;
mod feeding;
mod keybindings;
mod motion;
mod population;

use std::path::Path;

pub use bounds::BoundsOptions;
pub use camera::CameraOptions;
pub use feeding::FeedingOptions;
pub use keybindings::KeybindingOptions;
pub use motion::MotionOptions;
pub use population::{PopulationOptions, SpawnGroup, SpawnRange};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::AquariaError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera placement, projection and control parameters.
    pub camera: CameraOptions,
    /// Camera movement constraints.
    pub bounds: BoundsOptions,
    /// Procedural motion coefficients.
    pub motion: MotionOptions,
    /// Food drop and shark pursuit parameters.
    pub feeding: FeedingOptions,
    /// Entity spawn groups.
    #[schemars(skip)]
    pub population: PopulationOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// The JSON Schema as pretty-printed JSON text, for UI front ends.
    pub fn json_schema_string() -> Result<String, AquariaError> {
        serde_json::to_string_pretty(&Self::json_schema())
            .map_err(|e| AquariaError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// The loaded options are validated before being returned.
    pub fn load(path: &Path) -> Result<Self, AquariaError> {
        let content = std::fs::read_to_string(path).map_err(AquariaError::Io)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| AquariaError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), AquariaError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| AquariaError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(AquariaError::Io)?;
        }
        std::fs::write(path, content).map_err(AquariaError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Check every section, returning the first problem found.
    pub fn validate(&self) -> Result<(), AquariaError> {
        self.camera.validate()?;
        self.bounds.validate()?;
        self.motion.validate()?;
        self.feeding.validate()?;
        self.population.validate()
    }
}
