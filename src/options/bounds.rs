use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::AquariaError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Bounds", inline)]
#[serde(default)]
/// Camera movement constraint parameters.
///
/// The walkable rectangle is derived at setup from the wall model's vertex
/// extents; `fallback` is only used when the model source has no wall
/// geometry.
pub struct BoundsOptions {
    /// Radius of the solid central tank the camera may not enter.
    #[schemars(title = "Tank Radius", range(min = 0.0, max = 20.0), extend("step" = 0.1))]
    pub exclusion_radius: f32,
    /// Extra clearance kept outside the exclusion radius.
    #[schemars(skip)]
    pub exclusion_margin: f32,
    /// Distance the walkable rectangle is pulled in from each wall.
    #[schemars(skip)]
    pub wall_inset: f32,
    /// `[x_min, x_max, z_min, z_max]` used without wall geometry.
    #[schemars(skip)]
    pub fallback: [f32; 4],
}

impl Default for BoundsOptions {
    fn default() -> Self {
        Self {
            exclusion_radius: 7.5,
            exclusion_margin: 0.2,
            wall_inset: 0.25,
            fallback: [-50.0, 50.0, -50.0, 50.0],
        }
    }
}

impl BoundsOptions {
    /// Reject negative radii and inverted fallback rectangles.
    pub fn validate(&self) -> Result<(), AquariaError> {
        if !(self.exclusion_radius >= 0.0) {
            return Err(AquariaError::config(format!(
                "bounds.exclusion_radius must be non-negative, got {}",
                self.exclusion_radius
            )));
        }
        if !(self.exclusion_margin >= 0.0) {
            return Err(AquariaError::config(
                "bounds.exclusion_margin must be non-negative",
            ));
        }
        if !(self.wall_inset >= 0.0) {
            return Err(AquariaError::config(
                "bounds.wall_inset must be non-negative",
            ));
        }
        let [x_min, x_max, z_min, z_max] = self.fallback;
        if !(x_min <= x_max && z_min <= z_max) {
            return Err(AquariaError::config(
                "bounds.fallback must be ordered [x_min, x_max, z_min, z_max]",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_radius_rejected() {
        let opts = BoundsOptions {
            exclusion_radius: -0.5,
            ..BoundsOptions::default()
        };
        assert!(opts.validate().is_err());
    }

    #[test]
    fn inverted_fallback_rejected() {
        let opts = BoundsOptions {
            fallback: [5.0, -5.0, -5.0, 5.0],
            ..BoundsOptions::default()
        };
        assert!(opts.validate().is_err());
        assert!(BoundsOptions::default().validate().is_ok());
    }
}
