use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::AquariaError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Motion", inline)]
#[serde(default)]
/// Procedural motion model coefficients.
///
/// Angles are radians, rates are per second of session time unless noted.
pub struct MotionOptions {
    /// Angular rate of orbit-swim (ω).
    #[schemars(title = "Swim Speed", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub orbit_rate: f32,
    /// Phase offset between consecutive swimmers of one group.
    #[schemars(skip)]
    pub orbit_phase_spacing: f32,
    /// Peak yaw of the per-segment tail wag.
    #[schemars(title = "Tail Wag", range(min = 0.0, max = 0.5), extend("step" = 0.01))]
    pub wag_amplitude: f32,
    /// Temporal frequency of the tail wag.
    #[schemars(skip)]
    pub wag_frequency: f32,
    /// Wag phase step between consecutive segments.
    #[schemars(skip)]
    pub wag_phase_step: f32,
    /// Vertical bob amplitude of jellyfish.
    #[schemars(title = "Jellyfish Bob", range(min = 0.0, max = 1.5), extend("step" = 0.05))]
    pub bob_amplitude: f32,
    /// Temporal frequency of the bob.
    #[schemars(skip)]
    pub bob_frequency: f32,
    /// Bob phase step between consecutive jellyfish.
    #[schemars(skip)]
    pub bob_phase_step: f32,
    /// Resting height the bob oscillates around.
    #[schemars(skip)]
    pub bob_height: f32,
    /// Yaw added to every jellyfish each frame, in degrees.
    #[schemars(skip)]
    pub spin_step_degrees: f32,
    /// Peak roll of each kelp segment.
    #[schemars(title = "Kelp Sway", range(min = 0.0, max = 0.3), extend("step" = 0.01))]
    pub sway_amplitude: f32,
    /// Temporal frequency of the kelp sway.
    #[schemars(skip)]
    pub sway_frequency: f32,
    /// Sway phase step between consecutive kelp segments.
    #[schemars(skip)]
    pub sway_phase_step: f32,
}

impl Default for MotionOptions {
    fn default() -> Self {
        Self {
            orbit_rate: 0.1,
            orbit_phase_spacing: 1.0,
            wag_amplitude: 0.1,
            wag_frequency: 5.0,
            wag_phase_step: 5.0,
            bob_amplitude: 0.5,
            bob_frequency: 0.5,
            bob_phase_step: 0.5,
            bob_height: 1.5,
            spin_step_degrees: 0.3,
            sway_amplitude: 0.05,
            sway_frequency: 0.75,
            sway_phase_step: 0.5,
        }
    }
}

impl MotionOptions {
    /// Reject non-finite coefficients.
    pub fn validate(&self) -> Result<(), AquariaError> {
        let coefficients = [
            ("orbit_rate", self.orbit_rate),
            ("orbit_phase_spacing", self.orbit_phase_spacing),
            ("wag_amplitude", self.wag_amplitude),
            ("wag_frequency", self.wag_frequency),
            ("wag_phase_step", self.wag_phase_step),
            ("bob_amplitude", self.bob_amplitude),
            ("bob_frequency", self.bob_frequency),
            ("bob_phase_step", self.bob_phase_step),
            ("bob_height", self.bob_height),
            ("spin_step_degrees", self.spin_step_degrees),
            ("sway_amplitude", self.sway_amplitude),
            ("sway_frequency", self.sway_frequency),
            ("sway_phase_step", self.sway_phase_step),
        ];
        for (name, value) in coefficients {
            if !value.is_finite() {
                return Err(AquariaError::config(format!(
                    "motion.{name} must be finite, got {value}"
                )));
            }
        }
        Ok(())
    }
}
