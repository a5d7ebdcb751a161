use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::AquariaError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Feeding", inline)]
#[serde(default)]
/// Food drop and shark pursuit parameters.
pub struct FeedingOptions {
    /// Where the food appears when a session starts.
    #[schemars(skip)]
    pub drop_point: [f32; 3],
    /// Food sink rate; each frame the food drops by
    /// `elapsed_session_time * descent_rate`.
    #[schemars(title = "Sink Rate", range(min = 0.000_001, max = 0.001))]
    pub descent_rate: f32,
    /// Height below which the food is considered lost.
    #[schemars(skip)]
    pub floor_height: f32,
    /// Distance the shark travels toward the food per frame.
    #[schemars(title = "Shark Speed", range(min = 0.001, max = 0.05), extend("step" = 0.001))]
    pub pursuit_step: f32,
    /// Yaw change of the pursuing shark per frame, in radians.
    #[schemars(skip)]
    pub turn_step: f32,
    /// Shark-to-food distance at which the food counts as eaten.
    #[schemars(skip)]
    pub capture_distance: f32,
}

impl Default for FeedingOptions {
    fn default() -> Self {
        Self {
            drop_point: [4.0, 2.5, 4.0],
            descent_rate: 0.000_02,
            floor_height: 0.0,
            pursuit_step: 0.005,
            turn_step: 0.001,
            capture_distance: 0.1,
        }
    }
}

impl FeedingOptions {
    /// Reject settings under which a session could never end.
    pub fn validate(&self) -> Result<(), AquariaError> {
        if !(self.descent_rate > 0.0) {
            return Err(AquariaError::config(
                "feeding.descent_rate must be positive so sessions terminate",
            ));
        }
        if !(self.pursuit_step >= 0.0 && self.turn_step >= 0.0) {
            return Err(AquariaError::config(
                "feeding.pursuit_step and feeding.turn_step must be \
                 non-negative",
            ));
        }
        if !(self.capture_distance > 0.0) {
            return Err(AquariaError::config(
                "feeding.capture_distance must be positive",
            ));
        }
        if !(self.drop_point.iter().all(|c| c.is_finite())
            && self.floor_height.is_finite())
        {
            return Err(AquariaError::config(
                "feeding.drop_point and feeding.floor_height must be finite",
            ));
        }
        Ok(())
    }
}
