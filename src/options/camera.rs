use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::AquariaError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera placement, projection and control parameters.
pub struct CameraOptions {
    /// Initial eye position in world space.
    #[schemars(skip)]
    pub position: [f32; 3],
    /// World-up reference used to derive the camera basis.
    #[schemars(skip)]
    pub world_up: [f32; 3],
    /// Initial yaw in degrees (-90 looks down -z).
    #[schemars(skip)]
    pub yaw: f32,
    /// Initial pitch in degrees.
    #[schemars(skip)]
    pub pitch: f32,
    /// Hold the eye at `fixed_height` after every move.
    #[schemars(title = "First Person")]
    pub first_person: bool,
    /// Eye height used in first-person mode.
    #[schemars(title = "Eye Height", range(min = 0.5, max = 3.0), extend("step" = 0.05))]
    pub fixed_height: f32,
    /// Whether scroll input changes the field of view.
    #[schemars(title = "Zoom Enabled")]
    pub zoom_enabled: bool,
    /// Movement speed in world units per second.
    #[schemars(title = "Move Speed", range(min = 0.5, max = 10.0), extend("step" = 0.1))]
    pub movement_speed: f32,
    /// Degrees of rotation per pointer pixel.
    #[schemars(title = "Look Sensitivity", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub pointer_sensitivity: f32,
    /// Initial vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 1.0, max = 60.0), extend("step" = 1.0))]
    pub initial_zoom: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Allowed pitch range in degrees, `[min, max]`.
    #[schemars(skip)]
    pub pitch_limits: [f32; 2],
    /// Allowed field-of-view range in degrees, `[min, max]`.
    #[schemars(skip)]
    pub zoom_limits: [f32; 2],
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            position: [0.0, 1.8, 9.0],
            world_up: [0.0, 1.0, 0.0],
            yaw: -90.0,
            pitch: 0.0,
            first_person: true,
            fixed_height: 1.8,
            zoom_enabled: false,
            movement_speed: 2.0,
            pointer_sensitivity: 0.1,
            initial_zoom: 50.0,
            znear: 0.1,
            zfar: 100.0,
            pitch_limits: [-89.0, 89.0],
            zoom_limits: [1.0, 60.0],
        }
    }
}

impl CameraOptions {
    /// Reject option combinations the camera cannot honor.
    pub fn validate(&self) -> Result<(), AquariaError> {
        let [pitch_min, pitch_max] = self.pitch_limits;
        if !(pitch_min <= pitch_max) {
            return Err(AquariaError::config(format!(
                "camera.pitch_limits min {pitch_min} exceeds max {pitch_max}"
            )));
        }
        if pitch_min < -90.0 || pitch_max > 90.0 {
            return Err(AquariaError::config(
                "camera.pitch_limits must stay within [-90, 90] degrees",
            ));
        }
        let [zoom_min, zoom_max] = self.zoom_limits;
        if !(zoom_min > 0.0 && zoom_min <= zoom_max && zoom_max < 180.0) {
            return Err(AquariaError::config(format!(
                "camera.zoom_limits [{zoom_min}, {zoom_max}] is not a valid \
                 field-of-view range"
            )));
        }
        if !(self.movement_speed >= 0.0) {
            return Err(AquariaError::config(
                "camera.movement_speed must be non-negative",
            ));
        }
        if !(self.pointer_sensitivity >= 0.0) {
            return Err(AquariaError::config(
                "camera.pointer_sensitivity must be non-negative",
            ));
        }
        if !(self.znear > 0.0 && self.znear < self.zfar) {
            return Err(AquariaError::config(format!(
                "camera near/far planes ({}, {}) must satisfy 0 < near < far",
                self.znear, self.zfar
            )));
        }
        let up = self.world_up;
        if up.iter().all(|c| *c == 0.0) || up.iter().any(|c| !c.is_finite())
        {
            return Err(AquariaError::config(
                "camera.world_up must be a finite non-zero vector",
            ));
        }
        let finite = self.position.iter().all(|c| c.is_finite())
            && self.yaw.is_finite()
            && self.pitch.is_finite()
            && self.fixed_height.is_finite()
            && self.initial_zoom.is_finite();
        if !finite {
            return Err(AquariaError::config(
                "camera position, angles and zoom must be finite",
            ));
        }
        Ok(())
    }
}
