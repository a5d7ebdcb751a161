use glam::{Mat4, Vec3};

use crate::camera::constraints::ConstraintChecker;
use crate::camera::core::{perspective, CameraBasis, CameraUniform};
use crate::error::AquariaError;
use crate::options::CameraOptions;

/// Direction of a single camera move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    /// Along the viewing direction.
    Forward,
    /// Against the viewing direction.
    Back,
    /// Against the right vector.
    Left,
    /// Along the right vector.
    Right,
}

impl MoveDirection {
    /// Order in which held directions are applied within a frame.
    pub const FRAME_ORDER: [Self; 4] =
        [Self::Forward, Self::Left, Self::Back, Self::Right];
}

/// First-person walking camera with constrained movement.
///
/// Angles are stored in degrees. The basis is re-derived whenever yaw or
/// pitch changes, and pitch and zoom are clamped after every update.
#[derive(Debug, Clone)]
pub struct CameraController {
    position: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    zoom: f32,
    basis: CameraBasis,

    movement_speed: f32,
    sensitivity: f32,
    first_person: bool,
    fixed_height: f32,
    zoom_enabled: bool,
    znear: f32,
    zfar: f32,
    pitch_limits: [f32; 2],
    zoom_limits: [f32; 2],

    constraints: ConstraintChecker,
}

impl CameraController {
    /// Build a camera from options and the scene's movement constraints.
    pub fn new(
        opts: &CameraOptions,
        constraints: ConstraintChecker,
    ) -> Result<Self, AquariaError> {
        opts.validate()?;

        let world_up = Vec3::from(opts.world_up).normalize();
        let [pitch_min, pitch_max] = opts.pitch_limits;
        let [zoom_min, zoom_max] = opts.zoom_limits;
        let pitch = opts.pitch.clamp(pitch_min, pitch_max);

        let mut position = Vec3::from(opts.position);
        if opts.first_person {
            position.y = opts.fixed_height;
        }

        Ok(Self {
            position,
            world_up,
            yaw: opts.yaw,
            pitch,
            zoom: opts.initial_zoom.clamp(zoom_min, zoom_max),
            basis: CameraBasis::from_angles(opts.yaw, pitch, world_up),
            movement_speed: opts.movement_speed,
            sensitivity: opts.pointer_sensitivity,
            first_person: opts.first_person,
            fixed_height: opts.fixed_height,
            zoom_enabled: opts.zoom_enabled,
            znear: opts.znear,
            zfar: opts.zfar,
            pitch_limits: opts.pitch_limits,
            zoom_limits: opts.zoom_limits,
            constraints,
        })
    }

    // -- Movement --

    /// Try to move one step of `speed * dt` in `direction`.
    ///
    /// The move is applied only when the constraint checker accepts the
    /// candidate position; otherwise the position is held. Returns whether
    /// the move was accepted. In first-person mode the height is reset to
    /// the fixed eye height either way.
    pub fn move_in(&mut self, direction: MoveDirection, dt: f32) -> bool {
        let step = self.movement_speed * dt;
        let offset = match direction {
            MoveDirection::Forward => self.basis.front * step,
            MoveDirection::Back => -self.basis.front * step,
            MoveDirection::Left => -self.basis.right * step,
            MoveDirection::Right => self.basis.right * step,
        };
        let candidate = self.position + offset;

        let accepted = self.constraints.allows(candidate);
        if accepted {
            self.position = candidate;
        } else {
            log::trace!("camera move {direction:?} to {candidate} rejected");
        }
        if self.first_person {
            self.position.y = self.fixed_height;
        }
        accepted
    }

    /// Turn by pointer deltas, scaled by the sensitivity. Positive `dy`
    /// pitches up.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;
        let [min, max] = self.pitch_limits;
        self.pitch = (self.pitch + dy * self.sensitivity).clamp(min, max);
        self.basis =
            CameraBasis::from_angles(self.yaw, self.pitch, self.world_up);
    }

    /// Narrow (positive `dy`) or widen the field of view. Ignored while zoom
    /// is disabled.
    pub fn zoom(&mut self, dy: f32) {
        if !self.zoom_enabled {
            return;
        }
        let [min, max] = self.zoom_limits;
        self.zoom = (self.zoom - dy).clamp(min, max);
    }

    // -- Matrices --

    /// Look-at view matrix from the eye along the front vector.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(
            self.position,
            self.position + self.basis.front,
            self.basis.up,
        )
    }

    /// Perspective projection using the zoom as vertical field of view.
    #[must_use]
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        perspective(self.zoom, aspect, self.znear, self.zfar)
    }

    /// GPU uniform for the current state.
    #[must_use]
    pub fn uniform(&self, aspect: f32) -> CameraUniform {
        let mut uniform = CameraUniform::new();
        uniform.update(
            self.view_matrix(),
            self.projection_matrix(aspect),
            self.position,
            self.basis.front,
            self.zoom,
        );
        uniform
    }

    // -- Accessors --

    /// Eye position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Yaw in degrees.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in degrees.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Vertical field of view in degrees.
    #[must_use]
    pub fn fov(&self) -> f32 {
        self.zoom
    }

    /// Current orthonormal frame.
    #[must_use]
    pub fn basis(&self) -> &CameraBasis {
        &self.basis
    }

    /// Movement constraints fixed at setup.
    #[must_use]
    pub fn constraints(&self) -> &ConstraintChecker {
        &self.constraints
    }

    /// Whether the eye height is held fixed.
    #[must_use]
    pub fn is_first_person(&self) -> bool {
        self.first_person
    }
}
