use glam::{Mat4, Vec3};

/// Orthonormal camera frame derived from yaw and pitch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    /// Viewing direction.
    pub front: Vec3,
    /// Screen-right direction.
    pub right: Vec3,
    /// Screen-up direction.
    pub up: Vec3,
}

impl CameraBasis {
    /// Derive the frame from yaw and pitch in degrees.
    ///
    /// `front = (cos yaw·cos pitch, sin pitch, sin yaw·cos pitch)`,
    /// `right = front × world_up`, `up = right × front`, all normalized.
    #[must_use]
    pub fn from_angles(yaw_deg: f32, pitch_deg: f32, world_up: Vec3) -> Self {
        let (yaw, pitch) = (yaw_deg.to_radians(), pitch_deg.to_radians());
        let front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
        let right = front.cross(world_up).normalize();
        let up = right.cross(front).normalize();
        Self { front, right, up }
    }
}

/// Build a right-handed perspective projection with `[0, 1]` depth
/// (wgpu/Vulkan convention).
#[must_use]
pub fn perspective(fovy_deg: f32, aspect: f32, znear: f32, zfar: f32) -> Mat4 {
    Mat4::perspective_rh(fovy_deg.to_radians(), aspect, znear, zfar)
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the camera matrices for a frame.
pub struct CameraUniform {
    /// View matrix.
    pub view: [[f32; 4]; 4],
    /// Projection matrix.
    pub proj: [[f32; 4]; 4],
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Camera forward direction for lighting.
    pub forward: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity matrices.
    #[must_use]
    pub fn new() -> Self {
        let identity = Mat4::IDENTITY.to_cols_array_2d();
        Self {
            view: identity,
            proj: identity,
            view_proj: identity,
            position: [0.0; 3],
            fovy: 45.0,
            forward: [0.0, 0.0, -1.0],
            _pad: 0.0,
        }
    }

    /// Fill every field from the frame's matrices and eye.
    pub fn update(
        &mut self,
        view: Mat4,
        proj: Mat4,
        eye: Vec3,
        forward: Vec3,
        fovy: f32,
    ) {
        self.view = view.to_cols_array_2d();
        self.proj = proj.to_cols_array_2d();
        self.view_proj = (proj * view).to_cols_array_2d();
        self.position = eye.to_array();
        self.forward = forward.to_array();
        self.fovy = fovy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn default_angles_look_down_negative_z() {
        let basis = CameraBasis::from_angles(-90.0, 0.0, Vec3::Y);
        assert!(basis.front.abs_diff_eq(Vec3::NEG_Z, EPSILON));
        assert!(basis.right.abs_diff_eq(Vec3::X, EPSILON));
        assert!(basis.up.abs_diff_eq(Vec3::Y, EPSILON));
    }

    #[test]
    fn basis_is_orthonormal() {
        for (yaw, pitch) in [(0.0, 0.0), (37.0, 12.5), (-140.0, -89.0), (200.0, 89.0)] {
            let b = CameraBasis::from_angles(yaw, pitch, Vec3::Y);
            for v in [b.front, b.right, b.up] {
                assert!((v.length() - 1.0).abs() < 1e-4);
            }
            assert!(b.front.dot(b.right).abs() < 1e-4);
            assert!(b.front.dot(b.up).abs() < 1e-4);
            assert!(b.right.dot(b.up).abs() < 1e-4);
        }
    }

    #[test]
    fn uniform_is_tightly_packed() {
        assert_eq!(size_of::<CameraUniform>(), 3 * 64 + 32);
        let uniform = CameraUniform::new();
        let bytes: &[u8] = bytemuck::bytes_of(&uniform);
        assert_eq!(bytes.len(), 224);
    }
}
