//! Six-degree-of-freedom node pose and its local transform.

use glam::{Mat4, Vec3};

/// Translation and Euler rotation (radians) of a single mesh node.
///
/// # Transform contract
///
/// The local transform is always
/// `Rx(rotation.x) · Ry(rotation.y) · Rz(rotation.z) · T(translation)`.
/// Rotation is applied *after* translation in object space, so changing
/// the yaw of a translated node sweeps it around the origin instead of
/// spinning it in place. Orbit-swim facing and kelp bending both rely on
/// this order; do not reorder the factors.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose6DoF {
    /// Translation along x, y and z.
    pub translation: Vec3,
    /// Rotation about x, y and z in radians.
    pub rotation: Vec3,
}

impl Pose6DoF {
    /// Pose at the origin with no rotation.
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Vec3::ZERO,
    };

    /// Pose with only a translation.
    #[must_use]
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            rotation: Vec3::ZERO,
        }
    }

    /// Pose with a translation and a yaw (rotation about y).
    #[must_use]
    pub fn from_translation_yaw(translation: Vec3, yaw: f32) -> Self {
        Self {
            translation,
            rotation: Vec3::new(0.0, yaw, 0.0),
        }
    }

    /// Rotation about the y axis.
    #[inline]
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.rotation.y
    }

    /// Copy of this pose with `delta` added to the yaw.
    #[inline]
    #[must_use]
    pub fn with_yaw_offset(self, delta: f32) -> Self {
        Self {
            rotation: Vec3::new(
                self.rotation.x,
                self.rotation.y + delta,
                self.rotation.z,
            ),
            ..self
        }
    }

    /// Horizontal distance of the translation from the world y axis.
    #[inline]
    #[must_use]
    pub fn horizontal_radius(&self) -> f32 {
        self.translation.x.hypot(self.translation.z)
    }

    /// Build the local transform `Rx · Ry · Rz · T`.
    #[inline]
    #[must_use]
    pub fn local_transform(&self) -> Mat4 {
        Mat4::from_rotation_x(self.rotation.x)
            * Mat4::from_rotation_y(self.rotation.y)
            * Mat4::from_rotation_z(self.rotation.z)
            * Mat4::from_translation(self.translation)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn identity_pose_gives_identity_matrix() {
        assert!(Pose6DoF::IDENTITY
            .local_transform()
            .abs_diff_eq(Mat4::IDENTITY, EPSILON));
    }

    #[test]
    fn translation_only_places_origin_at_translation() {
        let pose = Pose6DoF::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let p = pose.local_transform().transform_point3(Vec3::ZERO);
        assert!(p.abs_diff_eq(Vec3::new(1.0, 2.0, 3.0), EPSILON));
    }

    #[test]
    fn yaw_sweeps_translated_node_around_origin() {
        // Rotation applied after translation: a node at +x yawed by 90°
        // ends up at -z, not spinning in place at +x.
        let pose = Pose6DoF::from_translation_yaw(Vec3::X * 2.0, FRAC_PI_2);
        let p = pose.local_transform().transform_point3(Vec3::ZERO);
        assert!(
            p.abs_diff_eq(Vec3::new(0.0, 0.0, -2.0), EPSILON),
            "got {p:?}"
        );
    }

    #[test]
    fn axis_order_is_x_then_y_then_z() {
        let pose = Pose6DoF {
            translation: Vec3::new(0.5, -1.0, 2.0),
            rotation: Vec3::new(0.3, 1.1, -0.7),
        };
        let expected = Mat4::from_rotation_x(0.3)
            * Mat4::from_rotation_y(1.1)
            * Mat4::from_rotation_z(-0.7)
            * Mat4::from_translation(Vec3::new(0.5, -1.0, 2.0));
        assert!(pose.local_transform().abs_diff_eq(expected, EPSILON));

        let reversed = Mat4::from_rotation_z(-0.7)
            * Mat4::from_rotation_y(1.1)
            * Mat4::from_rotation_x(0.3)
            * Mat4::from_translation(Vec3::new(0.5, -1.0, 2.0));
        assert!(!pose.local_transform().abs_diff_eq(reversed, EPSILON));
    }

    #[test]
    fn yaw_offset_leaves_source_untouched() {
        let pose = Pose6DoF::from_translation_yaw(Vec3::ONE, PI);
        let shifted = pose.with_yaw_offset(0.25);
        assert_eq!(pose.yaw(), PI);
        assert!((shifted.yaw() - (PI + 0.25)).abs() < EPSILON);
        assert_eq!(shifted.translation, pose.translation);
    }

    #[test]
    fn horizontal_radius_ignores_height() {
        let pose = Pose6DoF::from_translation(Vec3::new(3.0, 100.0, 4.0));
        assert!((pose.horizontal_radius() - 5.0).abs() < EPSILON);
    }
}
