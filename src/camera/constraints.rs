//! Walkable-area checks for camera movement.
//!
//! The camera may move anywhere inside an axis-aligned box on x/z that is
//! outside a circle around the tank at the origin.

use glam::Vec3;

use crate::error::AquariaError;

/// Axis-aligned x/z box the camera must stay within.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementBounds {
    /// Smallest allowed x.
    pub x_min: f32,
    /// Largest allowed x.
    pub x_max: f32,
    /// Smallest allowed z.
    pub z_min: f32,
    /// Largest allowed z.
    pub z_max: f32,
}

impl MovementBounds {
    /// Bounds from explicit extents. Rejects non-finite or inverted boxes.
    pub fn new(
        x_min: f32,
        x_max: f32,
        z_min: f32,
        z_max: f32,
    ) -> Result<Self, AquariaError> {
        let finite = [x_min, x_max, z_min, z_max].iter().all(|v| v.is_finite());
        if !finite {
            return Err(AquariaError::config("movement bounds must be finite"));
        }
        if x_min >= x_max || z_min >= z_max {
            return Err(AquariaError::config(format!(
                "movement bounds are empty: x [{x_min}, {x_max}], z [{z_min}, {z_max}]"
            )));
        }
        Ok(Self {
            x_min,
            x_max,
            z_min,
            z_max,
        })
    }

    /// Bounds from the x/z extents of wall geometry, each side pulled in by
    /// `inset`.
    pub fn from_vertices(
        vertices: &[Vec3],
        inset: f32,
    ) -> Result<Self, AquariaError> {
        if vertices.is_empty() {
            return Err(AquariaError::config("wall geometry has no vertices"));
        }
        let (min, max) = vertices.iter().fold(
            (Vec3::splat(f32::INFINITY), Vec3::splat(f32::NEG_INFINITY)),
            |(lo, hi), v| (lo.min(*v), hi.max(*v)),
        );
        Self::new(min.x + inset, max.x - inset, min.z + inset, max.z - inset)
    }

    /// Whether `p` lies inside the box on x and z. Points on an edge are
    /// inside.
    #[inline]
    #[must_use]
    pub fn contains(&self, p: Vec3) -> bool {
        (self.x_min..=self.x_max).contains(&p.x)
            && (self.z_min..=self.z_max).contains(&p.z)
    }
}

/// Validates candidate camera positions. Immutable after setup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstraintChecker {
    bounds: MovementBounds,
    exclusion_radius: f32,
    margin: f32,
}

impl ConstraintChecker {
    /// Checker for `bounds` with an exclusion circle of
    /// `exclusion_radius + margin` about the origin.
    pub fn new(
        bounds: MovementBounds,
        exclusion_radius: f32,
        margin: f32,
    ) -> Result<Self, AquariaError> {
        if !(exclusion_radius >= 0.0 && margin >= 0.0) {
            return Err(AquariaError::config(format!(
                "exclusion radius {exclusion_radius} and margin {margin} must be non-negative"
            )));
        }
        Ok(Self {
            bounds,
            exclusion_radius,
            margin,
        })
    }

    /// Movement box.
    #[must_use]
    pub fn bounds(&self) -> &MovementBounds {
        &self.bounds
    }

    /// Radius of the excluded circle including the margin.
    #[must_use]
    pub fn keep_out_radius(&self) -> f32 {
        self.exclusion_radius + self.margin
    }

    /// Whether the camera may occupy `candidate`. Height is ignored.
    #[must_use]
    pub fn allows(&self, candidate: Vec3) -> bool {
        self.bounds.contains(candidate)
            && candidate.x.hypot(candidate.z) > self.keep_out_radius()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room() -> ConstraintChecker {
        let bounds = MovementBounds::new(-10.0, 10.0, -10.0, 10.0).unwrap();
        ConstraintChecker::new(bounds, 7.5, 0.2).unwrap()
    }

    #[test]
    fn rejects_outside_box() {
        let c = room();
        assert!(!c.allows(Vec3::new(10.5, 1.8, 9.0)));
        assert!(!c.allows(Vec3::new(9.0, 1.8, -10.01)));
        assert!(c.allows(Vec3::new(9.0, 1.8, 9.0)));
    }

    #[test]
    fn box_edges_are_walkable() {
        let c = room();
        assert!(c.allows(Vec3::new(10.0, 1.8, 9.0)));
        assert!(c.allows(Vec3::new(-10.0, 1.8, 9.0)));
        assert!(c.allows(Vec3::new(9.0, 1.8, -10.0)));
        assert!(c.allows(Vec3::new(10.0, 1.8, 10.0)));
        assert!(!c.allows(Vec3::new(10.001, 1.8, 9.0)));
    }

    #[test]
    fn rejects_inside_exclusion_circle_with_margin() {
        let c = room();
        assert!(!c.allows(Vec3::new(0.0, 1.8, 7.6)));
        assert!(!c.allows(Vec3::new(7.69, 0.0, 0.0)));
        assert!(c.allows(Vec3::new(0.0, 1.8, 7.75)));
        assert!(c.allows(Vec3::new(0.0, 1.8, 9.0)));
    }

    #[test]
    fn height_does_not_matter() {
        let c = room();
        assert!(c.allows(Vec3::new(8.0, -100.0, 8.0)));
        assert!(c.allows(Vec3::new(8.0, 100.0, 8.0)));
    }

    #[test]
    fn bounds_from_wall_vertices_are_inset() {
        let verts = [
            Vec3::new(-10.0, 0.0, -12.0),
            Vec3::new(10.0, 4.0, 12.0),
            Vec3::new(3.0, 2.0, 0.0),
        ];
        let b = MovementBounds::from_vertices(&verts, 0.25).unwrap();
        assert_eq!(b, MovementBounds {
            x_min: -9.75,
            x_max: 9.75,
            z_min: -11.75,
            z_max: 11.75,
        });
    }

    #[test]
    fn degenerate_walls_are_rejected() {
        assert!(MovementBounds::from_vertices(&[], 0.25).is_err());
        let thin = [Vec3::new(-0.2, 0.0, -5.0), Vec3::new(0.2, 0.0, 5.0)];
        assert!(MovementBounds::from_vertices(&thin, 0.25).is_err());
        assert!(MovementBounds::new(1.0, -1.0, 0.0, 1.0).is_err());
    }

    #[test]
    fn negative_radius_is_rejected() {
        let bounds = MovementBounds::new(-1.0, 1.0, -1.0, 1.0).unwrap();
        assert!(ConstraintChecker::new(bounds, -1.0, 0.2).is_err());
        assert!(ConstraintChecker::new(bounds, f32::NAN, 0.2).is_err());
    }
}
