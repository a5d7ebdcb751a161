//! Mesh identifiers and the model-source seam.
//!
//! Loading meshes is the host's job. The core only needs two facts about
//! each model: how many nodes (sub-meshes) it has, and, for the walls, the
//! vertex positions that bound the walkable floor.

use std::collections::HashMap;

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Every mesh the aquarium scene draws.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ModelId {
    /// Room floor.
    Floor,
    /// Room walls; their vertices bound camera movement.
    Walls,
    /// Room ceiling.
    Roof,
    /// Ceiling lamp.
    RoofLamp,
    /// Sand inside the tank.
    DirtFloor,
    /// Decorative volcano inside the tank.
    Volcano,
    /// Wall painting.
    Painting,
    /// Tables around the tank.
    Tables,
    /// Translucent glass tank, drawn after everything else.
    FishTank,
    /// Multi-segment kelp stalk.
    Kelp,
    /// First jellyfish variant.
    Jellyfish1,
    /// Second jellyfish variant.
    Jellyfish2,
    /// Tank rock.
    Rock,
    /// First fish variant.
    Fish1,
    /// Second fish variant.
    Fish2,
    /// The shark.
    Shark,
    /// Food pellet dropped during a feeding session.
    FishFood,
}

impl ModelId {
    /// Scenery drawn at the identity transform, in draw order. The tank
    /// glass is last so it blends over the animated contents.
    pub const SCENERY: [Self; 9] = [
        Self::Floor,
        Self::Walls,
        Self::Tables,
        Self::RoofLamp,
        Self::Roof,
        Self::DirtFloor,
        Self::Volcano,
        Self::Painting,
        Self::FishTank,
    ];

    /// Whether the model is drawn translucent.
    #[must_use]
    pub fn is_translucent(self) -> bool {
        self == Self::FishTank
    }
}

/// What the core needs from the host's asset loader.
pub trait ModelSource {
    /// Number of nodes (sub-meshes) in `model`. Zero means the model is
    /// missing.
    fn node_count(&self, model: ModelId) -> usize;

    /// Object-space vertex positions of every node of `model`.
    fn vertex_positions(&self, model: ModelId) -> Vec<Vec3>;
}

/// Stand-in model source describing a square room around the tank.
///
/// Used by the headless demo and by tests. Node counts default to a
/// plausible segmentation of each model and can be overridden.
#[derive(Debug, Clone)]
pub struct ProceduralModels {
    half_extent: f32,
    height: f32,
    node_counts: HashMap<ModelId, usize>,
}

impl ProceduralModels {
    /// Square room spanning `[-half_extent, half_extent]` on x and z.
    #[must_use]
    pub fn new(half_extent: f32) -> Self {
        let node_counts = HashMap::from([
            (ModelId::Kelp, 8),
            (ModelId::Fish1, 3),
            (ModelId::Fish2, 3),
            (ModelId::Shark, 6),
            (ModelId::FishFood, 2),
        ]);
        Self {
            half_extent,
            height: 4.0,
            node_counts,
        }
    }

    /// Override the node count reported for `model`.
    #[must_use]
    pub fn with_node_count(mut self, model: ModelId, count: usize) -> Self {
        let _ = self.node_counts.insert(model, count);
        self
    }
}

impl ModelSource for ProceduralModels {
    fn node_count(&self, model: ModelId) -> usize {
        self.node_counts.get(&model).copied().unwrap_or(1)
    }

    fn vertex_positions(&self, model: ModelId) -> Vec<Vec3> {
        if model != ModelId::Walls {
            return Vec::new();
        }
        let e = self.half_extent;
        [(-e, -e), (e, -e), (e, e), (-e, e)]
            .into_iter()
            .flat_map(|(x, z)| {
                [Vec3::new(x, 0.0, z), Vec3::new(x, self.height, z)]
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tank_glass_is_drawn_last() {
        assert_eq!(ModelId::SCENERY.last(), Some(&ModelId::FishTank));
        assert!(ModelId::FishTank.is_translucent());
        assert!(!ModelId::Walls.is_translucent());
    }

    #[test]
    fn procedural_walls_span_the_room() {
        let models = ProceduralModels::new(10.0);
        let verts = models.vertex_positions(ModelId::Walls);
        assert_eq!(verts.len(), 8);
        assert!(verts.iter().all(|v| v.x.abs() == 10.0 && v.z.abs() == 10.0));
        assert!(models.vertex_positions(ModelId::Shark).is_empty());
    }

    #[test]
    fn node_count_overrides_apply() {
        let models =
            ProceduralModels::new(10.0).with_node_count(ModelId::Shark, 9);
        assert_eq!(models.node_count(ModelId::Shark), 9);
        assert_eq!(models.node_count(ModelId::Kelp), 8);
        assert_eq!(models.node_count(ModelId::Rock), 1);
    }
}
