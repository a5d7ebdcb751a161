//! Entities: mesh nodes, motion descriptors and hierarchy composition.

use glam::Mat4;

use super::assets::ModelId;
use super::pose::Pose6DoF;
use crate::error::AquariaError;

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// One sub-mesh of an entity: its base pose and the transform last built
/// for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pose: Pose6DoF,
    transform: Mat4,
}

impl Node {
    /// Node at `pose` with its transform already built.
    #[must_use]
    pub fn new(pose: Pose6DoF) -> Self {
        Self {
            pose,
            transform: pose.local_transform(),
        }
    }

    /// Stored base pose.
    #[must_use]
    pub fn pose(&self) -> &Pose6DoF {
        &self.pose
    }

    /// Transform handed to the renderer (local to the parent node for
    /// [`Hierarchy::Chain`] entities).
    #[must_use]
    pub fn transform(&self) -> Mat4 {
        self.transform
    }

    /// Replace the pose and rebuild the transform.
    pub fn set_pose(&mut self, pose: Pose6DoF) {
        self.pose = pose;
        self.transform = pose.local_transform();
    }

    /// Rebuild the transform from the base pose plus a transient yaw.
    ///
    /// The base pose is left as it was, so the offset never feeds into the
    /// next frame.
    pub fn render_with_yaw_offset(&mut self, delta: f32) {
        self.transform = self.pose.with_yaw_offset(delta).local_transform();
    }
}

// ---------------------------------------------------------------------------
// Motion descriptors
// ---------------------------------------------------------------------------

/// Fixed circular path parameters of a swimming entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitParams {
    /// Horizontal distance from the tank axis.
    pub radius: f32,
    /// Angle added to `ω·t`, desynchronizing a population.
    pub phase: f32,
}

impl OrbitParams {
    /// Orbit through the pose's current x/z with the given phase offset.
    #[must_use]
    pub fn from_pose(pose: &Pose6DoF, phase: f32) -> Self {
        Self {
            radius: pose.horizontal_radius(),
            phase,
        }
    }

    /// Orbit that passes through the pose's current x/z at session time
    /// `t`, so swimming resumes from where the entity is instead of
    /// snapping back onto its old circle.
    #[must_use]
    pub fn through_pose(pose: &Pose6DoF, rate: f32, t: f32) -> Self {
        let angle = pose.translation.z.atan2(pose.translation.x);
        Self {
            radius: pose.horizontal_radius(),
            phase: angle - rate * t,
        }
    }
}

/// Which procedural model drives an entity each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Pose fixed at spawn (rocks, the food before a drop).
    Static,
    /// Orbit-swim with tail wag (fish, shark).
    Orbit(OrbitParams),
    /// Vertical bob with continuous spin (jellyfish).
    BobAndSpin {
        /// Position within the spawn group, used as phase shift.
        index: usize,
    },
    /// Cascading roll of every segment (kelp).
    WaveSway,
}

/// How node transforms combine into world transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hierarchy {
    /// Each node transform is already a world transform.
    Flat,
    /// Node `i`'s world transform is the product of node transforms
    /// `0..=i`.
    Chain,
}

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A renderable object: a mesh and its ordered node poses.
///
/// Node 0 is the root driven by the entity's motion model.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    model: ModelId,
    nodes: Vec<Node>,
    motion: Motion,
    hierarchy: Hierarchy,
}

impl Entity {
    /// Build an entity with `node_count` nodes rooted at `root`.
    ///
    /// Secondary nodes of a [`Hierarchy::Flat`] entity start attached to the
    /// root; those of a [`Hierarchy::Chain`] start at the identity so the
    /// root placement is inherited through the product.
    pub fn new(
        model: ModelId,
        node_count: usize,
        root: Pose6DoF,
        motion: Motion,
        hierarchy: Hierarchy,
    ) -> Result<Self, AquariaError> {
        if node_count == 0 {
            return Err(AquariaError::config(format!(
                "model {model:?} has no nodes"
            )));
        }
        let secondary = match hierarchy {
            Hierarchy::Flat => root,
            Hierarchy::Chain => Pose6DoF::IDENTITY,
        };
        let nodes = std::iter::once(Node::new(root))
            .chain(std::iter::repeat(Node::new(secondary)).take(node_count - 1))
            .collect();
        Ok(Self {
            model,
            nodes,
            motion,
            hierarchy,
        })
    }

    /// Mesh this entity renders with.
    #[must_use]
    pub fn model(&self) -> ModelId {
        self.model
    }

    /// All nodes, root first.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Mutable node access for motion models.
    pub(crate) fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    /// Current motion descriptor.
    #[must_use]
    pub fn motion(&self) -> Motion {
        self.motion
    }

    /// Replace the motion descriptor.
    pub fn set_motion(&mut self, motion: Motion) {
        self.motion = motion;
    }

    /// Node composition mode.
    #[must_use]
    pub fn hierarchy(&self) -> Hierarchy {
        self.hierarchy
    }

    /// Base pose of node 0.
    #[must_use]
    pub fn root_pose(&self) -> Pose6DoF {
        self.nodes[0].pose
    }

    /// Write the root pose and rebuild its transform.
    pub fn set_root_pose(&mut self, pose: Pose6DoF) {
        self.nodes[0].set_pose(pose);
    }

    /// Copy the root pose into every secondary node (rigid attachment).
    pub fn attach_to_root(&mut self) {
        let root = self.nodes[0].pose;
        for node in &mut self.nodes[1..] {
            node.set_pose(root);
        }
    }

    /// World transform of every node, root first.
    #[must_use]
    pub fn world_transforms(&self) -> Vec<Mat4> {
        match self.hierarchy {
            Hierarchy::Flat => self.nodes.iter().map(Node::transform).collect(),
            Hierarchy::Chain => self
                .nodes
                .iter()
                .scan(Mat4::IDENTITY, |acc, node| {
                    *acc *= node.transform;
                    Some(*acc)
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    const EPSILON: f32 = 1e-5;

    fn root() -> Pose6DoF {
        Pose6DoF::from_translation_yaw(Vec3::new(1.0, 0.0, 2.0), 0.4)
    }

    #[test]
    fn zero_nodes_rejected() {
        let err = Entity::new(
            ModelId::Rock,
            0,
            root(),
            Motion::Static,
            Hierarchy::Flat,
        );
        assert!(err.is_err());
    }

    #[test]
    fn flat_secondaries_start_on_root() {
        let e = Entity::new(
            ModelId::Shark,
            4,
            root(),
            Motion::Static,
            Hierarchy::Flat,
        )
        .unwrap();
        assert_eq!(e.nodes().len(), 4);
        assert!(e.nodes().iter().all(|n| *n.pose() == root()));
    }

    #[test]
    fn chain_world_transforms_accumulate() {
        let mut e = Entity::new(
            ModelId::Kelp,
            3,
            root(),
            Motion::WaveSway,
            Hierarchy::Chain,
        )
        .unwrap();
        let bend = Pose6DoF {
            translation: Vec3::ZERO,
            rotation: Vec3::new(0.0, 0.0, 0.1),
        };
        e.nodes_mut()[1].set_pose(bend);
        e.nodes_mut()[2].set_pose(bend);

        let world = e.world_transforms();
        let l0 = root().local_transform();
        let l1 = bend.local_transform();
        assert!(world[0].abs_diff_eq(l0, EPSILON));
        assert!(world[1].abs_diff_eq(l0 * l1, EPSILON));
        assert!(world[2].abs_diff_eq(l0 * l1 * l1, EPSILON));
    }

    #[test]
    fn yaw_offset_does_not_touch_base_pose() {
        let mut node = Node::new(root());
        node.render_with_yaw_offset(0.3);
        assert_eq!(*node.pose(), root());
        assert!(node
            .transform()
            .abs_diff_eq(root().with_yaw_offset(0.3).local_transform(), EPSILON));
    }

    #[test]
    fn orbit_through_pose_reproduces_position() {
        let pose = Pose6DoF::from_translation(Vec3::new(-2.0, 1.0, 3.0));
        let rate = 0.1;
        let t = 17.0;
        let orbit = OrbitParams::through_pose(&pose, rate, t);
        let angle = rate * t + orbit.phase;
        assert!((orbit.radius * angle.cos() - -2.0).abs() < 1e-4);
        assert!((orbit.radius * angle.sin() - 3.0).abs() < 1e-4);
    }
}
