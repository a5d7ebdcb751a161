//! Per-frame results handed to the host renderer.

use glam::{Mat4, Vec3};

use crate::camera::CameraUniform;
use crate::scene::ModelId;

/// One mesh node to draw with its world transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawItem {
    /// Mesh to draw.
    pub model: ModelId,
    /// Node (sub-mesh) index within the model.
    pub node: usize,
    /// World transform for the node.
    pub transform: Mat4,
}

/// The host's draw call seam: draws one node of a loaded model.
pub trait MeshRenderer {
    /// Draw `node` of `model` with the given world transform.
    fn draw(&mut self, model: ModelId, node: usize, transform: &Mat4);
}

/// Everything the host needs to render a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutput {
    /// Draws in submission order; translucent scenery comes last.
    pub draws: Vec<DrawItem>,
    /// Camera view matrix.
    pub view: Mat4,
    /// Camera projection matrix.
    pub projection: Mat4,
    /// Eye position.
    pub eye: Vec3,
    /// Packed camera uniform for GPU upload.
    pub uniform: CameraUniform,
}

impl FrameOutput {
    /// Issue every draw to `renderer` in order.
    pub fn submit(&self, renderer: &mut impl MeshRenderer) {
        for item in &self.draws {
            renderer.draw(item.model, item.node, &item.transform);
        }
    }
}

/// [`MeshRenderer`] that only counts draws, for headless runs.
#[derive(Debug, Clone, Default)]
pub struct DrawCounter {
    /// Draw calls received.
    pub draws: usize,
    /// Distinct models drawn at least once.
    pub models: std::collections::BTreeSet<ModelId>,
}

impl MeshRenderer for DrawCounter {
    fn draw(&mut self, model: ModelId, _node: usize, _transform: &Mat4) {
        self.draws += 1;
        let _ = self.models.insert(model);
    }
}
