//! Scene contents: poses, entities, model identifiers, and the populated
//! tank.
//!
//! The [`Scene`] owns every animated entity plus the shark and food pair
//! driven by the feeding session. Static scenery has no state and is
//! emitted at the identity transform when building draw lists.

pub mod assets;
pub mod entity;
pub mod pose;
pub mod spawn;

pub use assets::{ModelId, ModelSource, ProceduralModels};
pub use entity::{Entity, Hierarchy, Motion, Node, OrbitParams};
use glam::Mat4;
pub use pose::Pose6DoF;
pub use spawn::build_scene;

use crate::animation::{animate_entity, FeedingEvent, FeedingSession, FeedingStep};
use crate::engine::DrawItem;
use crate::options::{FeedingOptions, MotionOptions};

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

/// The populated tank.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Fish, jellyfish, kelp and rocks in spawn order.
    entities: Vec<Entity>,
    shark: Entity,
    food: Entity,
    feeding: FeedingSession,
    /// Result of the latest feeding step.
    last_step: FeedingStep,
}

impl Scene {
    /// Assemble a scene from already-built entities.
    #[must_use]
    pub fn new(entities: Vec<Entity>, shark: Entity, food: Entity) -> Self {
        Self {
            entities,
            shark,
            food,
            feeding: FeedingSession::new(),
            last_step: FeedingStep::default(),
        }
    }

    /// Animated entities other than the shark and the food.
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// The shark.
    #[must_use]
    pub fn shark(&self) -> &Entity {
        &self.shark
    }

    /// The food pellet.
    #[must_use]
    pub fn food(&self) -> &Entity {
        &self.food
    }

    /// Feeding session state.
    #[must_use]
    pub fn feeding(&self) -> &FeedingSession {
        &self.feeding
    }

    /// Result of the most recent [`update`](Self::update).
    #[must_use]
    pub fn last_feeding_step(&self) -> FeedingStep {
        self.last_step
    }

    /// Number of entities including the shark (the food is not counted).
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.entities.len() + 1
    }

    /// Start a feeding session if none is active.
    pub fn trigger_feeding(&mut self) -> Option<FeedingEvent> {
        self.feeding.trigger()
    }

    /// Advance every entity to session time `t`.
    pub fn update(
        &mut self,
        t: f32,
        motion: &MotionOptions,
        feeding: &FeedingOptions,
    ) -> FeedingStep {
        for entity in &mut self.entities {
            animate_entity(entity, t, motion);
        }
        self.last_step = self.feeding.advance(
            t,
            &mut self.shark,
            &mut self.food,
            motion,
            feeding,
        );
        self.last_step
    }

    /// Append this frame's draws to `out`: opaque scenery, animated
    /// entities, the shark, the food while visible, then translucent
    /// scenery.
    pub fn collect_draws(&self, out: &mut Vec<DrawItem>) {
        let scenery = |translucent: bool| {
            ModelId::SCENERY
                .into_iter()
                .filter(move |m| m.is_translucent() == translucent)
                .map(|model| DrawItem {
                    model,
                    node: 0,
                    transform: Mat4::IDENTITY,
                })
        };

        out.extend(scenery(false));
        for entity in &self.entities {
            push_entity(out, entity);
        }
        push_entity(out, &self.shark);
        if self.last_step.food_visible {
            push_entity(out, &self.food);
        }
        out.extend(scenery(true));
    }
}

fn push_entity(out: &mut Vec<DrawItem>, entity: &Entity) {
    let model = entity.model();
    out.extend(
        entity
            .world_transforms()
            .into_iter()
            .enumerate()
            .map(|(node, transform)| DrawItem {
                model,
                node,
                transform,
            }),
    );
}
