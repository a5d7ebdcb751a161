//! Populate the tank from spawn groups.

use glam::Vec3;

use super::{
    Entity, Hierarchy, ModelId, ModelSource, Motion, OrbitParams, Pose6DoF,
    Scene,
};
use crate::error::AquariaError;
use crate::options::{
    FeedingOptions, MotionOptions, PopulationOptions, SpawnGroup,
};
use crate::util::sampler::RangeSampler;

/// Sample one initial pose from a group's ranges, in x, y, z, yaw order.
fn sample_pose(group: &SpawnGroup, sampler: &mut impl RangeSampler) -> Pose6DoF {
    let x = sampler.sample(group.x.min, group.x.max);
    let y = sampler.sample(group.y.min, group.y.max);
    let z = sampler.sample(group.z.min, group.z.max);
    let yaw = sampler
        .sample(group.yaw_degrees.min, group.yaw_degrees.max)
        .to_radians();
    Pose6DoF::from_translation_yaw(Vec3::new(x, y, z), yaw)
}

fn node_count(
    models: &impl ModelSource,
    model: ModelId,
) -> Result<usize, AquariaError> {
    match models.node_count(model) {
        0 => Err(AquariaError::config(format!(
            "model source reports no nodes for {model:?}"
        ))),
        n => Ok(n),
    }
}

/// Spawn every member of `group`, deriving each entity's motion from its
/// pose and index within the group.
fn spawn_group(
    out: &mut Vec<Entity>,
    group: &SpawnGroup,
    hierarchy: Hierarchy,
    models: &impl ModelSource,
    sampler: &mut impl RangeSampler,
    motion: impl Fn(&Pose6DoF, usize) -> Motion,
) -> Result<(), AquariaError> {
    let nodes = node_count(models, group.model)?;
    out.reserve(group.count);
    for index in 0..group.count {
        let pose = sample_pose(group, sampler);
        out.push(Entity::new(
            group.model,
            nodes,
            pose,
            motion(&pose, index),
            hierarchy,
        )?);
    }
    Ok(())
}

/// Build the scene described by `population`.
///
/// Groups spawn in a fixed order (kelp, jellyfish, fish, rocks, shark) so
/// a seeded sampler reproduces the same tank.
pub fn build_scene(
    population: &PopulationOptions,
    motion: &MotionOptions,
    feeding: &FeedingOptions,
    models: &impl ModelSource,
    sampler: &mut impl RangeSampler,
) -> Result<Scene, AquariaError> {
    population.validate()?;
    let mut entities = Vec::with_capacity(population.entity_count());

    for group in &population.kelp {
        spawn_group(&mut entities, group, Hierarchy::Chain, models, sampler, |_, _| {
            Motion::WaveSway
        })?;
    }
    for group in &population.jellyfish {
        spawn_group(&mut entities, group, Hierarchy::Flat, models, sampler, |_, index| {
            Motion::BobAndSpin { index }
        })?;
    }
    let spacing = motion.orbit_phase_spacing;
    for group in &population.fish {
        spawn_group(&mut entities, group, Hierarchy::Flat, models, sampler, |pose, index| {
            Motion::Orbit(OrbitParams::from_pose(pose, index as f32 * spacing))
        })?;
    }
    for group in &population.rocks {
        spawn_group(&mut entities, group, Hierarchy::Flat, models, sampler, |_, _| {
            Motion::Static
        })?;
    }

    let shark_pose = sample_pose(&population.shark, sampler);
    let shark = Entity::new(
        population.shark.model,
        node_count(models, population.shark.model)?,
        shark_pose,
        Motion::Orbit(OrbitParams::from_pose(&shark_pose, 0.0)),
        Hierarchy::Flat,
    )?;

    let food = Entity::new(
        ModelId::FishFood,
        node_count(models, ModelId::FishFood)?,
        Pose6DoF::from_translation(feeding.drop_point.into()),
        Motion::Static,
        Hierarchy::Flat,
    )?;

    log::info!(
        "spawned {} entities (shark orbit radius {:.2})",
        entities.len() + 1,
        shark_pose.horizontal_radius()
    );
    Ok(Scene::new(entities, shark, food))
}
