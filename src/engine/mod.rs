//! Setup and per-frame entry points.
//!
//! [`AquariumEngine`] owns the camera, the scene, the input processor and
//! the session clock. Hosts call [`AquariumEngine::frame`] (raw events) or
//! [`AquariumEngine::update`] (pre-built commands) once per frame and draw
//! the returned [`FrameOutput`].

pub mod command;
pub mod output;

use glam::Vec3;

pub use self::command::AquariaCommand;
pub use self::output::{DrawCounter, DrawItem, FrameOutput, MeshRenderer};
use crate::camera::{CameraController, ConstraintChecker, MovementBounds};
use crate::error::AquariaError;
use crate::input::{InputEvent, InputProcessor};
use crate::options::{BoundsOptions, Options};
use crate::scene::{build_scene, ModelId, ModelSource, Scene};
use crate::util::frame_timing::FrameTiming;
use crate::util::sampler::{RandomSampler, RangeSampler};

/// Derive the walkable rectangle from the wall model, falling back to the
/// configured rectangle when the model source has no wall geometry.
fn wall_bounds(
    opts: &BoundsOptions,
    models: &impl ModelSource,
) -> Result<MovementBounds, AquariaError> {
    let vertices: Vec<Vec3> = models.vertex_positions(ModelId::Walls);
    if vertices.is_empty() {
        let [x_min, x_max, z_min, z_max] = opts.fallback;
        log::warn!(
            "no wall geometry, using fallback bounds x [{x_min}, {x_max}] z [{z_min}, {z_max}]"
        );
        return MovementBounds::new(x_min, x_max, z_min, z_max);
    }
    MovementBounds::from_vertices(&vertices, opts.wall_inset)
}

/// The aquarium session: camera, scene and clock.
pub struct AquariumEngine {
    options: Options,
    camera: CameraController,
    scene: Scene,
    input: InputProcessor,
    timing: FrameTiming,
    /// Viewport aspect ratio (width / height).
    aspect: f32,
}

impl AquariumEngine {
    /// Validate options, derive the movement bounds from the wall model and
    /// populate the scene using `sampler` for initial placement.
    pub fn new(
        options: Options,
        models: &impl ModelSource,
        sampler: &mut impl RangeSampler,
    ) -> Result<Self, AquariaError> {
        options.validate()?;

        let bounds = wall_bounds(&options.bounds, models)?;
        let constraints = ConstraintChecker::new(
            bounds,
            options.bounds.exclusion_radius,
            options.bounds.exclusion_margin,
        )?;
        let camera = CameraController::new(&options.camera, constraints)?;
        let scene = build_scene(
            &options.population,
            &options.motion,
            &options.feeding,
            models,
            sampler,
        )?;

        log::info!(
            "aquarium ready: {} entities, walkable x [{:.2}, {:.2}] z [{:.2}, {:.2}]",
            scene.entity_count(),
            bounds.x_min,
            bounds.x_max,
            bounds.z_min,
            bounds.z_max
        );

        Ok(Self {
            input: InputProcessor::new(options.keybindings.clone()),
            options,
            camera,
            scene,
            timing: FrameTiming::new(),
            aspect: 16.0 / 9.0,
        })
    }

    /// Like [`new`](Self::new), sampling placements with the seed from the
    /// population options (or the OS when none is set).
    pub fn from_options(
        options: Options,
        models: &impl ModelSource,
    ) -> Result<Self, AquariaError> {
        let mut sampler =
            RandomSampler::from_seed_option(options.population.seed);
        Self::new(options, models, &mut sampler)
    }

    // -- Per-frame --

    /// Advance one frame of `dt` seconds, applying `commands` in order
    /// before animating the scene.
    pub fn update(
        &mut self,
        dt: f32,
        commands: &[AquariaCommand],
    ) -> FrameOutput {
        let t = self.timing.advance(dt);
        let dt = self.timing.last_delta();

        for command in commands {
            self.execute(*command, dt);
        }
        let _ = self
            .scene
            .update(t, &self.options.motion, &self.options.feeding);

        self.frame_output()
    }

    /// Translate raw `events` through the input processor, then
    /// [`update`](Self::update).
    pub fn frame(&mut self, dt: f32, events: &[InputEvent]) -> FrameOutput {
        let commands = self.input.frame_commands(events);
        self.update(dt, &commands)
    }

    fn execute(&mut self, command: AquariaCommand, dt: f32) {
        match command {
            AquariaCommand::Move { direction } => {
                let _ = self.camera.move_in(direction, dt);
            }
            AquariaCommand::Rotate { dx, dy } => self.camera.rotate(dx, dy),
            AquariaCommand::Zoom { delta } => self.camera.zoom(delta),
            AquariaCommand::Feed => {
                if self.scene.trigger_feeding().is_some() {
                    log::info!(
                        "feeding started at t={:.2}s",
                        self.timing.elapsed()
                    );
                }
            }
        }
    }

    /// Draw list and camera state for the current frame.
    #[must_use]
    pub fn frame_output(&self) -> FrameOutput {
        let mut draws = Vec::with_capacity(self.draw_capacity_hint());
        self.scene.collect_draws(&mut draws);
        FrameOutput {
            draws,
            view: self.camera.view_matrix(),
            projection: self.camera.projection_matrix(self.aspect),
            eye: self.camera.position(),
            uniform: self.camera.uniform(self.aspect),
        }
    }

    fn draw_capacity_hint(&self) -> usize {
        let nodes: usize =
            self.scene.entities().iter().map(|e| e.nodes().len()).sum();
        nodes
            + self.scene.shark().nodes().len()
            + self.scene.food().nodes().len()
            + ModelId::SCENERY.len()
    }

    /// Update the viewport size used for the projection.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    // -- Accessors --

    /// Options the engine was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The camera.
    #[must_use]
    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    /// The populated scene.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Session clock.
    #[must_use]
    pub fn timing(&self) -> &FrameTiming {
        &self.timing
    }

    /// Input processor used by [`frame`](Self::frame).
    pub fn input_mut(&mut self) -> &mut InputProcessor {
        &mut self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{FeedingEvent, FeedingPhase};
    use crate::scene::ProceduralModels;
    use crate::util::sampler::SequenceSampler;

    const DT: f32 = 1.0 / 60.0;

    fn engine() -> AquariumEngine {
        AquariumEngine::new(
            Options::default(),
            &ProceduralModels::new(10.0),
            &mut SequenceSampler::new([0.1, 0.9, 0.4, 0.7, 0.25]),
        )
        .unwrap()
    }

    fn press(key: &str) -> InputEvent {
        InputEvent::KeyPressed { key: key.into() }
    }

    #[test]
    fn first_frame_draws_reference_scene() {
        let mut engine = engine();
        let out = engine.update(DT, &[]);
        // scenery 9, kelp 150×8, jellyfish 40, fish 150×3, rocks 15, shark 6
        assert_eq!(out.draws.len(), 9 + 1200 + 40 + 450 + 15 + 6);
        assert_eq!(out.eye, Vec3::new(0.0, 1.8, 9.0));

        let mut counter = DrawCounter::default();
        out.submit(&mut counter);
        assert_eq!(counter.draws, out.draws.len());
        assert!(!counter.models.contains(&ModelId::FishFood));
    }

    #[test]
    fn feed_key_runs_a_session() {
        let mut engine = engine();
        let out = engine.frame(DT, &[press("KeyF")]);
        assert_eq!(
            engine.scene().last_feeding_step().event,
            Some(FeedingEvent::Deployed)
        );
        let food = out
            .draws
            .iter()
            .filter(|d| d.model == ModelId::FishFood)
            .count();
        assert_eq!(food, 2);

        // Pressing again mid-session changes nothing.
        let _ = engine.frame(DT, &[press("KeyF")]);
        assert_eq!(engine.scene().feeding().phase(), FeedingPhase::Descending);

        let mut frames = 0;
        while engine.scene().feeding().is_active() {
            let _ = engine.update(DT, &[]);
            frames += 1;
            assert!(frames < 100_000, "feeding session never ended");
        }
        assert_eq!(engine.scene().feeding().sessions_completed(), 1);
    }

    #[test]
    fn walking_forward_stops_at_the_tank() {
        let mut engine = engine();
        let _ = engine.frame(DT, &[press("KeyW")]);
        for _ in 0..600 {
            let out = engine.frame(DT, &[]);
            assert!(out.eye.x.hypot(out.eye.z) > 7.7);
        }
        assert!(engine.camera().position().z < 9.0);
        assert_eq!(engine.camera().position().y, 1.8);
    }

    #[test]
    fn walking_back_stops_at_the_wall() {
        let mut engine = engine();
        let _ = engine.frame(DT, &[press("KeyS")]);
        for _ in 0..600 {
            let out = engine.frame(DT, &[]);
            assert!(out.eye.z <= 9.75);
        }
        assert!(engine.camera().position().z > 9.5);
    }

    #[test]
    fn blocked_forward_does_not_cancel_strafe() {
        let mut options = Options::default();
        // Just outside the 7.7 keep-out circle, facing the tank.
        options.camera.position = [0.0, 1.8, 7.72];
        let mut engine = AquariumEngine::new(
            options,
            &ProceduralModels::new(10.0),
            &mut SequenceSampler::midpoint(),
        )
        .unwrap();
        let right = engine.camera().basis().right;
        assert!(right.abs_diff_eq(Vec3::X, 1e-5));

        let out = engine.frame(DT, &[press("KeyW"), press("KeyD")]);
        let step = engine.options().camera.movement_speed * DT;
        let expected = Vec3::new(0.0, 1.8, 7.72) + right * step;
        assert!(out.eye.abs_diff_eq(expected, 1e-5), "{}", out.eye);

        let out = engine.frame(DT, &[]);
        assert!(
            out.eye.abs_diff_eq(expected + right * step, 1e-5),
            "{}",
            out.eye
        );
    }

    #[test]
    fn missing_wall_geometry_uses_fallback() {
        struct NoWalls;
        impl ModelSource for NoWalls {
            fn node_count(&self, _model: ModelId) -> usize {
                1
            }
            fn vertex_positions(&self, _model: ModelId) -> Vec<Vec3> {
                Vec::new()
            }
        }
        let engine = AquariumEngine::new(
            Options::default(),
            &NoWalls,
            &mut SequenceSampler::midpoint(),
        )
        .unwrap();
        assert_eq!(engine.camera().constraints().bounds().x_max, 50.0);
    }

    #[test]
    fn invalid_options_fail_setup() {
        let mut options = Options::default();
        options.camera.pitch_limits = [45.0, -45.0];
        let result = AquariumEngine::from_options(
            options,
            &ProceduralModels::new(10.0),
        );
        assert!(matches!(result, Err(AquariaError::Config(_))));
    }

    #[test]
    fn same_seed_same_frames() {
        let mut options = Options::default();
        options.population.seed = Some(11);
        let models = ProceduralModels::new(10.0);
        let mut a = AquariumEngine::from_options(options.clone(), &models).unwrap();
        let mut b = AquariumEngine::from_options(options, &models).unwrap();
        for _ in 0..5 {
            assert_eq!(a.update(DT, &[]), b.update(DT, &[]));
        }
    }

    #[test]
    fn resize_changes_projection_only() {
        let mut engine = engine();
        let before = engine.frame_output();
        engine.resize(800, 800);
        let after = engine.frame_output();
        assert_eq!(before.view, after.view);
        assert_ne!(before.projection, after.projection);
        engine.resize(0, 600);
        assert_eq!(engine.frame_output().projection, after.projection);
    }
}
