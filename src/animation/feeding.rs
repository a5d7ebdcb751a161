//! Feeding session state machine.
//!
//! A session starts on a feed command, drops the food at a fixed point,
//! lets it sink while the shark steers toward it, and ends when the food
//! reaches the floor or the shark reaches the food. At most one session is
//! active at a time.

use super::motion::{animate_entity, animate_swim_wag, steer_toward, Steering};
use crate::options::{FeedingOptions, MotionOptions};
use crate::scene::{Entity, Motion, OrbitParams, Pose6DoF};

/// Current phase of the feeding session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedingPhase {
    /// No session; the shark orbits and the food is hidden.
    #[default]
    Idle,
    /// Triggered; the food is placed at the drop point on the next frame.
    Deploying,
    /// Food sinking, shark pursuing.
    Descending,
}

/// Transition reported by a feeding step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedingEvent {
    /// A feed command started a session.
    Started,
    /// Food placed at the drop point.
    Deployed,
    /// Shark came within capture distance of the food.
    Consumed,
    /// Food sank below the floor before the shark reached it.
    ReachedFloor,
}

/// Result of advancing the feeding session by one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeedingStep {
    /// Transition that happened this frame, if any.
    pub event: Option<FeedingEvent>,
    /// Whether the food is drawn this frame.
    pub food_visible: bool,
    /// Whether the shark steered toward the food this frame.
    pub shark_pursuing: bool,
}

/// Owner of the feeding phase. The shark and food entities live in the
/// scene and are passed in per step.
#[derive(Debug, Clone, Default)]
pub struct FeedingSession {
    phase: FeedingPhase,
    sessions_completed: u32,
}

impl FeedingSession {
    /// Idle session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> FeedingPhase {
        self.phase
    }

    /// Whether a session is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase != FeedingPhase::Idle
    }

    /// Sessions that have run to completion.
    #[must_use]
    pub fn sessions_completed(&self) -> u32 {
        self.sessions_completed
    }

    /// Request a session. Only an idle session starts; while one is active
    /// this is a no-op returning `None`.
    pub fn trigger(&mut self) -> Option<FeedingEvent> {
        if self.phase != FeedingPhase::Idle {
            log::debug!("feed ignored, session already {:?}", self.phase);
            return None;
        }
        self.phase = FeedingPhase::Deploying;
        log::debug!("feeding session started");
        Some(FeedingEvent::Started)
    }

    /// Advance one frame at session time `t`, updating the shark and food.
    pub fn advance(
        &mut self,
        t: f32,
        shark: &mut Entity,
        food: &mut Entity,
        motion: &MotionOptions,
        feeding: &FeedingOptions,
    ) -> FeedingStep {
        match self.phase {
            FeedingPhase::Idle => {
                animate_entity(shark, t, motion);
                FeedingStep::default()
            }
            FeedingPhase::Deploying => {
                food.set_root_pose(Pose6DoF::from_translation(
                    feeding.drop_point.into(),
                ));
                food.attach_to_root();
                self.phase = FeedingPhase::Descending;
                log::debug!("food deployed at {:?}", feeding.drop_point);
                FeedingStep {
                    event: Some(FeedingEvent::Deployed),
                    food_visible: true,
                    shark_pursuing: false,
                }
            }
            FeedingPhase::Descending => {
                self.descend(t, shark, food, motion, feeding)
            }
        }
    }

    fn descend(
        &mut self,
        t: f32,
        shark: &mut Entity,
        food: &mut Entity,
        motion: &MotionOptions,
        feeding: &FeedingOptions,
    ) -> FeedingStep {
        let drop = t * feeding.descent_rate;
        for node in food.nodes_mut() {
            let mut pose = *node.pose();
            pose.translation.y -= drop;
            node.set_pose(pose);
        }

        let target = food.root_pose().translation;
        if target.y < feeding.floor_height {
            self.finish(t, shark, motion, FeedingEvent::ReachedFloor);
            return FeedingStep {
                event: Some(FeedingEvent::ReachedFloor),
                food_visible: true,
                shark_pursuing: false,
            };
        }

        match steer_toward(shark.root_pose(), target, feeding) {
            Steering::Arrived { .. } => {
                self.finish(t, shark, motion, FeedingEvent::Consumed);
                FeedingStep {
                    event: Some(FeedingEvent::Consumed),
                    food_visible: true,
                    shark_pursuing: false,
                }
            }
            Steering::Moving { pose, .. } => {
                shark.set_root_pose(pose);
                animate_swim_wag(shark, t, motion);
                FeedingStep {
                    event: None,
                    food_visible: true,
                    shark_pursuing: true,
                }
            }
        }
    }

    /// Return to idle and put the shark back on an orbit through its
    /// current position.
    fn finish(
        &mut self,
        t: f32,
        shark: &mut Entity,
        motion: &MotionOptions,
        event: FeedingEvent,
    ) {
        let orbit =
            OrbitParams::through_pose(&shark.root_pose(), motion.orbit_rate, t);
        shark.set_motion(Motion::Orbit(orbit));
        animate_entity(shark, t, motion);
        self.phase = FeedingPhase::Idle;
        self.sessions_completed += 1;
        log::debug!(
            "feeding session ended ({event:?}), shark orbit radius {:.3}",
            orbit.radius
        );
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::scene::{Hierarchy, ModelId};

    fn shark() -> Entity {
        let pose = Pose6DoF::from_translation_yaw(
            Vec3::new(4.5, 1.5, 4.5),
            180.0_f32.to_radians(),
        );
        Entity::new(
            ModelId::Shark,
            6,
            pose,
            Motion::Orbit(OrbitParams::from_pose(&pose, 0.0)),
            Hierarchy::Flat,
        )
        .unwrap()
    }

    fn food() -> Entity {
        Entity::new(
            ModelId::FishFood,
            2,
            Pose6DoF::IDENTITY,
            Motion::Static,
            Hierarchy::Flat,
        )
        .unwrap()
    }

    /// Run frames at a fixed delta until the session goes idle.
    fn run_to_completion(
        session: &mut FeedingSession,
        shark: &mut Entity,
        food: &mut Entity,
        feeding: &FeedingOptions,
        dt: f32,
        max_frames: usize,
    ) -> Option<(FeedingEvent, usize)> {
        let motion = MotionOptions::default();
        for frame in 1..=max_frames {
            let t = frame as f32 * dt;
            let step = session.advance(t, shark, food, &motion, feeding);
            if let Some(
                e @ (FeedingEvent::Consumed | FeedingEvent::ReachedFloor),
            ) = step.event
            {
                return Some((e, frame));
            }
        }
        None
    }

    #[test]
    fn trigger_is_idempotent_while_active() {
        let mut session = FeedingSession::new();
        assert_eq!(session.trigger(), Some(FeedingEvent::Started));
        assert_eq!(session.phase(), FeedingPhase::Deploying);
        assert_eq!(session.trigger(), None);

        let (mut s, mut f) = (shark(), food());
        let _ = session.advance(
            0.1,
            &mut s,
            &mut f,
            &MotionOptions::default(),
            &FeedingOptions::default(),
        );
        assert_eq!(session.phase(), FeedingPhase::Descending);
        assert_eq!(session.trigger(), None);
        assert_eq!(session.phase(), FeedingPhase::Descending);
    }

    #[test]
    fn deploy_places_food_without_descent() {
        let mut session = FeedingSession::new();
        let _ = session.trigger();
        let (mut s, mut f) = (shark(), food());
        let shark_before = s.root_pose();

        let step = session.advance(
            500.0,
            &mut s,
            &mut f,
            &MotionOptions::default(),
            &FeedingOptions::default(),
        );
        assert_eq!(step.event, Some(FeedingEvent::Deployed));
        assert!(step.food_visible);
        assert!(!step.shark_pursuing);
        assert!(f
            .nodes()
            .iter()
            .all(|n| n.pose().translation == Vec3::new(4.0, 2.5, 4.0)));
        assert_eq!(s.root_pose(), shark_before);
    }

    #[test]
    fn idle_keeps_food_hidden_and_shark_orbiting() {
        let mut session = FeedingSession::new();
        let (mut s, mut f) = (shark(), food());
        let step = session.advance(
            0.0,
            &mut s,
            &mut f,
            &MotionOptions::default(),
            &FeedingOptions::default(),
        );
        assert_eq!(step, FeedingStep::default());
        let root = s.root_pose().translation;
        assert!((root.x - 6.364).abs() < 1e-3);
        assert!(root.z.abs() < 1e-4);
    }

    #[test]
    fn descent_scales_with_session_time() {
        let mut session = FeedingSession::new();
        let _ = session.trigger();
        let (mut s, mut f) = (shark(), food());
        let motion = MotionOptions::default();
        let feeding = FeedingOptions::default();
        let _ = session.advance(10.0, &mut s, &mut f, &motion, &feeding);

        let step = session.advance(100.0, &mut s, &mut f, &motion, &feeding);
        assert!(step.shark_pursuing);
        let y = f.root_pose().translation.y;
        assert!((y - (2.5 - 100.0 * 0.000_02)).abs() < 1e-6);
    }

    #[test]
    fn food_reaching_floor_ends_session() {
        let mut session = FeedingSession::new();
        let _ = session.trigger();
        let (mut s, mut f) = (shark(), food());
        let feeding = FeedingOptions {
            descent_rate: 0.01,
            ..FeedingOptions::default()
        };

        let (event, _) =
            run_to_completion(&mut session, &mut s, &mut f, &feeding, 1.0, 200)
                .expect("session should terminate");
        assert_eq!(event, FeedingEvent::ReachedFloor);
        assert_eq!(session.phase(), FeedingPhase::Idle);
        assert_eq!(session.sessions_completed(), 1);
    }

    #[test]
    fn shark_consumes_food_close_by() {
        let mut session = FeedingSession::new();
        let _ = session.trigger();
        let pose = Pose6DoF::from_translation(Vec3::new(4.0, 2.45, 4.05));
        let mut s = Entity::new(
            ModelId::Shark,
            3,
            pose,
            Motion::Orbit(OrbitParams::from_pose(&pose, 0.0)),
            Hierarchy::Flat,
        )
        .unwrap();
        let mut f = food();

        let (event, frame) = run_to_completion(
            &mut session,
            &mut s,
            &mut f,
            &FeedingOptions::default(),
            0.016,
            100,
        )
        .expect("session should terminate");
        assert_eq!(event, FeedingEvent::Consumed);
        assert_eq!(frame, 2);
        assert!(!session.is_active());
    }

    #[test]
    fn default_session_terminates() {
        let mut session = FeedingSession::new();
        let _ = session.trigger();
        let (mut s, mut f) = (shark(), food());
        let result = run_to_completion(
            &mut session,
            &mut s,
            &mut f,
            &FeedingOptions::default(),
            1.0 / 60.0,
            100_000,
        );
        assert!(result.is_some());
        assert_eq!(session.phase(), FeedingPhase::Idle);
    }

    #[test]
    fn resumed_orbit_is_continuous() {
        let mut session = FeedingSession::new();
        let _ = session.trigger();
        let (mut s, mut f) = (shark(), food());
        let feeding = FeedingOptions {
            descent_rate: 0.01,
            ..FeedingOptions::default()
        };
        let motion = MotionOptions::default();

        let (_, frame) =
            run_to_completion(&mut session, &mut s, &mut f, &feeding, 1.0, 200)
                .expect("session should terminate");
        let at_end = s.root_pose().translation;

        // Next idle frame continues from where pursuit stopped.
        let t = (frame + 1) as f32;
        let _ = session.advance(t, &mut s, &mut f, &motion, &feeding);
        let next = s.root_pose().translation;
        let arc = motion.orbit_rate * at_end.x.hypot(at_end.z);
        assert!(next.distance(at_end) <= arc + 1e-3);
    }
}
