//! Procedural motion models.
//!
//! Every model is a pure function of session time and fixed per-entity
//! parameters. The `animate_*` drivers write the resulting poses back into
//! an entity's nodes.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec3;

use crate::options::{FeedingOptions, MotionOptions};
use crate::scene::{Entity, Motion, OrbitParams, Pose6DoF};

// ---------------------------------------------------------------------------
// Pure models
// ---------------------------------------------------------------------------

/// Angle along the orbit at session time `t`: `ω·t + phase`.
#[inline]
#[must_use]
pub fn orbit_angle(orbit: &OrbitParams, rate: f32, t: f32) -> f32 {
    rate * t + orbit.phase
}

/// Root pose on the orbit at time `t`.
///
/// x/z trace the circle, yaw keeps the body tangent to it facing the
/// direction of travel, and height and roll/pitch are kept from `base`.
#[must_use]
pub fn orbit_swim(
    base: Pose6DoF,
    orbit: &OrbitParams,
    rate: f32,
    t: f32,
) -> Pose6DoF {
    let theta = orbit_angle(orbit, rate, t);
    Pose6DoF {
        translation: Vec3::new(
            orbit.radius * theta.cos(),
            base.translation.y,
            orbit.radius * theta.sin(),
        ),
        rotation: Vec3::new(
            base.rotation.x,
            FRAC_PI_2 - theta + PI,
            base.rotation.z,
        ),
    }
}

/// Transient tail-wag yaw of body segment `segment` at time `t`.
#[inline]
#[must_use]
pub fn segment_wag(opts: &MotionOptions, t: f32, segment: usize) -> f32 {
    opts.wag_amplitude
        * (opts.wag_frequency * t + opts.wag_phase_step * segment as f32).sin()
}

/// Jellyfish height at time `t` for the `index`-th member of its group.
#[inline]
#[must_use]
pub fn bob_height(opts: &MotionOptions, t: f32, index: usize) -> f32 {
    opts.bob_amplitude
        * (opts.bob_frequency * t - opts.bob_phase_step * index as f32).sin()
        + opts.bob_height
}

/// Kelp segment roll at time `t`.
#[inline]
#[must_use]
pub fn sway_roll(opts: &MotionOptions, t: f32, segment: usize) -> f32 {
    opts.sway_amplitude
        * (opts.sway_frequency * t + opts.sway_phase_step * segment as f32)
            .sin()
}

/// Outcome of one steering step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Steering {
    /// Within capture distance; the pose was not moved.
    Arrived {
        /// Distance to the target when arrival was detected.
        distance: f32,
    },
    /// Moved one step toward the target.
    Moving {
        /// Pose after the step.
        pose: Pose6DoF,
        /// Distance to the target before the step.
        distance: f32,
    },
}

/// Yaw that faces a travel direction `(dx, dz)` for the swim meshes.
#[inline]
#[must_use]
pub fn heading_yaw(dx: f32, dz: f32) -> f32 {
    dz.atan2(dx) + PI
}

/// Move `pose` one fixed step toward `target` and turn toward it at
/// constant angular speed.
///
/// The yaw moves by exactly `turn_step` per call, up or down depending on
/// the sign of the angular error; there is no easing and no wrap-around.
#[must_use]
pub fn steer_toward(
    pose: Pose6DoF,
    target: Vec3,
    opts: &FeedingOptions,
) -> Steering {
    let offset = target - pose.translation;
    let distance = offset.length();
    if distance < opts.capture_distance {
        return Steering::Arrived { distance };
    }

    let direction = offset / distance;
    let desired = heading_yaw(direction.x, direction.z);
    let turn = if desired - pose.yaw() < 0.0 {
        -opts.turn_step
    } else {
        opts.turn_step
    };

    let pose = Pose6DoF {
        translation: pose.translation + direction * opts.pursuit_step,
        ..pose.with_yaw_offset(turn)
    };
    Steering::Moving { pose, distance }
}

// ---------------------------------------------------------------------------
// Drivers
// ---------------------------------------------------------------------------

/// Run the entity's own motion model for session time `t`.
///
/// The shark during a feeding session is driven by
/// [`FeedingSession`](super::FeedingSession) instead.
pub fn animate_entity(entity: &mut Entity, t: f32, opts: &MotionOptions) {
    match entity.motion() {
        Motion::Static => {}
        Motion::Orbit(orbit) => {
            let pose = orbit_swim(entity.root_pose(), &orbit, opts.orbit_rate, t);
            entity.set_root_pose(pose);
            animate_swim_wag(entity, t, opts);
        }
        Motion::BobAndSpin { index } => {
            let mut pose = entity.root_pose();
            pose.translation.y = bob_height(opts, t, index);
            pose.rotation.y += opts.spin_step_degrees.to_radians();
            entity.set_root_pose(pose);
            entity.attach_to_root();
        }
        Motion::WaveSway => animate_sway(entity, t, opts),
    }
}

/// Attach every segment to the root and render it with its tail-wag yaw.
///
/// The wag is baked into the rendered transforms only; the stored root yaw
/// is the unwagged heading, so nothing accumulates across frames.
pub fn animate_swim_wag(entity: &mut Entity, t: f32, opts: &MotionOptions) {
    entity.attach_to_root();
    for (segment, node) in entity.nodes_mut().iter_mut().enumerate() {
        node.render_with_yaw_offset(segment_wag(opts, t, segment));
    }
}

fn animate_sway(entity: &mut Entity, t: f32, opts: &MotionOptions) {
    for (segment, node) in entity.nodes_mut().iter_mut().enumerate() {
        let mut pose = *node.pose();
        pose.rotation.z = sway_roll(opts, t, segment);
        node.set_pose(pose);
    }
}
