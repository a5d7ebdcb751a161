//! Procedural animation: per-frame motion models and the feeding session.

pub mod feeding;
pub mod motion;

pub use feeding::{FeedingEvent, FeedingPhase, FeedingSession, FeedingStep};
pub use motion::{
    animate_entity, animate_swim_wag, bob_height, heading_yaw, orbit_angle,
    orbit_swim, segment_wag, steer_toward, sway_roll, Steering,
};
