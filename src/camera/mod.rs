//! Camera system for walking around the tank.
//!
//! Provides a first-person camera with constrained movement, yaw/pitch
//! look, optional zoom, and GPU uniform hand-off.

/// Walkable-area bounds and the exclusion zone around the tank.
pub mod constraints;
/// First-person camera controller: movement, look, zoom and matrices.
pub mod controller;
/// Camera basis math and GPU uniform types.
pub mod core;

pub use self::constraints::{ConstraintChecker, MovementBounds};
pub use self::controller::{CameraController, MoveDirection};
pub use self::core::{CameraBasis, CameraUniform};
