//! Shared utilities.
//!
//! Helpers for frame timing and seedable range sampling.

pub mod frame_timing;
pub mod sampler;
