// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Pose animation, feeding behavior and a constrained first-person camera
//! for a 3D aquarium scene.
//!
//! The crate computes what a renderer needs each frame (per-node world
//! transforms, view/projection matrices and the eye position) without
//! touching any graphics API. Mesh loading and draw submission stay with the
//! host behind the [`scene::ModelSource`] and [`engine::MeshRenderer`]
//! traits.
//!
//! # Key entry points
//!
//! - [`engine::AquariumEngine`] - setup and the per-frame update
//! - [`scene::Scene`] - the populated tank and its draw list
//! - [`options::Options`] - runtime configuration (camera, bounds, motion,
//!   feeding, population, key bindings)
//! - [`animation`] - procedural motion models and the feeding session
//! - [`camera`] - constrained camera movement and matrices
//!
//! # Frame flow
//!
//! Raw [`input::InputEvent`]s become [`engine::AquariaCommand`]s. Camera
//! commands are applied first, the session clock advances, every entity is
//! animated at the new session time, and the engine returns a
//! [`engine::FrameOutput`].
//!
//! ```
//! use aquaria::engine::AquariumEngine;
//! use aquaria::options::Options;
//! use aquaria::scene::ProceduralModels;
//! use aquaria::util::sampler::SequenceSampler;
//!
//! let mut engine = AquariumEngine::new(
//!     Options::default(),
//!     &ProceduralModels::new(10.0),
//!     &mut SequenceSampler::midpoint(),
//! )?;
//! let frame = engine.update(1.0 / 60.0, &[]);
//! assert!(!frame.draws.is_empty());
//! # Ok::<(), aquaria::error::AquariaError>(())
//! ```

pub mod animation;
pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod options;
pub mod scene;
pub mod util;
