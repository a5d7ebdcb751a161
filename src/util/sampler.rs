//! Range sampling for initial entity placement.
//!
//! Spawning draws every coordinate through [`RangeSampler`] so tests and
//! replays can substitute a deterministic sequence for the RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of values uniformly distributed over a closed range.
pub trait RangeSampler {
    /// Value in `[low, high]`. Implementations return `low` when
    /// `low >= high`.
    fn sample(&mut self, low: f32, high: f32) -> f32;
}

/// [`RangeSampler`] backed by a seedable standard RNG.
#[derive(Debug, Clone)]
pub struct RandomSampler {
    rng: StdRng,
}

impl RandomSampler {
    /// Sampler with a fixed seed; identical seeds give identical scenes.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Sampler seeded from the operating system.
    #[must_use]
    pub fn from_os() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded sampler when `seed` is given, OS-seeded otherwise.
    #[must_use]
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_os, Self::seeded)
    }
}

impl RangeSampler for RandomSampler {
    fn sample(&mut self, low: f32, high: f32) -> f32 {
        if low >= high {
            return low;
        }
        self.rng.random_range(low..=high)
    }
}

/// Deterministic [`RangeSampler`] replaying unit fractions.
///
/// Each call takes the next fraction `f` (cycling) and returns
/// `low + f * (high - low)`.
#[derive(Debug, Clone)]
pub struct SequenceSampler {
    fractions: Vec<f32>,
    cursor: usize,
}

impl SequenceSampler {
    /// Sampler cycling through `fractions`, each clamped to `[0, 1]`. An
    /// empty list behaves like a constant `0.5`.
    #[must_use]
    pub fn new(fractions: impl IntoIterator<Item = f32>) -> Self {
        let mut fractions: Vec<f32> =
            fractions.into_iter().map(|f| f.clamp(0.0, 1.0)).collect();
        if fractions.is_empty() {
            fractions.push(0.5);
        }
        Self {
            fractions,
            cursor: 0,
        }
    }

    /// Sampler that always returns the midpoint of the range.
    #[must_use]
    pub fn midpoint() -> Self {
        Self::new([0.5])
    }
}

impl RangeSampler for SequenceSampler {
    fn sample(&mut self, low: f32, high: f32) -> f32 {
        let f = self.fractions[self.cursor % self.fractions.len()];
        self.cursor += 1;
        if low >= high {
            return low;
        }
        low + f * (high - low)
    }
}
