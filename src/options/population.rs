use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::AquariaError;
use crate::scene::ModelId;

/// Inclusive range a spawn coordinate is sampled from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct SpawnRange {
    /// Lower bound.
    pub min: f32,
    /// Upper bound.
    pub max: f32,
}

impl SpawnRange {
    /// Range from `min` to `max`.
    #[must_use]
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Degenerate range that always yields `value`.
    #[must_use]
    pub const fn fixed(value: f32) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Whether `value` lies inside the range.
    #[must_use]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    fn validate(&self, what: &str) -> Result<(), AquariaError> {
        if !(self.min.is_finite() && self.max.is_finite()) {
            return Err(AquariaError::config(format!(
                "{what} range must be finite"
            )));
        }
        if self.min > self.max {
            return Err(AquariaError::config(format!(
                "{what} range min {} exceeds max {}",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// A batch of identical entities placed by sampling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct SpawnGroup {
    /// Mesh every member of the group renders with.
    pub model: ModelId,
    /// Number of entities to create.
    pub count: usize,
    /// Sampled x translation.
    pub x: SpawnRange,
    /// Sampled y translation.
    pub y: SpawnRange,
    /// Sampled z translation.
    pub z: SpawnRange,
    /// Sampled yaw in degrees.
    pub yaw_degrees: SpawnRange,
}

impl SpawnGroup {
    fn validate(&self, section: &str) -> Result<(), AquariaError> {
        let label = format!("population.{section} ({:?})", self.model);
        self.x.validate(&format!("{label}.x"))?;
        self.y.validate(&format!("{label}.y"))?;
        self.z.validate(&format!("{label}.z"))?;
        self.yaw_degrees.validate(&format!("{label}.yaw_degrees"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Population", inline)]
#[serde(default)]
/// Which entities populate the tank and where they start.
pub struct PopulationOptions {
    /// Seed for placement sampling; `None` draws from the OS.
    pub seed: Option<u64>,
    /// Orbit-swimming fish groups.
    pub fish: Vec<SpawnGroup>,
    /// Bobbing jellyfish groups.
    pub jellyfish: Vec<SpawnGroup>,
    /// Swaying kelp stalks.
    pub kelp: Vec<SpawnGroup>,
    /// Static rocks.
    pub rocks: Vec<SpawnGroup>,
    /// The single shark; `count` is ignored.
    pub shark: SpawnGroup,
}

impl Default for PopulationOptions {
    fn default() -> Self {
        let tank = SpawnRange::new(-5.25, 5.25);
        let any_yaw = SpawnRange::new(0.0, 180.0);
        let swim_yaw = SpawnRange::new(175.0, 185.0);
        let fish = |model| SpawnGroup {
            model,
            count: 75,
            x: tank,
            y: SpawnRange::new(0.5, 2.8),
            z: tank,
            yaw_degrees: swim_yaw,
        };
        let jellyfish = |model| SpawnGroup {
            model,
            count: 20,
            x: tank,
            y: SpawnRange::new(0.5, 2.5),
            z: tank,
            yaw_degrees: any_yaw,
        };
        Self {
            seed: None,
            fish: vec![fish(ModelId::Fish1), fish(ModelId::Fish2)],
            jellyfish: vec![
                jellyfish(ModelId::Jellyfish1),
                jellyfish(ModelId::Jellyfish2),
            ],
            kelp: vec![SpawnGroup {
                model: ModelId::Kelp,
                count: 150,
                x: tank,
                y: SpawnRange::fixed(0.0),
                z: tank,
                yaw_degrees: any_yaw,
            }],
            rocks: vec![SpawnGroup {
                model: ModelId::Rock,
                count: 15,
                x: SpawnRange::new(-5.0, 5.0),
                y: SpawnRange::fixed(0.0),
                z: SpawnRange::new(-5.0, 5.0),
                yaw_degrees: any_yaw,
            }],
            shark: SpawnGroup {
                model: ModelId::Shark,
                count: 1,
                x: SpawnRange::fixed(4.5),
                y: SpawnRange::new(1.0, 2.0),
                z: SpawnRange::fixed(4.5),
                yaw_degrees: swim_yaw,
            },
        }
    }
}

impl PopulationOptions {
    /// Reject inverted or non-finite spawn ranges.
    pub fn validate(&self) -> Result<(), AquariaError> {
        let sections = [
            ("fish", &self.fish),
            ("jellyfish", &self.jellyfish),
            ("kelp", &self.kelp),
            ("rocks", &self.rocks),
        ];
        for (section, groups) in sections {
            for group in groups {
                group.validate(section)?;
            }
        }
        self.shark.validate("shark")
    }

    /// Total number of entities the options will spawn, shark included.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        let groups = self
            .fish
            .iter()
            .chain(&self.jellyfish)
            .chain(&self.kelp)
            .chain(&self.rocks);
        groups.map(|g| g.count).sum::<usize>() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_population_matches_reference_scene() {
        let opts = PopulationOptions::default();
        assert_eq!(opts.fish.iter().map(|g| g.count).sum::<usize>(), 150);
        assert_eq!(opts.jellyfish.iter().map(|g| g.count).sum::<usize>(), 40);
        assert_eq!(opts.kelp[0].count, 150);
        assert_eq!(opts.rocks[0].count, 15);
        assert_eq!(opts.entity_count(), 356);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn inverted_range_rejected_with_context() {
        let mut opts = PopulationOptions::default();
        opts.rocks[0].x = SpawnRange::new(3.0, -3.0);
        let err = opts.validate().unwrap_err().to_string();
        assert!(err.contains("population.rocks"), "{err}");
        assert!(err.contains(".x"), "{err}");
    }

    #[test]
    fn fixed_range_contains_only_its_value() {
        let r = SpawnRange::fixed(4.5);
        assert!(r.contains(4.5));
        assert!(!r.contains(4.6));
    }
}
