use super::traits::{check_rate, ConfigSection};
use crate::error::EvomovesError;
use serde::{Deserialize, Serialize};

/// Tolerance for the mutation sub-rates summing to one
pub const RATE_SUM_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionConfig {
    pub seed: u64,
    pub min_genome_length: usize,
    pub max_genome_length: usize,
    /// Last generation index; the loop runs `max_generation + 1` generations
    pub max_generation: usize,
    pub population_size: usize,
    /// Stop as soon as this many distinct winners are collected
    pub max_solutions: usize,

    pub crossover: CrossoverStrategy,
    pub crossover_rate: f64,
    pub leftover: LeftoverStrategy,

    pub mutation_target: MutationTarget,
    pub mutation_rate: f64,
    pub bit_flip_rate: f64,
    pub bit_add_rate: f64,
    pub bit_remove_rate: f64,

    pub selection: SelectionStrategy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum SelectionStrategy {
    Elitism,
    Roulette,
    Tournament { size: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossoverStrategy {
    OnePoint,
    TwoPoint,
    Uniform,
}

/// What happens to the genes of the longer parent past the shorter one's length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeftoverStrategy {
    KeepAllOrNothingRandomly,
    KeepOneOrNotRandomly,
    KeepOnlyFromFittestParent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationTarget {
    Parents,
    Children,
    Both,
}

impl MutationTarget {
    pub fn includes_parents(self) -> bool {
        matches!(self, MutationTarget::Parents | MutationTarget::Both)
    }

    pub fn includes_children(self) -> bool {
        matches!(self, MutationTarget::Children | MutationTarget::Both)
    }
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            min_genome_length: 4,
            max_genome_length: 12,
            max_generation: 100,
            population_size: 50,
            max_solutions: 5,
            crossover: CrossoverStrategy::Uniform,
            crossover_rate: 0.8,
            leftover: LeftoverStrategy::KeepAllOrNothingRandomly,
            mutation_target: MutationTarget::Both,
            mutation_rate: 0.1,
            bit_flip_rate: 0.6,
            bit_add_rate: 0.2,
            bit_remove_rate: 0.2,
            selection: SelectionStrategy::Tournament { size: 3 },
        }
    }
}

impl EvolutionConfig {
    /// Survivors carried over unchanged each generation
    pub fn elite_count(&self) -> usize {
        (self.population_size as f64 * (1.0 - self.crossover_rate)).round() as usize
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), EvomovesError> {
        let section = Self::section_name();

        if self.population_size == 0 {
            return Err(EvomovesError::Configuration(
                "Population size must be at least 1".to_string()
            ));
        }
        if self.min_genome_length == 0 {
            return Err(EvomovesError::Configuration(
                "Minimum genome length must be at least 1".to_string()
            ));
        }
        if self.min_genome_length > self.max_genome_length {
            return Err(EvomovesError::Configuration(format!(
                "Minimum genome length ({}) exceeds maximum genome length ({})",
                self.min_genome_length, self.max_genome_length
            )));
        }
        if self.max_solutions == 0 {
            return Err(EvomovesError::Configuration(
                "max_solutions must be at least 1".to_string()
            ));
        }
        if let SelectionStrategy::Tournament { size } = self.selection {
            if size == 0 {
                return Err(EvomovesError::Configuration(
                    "Tournament size must be at least 1".to_string()
                ));
            }
        }

        check_rate(section, "crossover_rate", self.crossover_rate)?;
        check_rate(section, "mutation_rate", self.mutation_rate)?;
        check_rate(section, "bit_flip_rate", self.bit_flip_rate)?;
        check_rate(section, "bit_add_rate", self.bit_add_rate)?;
        check_rate(section, "bit_remove_rate", self.bit_remove_rate)?;

        let sum = self.bit_flip_rate + self.bit_add_rate + self.bit_remove_rate;
        if (sum - 1.0).abs() > RATE_SUM_EPSILON {
            return Err(EvomovesError::Configuration(format!(
                "Sum of bit mutation rates does not equal 1 ({:.12})",
                sum
            )));
        }

        Ok(())
    }
}
