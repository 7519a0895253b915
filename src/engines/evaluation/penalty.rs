use crate::{
    config::{LengthPunishingStrategy, PenaltyConfig},
    engines::evaluation::FitnessOracle,
};

/// Wraps another oracle and subtracts a genome-length penalty from its scores.
///
/// The penalty is `|len - target|` (linear) or `(len - target)^2`
/// (exponential), scaled by `factor`; scores never drop below zero.
pub struct LengthPenaltyOracle<O> {
    inner: O,
    config: PenaltyConfig,
}

impl<O: FitnessOracle> LengthPenaltyOracle<O> {
    pub fn new(inner: O, config: PenaltyConfig) -> Self {
        Self { inner, config }
    }

    pub fn penalty(&self, genome_length: usize) -> f64 {
        let diff = genome_length as i64 - self.config.target_length as i64;
        let units = match self.config.strategy {
            LengthPunishingStrategy::None => 0,
            LengthPunishingStrategy::Linear => diff.abs(),
            LengthPunishingStrategy::Exponential => diff.saturating_mul(diff),
        };
        self.config.factor * units as f64
    }
}

impl<O: FitnessOracle> FitnessOracle for LengthPenaltyOracle<O> {
    fn evaluate(&self, genomes: &[String]) -> Vec<f64> {
        let mut scores = self.inner.evaluate(genomes);
        if self.config.strategy == LengthPunishingStrategy::None || scores.len() != genomes.len() {
            return scores;
        }

        for (score, genome) in scores.iter_mut().zip(genomes) {
            *score = (*score - self.penalty(genome.chars().count())).max(0.0);
        }
        scores
    }
}
