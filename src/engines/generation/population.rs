use crate::engines::evaluation::FitnessOracle;
use crate::engines::generation::{genome::random_genome, individual::Individual};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// How long freshly generated genomes are
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenomeLength {
    Fixed(usize),
    /// Sampled uniformly per individual, bounds inclusive
    Range { min: usize, max: usize },
}

impl GenomeLength {
    pub fn from_bounds(min: usize, max: usize) -> Self {
        if min >= max {
            GenomeLength::Fixed(min)
        } else {
            GenomeLength::Range { min, max }
        }
    }

    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            GenomeLength::Fixed(length) => length,
            GenomeLength::Range { min, max } => rng.gen_range(min..=max),
        }
    }
}

/// All individuals of one generation.
///
/// Fitness is refreshed through the oracle as soon as a population is built;
/// the engine replaces the whole population every generation.
#[derive(Debug, Clone)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    /// Generate `size` random individuals from a seeded source and score them.
    pub fn random<O: FitnessOracle + ?Sized>(
        size: usize,
        length: GenomeLength,
        seed: u64,
        oracle: &O,
    ) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let individuals = (0..size)
            .map(|_| {
                let target_length = length.sample(&mut rng);
                Individual::new(random_genome(target_length, &mut rng))
            })
            .collect();

        Self::from_individuals(individuals, oracle)
    }

    /// Adopt existing individuals (survivors and children) and score them.
    pub fn from_individuals<O: FitnessOracle + ?Sized>(
        individuals: Vec<Individual>,
        oracle: &O,
    ) -> Self {
        let mut population = Self { individuals };
        population.refresh_fitness(oracle);
        population
    }

    /// One batch call to the oracle; score `k` goes to individual `k`.
    ///
    /// A response of the wrong length breaks the oracle contract and is
    /// treated as an all-zero batch.
    pub fn refresh_fitness<O: FitnessOracle + ?Sized>(&mut self, oracle: &O) {
        if self.individuals.is_empty() {
            return;
        }

        let genomes: Vec<String> = self
            .individuals
            .iter()
            .map(Individual::genome_string)
            .collect();
        let scores = oracle.evaluate(&genomes);

        if scores.len() != genomes.len() {
            log::warn!(
                "Oracle returned {} scores for {} genomes, falling back to zero fitness",
                scores.len(),
                genomes.len()
            );
            for individual in &mut self.individuals {
                individual.set_fitness(0.0);
            }
            return;
        }

        for (individual, score) in self.individuals.iter_mut().zip(scores) {
            individual.set_fitness(score);
        }
    }

    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// First individual holding the highest fitness
    pub fn fittest(&self) -> Option<&Individual> {
        self.individuals.iter().reduce(|best, candidate| {
            if candidate.fitness() > best.fitness() {
                candidate
            } else {
                best
            }
        })
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }
}
