use crate::config::{AppConfig, ConfigSection, EvolutionConfig};
use crate::engines::evaluation::FitnessOracle;
use crate::engines::generation::{
    crossover::crossover,
    hall_of_fame::Winners,
    individual::Individual,
    operators::{mutate, MutationRates},
    population::{GenomeLength, Population},
    selection::select,
};
use crate::error::{EvomovesError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait ProgressCallback: Send {
    fn on_generation_start(&mut self, generation: usize);
    fn on_generation_complete(
        &mut self,
        generation: usize,
        best_fitness: f64,
        best_fitness_overall: f64,
        winners: usize,
    );
    fn on_winner_found(&mut self, _generation: usize, _genome: &str, _total: usize) {}
}

impl<T: ProgressCallback + ?Sized> ProgressCallback for &mut T {
    fn on_generation_start(&mut self, generation: usize) {
        (**self).on_generation_start(generation)
    }

    fn on_generation_complete(
        &mut self,
        generation: usize,
        best_fitness: f64,
        best_fitness_overall: f64,
        winners: usize,
    ) {
        (**self).on_generation_complete(generation, best_fitness, best_fitness_overall, winners)
    }

    fn on_winner_found(&mut self, generation: usize, genome: &str, total: usize) {
        (**self).on_winner_found(generation, genome, total)
    }
}

/// Result of one engine run
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    /// Distinct accepted genomes in discovery order
    pub winners: Vec<String>,
    /// Index of the last generation that was evaluated
    pub generations_run: usize,
}

pub struct EvolutionEngine<O: FitnessOracle> {
    config: EvolutionConfig,
    acceptance_threshold: f64,
    oracle: O,
    rng: StdRng,
    generation_count: usize,
    best_fitness_overall: f64,
}

impl<O: FitnessOracle> EvolutionEngine<O> {
    /// Build an engine from a validated configuration.
    ///
    /// Fails with a configuration error if the evolution section is invalid
    /// or the acceptance threshold is not a finite number.
    pub fn new(config: EvolutionConfig, acceptance_threshold: f64, oracle: O) -> Result<Self> {
        config.validate()?;
        if !acceptance_threshold.is_finite() {
            return Err(EvomovesError::Configuration(format!(
                "Acceptance threshold must be finite, got {}",
                acceptance_threshold
            )));
        }

        let rng = StdRng::seed_from_u64(config.seed);

        Ok(Self {
            config,
            acceptance_threshold,
            oracle,
            rng,
            generation_count: 0,
            best_fitness_overall: f64::NEG_INFINITY,
        })
    }

    pub fn from_app_config(config: &AppConfig, oracle: O) -> Result<Self> {
        Self::new(
            config.evolution.clone(),
            config.oracle.acceptance_threshold,
            oracle,
        )
    }

    /// Run from a freshly generated random population
    pub fn run<C: ProgressCallback>(&mut self, callback: C) -> Result<RunOutcome> {
        let length = GenomeLength::from_bounds(
            self.config.min_genome_length,
            self.config.max_genome_length,
        );
        let population = Population::random(
            self.config.population_size,
            length,
            self.config.seed,
            &self.oracle,
        );

        self.evolve(population, callback)
    }

    /// Run from a caller-supplied starting population
    pub fn run_from<C: ProgressCallback>(
        &mut self,
        individuals: Vec<Individual>,
        callback: C,
    ) -> Result<RunOutcome> {
        let population = Population::from_individuals(individuals, &self.oracle);
        self.evolve(population, callback)
    }

    fn evolve<C: ProgressCallback>(
        &mut self,
        mut population: Population,
        mut callback: C,
    ) -> Result<RunOutcome> {
        let mut winners = Winners::new(self.config.max_solutions);
        self.best_fitness_overall = f64::NEG_INFINITY;

        for generation in 0..=self.config.max_generation {
            self.generation_count = generation;
            callback.on_generation_start(generation);

            // Winners stop growing at the cap; the best-fitness figures
            // still cover the whole generation.
            let mut best_fitness = f64::NEG_INFINITY;
            for individual in population.individuals() {
                best_fitness = best_fitness.max(individual.fitness());

                if winners.is_full() || individual.fitness() < self.acceptance_threshold {
                    continue;
                }

                let genome = individual.genome_string();
                if winners.try_add(&genome) {
                    callback.on_winner_found(generation, &genome, winners.len());
                }
            }
            self.best_fitness_overall = self.best_fitness_overall.max(best_fitness);

            callback.on_generation_complete(
                generation,
                best_fitness,
                self.best_fitness_overall,
                winners.len(),
            );

            if winners.is_full() {
                return Ok(RunOutcome {
                    winners: winners.into_vec(),
                    generations_run: generation,
                });
            }

            if generation == self.config.max_generation {
                break;
            }

            population = self.next_generation(population)?;
        }

        if let Some(best) = population.fittest() {
            log::info!(
                "Best genome found: {} with fitness {}",
                best.genome_string(),
                best.fitness()
            );
        }

        Ok(RunOutcome {
            winners: winners.into_vec(),
            generations_run: self.generation_count,
        })
    }

    /// Survivors (possibly mutated) followed by crossover children, re-scored
    fn next_generation(&mut self, population: Population) -> Result<Population> {
        let population_size = self.config.population_size;
        let elite_count = self.config.elite_count().min(population_size);
        let rates = MutationRates::from_config(&self.config);

        let mut survivors = select(
            self.config.selection,
            population.individuals(),
            elite_count,
            &mut self.rng,
        )?;

        if self.config.mutation_target.includes_parents() {
            for survivor in &mut survivors {
                if self.rng.gen::<f64>() <= self.config.mutation_rate {
                    mutate(survivor, &rates, &mut self.rng);
                }
            }
        }

        let mut children = Vec::with_capacity(population_size - elite_count);
        while elite_count + children.len() < population_size {
            let parents = select(self.config.selection, &survivors, 2, &mut self.rng)?;
            let mut child = crossover(
                &parents[0],
                &parents[1],
                self.config.crossover,
                self.config.leftover,
                &mut self.rng,
            );

            if self.config.mutation_target.includes_children()
                && self.rng.gen::<f64>() <= self.config.mutation_rate
            {
                mutate(&mut child, &rates, &mut self.rng);
            }
            children.push(child);
        }

        survivors.extend(children);
        Ok(Population::from_individuals(survivors, &self.oracle))
    }

    pub fn generation_count(&self) -> usize {
        self.generation_count
    }

    pub fn best_fitness_overall(&self) -> f64 {
        self.best_fitness_overall
    }
}
