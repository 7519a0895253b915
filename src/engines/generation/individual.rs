use crate::engines::generation::genome::{genome_to_string, Genome};
use crate::types::Move;
use std::cmp::Ordering;
use std::fmt;

/// One candidate solution: a genome and its last known fitness
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    genome: Genome,
    fitness: f64,
}

impl Individual {
    pub fn new(genome: Genome) -> Self {
        Self { genome, fitness: 0.0 }
    }

    pub fn with_fitness(genome: Genome, fitness: f64) -> Self {
        Self { genome, fitness }
    }

    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }

    pub fn genome(&self) -> &[Move] {
        &self.genome
    }

    pub fn genome_len(&self) -> usize {
        self.genome.len()
    }

    pub fn gene(&self, index: usize) -> Option<Move> {
        self.genome.get(index).copied()
    }

    pub fn set_gene(&mut self, index: usize, gene: Move) {
        self.genome[index] = gene;
    }

    pub fn add_gene(&mut self, gene: Move) {
        self.genome.push(gene);
    }

    pub fn remove_gene(&mut self, index: usize) -> Move {
        self.genome.remove(index)
    }

    pub fn genome_string(&self) -> String {
        genome_to_string(&self.genome)
    }

    /// Descending fitness order: the fitter individual sorts first.
    /// Equal (or incomparable) fitness compares equal, so stable sorts keep pool order.
    pub fn fitness_order(&self, other: &Individual) -> Ordering {
        other
            .fitness
            .partial_cmp(&self.fitness)
            .unwrap_or(Ordering::Equal)
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Individual{{genome='{}', fitness={}}}",
            self.genome_string(),
            self.fitness
        )
    }
}
