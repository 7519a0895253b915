use std::collections::HashSet;

/// Distinct winning genomes in the order they were found, capped at `max_size`
#[derive(Debug, Clone)]
pub struct Winners {
    genomes: Vec<String>,
    seen: HashSet<String>,
    max_size: usize,
}

impl Winners {
    pub fn new(max_size: usize) -> Self {
        Self {
            genomes: Vec::new(),
            seen: HashSet::new(),
            max_size,
        }
    }

    /// Record a winning genome. Returns false for duplicates or when full.
    pub fn try_add(&mut self, genome: &str) -> bool {
        if self.is_full() || self.seen.contains(genome) {
            return false;
        }

        self.seen.insert(genome.to_string());
        self.genomes.push(genome.to_string());
        true
    }

    pub fn is_full(&self) -> bool {
        self.genomes.len() >= self.max_size
    }

    pub fn get_all(&self) -> &[String] {
        &self.genomes
    }

    /// First of the shortest winners
    pub fn shortest(&self) -> Option<&str> {
        self.genomes
            .iter()
            .min_by_key(|g| g.len())
            .map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.genomes
    }

    pub fn len(&self) -> usize {
        self.genomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genomes.is_empty()
    }
}
