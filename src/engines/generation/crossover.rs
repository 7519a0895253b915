use crate::config::{CrossoverStrategy, LeftoverStrategy};
use crate::engines::generation::{genome::Genome, individual::Individual};
use crate::types::Move;
use rand::Rng;

/// Combine two parents into one child.
///
/// Parents with at most one gene are not recombined: the strictly fitter one
/// is returned (the second parent on a tie). Otherwise the first
/// `min(len1, len2)` genes are recombined by `strategy`. One-point crossover
/// takes the whole remaining tail of `parent2`; two-point and uniform hand the
/// longer parent's extra genes to the `leftover` policy.
///
/// The child always owns a new genome and starts with zero fitness.
pub fn crossover<R: Rng>(
    parent1: &Individual,
    parent2: &Individual,
    strategy: CrossoverStrategy,
    leftover: LeftoverStrategy,
    rng: &mut R,
) -> Individual {
    let len1 = parent1.genome_len();
    let len2 = parent2.genome_len();

    if len1 <= 1 || len2 <= 1 {
        return if parent1.fitness() > parent2.fitness() {
            parent1.clone()
        } else {
            parent2.clone()
        };
    }

    let genome1 = parent1.genome();
    let genome2 = parent2.genome();
    let min_length = len1.min(len2);

    let mut child = match strategy {
        CrossoverStrategy::OnePoint => {
            return Individual::new(one_point(genome1, genome2, min_length, rng));
        }
        CrossoverStrategy::TwoPoint => two_point(genome1, genome2, min_length, rng),
        CrossoverStrategy::Uniform => uniform(genome1, genome2, min_length, rng),
    };

    process_leftovers(leftover, &mut child, parent1, parent2, rng);
    Individual::new(child)
}

/// `parent1[0, cut) ++ parent2[cut, len2)` with `cut` in `[0, min_length - 2]`
fn one_point<R: Rng>(
    genome1: &[Move],
    genome2: &[Move],
    min_length: usize,
    rng: &mut R,
) -> Genome {
    let cut = rng.gen_range(0..min_length - 1);

    let mut child = Genome::with_capacity(genome2.len());
    child.extend_from_slice(&genome1[..cut]);
    child.extend_from_slice(&genome2[cut..]);
    child
}

/// `parent1[0, cut1) ++ parent2[cut1, cut2) ++ parent1[cut2, min_length)`
fn two_point<R: Rng>(
    genome1: &[Move],
    genome2: &[Move],
    min_length: usize,
    rng: &mut R,
) -> Genome {
    let cut1 = rng.gen_range(1..min_length);
    let cut2 = rng.gen_range(cut1..min_length);

    let mut child = Genome::with_capacity(min_length);
    child.extend_from_slice(&genome1[..cut1]);
    child.extend_from_slice(&genome2[cut1..cut2]);
    child.extend_from_slice(&genome1[cut2..min_length]);
    child
}

/// Per-position choice with near-equal quotas for each parent.
/// An odd remainder goes to `parent1` or `parent2` on a coin flip.
fn uniform<R: Rng>(
    genome1: &[Move],
    genome2: &[Move],
    min_length: usize,
    rng: &mut R,
) -> Genome {
    let mut pick1 = min_length / 2 + if rng.gen_bool(0.5) { min_length % 2 } else { 0 };
    let mut pick2 = min_length - pick1;

    let mut child = Genome::with_capacity(min_length);
    for i in 0..min_length {
        let choose1 = pick2 == 0 || (pick1 > 0 && rng.gen_bool(0.5));
        if choose1 {
            child.push(genome1[i]);
            pick1 -= 1;
        } else {
            child.push(genome2[i]);
            pick2 -= 1;
        }
    }
    child
}

fn process_leftovers<R: Rng>(
    strategy: LeftoverStrategy,
    child: &mut Genome,
    parent1: &Individual,
    parent2: &Individual,
    rng: &mut R,
) {
    let genome1 = parent1.genome();
    let genome2 = parent2.genome();
    let min_length = genome1.len().min(genome2.len());

    let longer = if genome1.len() > genome2.len() { genome1 } else { genome2 };
    let leftovers = &longer[min_length..];
    if leftovers.is_empty() {
        return;
    }

    match strategy {
        LeftoverStrategy::KeepAllOrNothingRandomly => {
            if rng.gen_bool(0.5) {
                child.extend_from_slice(leftovers);
            }
        }
        LeftoverStrategy::KeepOneOrNotRandomly => {
            for &gene in leftovers {
                if rng.gen_bool(0.5) {
                    child.push(gene);
                }
            }
        }
        LeftoverStrategy::KeepOnlyFromFittestParent => {
            // The fitter parent may be the shorter one, in which case nothing is appended
            let fittest = if parent1.fitness() >= parent2.fitness() { genome1 } else { genome2 };
            child.extend_from_slice(&fittest[min_length..]);
        }
    }
}
