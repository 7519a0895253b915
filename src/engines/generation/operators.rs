use crate::config::EvolutionConfig;
use crate::engines::generation::individual::Individual;
use crate::types::Move;
use rand::Rng;

/// Relative weights of the three point mutations; they sum to 1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MutationRates {
    pub add: f64,
    pub remove: f64,
    pub flip: f64,
}

impl MutationRates {
    pub fn from_config(config: &EvolutionConfig) -> Self {
        Self {
            add: config.bit_add_rate,
            remove: config.bit_remove_rate,
            flip: config.bit_flip_rate,
        }
    }
}

/// Which mutation a call to [`mutate`] performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    /// A random move was appended
    Add,
    /// The gene at `index` was deleted
    Remove { index: usize },
    /// Remove was drawn on a single-gene genome; nothing changed
    RemoveSkipped,
    /// The gene at `index` was replaced by a different move
    Flip { index: usize },
}

/// Mutate one gene of an individual in place.
///
/// The caller has already decided that this individual mutates. A single
/// draw in `[0, 1)` picks the operation: `<= add` appends,
/// `<= add + remove` deletes the target gene (only if more than one gene is
/// left), anything else flips the target gene to a different move.
pub fn mutate<R: Rng>(
    individual: &mut Individual,
    rates: &MutationRates,
    rng: &mut R,
) -> MutationKind {
    if individual.genome_len() == 0 {
        individual.add_gene(Move::random(rng));
        return MutationKind::Add;
    }

    let index = rng.gen_range(0..individual.genome_len());
    let mut gene = Move::random(rng);

    let pick = rng.gen::<f64>();
    if pick <= rates.add {
        individual.add_gene(gene);
        MutationKind::Add
    } else if pick <= rates.add + rates.remove {
        if individual.genome_len() > 1 {
            individual.remove_gene(index);
            MutationKind::Remove { index }
        } else {
            MutationKind::RemoveSkipped
        }
    } else {
        while individual.gene(index) == Some(gene) {
            gene = Move::random(rng);
        }
        individual.set_gene(index, gene);
        MutationKind::Flip { index }
    }
}
