use crate::config::SelectionStrategy;
use crate::engines::generation::individual::Individual;
use crate::error::{EvomovesError, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use std::cmp::Ordering;

/// Pick exactly `selection_size` individuals from `pool`.
///
/// The result may contain the same individual more than once (roulette and
/// tournament draw with replacement). Every returned individual is a copy.
pub fn select<R: Rng>(
    strategy: SelectionStrategy,
    pool: &[Individual],
    selection_size: usize,
    rng: &mut R,
) -> Result<Vec<Individual>> {
    match strategy {
        SelectionStrategy::Elitism => elitism_selection(pool, selection_size),
        SelectionStrategy::Roulette => roulette_selection(pool, selection_size, rng),
        SelectionStrategy::Tournament { size } => {
            tournament_selection(pool, selection_size, size, rng)
        }
    }
}

/// The `selection_size` fittest individuals, fittest first
pub fn elitism_selection(pool: &[Individual], selection_size: usize) -> Result<Vec<Individual>> {
    if selection_size > pool.len() {
        return Err(EvomovesError::Sizing {
            strategy: "elitism",
            requested: selection_size,
            available: pool.len(),
        });
    }

    let mut order: Vec<usize> = (0..pool.len()).collect();
    order.sort_by(|&a, &b| pool[a].fitness_order(&pool[b]));

    Ok(order
        .into_iter()
        .take(selection_size)
        .map(|i| pool[i].clone())
        .collect())
}

/// Fitness-proportionate selection.
///
/// When the pool's total fitness is not a positive finite number every draw
/// targets 0, so an all-zero pool always yields its first individual.
/// If no running sum reaches the target (negative scores) the last
/// individual is taken.
pub fn roulette_selection<R: Rng>(
    pool: &[Individual],
    selection_size: usize,
    rng: &mut R,
) -> Result<Vec<Individual>> {
    if selection_size == 0 {
        return Ok(Vec::new());
    }
    let Some(last) = pool.last() else {
        return Err(EvomovesError::Sizing {
            strategy: "roulette",
            requested: selection_size,
            available: 0,
        });
    };

    let total_fitness: f64 = pool.iter().map(Individual::fitness).sum();
    let mut winners = Vec::with_capacity(selection_size);

    for _ in 0..selection_size {
        let pick = if total_fitness.is_finite() && total_fitness > 0.0 {
            rng.gen_range(0.0..total_fitness)
        } else {
            0.0
        };

        let mut roulette_sum = 0.0;
        let chosen = pool
            .iter()
            .find(|individual| {
                roulette_sum += individual.fitness();
                roulette_sum >= pick
            })
            .unwrap_or(last);

        winners.push(chosen.clone());
    }

    Ok(winners)
}

/// Best of `tournament_size` individuals from a shuffled pool, once per draw
pub fn tournament_selection<R: Rng>(
    pool: &[Individual],
    selection_size: usize,
    tournament_size: usize,
    rng: &mut R,
) -> Result<Vec<Individual>> {
    if selection_size == 0 {
        return Ok(Vec::new());
    }
    if tournament_size == 0 || tournament_size > pool.len() {
        return Err(EvomovesError::TournamentSize {
            size: tournament_size,
            available: pool.len(),
        });
    }

    let mut order: Vec<usize> = (0..pool.len()).collect();
    let mut winners = Vec::with_capacity(selection_size);

    for _ in 0..selection_size {
        order.shuffle(rng);

        let mut players: Vec<&Individual> = order[..tournament_size]
            .iter()
            .map(|&i| &pool[i])
            .collect();
        players.sort_by(|a, b| {
            a.fitness()
                .partial_cmp(&b.fitness())
                .unwrap_or(Ordering::Equal)
        });

        if let Some(best) = players.last() {
            winners.push((*best).clone());
        }
    }

    Ok(winners)
}
