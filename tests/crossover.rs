use evomoves::config::{CrossoverStrategy, LeftoverStrategy};
use evomoves::engines::generation::crossover;
use evomoves::engines::generation::genome::{genome_from_str, genome_to_string};
use evomoves::engines::generation::Individual;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const STRATEGIES: [CrossoverStrategy; 3] = [
    CrossoverStrategy::OnePoint,
    CrossoverStrategy::TwoPoint,
    CrossoverStrategy::Uniform,
];

const LEFTOVERS: [LeftoverStrategy; 3] = [
    LeftoverStrategy::KeepAllOrNothingRandomly,
    LeftoverStrategy::KeepOneOrNotRandomly,
    LeftoverStrategy::KeepOnlyFromFittestParent,
];

const ALL_OR_NOTHING: LeftoverStrategy = LeftoverStrategy::KeepAllOrNothingRandomly;

fn individual(genome: &str, fitness: f64) -> Individual {
    Individual::with_fitness(genome_from_str(genome), fitness)
}

/// True if `text` reads as a run of `R`, then a run of `L`, then a run of `R`
fn is_r_l_r(text: &str) -> bool {
    let rest = text.trim_start_matches('R');
    let rest = rest.trim_start_matches('L');
    rest.chars().all(|c| c == 'R')
}

#[test]
fn test_short_parent_returns_fitter_parent() {
    let mut rng = StdRng::seed_from_u64(1);
    let short = individual("R", 5.0);
    let long = individual("LLLL", 3.0);

    for strategy in STRATEGIES {
        let child = crossover(&short, &long, strategy, ALL_OR_NOTHING, &mut rng);
        assert_eq!(child, short);

        let child = crossover(&long, &short, strategy, ALL_OR_NOTHING, &mut rng);
        assert_eq!(child, short);
    }
}

#[test]
fn test_short_parent_tie_favours_second() {
    let mut rng = StdRng::seed_from_u64(1);
    let first = individual("R", 2.0);
    let second = individual("/", 2.0);

    let child = crossover(
        &first,
        &second,
        CrossoverStrategy::Uniform,
        ALL_OR_NOTHING,
        &mut rng,
    );
    assert_eq!(child.genome_string(), "/");
    assert_eq!(child.fitness(), 2.0);
}

#[test]
fn test_one_point_equal_lengths_keeps_length() {
    let mut rng = StdRng::seed_from_u64(7);
    let a = individual("RRRRRR", 0.0);
    let b = individual("LLLLLL", 0.0);

    for _ in 0..100 {
        let child = crossover(&a, &b, CrossoverStrategy::OnePoint, ALL_OR_NOTHING, &mut rng);
        let text = child.genome_string();
        assert_eq!(text.len(), 6);
        // Prefix from the first parent, tail from the second
        let cut = text.find('L').unwrap_or(6);
        assert!(cut <= 4);
        assert!(text[cut..].chars().all(|c| c == 'L'));
    }
}

#[test]
fn test_one_point_takes_full_tail_of_second_parent() {
    let mut rng = StdRng::seed_from_u64(8);
    let a = individual("RRRRRRRR", 0.0);
    let b = individual("LLLLL", 0.0);

    for _ in 0..50 {
        let child = crossover(&a, &b, CrossoverStrategy::OnePoint, ALL_OR_NOTHING, &mut rng);
        assert_eq!(child.genome_len(), 5);
        let child = crossover(&b, &a, CrossoverStrategy::OnePoint, ALL_OR_NOTHING, &mut rng);
        assert_eq!(child.genome_len(), 8);
    }
}

#[test]
fn test_two_point_middle_from_second_parent() {
    let mut rng = StdRng::seed_from_u64(21);
    let a = individual("RRRRRR", 0.0);
    let b = individual("LLLLLL", 0.0);

    let mut saw_middle = false;
    for _ in 0..100 {
        let child = crossover(&a, &b, CrossoverStrategy::TwoPoint, ALL_OR_NOTHING, &mut rng);
        let text = child.genome_string();
        assert_eq!(text.len(), 6);
        assert!(text.starts_with('R'));
        assert!(is_r_l_r(&text), "not R*L*R*: {text}");
        saw_middle |= text.contains('L');
    }
    assert!(saw_middle);
}

#[test]
fn test_leftover_policy_runs_for_two_point_only() {
    let mut rng = StdRng::seed_from_u64(22);
    let long = individual("LLLL/////", 0.0);
    let short = individual("RRRR", 0.0);

    let mut two_point_lengths = Vec::new();
    for _ in 0..100 {
        let child = crossover(&long, &short, CrossoverStrategy::TwoPoint, ALL_OR_NOTHING, &mut rng);
        two_point_lengths.push(child.genome_len());

        // One-point ends with the short parent's tail and never appends leftovers
        let child = crossover(&long, &short, CrossoverStrategy::OnePoint, ALL_OR_NOTHING, &mut rng);
        assert_eq!(child.genome_len(), 4);
        assert!(!child.genome_string().contains('/'));
    }

    assert!(two_point_lengths.iter().all(|&l| l == 4 || l == 9));
    assert!(two_point_lengths.contains(&9));
    assert!(two_point_lengths.contains(&4));
}

#[test]
fn test_uniform_splits_positions_evenly() {
    let mut rng = StdRng::seed_from_u64(4);
    let a = individual("RRRRRR", 0.0);
    let b = individual("LLLLLL", 0.0);

    for _ in 0..100 {
        let child = crossover(&a, &b, CrossoverStrategy::Uniform, ALL_OR_NOTHING, &mut rng);
        let from_a = child.genome_string().chars().filter(|&c| c == 'R').count();
        assert_eq!(from_a, 3);
    }

    let a = individual("RRRRR", 0.0);
    let b = individual("LLLLL", 0.0);
    for _ in 0..100 {
        let child = crossover(&a, &b, CrossoverStrategy::Uniform, ALL_OR_NOTHING, &mut rng);
        let from_a = child.genome_string().chars().filter(|&c| c == 'R').count();
        assert!(from_a == 2 || from_a == 3);
    }
}

#[test]
fn test_keep_all_or_nothing_is_never_partial() {
    let mut rng = StdRng::seed_from_u64(12);
    let a = individual("RRRR", 0.0);
    let b = individual("LLLL/////", 0.0);

    let mut kept = 0;
    let mut dropped = 0;
    for _ in 0..200 {
        let child = crossover(&a, &b, CrossoverStrategy::TwoPoint, ALL_OR_NOTHING, &mut rng);
        match child.genome_len() {
            4 => dropped += 1,
            9 => {
                kept += 1;
                assert!(child.genome_string().ends_with("/////"));
            }
            other => panic!("partial leftover: length {other}"),
        }
    }
    assert!(kept > 0 && dropped > 0);
}

#[test]
fn test_keep_one_or_not_keeps_subset_of_leftovers() {
    let mut rng = StdRng::seed_from_u64(13);
    let a = individual("RRRRRRRRR", 0.0);
    let b = individual("LLLL", 0.0);

    for _ in 0..100 {
        let child = crossover(
            &a,
            &b,
            CrossoverStrategy::Uniform,
            LeftoverStrategy::KeepOneOrNotRandomly,
            &mut rng,
        );
        assert!((4..=9).contains(&child.genome_len()));
        assert!(child.genome_string()[4..].chars().all(|c| c == 'R'));
    }
}

#[test]
fn test_keep_from_fittest_parent() {
    let mut rng = StdRng::seed_from_u64(14);
    let fittest = LeftoverStrategy::KeepOnlyFromFittestParent;
    let long_fit = individual("RRRR+-+-", 10.0);
    let short_weak = individual("LLLL", 1.0);

    let child = crossover(&short_weak, &long_fit, CrossoverStrategy::TwoPoint, fittest, &mut rng);
    assert_eq!(child.genome_len(), 8);
    assert!(child.genome_string().ends_with("+-+-"));

    // The fitter parent is the shorter one: nothing to append
    let long_weak = individual("RRRR+-+-", 1.0);
    let short_fit = individual("LLLL", 10.0);
    let child = crossover(&short_fit, &long_weak, CrossoverStrategy::Uniform, fittest, &mut rng);
    assert_eq!(child.genome_len(), 4);
}

#[test]
fn test_child_is_unscored_and_parents_untouched() {
    let mut rng = StdRng::seed_from_u64(15);
    let a = individual("RRLL++", 4.0);
    let b = individual("--//RL", 6.0);

    let child = crossover(&a, &b, CrossoverStrategy::Uniform, ALL_OR_NOTHING, &mut rng);
    assert_eq!(child.fitness(), 0.0);
    assert_eq!(genome_to_string(a.genome()), "RRLL++");
    assert_eq!(genome_to_string(b.genome()), "--//RL");
}

proptest! {
    #[test]
    fn prop_child_length_within_parent_bounds(
        a in "[RL+\\-/]{2,20}",
        b in "[RL+\\-/]{2,20}",
        strategy in 0usize..3,
        leftover in 0usize..3,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let p1 = individual(&a, 1.0);
        let p2 = individual(&b, 2.0);

        let child = crossover(&p1, &p2, STRATEGIES[strategy], LEFTOVERS[leftover], &mut rng);
        let min = a.len().min(b.len());
        let max = a.len().max(b.len());
        prop_assert!(child.genome_len() >= min && child.genome_len() <= max);
    }
}
