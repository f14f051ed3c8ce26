//! Parent selection for the steady-state GA.
//!
//! Both strategies work on the cached score array, where **higher is
//! better**.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use rand::seq::SliceRandom;
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Selection strategy for choosing the two parents of each child.
///
/// # Examples
///
/// ```
/// use pizza_meta::ga::Selection;
/// use pizza_meta::random::create_rng;
///
/// let scores = [4.0, 9.0, 1.0];
/// let mut rng = create_rng(42);
/// assert_eq!(Selection::Tournament.select_parents(&scores, &mut rng), (1, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Selection {
    /// Rank a random permutation of the whole population by score and take
    /// the top two, repeating until two parents are collected.
    ///
    /// Ties are broken by the permutation, so equal-scoring individuals
    /// win equally often. With a single individual it is returned twice.
    Tournament,

    /// Fitness-proportionate (roulette wheel) selection.
    ///
    /// Two independent draws, so a parent may be paired with itself.
    /// Falls back to uniform draws when no individual has a positive score.
    #[default]
    Roulette,
}

impl Selection {
    /// Picks two parent indices.
    ///
    /// # Panics
    /// Panics if `scores` is empty.
    pub fn select_parents<R: Rng>(&self, scores: &[f64], rng: &mut R) -> (usize, usize) {
        assert!(!scores.is_empty(), "cannot select from empty population");

        match self {
            Selection::Tournament => tournament(scores, rng),
            Selection::Roulette => (roulette(scores, rng), roulette(scores, rng)),
        }
    }
}

fn tournament<R: Rng>(scores: &[f64], rng: &mut R) -> (usize, usize) {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    let mut picked = Vec::with_capacity(2);
    while picked.len() < 2 {
        order.shuffle(rng);
        // Stable sort keeps the shuffled order among equal scores.
        order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
        picked.extend(order.iter().take(2));
    }
    (picked[0], picked[1])
}

/// Maps one uniform draw onto the cumulative score distribution.
///
/// Returns the first individual whose cumulative share exceeds the draw.
/// Negative scores weigh nothing.
fn roulette<R: Rng>(scores: &[f64], rng: &mut R) -> usize {
    let n = scores.len();
    let total: f64 = scores.iter().map(|s| s.max(0.0)).sum();
    if total <= 0.0 || !total.is_finite() {
        return rng.random_range(0..n);
    }

    let threshold = rng.random::<f64>() * total;
    let mut cumulative = 0.0;
    for (i, &s) in scores.iter().enumerate() {
        cumulative += s.max(0.0);
        if cumulative > threshold {
            return i;
        }
    }

    // floating-point fallback: last individual with positive weight
    scores.iter().rposition(|&s| s > 0.0).unwrap_or(n - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_tournament_takes_top_two() {
        let scores = [3.0, 10.0, 1.0, 8.0];
        let mut rng = create_rng(42);
        for _ in 0..100 {
            assert_eq!(Selection::Tournament.select_parents(&scores, &mut rng), (1, 3));
        }
    }

    #[test]
    fn test_tournament_ties_are_shuffled() {
        let scores = [5.0, 5.0, 5.0];
        let mut rng = create_rng(42);
        let mut firsts = [0u32; 3];
        for _ in 0..3000 {
            let (a, b) = Selection::Tournament.select_parents(&scores, &mut rng);
            assert_ne!(a, b);
            firsts[a] += 1;
        }
        for &c in &firsts {
            assert!(c > 700, "expected roughly uniform, got {firsts:?}");
        }
    }

    #[test]
    fn test_single_individual() {
        let mut rng = create_rng(42);
        assert_eq!(Selection::Tournament.select_parents(&[5.0], &mut rng), (0, 0));
        assert_eq!(Selection::Roulette.select_parents(&[5.0], &mut rng), (0, 0));
    }

    #[test]
    fn test_roulette_is_proportional() {
        let scores = [1.0, 0.0, 3.0];
        let mut rng = create_rng(42);
        let mut counts = [0u32; 3];
        let n = 20000;
        for _ in 0..n {
            let (a, b) = Selection::Roulette.select_parents(&scores, &mut rng);
            counts[a] += 1;
            counts[b] += 1;
        }
        assert_eq!(counts[1], 0, "zero-score individual must never be drawn");
        let share = counts[2] as f64 / (2 * n) as f64;
        assert!((share - 0.75).abs() < 0.02, "expected ~0.75, got {share}");
    }

    #[test]
    fn test_roulette_all_zero_is_uniform() {
        let scores = [0.0; 4];
        let mut rng = create_rng(1);
        let mut counts = [0u32; 4];
        for _ in 0..8000 {
            counts[roulette(&scores, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 1500, "expected uniform, got {counts:?}");
        }
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let mut rng = create_rng(42);
        Selection::Roulette.select_parents(&[], &mut rng);
    }
}
