//! Solution snapshots.

use std::collections::HashSet;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::budget::TeamBudget;
use super::delivery::Delivery;

/// An ordered sequence of deliveries plus the unused budget per size bucket.
///
/// `Clone` is the snapshot operation: the clone owns its own delivery
/// vector and free counters, so exploring from the original can never
/// alter it. Pizzas themselves are immutable and stay shared.
///
/// Equality and hashing are structural over the deliveries (team size and
/// ordered pizza ids), which lets solutions key a tabu map. The free
/// counters are derived from the deliveries and the budget, so they do not
/// take part.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Solution {
    deliveries: Vec<Delivery>,
    free: [usize; 3],
}

impl Solution {
    /// Creates a solution from deliveries and the free counters that go
    /// with them. Nothing is checked; see [`satisfies`](Self::satisfies).
    pub fn new(deliveries: Vec<Delivery>, free: [usize; 3]) -> Self {
        Self { deliveries, free }
    }

    /// A solution with no deliveries and the whole budget free.
    pub fn empty(budget: TeamBudget) -> Self {
        Self {
            deliveries: Vec::new(),
            free: budget.counts(),
        }
    }

    pub fn deliveries(&self) -> &[Delivery] {
        &self.deliveries
    }

    /// Unused teams per bucket (index 0 is size 2).
    pub fn free(&self) -> [usize; 3] {
        self.free
    }

    pub fn len(&self) -> usize {
        self.deliveries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deliveries.is_empty()
    }

    /// Number of deliveries per bucket.
    pub fn team_counts(&self) -> [usize; 3] {
        let mut counts = [0usize; 3];
        for d in &self.deliveries {
            counts[d.team_size().bucket()] += 1;
        }
        counts
    }

    pub fn delivered_pizzas(&self) -> usize {
        self.deliveries.iter().map(Delivery::len).sum()
    }

    /// No pizza id appears in more than one delivery.
    pub fn has_unique_pizzas(&self) -> bool {
        let mut seen = HashSet::new();
        self.deliveries
            .iter()
            .flat_map(Delivery::pizza_ids)
            .all(|id| seen.insert(id))
    }

    /// Every delivery carries exactly as many pizzas as its team size.
    pub fn is_size_conforming(&self) -> bool {
        self.deliveries.iter().all(Delivery::is_conforming)
    }

    /// Per bucket, deliveries plus free capacity equal the budget.
    pub fn conserves(&self, budget: TeamBudget) -> bool {
        let counts = self.team_counts();
        let original = budget.counts();
        (0..3).all(|b| counts[b] + self.free[b] == original[b])
    }

    /// Checks pizza uniqueness, size conformance and budget conservation.
    pub fn satisfies(&self, budget: TeamBudget) -> bool {
        self.has_unique_pizzas() && self.is_size_conforming() && self.conserves(budget)
    }

    /// Appends a delivery, consuming one unit of its bucket.
    pub(crate) fn push(&mut self, delivery: Delivery) {
        let bucket = delivery.team_size().bucket();
        debug_assert!(self.free[bucket] > 0, "no free team of that size");
        self.free[bucket] -= 1;
        self.deliveries.push(delivery);
    }

    /// Overwrites the delivery at `position`. Free counters are left to the caller.
    pub(crate) fn replace(&mut self, position: usize, delivery: Delivery) {
        self.deliveries[position] = delivery;
    }

    pub(crate) fn free_mut(&mut self) -> &mut [usize; 3] {
        &mut self.free
    }

    /// Swaps pizza `i` of delivery `a` with pizza `j` of delivery `b`.
    pub(crate) fn swap_pizzas(&mut self, a: usize, i: usize, b: usize, j: usize) {
        assert_ne!(a, b, "swap needs two distinct deliveries");
        let ((lo, lo_pos), (hi, hi_pos)) = if a < b { ((a, i), (b, j)) } else { ((b, j), (a, i)) };
        let (left, right) = self.deliveries.split_at_mut(hi);
        std::mem::swap(left[lo].pizza_mut(lo_pos), right[0].pizza_mut(hi_pos));
    }
}

impl PartialEq for Solution {
    fn eq(&self, other: &Self) -> bool {
        self.deliveries == other.deliveries
    }
}

impl Eq for Solution {}

impl Hash for Solution {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.deliveries.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Pizza, TeamSize};
    use std::sync::Arc;

    fn pizzas(n: usize) -> Vec<Arc<Pizza>> {
        (0..n)
            .map(|i| Arc::new(Pizza::new(i, [format!("i{i}")])))
            .collect()
    }

    #[test]
    fn test_push_consumes_budget() {
        let p = pizzas(5);
        let budget = TeamBudget::new(1, 1, 0);
        let mut s = Solution::empty(budget);
        s.push(Delivery::new(TeamSize::Two, p[0..2].to_vec()));
        s.push(Delivery::new(TeamSize::Three, p[2..5].to_vec()));
        assert_eq!(s.free(), [0, 0, 0]);
        assert!(s.satisfies(budget));
        assert_eq!(s.delivered_pizzas(), 5);
    }

    #[test]
    fn test_duplicate_pizza_detected() {
        let p = pizzas(3);
        let budget = TeamBudget::new(2, 0, 0);
        let s = Solution::new(
            vec![
                Delivery::new(TeamSize::Two, vec![p[0].clone(), p[1].clone()]),
                Delivery::new(TeamSize::Two, vec![p[1].clone(), p[2].clone()]),
            ],
            [0, 0, 0],
        );
        assert!(!s.has_unique_pizzas());
        assert!(s.conserves(budget));
        assert!(!s.satisfies(budget));
    }

    #[test]
    fn test_budget_mismatch_detected() {
        let p = pizzas(2);
        let s = Solution::new(vec![Delivery::new(TeamSize::Two, p)], [1, 0, 0]);
        assert!(!s.conserves(TeamBudget::new(1, 0, 0)));
        assert!(s.conserves(TeamBudget::new(2, 0, 0)));
    }

    #[test]
    fn test_swap_pizzas_both_orders() {
        let p = pizzas(4);
        let mut s = Solution::empty(TeamBudget::new(2, 0, 0));
        s.push(Delivery::new(TeamSize::Two, p[0..2].to_vec()));
        s.push(Delivery::new(TeamSize::Two, p[2..4].to_vec()));
        s.swap_pizzas(1, 0, 0, 1);
        let ids: Vec<Vec<usize>> = s
            .deliveries()
            .iter()
            .map(|d| d.pizza_ids().collect())
            .collect();
        assert_eq!(ids, vec![vec![0, 2], vec![1, 3]]);
    }

    #[test]
    fn test_clone_is_independent() {
        let p = pizzas(4);
        let mut s = Solution::empty(TeamBudget::new(2, 0, 0));
        s.push(Delivery::new(TeamSize::Two, p[0..2].to_vec()));
        s.push(Delivery::new(TeamSize::Two, p[2..4].to_vec()));
        let snapshot = s.clone();
        s.swap_pizzas(0, 0, 1, 0);
        assert_ne!(s, snapshot);
        assert_eq!(snapshot.deliveries()[0].pizza_ids().collect::<Vec<_>>(), vec![0, 1]);
    }
}
