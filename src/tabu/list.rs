//! Tenure map of recently visited solutions.

use std::collections::HashMap;

use crate::model::Solution;

/// Maps visited solutions to their remaining tabu tenure.
///
/// Solutions are keyed structurally, so two independently built solutions
/// with the same deliveries are the same entry.
///
/// # Examples
///
/// ```
/// use pizza_meta::model::{Solution, TeamBudget};
/// use pizza_meta::tabu::TabuList;
///
/// let s = Solution::empty(TeamBudget::new(1, 0, 0));
/// let mut tabu = TabuList::new();
///
/// tabu.advance(&s, 2);
/// assert_eq!(tabu.remaining(&s), Some(1));
/// tabu.advance(&s, 1);
/// assert!(!tabu.contains(&s));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TabuList {
    tenures: HashMap<Solution, usize>,
}

impl TabuList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `current` with the given tenure, then ages every entry by one
    /// iteration and evicts those whose tenure ran out.
    ///
    /// Ageing includes the entry just inserted: with `tenure == 1` the
    /// current solution is gone again before the caller consults the map.
    pub fn advance(&mut self, current: &Solution, tenure: usize) {
        self.tenures.insert(current.clone(), tenure);
        self.tenures.retain(|_, remaining| {
            *remaining = remaining.saturating_sub(1);
            *remaining > 0
        });
    }

    pub fn contains(&self, solution: &Solution) -> bool {
        self.tenures.contains_key(solution)
    }

    /// Remaining tenure of `solution`, if it is tabu.
    pub fn remaining(&self, solution: &Solution) -> Option<usize> {
        self.tenures.get(solution).copied()
    }

    pub fn len(&self) -> usize {
        self.tenures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tenures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Delivery, Pizza, TeamBudget, TeamSize};
    use std::sync::Arc;

    fn solution(a: usize, b: usize) -> Solution {
        let mut s = Solution::empty(TeamBudget::new(1, 0, 0));
        s.push(Delivery::new(
            TeamSize::Two,
            vec![Arc::new(Pizza::new(a, ["x"])), Arc::new(Pizza::new(b, ["y"]))],
        ));
        s
    }

    #[test]
    fn test_tenure_one_evicted_immediately() {
        let mut tabu = TabuList::new();
        let s = solution(0, 1);
        tabu.advance(&s, 1);
        assert!(!tabu.contains(&s));
        assert!(tabu.is_empty());
    }

    #[test]
    fn test_tenure_counts_down() {
        let mut tabu = TabuList::new();
        let s = solution(0, 1);
        let t = solution(1, 0);
        tabu.advance(&s, 3);
        assert_eq!(tabu.remaining(&s), Some(2));
        tabu.advance(&t, 3);
        assert_eq!(tabu.remaining(&s), Some(1));
        assert_eq!(tabu.remaining(&t), Some(2));
        tabu.advance(&t, 3);
        assert!(!tabu.contains(&s));
        assert_eq!(tabu.len(), 1);
    }

    #[test]
    fn test_reinsertion_refreshes_tenure() {
        let mut tabu = TabuList::new();
        let s = solution(0, 1);
        tabu.advance(&s, 3);
        tabu.advance(&s, 3);
        assert_eq!(tabu.remaining(&s), Some(2));
    }

    #[test]
    fn test_structural_key() {
        let mut tabu = TabuList::new();
        tabu.advance(&solution(4, 5), 5);
        assert!(tabu.contains(&solution(4, 5)));
        assert!(!tabu.contains(&solution(5, 4)));
    }
}
