//! Similarity penalty against the best-known solution.

use crate::model::Solution;

/// Penalty of `solution` for resembling `best`.
///
/// Compares deliveries position by position over the shorter of the two
/// sequences. Each position adds the difference in team size plus the
/// number of ingredients the two deliveries have in common.
///
/// # Examples
///
/// ```
/// use pizza_meta::gls::penalty;
/// use pizza_meta::model::{Solution, TeamBudget};
///
/// let empty = Solution::empty(TeamBudget::new(1, 1, 1));
/// assert_eq!(penalty(&empty, &empty), 0);
/// ```
pub fn penalty(solution: &Solution, best: &Solution) -> usize {
    solution
        .deliveries()
        .iter()
        .zip(best.deliveries())
        .map(|(a, b)| {
            let size_gap = a.team_size().members().abs_diff(b.team_size().members());
            let shared = a.ingredients().intersection(&b.ingredients()).count();
            size_gap + shared
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Delivery, Pizza, TeamBudget, TeamSize};
    use std::sync::Arc;

    fn pizza(id: usize, ingredients: &[&str]) -> Arc<Pizza> {
        Arc::new(Pizza::new(id, ingredients.iter().copied()))
    }

    #[test]
    fn test_identical_solution_pays_all_ingredients() {
        let mut s = Solution::empty(TeamBudget::new(1, 0, 0));
        s.push(Delivery::new(
            TeamSize::Two,
            vec![pizza(0, &["a", "b"]), pizza(1, &["b", "c"])],
        ));
        assert_eq!(penalty(&s, &s), 3);
    }

    #[test]
    fn test_size_gap_and_overlap() {
        let mut a = Solution::empty(TeamBudget::new(1, 0, 1));
        a.push(Delivery::new(
            TeamSize::Two,
            vec![pizza(0, &["x"]), pizza(1, &["y"])],
        ));
        a.push(Delivery::new(
            TeamSize::Four,
            vec![
                pizza(2, &["p"]),
                pizza(3, &["q"]),
                pizza(4, &["r"]),
                pizza(5, &["s"]),
            ],
        ));

        let mut b = Solution::empty(TeamBudget::new(0, 1, 0));
        b.push(Delivery::new(
            TeamSize::Three,
            vec![pizza(6, &["x"]), pizza(7, &["z"]), pizza(8, &["w"])],
        ));

        // Only the first position is compared: |2 - 3| + |{x}|.
        assert_eq!(penalty(&a, &b), 2);
        assert_eq!(penalty(&b, &a), 2);
    }
}
