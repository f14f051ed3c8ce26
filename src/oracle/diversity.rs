//! Ingredient-diversity oracle.
//!
//! A delivery scores the square of the number of distinct ingredients
//! across its pizzas; a solution scores the sum over its deliveries.
//! Moves swap one pizza between two deliveries, which keeps every model
//! invariant intact.

use std::sync::Arc;

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use super::types::Oracle;
use crate::model::{Delivery, Pizza, Solution, TeamBudget, TeamSize};

/// Reference [`Oracle`] scoring deliveries by ingredient diversity.
///
/// # Examples
///
/// ```
/// use pizza_meta::model::{Instance, Pizza, TeamBudget};
/// use pizza_meta::oracle::{DiversityOracle, Oracle};
/// use pizza_meta::random::create_rng;
///
/// let instance = Instance::new(
///     vec![
///         Pizza::new(0, ["onion", "pepper"]),
///         Pizza::new(1, ["onion", "olive"]),
///     ],
///     TeamBudget::new(1, 0, 0),
/// )
/// .unwrap();
///
/// let oracle = DiversityOracle;
/// let mut rng = create_rng(42);
/// let solution = oracle.random_solution(instance.pizzas(), instance.budget(), &mut rng);
/// assert_eq!(oracle.evaluate(&solution), 9.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DiversityOracle;

fn delivery_score(delivery: &Delivery) -> f64 {
    let n = delivery.distinct_ingredients() as f64;
    n * n
}

impl Oracle for DiversityOracle {
    fn evaluate(&self, solution: &Solution) -> f64 {
        solution.deliveries().iter().map(delivery_score).sum()
    }

    fn random_solution<R: Rng>(
        &self,
        pizzas: &[Arc<Pizza>],
        budget: TeamBudget,
        rng: &mut R,
    ) -> Solution {
        let mut order: Vec<&Arc<Pizza>> = pizzas.iter().collect();
        order.shuffle(rng);

        let mut solution = Solution::empty(budget);
        let mut next = 0;
        loop {
            let remaining = order.len() - next;
            let free = solution.free();
            let open: Vec<TeamSize> = TeamSize::ALL
                .into_iter()
                .filter(|s| free[s.bucket()] > 0 && s.members() <= remaining)
                .collect();
            let Some(&size) = open.choose(rng) else {
                break;
            };
            let members = order[next..next + size.members()]
                .iter()
                .map(|&p| Arc::clone(p))
                .collect();
            next += size.members();
            solution.push(Delivery::new(size, members));
        }
        solution
    }

    fn neighbourhood(&self, solution: &Solution) -> Vec<Solution> {
        let deliveries = solution.deliveries();
        let mut out = Vec::new();
        for a in 0..deliveries.len() {
            for b in (a + 1)..deliveries.len() {
                for i in 0..deliveries[a].len() {
                    for j in 0..deliveries[b].len() {
                        let mut neighbour = solution.clone();
                        neighbour.swap_pizzas(a, i, b, j);
                        out.push(neighbour);
                    }
                }
            }
        }
        out
    }

    fn random_neighbour<R: Rng>(
        &self,
        solution: &Solution,
        score: f64,
        rng: &mut R,
    ) -> (Solution, f64) {
        let n = solution.len();
        if n < 2 {
            return (solution.clone(), score);
        }
        let a = rng.random_range(0..n);
        let mut b = rng.random_range(0..n - 1);
        if b >= a {
            b += 1;
        }
        let i = rng.random_range(0..solution.deliveries()[a].len());
        let j = rng.random_range(0..solution.deliveries()[b].len());

        let before = delivery_score(&solution.deliveries()[a])
            + delivery_score(&solution.deliveries()[b]);
        let mut neighbour = solution.clone();
        neighbour.swap_pizzas(a, i, b, j);
        let after = delivery_score(&neighbour.deliveries()[a])
            + delivery_score(&neighbour.deliveries()[b]);

        (neighbour, score - before + after)
    }
}
