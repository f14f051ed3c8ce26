//! Core trait consumed by every search strategy.

use std::sync::Arc;

use rand::Rng;

use crate::model::{Pizza, Solution, TeamBudget};

/// Scoring, construction, neighbourhood and feasibility for the pizza
/// assignment problem.
///
/// The strategies treat the oracle as a black box. Higher scores are
/// better (maximization), unlike the cost-minimizing problems elsewhere in
/// the metaheuristics literature.
///
/// # Contract
///
/// - [`evaluate`](Oracle::evaluate) is pure: repeated calls on an unmodified
///   solution return identical scores.
/// - [`random_solution`](Oracle::random_solution) returns a solution holding
///   all three model invariants.
/// - Neighbour generation never mutates its input; it builds new solutions.
pub trait Oracle {
    /// Scores a solution. Higher is better.
    fn evaluate(&self, solution: &Solution) -> f64;

    /// Builds a random solution consuming some or all of `budget`.
    fn random_solution<R: Rng>(
        &self,
        pizzas: &[Arc<Pizza>],
        budget: TeamBudget,
        rng: &mut R,
    ) -> Solution;

    /// Every solution reachable from `solution` by one elementary move,
    /// in a fixed enumeration order.
    fn neighbourhood(&self, solution: &Solution) -> Vec<Solution>;

    /// One random elementary move applied to a copy of `solution`, with the
    /// resulting score. `score` is the score of `solution`.
    fn random_neighbour<R: Rng>(
        &self,
        solution: &Solution,
        score: f64,
        rng: &mut R,
    ) -> (Solution, f64);

    /// Checks the model invariants against `budget`.
    ///
    /// The budget is taken by value so implementations may consume it while
    /// checking.
    fn is_feasible(&self, solution: &Solution, budget: TeamBudget) -> bool {
        solution.satisfies(budget)
    }
}
