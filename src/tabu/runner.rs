//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Build a random initial solution
//! 2. At each iteration:
//!    a. Record the current solution in the tabu list and age all entries
//!    b. Enumerate the full neighbourhood
//!    c. Move to the best-scoring neighbour that is not tabu
//!    d. If every neighbour is tabu (or scores nothing), restart from a
//!       fresh random solution
//!    e. Update the global best if improved
//! 3. Terminate after the iteration budget
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.

use super::config::TabuConfig;
use super::list::TabuList;
use crate::error::Result;
use crate::model::{Instance, Solution};
use crate::oracle::Oracle;
use crate::random::rng_from;
use crate::telemetry::{IterationEvent, NullSink, Recorder, TelemetrySink, Trace};

/// Score a candidate must beat to be admissible.
const NO_CANDIDATE: f64 = 0.0;

/// Result of a Tabu Search run.
#[derive(Debug, Clone)]
pub struct TabuResult {
    /// Best solution found.
    pub best: Solution,
    /// Score of the best solution.
    pub best_score: f64,
    /// Total iterations executed.
    pub iterations: usize,
    /// Iteration at which the best solution was found (0 = initial).
    pub best_iteration: usize,
    /// Number of random restarts caused by an exhausted neighbourhood.
    pub restarts: usize,
    /// Explored and best series.
    pub trace: Trace,
}

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Executes Tabu Search on the given instance.
    pub fn run<O: Oracle>(
        oracle: &O,
        instance: &Instance,
        config: &TabuConfig,
    ) -> Result<TabuResult> {
        Self::run_with_sink(oracle, instance, config, &mut NullSink)
    }

    /// Executes Tabu Search, forwarding every iteration to `sink`.
    pub fn run_with_sink<O: Oracle>(
        oracle: &O,
        instance: &Instance,
        config: &TabuConfig,
        sink: &mut dyn TelemetrySink,
    ) -> Result<TabuResult> {
        config.validate()?;
        let mut rng = rng_from(config.seed);

        // Initialize
        let mut current = oracle.random_solution(instance.pizzas(), instance.budget(), &mut rng);
        let mut current_score = oracle.evaluate(&current);
        let mut best = current.clone();
        let mut best_score = current_score;
        let mut best_iteration = 0;
        log::debug!("tabu: start score {current_score}, tenure {}", config.tabu_tenure);

        let mut tabu = TabuList::new();
        let mut recorder = Recorder::new(config.iterations, sink);
        let mut restarts = 0usize;

        for iteration in 1..=config.iterations {
            tabu.advance(&current, config.tabu_tenure);

            let neighbourhood = oracle.neighbourhood(&current);
            match best_admissible(oracle, neighbourhood, &tabu) {
                Some((candidate, score)) => {
                    current = candidate;
                    current_score = score;
                }
                None => {
                    restarts += 1;
                    current =
                        oracle.random_solution(instance.pizzas(), instance.budget(), &mut rng);
                    current_score = oracle.evaluate(&current);
                    log::trace!("tabu: no admissible neighbour, restart at iteration {iteration}");
                }
            }

            if current_score > best_score {
                best = current.clone();
                best_score = current_score;
                best_iteration = iteration;
                log::debug!("tabu: new best {best_score} at iteration {iteration}");
            }

            recorder.record(IterationEvent::new(iteration, current_score, best_score));
        }

        log::info!(
            "tabu: best {best_score} at iteration {best_iteration}, {restarts} restarts, {} solutions tabu",
            tabu.len()
        );

        Ok(TabuResult {
            best,
            best_score,
            iterations: config.iterations,
            best_iteration,
            restarts,
            trace: recorder.finish(),
        })
    }
}

/// Highest-scoring neighbour that is not tabu and scores above
/// [`NO_CANDIDATE`]. Ties go to the first in enumeration order.
fn best_admissible<O: Oracle>(
    oracle: &O,
    neighbourhood: Vec<Solution>,
    tabu: &TabuList,
) -> Option<(Solution, f64)> {
    let mut chosen = None;
    let mut chosen_score = NO_CANDIDATE;
    for neighbour in neighbourhood {
        let score = oracle.evaluate(&neighbour);
        if score > chosen_score && !tabu.contains(&neighbour) {
            chosen_score = score;
            chosen = Some(neighbour);
        }
    }
    chosen.map(|s| (s, chosen_score))
}
