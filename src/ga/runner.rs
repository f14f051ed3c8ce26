//! GA steady-state loop execution.
//!
//! [`GaRunner`] orchestrates the evolutionary process:
//! initialization → selection → crossover → replacement → mutation → repeat.
//! One child is produced per iteration and, if feasible, overwrites a
//! random slot; there is no generational replacement.

use super::config::GaConfig;
use super::crossover::crossover;
use crate::error::Result;
use crate::model::{Instance, Solution};
use crate::oracle::Oracle;
use crate::random::rng_from;
use crate::telemetry::{IterationEvent, NullSink, Recorder, TelemetrySink, Trace};
use rand::Rng;

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Best individual of the final population.
    pub best: Solution,

    /// Score of `best`.
    pub best_score: f64,

    /// Iterations executed.
    pub iterations: usize,

    /// Children rejected by the feasibility check.
    pub infeasible_children: usize,

    /// Individuals replaced by mutation over the whole run.
    pub mutations: usize,

    /// Population best (`best`, and `explored`) and mean (`average`) at the
    /// start of each iteration, before that iteration's updates.
    pub trace: Trace,
}

/// Executes the GA steady-state loop.
///
/// # Usage
///
/// ```
/// use pizza_meta::ga::{GaConfig, GaRunner};
/// use pizza_meta::model::{Instance, Pizza, TeamBudget};
/// use pizza_meta::oracle::DiversityOracle;
///
/// let pizzas = (0..10).map(|i| Pizza::new(i, [format!("x{}", i % 4)])).collect();
/// let instance = Instance::new(pizzas, TeamBudget::new(1, 1, 1)).unwrap();
/// let config = GaConfig::default().with_population_size(10).with_iterations(20).with_seed(42);
///
/// let result = GaRunner::run(&DiversityOracle, &instance, &config).unwrap();
/// assert_eq!(result.trace.len(), 20);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization.
    pub fn run<O: Oracle>(oracle: &O, instance: &Instance, config: &GaConfig) -> Result<GaResult> {
        Self::run_with_sink(oracle, instance, config, &mut NullSink)
    }

    /// Runs the GA, forwarding every iteration to `sink`.
    pub fn run_with_sink<O: Oracle>(
        oracle: &O,
        instance: &Instance,
        config: &GaConfig,
        sink: &mut dyn TelemetrySink,
    ) -> Result<GaResult> {
        config.validate()?;
        let mut rng = rng_from(config.seed);
        let budget = instance.budget();

        // 1. Initialize and score population
        let mut population: Vec<Solution> = (0..config.population_size)
            .map(|_| oracle.random_solution(instance.pizzas(), budget, &mut rng))
            .collect();
        let mut scores: Vec<f64> = population.iter().map(|s| oracle.evaluate(s)).collect();
        log::debug!(
            "ga: population {} initialized, best {}",
            config.population_size,
            scores[best_index(&scores)]
        );

        let mut recorder = Recorder::new(config.iterations, sink);
        let mut infeasible_children = 0usize;
        let mut mutations = 0usize;

        // 2. Steady-state loop
        for iteration in 1..=config.iterations {
            let (p1, p2) = config.selection.select_parents(&scores, &mut rng);

            let average = mean(&scores);
            let best = scores[best_index(&scores)];
            recorder.record(IterationEvent::new(iteration, average, best).with_average(average));

            let child = crossover(&population[p1], &population[p2], &mut rng);
            if oracle.is_feasible(&child, budget) {
                let slot = rng.random_range(0..config.population_size);
                scores[slot] = oracle.evaluate(&child);
                population[slot] = child;
            } else {
                infeasible_children += 1;
                log::trace!("ga: infeasible child at iteration {iteration}");
            }

            // Mutation applies to every individual regardless of the child.
            for (individual, score) in population.iter_mut().zip(scores.iter_mut()) {
                if rng.random::<f64>() < config.mutation_rate {
                    let (mutant, mutant_score) = oracle.random_neighbour(individual, *score, &mut rng);
                    *individual = mutant;
                    *score = mutant_score;
                    mutations += 1;
                }
            }
        }

        let winner = best_index(&scores);
        log::info!(
            "ga: best {} after {} iterations ({infeasible_children} infeasible children, {mutations} mutations)",
            scores[winner],
            config.iterations
        );

        Ok(GaResult {
            best: population[winner].clone(),
            best_score: scores[winner],
            iterations: config.iterations,
            infeasible_children,
            mutations,
            trace: recorder.finish(),
        })
    }
}

/// Index of the highest score; the first one wins ties.
fn best_index(scores: &[f64]) -> usize {
    let mut best = 0;
    for (i, &s) in scores.iter().enumerate().skip(1) {
        if s > scores[best] {
            best = i;
        }
    }
    best
}

fn mean(scores: &[f64]) -> f64 {
    scores.iter().sum::<f64>() / scores.len() as f64
}

// ============================================================================
// Tests
// ============================================================================
