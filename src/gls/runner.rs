//! Guided local search loop.

use super::config::GlsConfig;
use super::penalty::penalty;
use crate::error::Result;
use crate::model::{Instance, Solution};
use crate::oracle::Oracle;
use crate::random::rng_from;
use crate::telemetry::{IterationEvent, NullSink, Recorder, TelemetrySink, Trace};

/// Result of a guided local search run.
#[derive(Debug, Clone)]
pub struct GlsResult {
    /// Best solution found, judged by raw score.
    pub best: Solution,
    /// Raw score of the best solution.
    pub best_score: f64,
    /// Total iterations executed.
    pub iterations: usize,
    /// Number of iterations whose candidate was accepted.
    pub accepted_moves: usize,
    /// Explored and best series (raw scores).
    pub trace: Trace,
}

/// Guided local search runner.
pub struct GlsRunner;

impl GlsRunner {
    pub fn run<O: Oracle>(oracle: &O, instance: &Instance, config: &GlsConfig) -> Result<GlsResult> {
        Self::run_with_sink(oracle, instance, config, &mut NullSink)
    }

    pub fn run_with_sink<O: Oracle>(
        oracle: &O,
        instance: &Instance,
        config: &GlsConfig,
        sink: &mut dyn TelemetrySink,
    ) -> Result<GlsResult> {
        config.validate()?;
        let mut rng = rng_from(config.seed);

        let mut current = oracle.random_solution(instance.pizzas(), instance.budget(), &mut rng);
        let mut current_score = oracle.evaluate(&current);
        let mut best = current.clone();
        let mut best_score = current_score;
        log::debug!("guided local search: start score {current_score}");

        let mut recorder = Recorder::new(config.iterations, sink);
        let mut accepted_moves = 0usize;

        for iteration in 1..=config.iterations {
            let neighbourhood = oracle.neighbourhood(&current);
            if let Some((candidate, candidate_score)) = best_neighbour(oracle, neighbourhood) {
                let guided_candidate = candidate_score - penalty(&candidate, &best) as f64;
                let guided_current = current_score - penalty(&current, &best) as f64;

                if guided_candidate > guided_current {
                    current = candidate;
                    current_score = candidate_score;
                    accepted_moves += 1;

                    if current_score > best_score {
                        best = current.clone();
                        best_score = current_score;
                        log::debug!("guided local search: new best {best_score} at iteration {iteration}");
                    }
                }
            }

            recorder.record(IterationEvent::new(iteration, current_score, best_score));
        }

        log::info!(
            "guided local search: best {best_score} after {} iterations ({accepted_moves} accepted)",
            config.iterations
        );

        Ok(GlsResult {
            best,
            best_score,
            iterations: config.iterations,
            accepted_moves,
            trace: recorder.finish(),
        })
    }
}

/// Highest-scoring neighbour; the first maximum in enumeration order wins.
fn best_neighbour<O: Oracle>(oracle: &O, neighbourhood: Vec<Solution>) -> Option<(Solution, f64)> {
    let mut chosen: Option<(Solution, f64)> = None;
    for neighbour in neighbourhood {
        let score = oracle.evaluate(&neighbour);
        if chosen.as_ref().is_none_or(|(_, s)| score > *s) {
            chosen = Some((neighbour, score));
        }
    }
    chosen
}
