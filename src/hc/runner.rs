//! Hill climbing loop.

use super::config::HcConfig;
use crate::error::Result;
use crate::model::{Instance, Solution};
use crate::oracle::Oracle;
use crate::random::rng_from;
use crate::telemetry::{IterationEvent, NullSink, Recorder, TelemetrySink, Trace};

/// Result of a hill climbing run.
#[derive(Debug, Clone)]
pub struct HcResult {
    /// The local optimum reached.
    pub best: Solution,

    /// Score of `best`.
    pub best_score: f64,

    /// Raw iterations executed, counting those before any counter reset.
    pub iterations: usize,

    /// Number of accepted (strictly improving) moves.
    pub improvements: usize,

    /// One entry per raw iteration.
    pub trace: Trace,
}

/// Executes hill climbing.
pub struct HcRunner;

impl HcRunner {
    /// Runs hill climbing.
    pub fn run<O: Oracle>(oracle: &O, instance: &Instance, config: &HcConfig) -> Result<HcResult> {
        Self::run_with_sink(oracle, instance, config, &mut NullSink)
    }

    /// Runs hill climbing, forwarding every iteration to `sink`.
    pub fn run_with_sink<O: Oracle>(
        oracle: &O,
        instance: &Instance,
        config: &HcConfig,
        sink: &mut dyn TelemetrySink,
    ) -> Result<HcResult> {
        config.validate()?;
        let mut rng = rng_from(config.seed);

        let mut current = oracle.random_solution(instance.pizzas(), instance.budget(), &mut rng);
        let mut current_score = oracle.evaluate(&current);
        log::debug!("hill climbing: start score {current_score}");

        let mut recorder = Recorder::new(config.iterations, sink);
        let mut counter = 0usize;
        let mut total = 0usize;
        let mut improvements = 0usize;

        while counter < config.iterations {
            counter += 1;
            total += 1;

            let (neighbour, neighbour_score) =
                oracle.random_neighbour(&current, current_score, &mut rng);
            if neighbour_score > current_score {
                current = neighbour;
                current_score = neighbour_score;
                improvements += 1;
                if config.improving_iterations {
                    counter = 0;
                }
            }

            recorder.record(IterationEvent::new(total, current_score, current_score));
        }

        log::info!(
            "hill climbing: score {current_score} after {total} iterations ({improvements} improvements)"
        );

        Ok(HcResult {
            best: current,
            best_score: current_score,
            iterations: total,
            improvements,
            trace: recorder.finish(),
        })
    }
}
