//! SA execution loop.

use super::config::SaConfig;
use crate::error::Result;
use crate::model::{Instance, Solution};
use crate::oracle::Oracle;
use crate::random::rng_from;
use crate::telemetry::{IterationEvent, NullSink, Recorder, TelemetrySink, Trace};
use rand::Rng;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// The best solution found.
    pub best: Solution,

    /// Score of the best solution.
    pub best_score: f64,

    /// Iterations executed (fewer than configured if the temperature hit zero).
    pub iterations: usize,

    /// Temperature of the last executed iteration.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Explored, best and temperature series.
    pub trace: Trace,
}

/// Metropolis acceptance probability for a non-improving move.
///
/// `delta` is `neighbour_score - current_score`, so it is `<= 0` whenever
/// this is consulted and the result lies in `(0, 1]`. A zero delta is
/// always accepted.
pub fn acceptance_probability(delta: f64, temperature: f64) -> f64 {
    (delta / temperature).exp()
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA optimization.
    pub fn run<O: Oracle>(oracle: &O, instance: &Instance, config: &SaConfig) -> Result<SaResult> {
        Self::run_with_sink(oracle, instance, config, &mut NullSink)
    }

    /// Runs SA, forwarding every iteration to `sink`.
    pub fn run_with_sink<O: Oracle>(
        oracle: &O,
        instance: &Instance,
        config: &SaConfig,
        sink: &mut dyn TelemetrySink,
    ) -> Result<SaResult> {
        config.validate()?;
        let mut rng = rng_from(config.seed);

        let mut current = oracle.random_solution(instance.pizzas(), instance.budget(), &mut rng);
        let mut current_score = oracle.evaluate(&current);
        let mut best = current.clone();
        let mut best_score = current_score;
        log::debug!(
            "annealing: start score {current_score}, schedule {:?}",
            config.cooling
        );

        let mut recorder = Recorder::new(config.iterations, sink);
        let mut iterations = 0usize;
        let mut final_temperature = config.initial_temperature;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        for t in 1..=config.iterations {
            let temperature = config.cooling.temperature(config.initial_temperature, t);
            if temperature == 0.0 {
                log::debug!("annealing: temperature reached zero at iteration {t}");
                break;
            }
            iterations = t;
            final_temperature = temperature;

            let (neighbour, neighbour_score) =
                oracle.random_neighbour(&current, current_score, &mut rng);

            // Metropolis acceptance criterion
            let accept = if neighbour_score > current_score {
                improving_moves += 1;
                true
            } else {
                let probability =
                    acceptance_probability(neighbour_score - current_score, temperature);
                rng.random::<f64>() < probability
            };

            if accept {
                current = neighbour;
                current_score = neighbour_score;
                accepted_moves += 1;

                if current_score > best_score {
                    best = current.clone();
                    best_score = current_score;
                    log::debug!("annealing: new best {best_score} at iteration {t}");
                }
            }

            recorder.record(
                IterationEvent::new(t, current_score, best_score).with_temperature(temperature),
            );
        }

        log::info!(
            "annealing: best {best_score} after {iterations} iterations ({accepted_moves} accepted)"
        );

        Ok(SaResult {
            best,
            best_score,
            iterations,
            final_temperature,
            accepted_moves,
            improving_moves,
            trace: recorder.finish(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Pizza, TeamBudget};
    use crate::oracle::DiversityOracle;
    use crate::sa::CoolingSchedule;

    fn instance() -> Instance {
        let pizzas = (0..16)
            .map(|i| Pizza::new(i, [format!("a{}", i % 4), format!("b{}", i % 5)]))
            .collect();
        Instance::new(pizzas, TeamBudget::new(2, 2, 1)).unwrap()
    }

    #[test]
    fn test_zero_delta_always_accepted() {
        assert_eq!(acceptance_probability(0.0, 850.0), 1.0);
        assert_eq!(acceptance_probability(0.0, 1e-300), 1.0);
    }

    #[test]
    fn test_worse_moves_less_likely_when_cold() {
        let hot = acceptance_probability(-10.0, 1000.0);
        let cold = acceptance_probability(-10.0, 1.0);
        assert!(hot > cold);
        assert!(hot < 1.0 && cold > 0.0);
    }

    #[test]
    fn test_series_are_aligned() {
        let config = SaConfig::default()
            .with_iterations(300)
            .with_cooling(CoolingSchedule::Linear)
            .with_seed(42);
        let result = SaRunner::run(&DiversityOracle, &instance(), &config).unwrap();
        assert_eq!(result.iterations, 300);
        assert_eq!(result.trace.explored.len(), 300);
        assert_eq!(result.trace.best.len(), 300);
        assert_eq!(result.trace.temperature.len(), 300);
        assert_eq!(result.trace.temperature[0], 400.0);
    }

    #[test]
    fn test_best_tracks_maximum() {
        let config = SaConfig::default().with_iterations(500).with_seed(5);
        let result = SaRunner::run(&DiversityOracle, &instance(), &config).unwrap();
        let max_explored = result
            .trace
            .explored
            .iter()
            .cloned()
            .fold(f64::NEG_INFINITY, f64::max);
        assert!(result.best_score >= max_explored);
        assert_eq!(result.best_score, DiversityOracle.evaluate(&result.best));
        assert!(result.best.satisfies(TeamBudget::new(2, 2, 1)));
        for w in result.trace.best.windows(2) {
            assert!(w[1] >= w[0]);
        }
    }

    #[test]
    fn test_stops_when_temperature_hits_zero() {
        let config = SaConfig::default()
            .with_iterations(10_000)
            .with_cooling(CoolingSchedule::Exponential)
            .with_seed(1);
        let result = SaRunner::run(&DiversityOracle, &instance(), &config).unwrap();
        assert!(result.iterations < 10_000);
        assert_eq!(result.trace.len(), result.iterations);
        assert_eq!(result.trace.temperature.len(), result.iterations);
        assert!(result.final_temperature > 0.0);
        assert_eq!(
            CoolingSchedule::Exponential.temperature(1000.0, result.iterations + 1),
            0.0
        );
    }

    #[test]
    fn test_improving_moves_counted_in_accepted() {
        let config = SaConfig::default()
            .with_iterations(400)
            .with_cooling(CoolingSchedule::Quadratic)
            .with_seed(9);
        let result = SaRunner::run(&DiversityOracle, &instance(), &config).unwrap();
        assert!(result.accepted_moves >= result.improving_moves);
        assert!(result.accepted_moves <= result.iterations);
    }
}
