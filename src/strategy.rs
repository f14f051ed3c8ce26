//! One-call dispatch over the five search strategies.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ga::{GaConfig, GaResult, GaRunner};
use crate::gls::{GlsConfig, GlsResult, GlsRunner};
use crate::hc::{HcConfig, HcResult, HcRunner};
use crate::model::{Instance, Solution};
use crate::oracle::Oracle;
use crate::sa::{SaConfig, SaResult, SaRunner};
use crate::tabu::{TabuConfig, TabuResult, TabuRunner};
use crate::telemetry::{NullSink, TelemetrySink, Trace};

/// A search strategy together with its options.
///
/// # Examples
///
/// ```
/// use pizza_meta::hc::HcConfig;
/// use pizza_meta::model::{Instance, Pizza, TeamBudget};
/// use pizza_meta::oracle::DiversityOracle;
/// use pizza_meta::strategy::Strategy;
///
/// let pizzas = (0..8).map(|i| Pizza::new(i, [format!("x{}", i % 3)])).collect();
/// let instance = Instance::new(pizzas, TeamBudget::new(2, 0, 1)).unwrap();
///
/// let strategy = Strategy::HillClimbing(HcConfig::default().with_iterations(50).with_seed(1));
/// let outcome = strategy.solve(&DiversityOracle, &instance).unwrap();
/// assert_eq!(outcome.trace.len(), 50);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Strategy {
    HillClimbing(HcConfig),
    SimulatedAnnealing(SaConfig),
    Tabu(TabuConfig),
    GuidedLocalSearch(GlsConfig),
    Genetic(GaConfig),
}

/// What every strategy hands back to its caller.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub best: Solution,
    pub best_score: f64,
    pub trace: Trace,
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::HillClimbing(_) => "hill-climbing",
            Strategy::SimulatedAnnealing(_) => "simulated-annealing",
            Strategy::Tabu(_) => "tabu-search",
            Strategy::GuidedLocalSearch(_) => "guided-local-search",
            Strategy::Genetic(_) => "genetic-algorithm",
        }
    }

    /// Runs the strategy once.
    pub fn solve<O: Oracle>(&self, oracle: &O, instance: &Instance) -> Result<SearchOutcome> {
        self.solve_with_sink(oracle, instance, &mut NullSink)
    }

    /// Runs the strategy once, forwarding every iteration to `sink`.
    pub fn solve_with_sink<O: Oracle>(
        &self,
        oracle: &O,
        instance: &Instance,
        sink: &mut dyn TelemetrySink,
    ) -> Result<SearchOutcome> {
        log::debug!("running {}", self.name());
        let outcome: SearchOutcome = match self {
            Strategy::HillClimbing(c) => HcRunner::run_with_sink(oracle, instance, c, sink)?.into(),
            Strategy::SimulatedAnnealing(c) => {
                SaRunner::run_with_sink(oracle, instance, c, sink)?.into()
            }
            Strategy::Tabu(c) => TabuRunner::run_with_sink(oracle, instance, c, sink)?.into(),
            Strategy::GuidedLocalSearch(c) => {
                GlsRunner::run_with_sink(oracle, instance, c, sink)?.into()
            }
            Strategy::Genetic(c) => GaRunner::run_with_sink(oracle, instance, c, sink)?.into(),
        };
        Ok(outcome)
    }
}

macro_rules! impl_outcome_from {
    ($($result:ty),+) => {
        $(
            impl From<$result> for SearchOutcome {
                fn from(r: $result) -> Self {
                    SearchOutcome {
                        best: r.best,
                        best_score: r.best_score,
                        trace: r.trace,
                    }
                }
            }
        )+
    };
}

impl_outcome_from!(HcResult, SaResult, TabuResult, GlsResult, GaResult);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchError;
    use crate::model::{Pizza, TeamBudget};
    use crate::oracle::DiversityOracle;
    use crate::sa::CoolingSchedule;
    use crate::telemetry::LogSink;

    fn instance() -> Instance {
        let pizzas = (0..14)
            .map(|i| Pizza::new(i, [format!("a{}", i % 3), format!("b{}", i % 5)]))
            .collect();
        Instance::new(pizzas, TeamBudget::new(2, 1, 2)).unwrap()
    }

    fn all(iterations: usize) -> Vec<Strategy> {
        vec![
            Strategy::HillClimbing(HcConfig::default().with_iterations(iterations).with_seed(1)),
            Strategy::SimulatedAnnealing(
                SaConfig::default()
                    .with_iterations(iterations)
                    .with_cooling(CoolingSchedule::Logarithmic)
                    .with_seed(1),
            ),
            Strategy::Tabu(TabuConfig::default().with_iterations(iterations).with_seed(1)),
            Strategy::GuidedLocalSearch(GlsConfig::default().with_iterations(iterations).with_seed(1)),
            Strategy::Genetic(
                GaConfig::default()
                    .with_population_size(10)
                    .with_iterations(iterations)
                    .with_seed(1),
            ),
        ]
    }

    #[test]
    fn test_every_strategy_returns_feasible_best() {
        let inst = instance();
        for strategy in all(30) {
            let outcome = strategy.solve(&DiversityOracle, &inst).unwrap();
            assert!(outcome.best.satisfies(inst.budget()), "{}", strategy.name());
            assert_eq!(
                outcome.best_score,
                DiversityOracle.evaluate(&outcome.best),
                "{}",
                strategy.name()
            );
            assert_eq!(outcome.trace.len(), 30, "{}", strategy.name());
            assert_eq!(outcome.trace.explored.len(), outcome.trace.best.len());
        }
    }

    #[test]
    fn test_sink_sees_every_iteration() {
        let inst = instance();
        for strategy in all(12) {
            let mut external = Trace::default();
            let outcome = strategy
                .solve_with_sink(&DiversityOracle, &inst, &mut external)
                .unwrap();
            assert_eq!(external, outcome.trace, "{}", strategy.name());
        }
    }

    #[test]
    fn test_log_sink_leaves_trace_untouched() {
        let inst = instance();
        for strategy in all(8) {
            let plain = strategy.solve(&DiversityOracle, &inst).unwrap();
            let logged = strategy
                .solve_with_sink(&DiversityOracle, &inst, &mut LogSink::new(strategy.name()))
                .unwrap();
            assert_eq!(plain.trace, logged.trace, "{}", strategy.name());
            assert_eq!(plain.best, logged.best, "{}", strategy.name());
        }
    }

    #[test]
    fn test_zero_iterations_rejected_before_search() {
        let inst = instance();
        for strategy in all(0) {
            let result = strategy.solve(&DiversityOracle, &inst);
            match strategy {
                Strategy::Genetic(_) => assert!(result.is_ok()),
                _ => assert_eq!(result.unwrap_err(), SearchError::ZeroIterations),
            }
        }
    }
}
