//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the steady-state loop.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::selection::Selection;
use crate::error::{Result, SearchError};

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use pizza_meta::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 60);
/// assert_eq!(config.mutation_rate, 0.05);
/// assert_eq!(config.selection, Selection::Roulette);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use pizza_meta::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(30)
///     .with_selection(Selection::Tournament)
///     .with_iterations(400)
///     .with_seed(5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population.
    pub population_size: usize,

    /// Number of steady-state iterations. Each one produces at most one
    /// child. Zero returns the best of the initial population.
    pub iterations: usize,

    /// Selection strategy for choosing parents.
    pub selection: Selection,

    /// Probability that each individual is replaced by a random neighbour
    /// at the end of an iteration (0.0–1.0).
    pub mutation_rate: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 60,
            iterations: 500,
            selection: Selection::default(),
            mutation_rate: 0.05,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of iterations.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(SearchError::invalid("population_size", "must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(SearchError::invalid(
                "mutation_rate",
                format!("must be in [0, 1], got {}", self.mutation_rate),
            ));
        }
        Ok(())
    }
}
