//! Tabu Search configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use pizza_meta::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_iterations(1000)
///     .with_tabu_tenure(7);
/// assert_eq!(config.iterations, 1000);
/// assert_eq!(config.tabu_tenure, 7);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TabuConfig {
    /// Number of iterations.
    pub iterations: usize,
    /// How many iterations a visited solution stays tabu, counting the
    /// iteration it was inserted on.
    pub tabu_tenure: usize,
    /// Random seed (None for random).
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            iterations: 500,
            tabu_tenure: 10,
            seed: None,
        }
    }
}

impl TabuConfig {
    /// Sets the number of iterations.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets the tabu tenure.
    pub fn with_tabu_tenure(mut self, tenure: usize) -> Self {
        self.tabu_tenure = tenure;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(SearchError::ZeroIterations);
        }
        if self.tabu_tenure == 0 {
            return Err(SearchError::invalid("tabu_tenure", "must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_validates() {
        assert!(TabuConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_tenure_rejected() {
        let config = TabuConfig::default().with_tabu_tenure(0);
        assert!(matches!(
            config.validate(),
            Err(SearchError::InvalidParameter { name: "tabu_tenure", .. })
        ));
    }
}
