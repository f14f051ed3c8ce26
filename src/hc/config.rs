//! Hill climbing configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};

/// Configuration for [`HcRunner`](super::HcRunner).
///
/// # Examples
///
/// ```
/// use pizza_meta::hc::HcConfig;
///
/// let config = HcConfig::default()
///     .with_iterations(500)
///     .with_improving_iterations(true)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HcConfig {
    /// Iteration budget.
    pub iterations: usize,

    /// When set, every accepted move resets the iteration counter, so the
    /// budget means "iterations without improvement".
    pub improving_iterations: bool,

    /// Random seed. `None` draws one.
    pub seed: Option<u64>,
}

impl Default for HcConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            improving_iterations: false,
            seed: None,
        }
    }
}

impl HcConfig {
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_improving_iterations(mut self, on: bool) -> Self {
        self.improving_iterations = on;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(SearchError::ZeroIterations);
        }
        Ok(())
    }
}
