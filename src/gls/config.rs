//! Guided local search configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};

/// Configuration for [`GlsRunner`](super::GlsRunner).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GlsConfig {
    /// Number of iterations.
    pub iterations: usize,
    /// Random seed for the initial solution (None for random).
    pub seed: Option<u64>,
}

impl Default for GlsConfig {
    fn default() -> Self {
        Self {
            iterations: 200,
            seed: None,
        }
    }
}

impl GlsConfig {
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
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
