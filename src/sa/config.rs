//! SA configuration and cooling schedules.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};

/// Cooling schedule: temperature as a function of the initial
/// temperature `T0` and the 1-based iteration `t`.
///
/// | code | schedule      | formula                  |
/// |------|---------------|--------------------------|
/// | 1    | `Exponential` | `T0 · 0.85^t`            |
/// | 2    | `Logarithmic` | `T0 / (1 + 5·ln(1 + t))` |
/// | 3    | `Linear`      | `T0 / (1 + 1.5·t)`       |
/// | 4    | `Quadratic`   | `T0 / (1 + 0.5·t²)`      |
///
/// # Examples
///
/// ```
/// use pizza_meta::sa::CoolingSchedule;
///
/// let schedule = CoolingSchedule::from_code(3).unwrap();
/// assert_eq!(schedule.temperature(1000.0, 1), 400.0);
/// assert!(CoolingSchedule::from_code(9).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CoolingSchedule {
    /// `T0 · 0.85^t`. Underflows to exactly zero after a few thousand
    /// iterations, which ends the run early.
    #[default]
    Exponential,

    /// `T0 / (1 + 5·ln(1 + t))`. Cools very slowly.
    Logarithmic,

    /// `T0 / (1 + 1.5·t)`.
    Linear,

    /// `T0 / (1 + 0.5·t²)`.
    Quadratic,
}

impl CoolingSchedule {
    /// Maps a cooling option code (1 to 4) to its schedule.
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            1 => Ok(CoolingSchedule::Exponential),
            2 => Ok(CoolingSchedule::Logarithmic),
            3 => Ok(CoolingSchedule::Linear),
            4 => Ok(CoolingSchedule::Quadratic),
            other => Err(SearchError::UnknownCoolingOption(other)),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            CoolingSchedule::Exponential => 1,
            CoolingSchedule::Logarithmic => 2,
            CoolingSchedule::Linear => 3,
            CoolingSchedule::Quadratic => 4,
        }
    }

    /// Temperature at iteration `t` (1-based).
    pub fn temperature(self, initial: f64, t: usize) -> f64 {
        let x = t as f64;
        match self {
            CoolingSchedule::Exponential => {
                initial * 0.85f64.powi(i32::try_from(t).unwrap_or(i32::MAX))
            }
            CoolingSchedule::Logarithmic => initial / (1.0 + 5.0 * (1.0 + x).ln()),
            CoolingSchedule::Linear => initial / (1.0 + 1.5 * x),
            CoolingSchedule::Quadratic => initial / (1.0 + 0.5 * x * x),
        }
    }
}

/// Configuration for [`SaRunner`](super::SaRunner).
///
/// # Examples
///
/// ```
/// use pizza_meta::sa::{SaConfig, CoolingSchedule};
///
/// let config = SaConfig::default()
///     .with_iterations(2000)
///     .with_initial_temperature(500.0)
///     .with_cooling(CoolingSchedule::Logarithmic)
///     .with_seed(1);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SaConfig {
    /// Iteration budget. The run may stop earlier if the temperature
    /// reaches exactly zero.
    pub iterations: usize,

    /// Initial temperature `T0`.
    pub initial_temperature: f64,

    /// Cooling schedule.
    pub cooling: CoolingSchedule,

    /// Random seed. `None` draws one.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            initial_temperature: 1000.0,
            cooling: CoolingSchedule::default(),
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    /// Sets the cooling schedule from its option code.
    pub fn with_cooling_code(mut self, code: u8) -> Result<Self> {
        self.cooling = CoolingSchedule::from_code(code)?;
        Ok(self)
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
        if !(self.initial_temperature.is_finite() && self.initial_temperature > 0.0) {
            return Err(SearchError::invalid(
                "initial_temperature",
                format!("must be positive and finite, got {}", self.initial_temperature),
            ));
        }
        Ok(())
    }
}
