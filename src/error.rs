//! Configuration errors.
//!
//! Every runner validates its configuration and the problem instance
//! before the first oracle call. Rejected moves, infeasible children and
//! empty neighbourhoods are ordinary outcomes and never surface here.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Reasons a search run refuses to start.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// The instance contains no pizzas.
    #[error("instance contains no pizzas")]
    NoPizzas,

    /// Two pizzas share the same identifier.
    #[error("duplicate pizza id {0}")]
    DuplicatePizzaId(usize),

    /// A raw budget did not have exactly one bucket per team size.
    #[error("team budget needs 3 buckets (sizes 2, 3, 4), got {0}")]
    BudgetLength(usize),

    /// A raw budget bucket was negative.
    #[error("team budget for size {size} is negative ({count})")]
    NegativeBudget { size: usize, count: i64 },

    /// No delivery can be formed from the pizzas and budget.
    #[error("no delivery can be formed from {pizzas} pizzas with budget {budget:?}")]
    Unconstructible { pizzas: usize, budget: [usize; 3] },

    /// The iteration budget was zero.
    #[error("iteration count must be positive")]
    ZeroIterations,

    /// The cooling option code is not one of 1, 2, 3, 4.
    #[error("unknown cooling option {0}, expected 1..=4")]
    UnknownCoolingOption(u8),

    /// A numeric parameter is out of range.
    #[error("invalid {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl SearchError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        SearchError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
