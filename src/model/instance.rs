//! Validated problem instance.

use std::collections::HashSet;
use std::sync::Arc;

use super::budget::TeamBudget;
use super::pizza::{Pizza, TeamSize};
use crate::error::{Result, SearchError};

/// Pizzas and team budget, checked once before any search starts.
#[derive(Debug, Clone)]
pub struct Instance {
    pizzas: Vec<Arc<Pizza>>,
    budget: TeamBudget,
}

impl Instance {
    /// Validates and wraps an instance.
    ///
    /// Fails when there are no pizzas, ids repeat, or no single delivery
    /// can be formed (every bucket with free teams needs more pizzas than
    /// exist).
    ///
    /// # Examples
    ///
    /// ```
    /// use pizza_meta::model::{Instance, Pizza, TeamBudget};
    ///
    /// let pizzas = vec![Pizza::new(0, ["a"]), Pizza::new(1, ["b"])];
    /// assert!(Instance::new(pizzas.clone(), TeamBudget::new(1, 0, 0)).is_ok());
    /// assert!(Instance::new(pizzas, TeamBudget::new(0, 1, 0)).is_err());
    /// ```
    pub fn new(pizzas: Vec<Pizza>, budget: TeamBudget) -> Result<Self> {
        validate_instance(&pizzas, budget)?;
        Ok(Self {
            pizzas: pizzas.into_iter().map(Arc::new).collect(),
            budget,
        })
    }

    pub fn pizzas(&self) -> &[Arc<Pizza>] {
        &self.pizzas
    }

    pub fn budget(&self) -> TeamBudget {
        self.budget
    }
}

/// Checks the instance shape without building it.
pub fn validate_instance(pizzas: &[Pizza], budget: TeamBudget) -> Result<()> {
    if pizzas.is_empty() {
        return Err(SearchError::NoPizzas);
    }
    let mut seen = HashSet::with_capacity(pizzas.len());
    for pizza in pizzas {
        if !seen.insert(pizza.id()) {
            return Err(SearchError::DuplicatePizzaId(pizza.id()));
        }
    }
    let constructible = TeamSize::ALL
        .iter()
        .any(|&s| budget.get(s) > 0 && s.members() <= pizzas.len());
    if !constructible {
        return Err(SearchError::Unconstructible {
            pizzas: pizzas.len(),
            budget: budget.counts(),
        });
    }
    Ok(())
}
