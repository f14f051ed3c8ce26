//! Pizzas and team sizes.

use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a pizza, unique within an instance.
pub type PizzaId = usize;

/// An immutable pizza: an identifier and its ingredient names.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pizza {
    id: PizzaId,
    ingredients: BTreeSet<String>,
}

impl Pizza {
    /// Creates a pizza. Repeated ingredient names collapse into one.
    ///
    /// # Examples
    ///
    /// ```
    /// use pizza_meta::model::Pizza;
    ///
    /// let pizza = Pizza::new(3, ["onion", "pepper", "onion"]);
    /// assert_eq!(pizza.id(), 3);
    /// assert_eq!(pizza.ingredients().len(), 2);
    /// ```
    pub fn new<I, S>(id: PizzaId, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            ingredients: ingredients.into_iter().map(Into::into).collect(),
        }
    }

    pub fn id(&self) -> PizzaId {
        self.id
    }

    pub fn ingredients(&self) -> &BTreeSet<String> {
        &self.ingredients
    }
}

/// Team size of a delivery. Each size owns one budget bucket.
///
/// | size | bucket |
/// |------|--------|
/// | 2    | 0      |
/// | 3    | 1      |
/// | 4    | 2      |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TeamSize {
    Two,
    Three,
    Four,
}

impl TeamSize {
    /// All sizes in bucket order.
    pub const ALL: [TeamSize; 3] = [TeamSize::Two, TeamSize::Three, TeamSize::Four];

    /// Number of members, which is also the number of pizzas delivered.
    pub fn members(self) -> usize {
        match self {
            TeamSize::Two => 2,
            TeamSize::Three => 3,
            TeamSize::Four => 4,
        }
    }

    /// Budget bucket index (`members - 2`).
    pub fn bucket(self) -> usize {
        self.members() - 2
    }

    pub fn from_members(members: usize) -> Option<Self> {
        match members {
            2 => Some(TeamSize::Two),
            3 => Some(TeamSize::Three),
            4 => Some(TeamSize::Four),
            _ => None,
        }
    }

    pub fn from_bucket(bucket: usize) -> Option<Self> {
        Self::ALL.get(bucket).copied()
    }
}
