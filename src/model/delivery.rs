//! A team together with the pizzas it delivers.

use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::pizza::{Pizza, PizzaId, TeamSize};

/// One team of a fixed size and the pizzas assigned to it.
///
/// Pizzas are shared behind [`Arc`] so cloning a delivery never copies
/// ingredient sets. Equality and hashing look only at the team size and
/// the ordered pizza ids.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Delivery {
    team_size: TeamSize,
    pizzas: Vec<Arc<Pizza>>,
}

impl Delivery {
    /// Creates a delivery. The pizza count is not checked here; see
    /// [`is_conforming`](Self::is_conforming).
    pub fn new(team_size: TeamSize, pizzas: Vec<Arc<Pizza>>) -> Self {
        Self { team_size, pizzas }
    }

    pub fn team_size(&self) -> TeamSize {
        self.team_size
    }

    pub fn pizzas(&self) -> &[Arc<Pizza>] {
        &self.pizzas
    }

    pub fn len(&self) -> usize {
        self.pizzas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pizzas.is_empty()
    }

    pub fn pizza_ids(&self) -> impl Iterator<Item = PizzaId> + '_ {
        self.pizzas.iter().map(|p| p.id())
    }

    /// Whether the pizza count equals the team size.
    pub fn is_conforming(&self) -> bool {
        self.pizzas.len() == self.team_size.members()
    }

    /// Union of the ingredient names of every pizza in the delivery.
    pub fn ingredients(&self) -> BTreeSet<&str> {
        self.pizzas
            .iter()
            .flat_map(|p| p.ingredients().iter().map(String::as_str))
            .collect()
    }

    pub fn distinct_ingredients(&self) -> usize {
        self.ingredients().len()
    }

    pub(crate) fn pizza_mut(&mut self, position: usize) -> &mut Arc<Pizza> {
        &mut self.pizzas[position]
    }
}

impl PartialEq for Delivery {
    fn eq(&self, other: &Self) -> bool {
        self.team_size == other.team_size && self.pizza_ids().eq(other.pizza_ids())
    }
}

impl Eq for Delivery {}

impl Hash for Delivery {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.team_size.hash(state);
        self.pizzas.len().hash(state);
        for id in self.pizza_ids() {
            id.hash(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(d: &Delivery) -> u64 {
        let mut h = DefaultHasher::new();
        d.hash(&mut h);
        h.finish()
    }

    #[test]
    fn test_equality_ignores_ingredients() {
        let a = Delivery::new(
            TeamSize::Two,
            vec![Arc::new(Pizza::new(0, ["x"])), Arc::new(Pizza::new(1, ["y"]))],
        );
        let b = Delivery::new(
            TeamSize::Two,
            vec![Arc::new(Pizza::new(0, ["z"])), Arc::new(Pizza::new(1, ["w"]))],
        );
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_order_is_significant() {
        let p0 = Arc::new(Pizza::new(0, ["x"]));
        let p1 = Arc::new(Pizza::new(1, ["y"]));
        let a = Delivery::new(TeamSize::Two, vec![p0.clone(), p1.clone()]);
        let b = Delivery::new(TeamSize::Two, vec![p1, p0]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_ingredient_union() {
        let d = Delivery::new(
            TeamSize::Three,
            vec![
                Arc::new(Pizza::new(0, ["a", "b"])),
                Arc::new(Pizza::new(1, ["b", "c"])),
                Arc::new(Pizza::new(2, ["a"])),
            ],
        );
        assert_eq!(d.distinct_ingredients(), 3);
        assert!(d.is_conforming());
    }
}
