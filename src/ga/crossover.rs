//! Position-wise delivery crossover.
//!
//! The child starts as a copy of the first parent. For every position both
//! parents share, a coin picks which parent offers its delivery there. The
//! offer is taken only when it brings no pizza the child may already hold
//! and the child can pay for its team size.
//!
//! Pizza tracking is seeded once with every pizza of the first parent and
//! only grows, even when a later overwrite drops one of those pizzas from
//! the child. Offers from the first parent therefore never apply (they
//! would be no-ops anyway), and offers from the second parent only apply
//! when they bring pizzas the first parent leaves undelivered.
//!
//! Team sizes are exchanged one for one: taking an offer of size `s` in
//! place of the child's delivery of size `c` consumes a free team of size
//! `s` and frees one of size `c`. When `s == c` nothing changes.

use std::collections::HashSet;

use rand::Rng;

use crate::model::{Delivery, PizzaId, Solution, TeamSize};

/// Produces one child from two parents.
///
/// The child keeps pizza uniqueness and per-bucket budget conservation
/// whenever the first parent does.
pub fn crossover<R: Rng>(parent1: &Solution, parent2: &Solution, rng: &mut R) -> Solution {
    let mut child = parent1.clone();
    let mut assigned: HashSet<PizzaId> = parent1
        .deliveries()
        .iter()
        .flat_map(Delivery::pizza_ids)
        .collect();

    let shared = parent1.len().min(parent2.len());
    for position in 0..shared {
        let source = if rng.random_bool(0.5) { parent1 } else { parent2 };
        let Some(offer) = source.deliveries().get(position) else {
            continue;
        };

        if offer.pizza_ids().any(|id| assigned.contains(&id)) {
            continue;
        }
        assigned.extend(offer.pizza_ids());

        if exchange_team(&mut child, position, offer.team_size()) {
            child.replace(position, offer.clone());
        }
    }

    child
}

/// Pays for a delivery of size `incoming` at `position`, returning false
/// when no team of that size is free.
fn exchange_team(child: &mut Solution, position: usize, incoming: TeamSize) -> bool {
    let displaced = child.deliveries()[position].team_size();
    if displaced == incoming {
        return true;
    }

    let free = child.free_mut();
    if free[incoming.bucket()] == 0 {
        return false;
    }
    free[incoming.bucket()] -= 1;
    free[displaced.bucket()] += 1;
    true
}
