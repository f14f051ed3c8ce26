//! Solution model.
//!
//! Plain value types shared by the oracle and every search strategy:
//!
//! - [`Pizza`]: an id and a set of ingredient names
//! - [`Delivery`]: a team of size 2, 3 or 4 with exactly that many pizzas
//! - [`TeamBudget`]: available teams per size bucket
//! - [`Solution`]: deliveries plus free capacity per bucket
//! - [`Instance`]: validated pizzas and budget
//!
//! # Invariants
//!
//! Every solution accepted as current, best, or into a population holds:
//!
//! 1. no pizza id appears in more than one delivery;
//! 2. each delivery carries exactly as many pizzas as its team size;
//! 3. per bucket, deliveries plus free capacity equal the budget.
//!
//! [`Solution::satisfies`] checks all three.

mod budget;
mod delivery;
mod instance;
mod pizza;
mod solution;

pub use budget::TeamBudget;
pub use delivery::Delivery;
pub use instance::{validate_instance, Instance};
pub use pizza::{Pizza, PizzaId, TeamSize};
pub use solution::Solution;
