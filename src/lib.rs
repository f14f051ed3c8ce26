//! Metaheuristic search for assigning pizzas to delivery teams.
//!
//! Pizzas (each a set of ingredients) are delivered to teams of 2, 3 or 4
//! members under a fixed budget of teams per size. A team receives exactly
//! one pizza per member, and the goal is to maximize ingredient diversity.
//! Five interchangeable strategies explore the solution space through a
//! shared [`Oracle`](oracle::Oracle) contract:
//!
//! - **Hill Climbing (HC)**: accept strictly improving random neighbours.
//! - **Simulated Annealing (SA)**: Metropolis acceptance under one of four
//!   cooling schedules.
//! - **Tabu Search (TS)**: steepest admissible move with a tenure map of
//!   visited solutions and random restarts.
//! - **Guided Local Search (GLS)**: steepest move judged on a score
//!   penalized by similarity to the best solution.
//! - **Genetic Algorithm (GA)**: steady-state population with tournament
//!   or roulette selection, position-wise crossover and mutation.
//!
//! # Architecture
//!
//! [`model`] holds plain value types and their invariants. [`oracle`]
//! scores, builds and perturbs solutions. Each strategy module pairs a
//! config with a runner that is a pure loop over the oracle: its only
//! outputs are the returned result and the per-iteration [`telemetry`].
//! Every run draws from one seedable generator ([`random`]), so a fixed
//! seed reproduces a run exactly.

pub mod error;
pub mod ga;
pub mod gls;
pub mod hc;
pub mod model;
pub mod oracle;
pub mod random;
pub mod sa;
pub mod strategy;
pub mod tabu;
pub mod telemetry;

pub use error::{Result, SearchError};
