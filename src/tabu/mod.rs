//! Tabu Search (TS).
//!
//! A single-solution trajectory metaheuristic that keeps recently visited
//! solutions in a tenure map (the tabu list) and refuses to move back to
//! them, which prevents cycling. When the whole neighbourhood is tabu the
//! search restarts from a fresh random solution.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod list;
mod runner;

pub use config::TabuConfig;
pub use list::TabuList;
pub use runner::{TabuResult, TabuRunner};
