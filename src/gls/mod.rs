//! Guided Local Search (GLS).
//!
//! Steepest-ascent moves judged on a penalized score: both the candidate
//! and the current solution pay for how closely they resemble the best
//! solution found so far, which pushes the search away from features the
//! best already exploits. The best itself is still judged on raw score.
//!
//! # References
//!
//! - Voudouris & Tsang (1999), "Guided local search and its application to
//!   the traveling salesman problem"

mod config;
mod penalty;
mod runner;

pub use config::GlsConfig;
pub use penalty::penalty;
pub use runner::{GlsResult, GlsRunner};
