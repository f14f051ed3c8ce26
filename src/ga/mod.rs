//! Genetic Algorithm (steady-state).
//!
//! A population of independently constructed solutions evolves one child
//! at a time: two parents are selected, spliced by [`crossover`], and the
//! child overwrites a random slot when it passes the oracle's feasibility
//! check. Every individual is then mutated with a fixed probability.
//!
//! # Key Types
//!
//! - [`GaConfig`]: population size, iterations, selection, mutation rate
//! - [`GaRunner`]: executes the loop
//! - [`GaResult`]: final best solution with run statistics
//! - [`Selection`]: tournament or roulette parent selection
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Whitley (1989), "The GENITOR algorithm and selection pressure"

mod config;
mod crossover;
mod runner;
mod selection;

pub use config::GaConfig;
pub use crossover::crossover;
pub use runner::{GaResult, GaRunner};
pub use selection::Selection;
