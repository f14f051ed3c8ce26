//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Improving neighbours are always accepted; worse ones
//! are accepted with probability `exp(Δ / T)`, where the temperature `T`
//! follows one of four fixed schedules.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::{CoolingSchedule, SaConfig};
pub use runner::{acceptance_probability, SaResult, SaRunner};
