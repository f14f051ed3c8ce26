//! Hill Climbing (HC).
//!
//! Draws one random neighbour per iteration and moves to it only when it
//! scores strictly higher. There is no escape mechanism: the run ends on
//! the first local optimum it reaches.

mod config;
mod runner;

pub use config::HcConfig;
pub use runner::{HcResult, HcRunner};
