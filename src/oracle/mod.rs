//! Problem oracle.
//!
//! Strategies never score, construct or perturb solutions themselves; they
//! go through an [`Oracle`]. [`DiversityOracle`] is the bundled
//! implementation.

mod diversity;
#[cfg(test)]
pub(crate) mod scripted;
mod types;

pub use diversity::DiversityOracle;
pub use types::Oracle;
