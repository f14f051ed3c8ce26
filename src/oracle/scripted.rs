//! Hand-wired oracle for runner tests.

use std::cell::Cell;
use std::collections::HashMap;
use std::sync::Arc;

use rand::Rng;

use super::Oracle;
use crate::model::{Pizza, Solution, TeamBudget};

/// Oracle whose scores, neighbourhoods and constructions are fixed up
/// front, so a test can steer a runner through an exact trajectory.
///
/// `random_solution` hands out `starts` in order and repeats the last one.
/// Unscored solutions score 0 and unlisted solutions have no neighbours.
#[derive(Debug, Default)]
pub(crate) struct ScriptedOracle {
    starts: Vec<Solution>,
    handed_out: Cell<usize>,
    scores: HashMap<Solution, f64>,
    moves: HashMap<Solution, Vec<Solution>>,
}

impl ScriptedOracle {
    pub(crate) fn new(starts: Vec<Solution>) -> Self {
        Self {
            starts,
            ..Self::default()
        }
    }

    pub(crate) fn score(mut self, solution: &Solution, score: f64) -> Self {
        self.scores.insert(solution.clone(), score);
        self
    }

    pub(crate) fn neighbours(mut self, solution: &Solution, neighbours: Vec<Solution>) -> Self {
        self.moves.insert(solution.clone(), neighbours);
        self
    }
}

impl Oracle for ScriptedOracle {
    fn evaluate(&self, solution: &Solution) -> f64 {
        self.scores.get(solution).copied().unwrap_or(0.0)
    }

    fn random_solution<R: Rng>(&self, _: &[Arc<Pizza>], _: TeamBudget, _: &mut R) -> Solution {
        let i = self.handed_out.get();
        self.handed_out.set(i + 1);
        self.starts[i.min(self.starts.len() - 1)].clone()
    }

    fn neighbourhood(&self, solution: &Solution) -> Vec<Solution> {
        self.moves.get(solution).cloned().unwrap_or_default()
    }

    fn random_neighbour<R: Rng>(&self, solution: &Solution, score: f64, _: &mut R) -> (Solution, f64) {
        (solution.clone(), score)
    }
}
