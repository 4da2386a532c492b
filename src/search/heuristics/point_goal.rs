//! Straight-line estimators for problems with a single goal point.

use crate::search::{problem_formulations::PointGoalProblem, Heuristic, HeuristicValue};

/// Manhattan distance to the goal. Admissible when every step costs at
/// least 1.
#[derive(Clone, Copy, Debug, Default)]
pub struct ManhattanHeuristic {}

impl ManhattanHeuristic {
    pub fn new() -> Self {
        ManhattanHeuristic {}
    }
}

impl<P: PointGoalProblem> Heuristic<P> for ManhattanHeuristic {
    fn evaluate(&mut self, state: &P::State, problem: &mut P) -> HeuristicValue {
        let distance = problem.position(state).manhattan_distance(problem.goal());
        f64::from(distance).into()
    }
}

/// Euclidean distance to the goal. Never larger than the Manhattan distance.
#[derive(Clone, Copy, Debug, Default)]
pub struct EuclideanHeuristic {}

impl EuclideanHeuristic {
    pub fn new() -> Self {
        EuclideanHeuristic {}
    }
}

impl<P: PointGoalProblem> Heuristic<P> for EuclideanHeuristic {
    fn evaluate(&mut self, state: &P::State, problem: &mut P) -> HeuristicValue {
        problem
            .position(state)
            .euclidean_distance(problem.goal())
            .into()
    }
}
