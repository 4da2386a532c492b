use crate::search::HeuristicCache;
use crate::world::Point;
use ordered_float::OrderedFloat;
use std::{fmt::Debug, hash::Hash};

/// Path and step costs. Infinity marks an unreachable target.
pub type Cost = OrderedFloat<f64>;

/// One outgoing edge of a state, produced on demand by
/// [`SearchProblem::successors`].
#[derive(Debug, Clone, PartialEq)]
pub struct Successor<S, A> {
    pub state: S,
    pub action: A,
    /// Must be non-negative, the cost-based engines rely on it.
    pub cost: Cost,
}

impl<S, A> Successor<S, A> {
    pub fn new(state: S, action: A, cost: Cost) -> Self {
        Self {
            state,
            action,
            cost,
        }
    }
}

/// A state-transition problem as seen by the search engines. The graph is
/// never materialised; the engines discover it through
/// [`SearchProblem::successors`].
pub trait SearchProblem {
    type State: Clone + Eq + Hash + Debug;
    type Action: Clone + PartialEq + Debug;

    fn initial_state(&self) -> Self::State;

    fn is_goal(&self, state: &Self::State) -> bool;

    fn successors(&self, state: &Self::State) -> Vec<Successor<Self::State, Self::Action>>;
}

/// A problem laid out on a grid with per-cell entry costs. The problem owns
/// the [`HeuristicCache`] that heuristics evaluated against it memoise into.
pub trait TerrainProblem {
    fn is_passable(&self, point: Point) -> bool;

    fn terrain_cost(&self, point: Point) -> Cost;

    fn heuristic_cache(&mut self) -> &mut HeuristicCache;
}

/// A problem whose goal is to reach a single point.
pub trait PointGoalProblem: SearchProblem {
    fn goal(&self) -> Point;

    fn position(&self, state: &Self::State) -> Point;
}

/// A problem whose goal is to visit every point of a set.
pub trait MultiGoalProblem: SearchProblem + TerrainProblem {
    /// Splits a state into the agent position and the goals it still has to
    /// visit. The goals must be sorted and free of duplicates.
    fn split_state<'a>(&self, state: &'a Self::State) -> (Point, &'a [Point]);
}
