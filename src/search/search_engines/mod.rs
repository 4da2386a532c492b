//! Graph search engines. Depth-first, breadth-first, uniform-cost and A*
//! search are all the same loop, [`GraphSearch`], run with a different
//! [`SearchStrategy`].

mod frontier;
mod graph_search;
mod search_engine;
mod search_node;
mod search_space;
mod search_statistics;
mod termination_condition;

pub use frontier::{FifoFrontier, Frontier, FrontierKind, LifoFrontier, PriorityFrontier};
pub use graph_search::GraphSearch;
pub use search_engine::{DuplicatePolicy, GoalTest, SearchEngineName, SearchResult, SearchStrategy};
pub use search_node::{NodeId, SearchNode, SearchNodeStatus};
pub use search_space::SearchSpace;
pub use search_statistics::SearchStatistics;
pub use termination_condition::{SearchLimits, TerminationCondition};

use crate::search::{heuristics::ZeroHeuristic, Heuristic, SearchProblem};

/// Depth-first graph search. Returns an empty plan if no goal is reachable.
pub fn depth_first_search<P: SearchProblem>(problem: &mut P) -> Vec<P::Action> {
    GraphSearch::depth_first()
        .search(problem, &mut ZeroHeuristic::new())
        .0
        .into_plan()
}

/// Breadth-first graph search. Returns an empty plan if no goal is
/// reachable.
pub fn breadth_first_search<P: SearchProblem>(problem: &mut P) -> Vec<P::Action> {
    GraphSearch::breadth_first()
        .search(problem, &mut ZeroHeuristic::new())
        .0
        .into_plan()
}

/// Uniform-cost search. Returns an empty plan if no goal is reachable.
pub fn uniform_cost_search<P: SearchProblem>(problem: &mut P) -> Vec<P::Action> {
    GraphSearch::uniform_cost()
        .search(problem, &mut ZeroHeuristic::new())
        .0
        .into_plan()
}

/// A* search guided by `heuristic`. Returns an empty plan if no goal is
/// reachable.
pub fn astar_search<P, H>(problem: &mut P, heuristic: &mut H) -> Vec<P::Action>
where
    P: SearchProblem,
    H: Heuristic<P> + ?Sized,
{
    GraphSearch::astar().search(problem, heuristic).0.into_plan()
}
