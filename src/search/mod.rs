mod heuristic_cache;
pub mod heuristics;
pub mod problem_formulations;
pub mod search_engines;
mod validate;

pub use heuristic_cache::{GoalSetKey, HeuristicCache, PointPair};
pub use heuristics::{DistanceMetric, Heuristic, HeuristicName, HeuristicValue, ZeroHeuristic};
pub use problem_formulations::{
    Cost, MultiGoalProblem, PointGoalProblem, SearchProblem, Successor, TerrainProblem,
};
pub use search_engines::{
    astar_search, breadth_first_search, depth_first_search, uniform_cost_search, GraphSearch,
    SearchEngineName, SearchLimits, SearchResult,
};
pub use validate::{validate, PlanError};
