mod multi_survivor_problem;
mod position_search_problem;
mod search_problem;

pub use multi_survivor_problem::{MultiSurvivorProblem, SurvivorState};
pub use position_search_problem::PositionSearchProblem;
pub use search_problem::{
    Cost, MultiGoalProblem, PointGoalProblem, SearchProblem, Successor, TerrainProblem,
};
