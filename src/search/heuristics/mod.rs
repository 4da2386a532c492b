//! Heuristic estimators for the informed search engines.

mod heuristic;
mod point_goal;
mod spanning_tree;
mod survivor_heuristic;
mod true_distance;
mod zero_heuristic;

pub use heuristic::{
    DistanceMetric, Heuristic, HeuristicName, HeuristicValue, UnsupportedHeuristic,
};
pub use point_goal::{EuclideanHeuristic, ManhattanHeuristic};
pub use spanning_tree::{cached_spanning_tree, minimum_spanning_tree};
pub use survivor_heuristic::SurvivorHeuristic;
pub use true_distance::true_distance;
pub use zero_heuristic::ZeroHeuristic;
