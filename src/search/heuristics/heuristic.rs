use crate::search::{
    heuristics::{
        true_distance, EuclideanHeuristic, ManhattanHeuristic, SurvivorHeuristic, ZeroHeuristic,
    },
    problem_formulations::{MultiGoalProblem, PointGoalProblem, TerrainProblem},
    Cost, SearchProblem,
};
use crate::world::{Point, TerrainMap};
use ordered_float::OrderedFloat;
use serde::Deserialize;
use thiserror::Error;

pub type HeuristicValue = OrderedFloat<f64>;

/// Estimates the remaining cost from a state to a goal. The problem is
/// passed mutably so that estimators can memoise into its
/// [`HeuristicCache`](crate::search::HeuristicCache).
///
/// Any closure `FnMut(&State, &mut P) -> HeuristicValue` is a heuristic too.
pub trait Heuristic<P: SearchProblem> {
    fn evaluate(&mut self, state: &P::State, problem: &mut P) -> HeuristicValue;
}

impl<P, F> Heuristic<P> for F
where
    P: SearchProblem,
    F: FnMut(&P::State, &mut P) -> HeuristicValue,
{
    fn evaluate(&mut self, state: &P::State, problem: &mut P) -> HeuristicValue {
        self(state, problem)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("the {heuristic:?} heuristic does not apply to {problem} problems")]
pub struct UnsupportedHeuristic {
    pub heuristic: HeuristicName,
    pub problem: &'static str,
}

#[derive(clap::ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum HeuristicName {
    #[clap(name = "zero", help = "The zero heuristic, turns A* into uniform-cost search.")]
    #[serde(rename = "zero")]
    ZeroHeuristic,
    #[clap(help = "Manhattan distance to the goal, single goal problems only.")]
    Manhattan,
    #[clap(help = "Euclidean distance to the goal, single goal problems only.")]
    Euclidean,
    #[clap(help = "Distance to the nearest survivor plus a spanning tree over the rest.")]
    Survivor,
}

impl HeuristicName {
    pub fn create_point_goal<P: PointGoalProblem>(
        &self,
    ) -> Result<Box<dyn Heuristic<P>>, UnsupportedHeuristic> {
        match self {
            HeuristicName::ZeroHeuristic => Ok(Box::new(ZeroHeuristic::new())),
            HeuristicName::Manhattan => Ok(Box::new(ManhattanHeuristic::new())),
            HeuristicName::Euclidean => Ok(Box::new(EuclideanHeuristic::new())),
            HeuristicName::Survivor => Err(UnsupportedHeuristic {
                heuristic: *self,
                problem: "single goal",
            }),
        }
    }

    pub fn create_multi_goal<P: MultiGoalProblem>(
        &self,
        metric: DistanceMetric,
    ) -> Result<Box<dyn Heuristic<P>>, UnsupportedHeuristic> {
        match self {
            HeuristicName::ZeroHeuristic => Ok(Box::new(ZeroHeuristic::new())),
            HeuristicName::Survivor => Ok(Box::new(SurvivorHeuristic::new(metric))),
            HeuristicName::Manhattan | HeuristicName::Euclidean => Err(UnsupportedHeuristic {
                heuristic: *self,
                problem: "multi goal",
            }),
        }
    }
}

/// How distances between grid points are measured by the multi-goal
/// heuristics.
#[derive(clap::ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum DistanceMetric {
    #[clap(help = "Manhattan distance, admissible when every cell costs at least 1.")]
    Grid,
    #[clap(help = "Exact terrain-weighted distance, computed by uniform-cost search.")]
    TrueDistance,
}

impl DistanceMetric {
    /// The metric to use on a map: exact distances as soon as cell costs
    /// differ or drop below 1, the cheap grid metric otherwise.
    pub fn preferred_for(map: &TerrainMap) -> Self {
        let unit_or_more = map
            .min_terrain_cost()
            .map_or(true, |cost| cost >= OrderedFloat(1.));
        if map.is_uniform() && unit_or_more {
            DistanceMetric::Grid
        } else {
            DistanceMetric::TrueDistance
        }
    }

    /// Distance from `from` to `to`, entry cost of `to` included.
    pub fn distance<P: TerrainProblem + ?Sized>(
        &self,
        problem: &mut P,
        from: Point,
        to: Point,
    ) -> Cost {
        match self {
            DistanceMetric::Grid => f64::from(from.manhattan_distance(to)).into(),
            DistanceMetric::TrueDistance => true_distance(problem, from, to),
        }
    }

    /// Undirected edge weight between two goals: the cheaper of the two
    /// directed distances.
    pub fn edge_weight<P: TerrainProblem + ?Sized>(
        &self,
        problem: &mut P,
        a: Point,
        b: Point,
    ) -> Cost {
        match self {
            DistanceMetric::Grid => self.distance(problem, a, b),
            DistanceMetric::TrueDistance => {
                let forward = true_distance(problem, a, b);
                let backward = true_distance(problem, b, a);
                forward.min(backward)
            }
        }
    }
}
