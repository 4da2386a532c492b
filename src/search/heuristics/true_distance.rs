//! Exact terrain-weighted distances between grid points.

use crate::search::{
    problem_formulations::TerrainProblem,
    search_engines::{Frontier, PriorityFrontier},
    Cost, PointPair,
};
use crate::world::{Direction, Point};
use ordered_float::OrderedFloat;
use std::collections::{HashMap, HashSet};
use strum::IntoEnumIterator;
use tracing::trace;

/// Cheapest cost of walking from `from` to `to` through passable cells,
/// where every step pays the terrain cost of the cell it enters. Infinite
/// if `to` cannot be reached.
///
/// Both orderings of a pair share one cache entry: the entry holds the cost
/// of the cells strictly between the endpoints, which is the same in either
/// direction, and the entry cost of `to` is added per query.
pub fn true_distance<P>(problem: &mut P, from: Point, to: Point) -> Cost
where
    P: TerrainProblem + ?Sized,
{
    if from == to {
        return OrderedFloat(0.);
    }
    let pair = PointPair::new(from, to);
    let interior = match problem.heuristic_cache().distance(&pair) {
        Some(interior) => interior,
        None => {
            let distance = shortest_path_cost(problem, pair.low(), pair.high());
            // Cells off the map have infinite entry cost, keep them
            // unreachable instead of subtracting infinity from itself.
            let interior = if distance.into_inner().is_infinite() {
                distance
            } else {
                distance - problem.terrain_cost(pair.high())
            };
            problem.heuristic_cache().insert_distance(pair, interior);
            interior
        }
    };
    interior + problem.terrain_cost(to)
}

/// Uniform-cost search over the four cardinal moves.
fn shortest_path_cost<P: TerrainProblem + ?Sized>(problem: &P, from: Point, to: Point) -> Cost {
    let mut frontier = PriorityFrontier::new();
    let mut costs = HashMap::from([(from, OrderedFloat(0.))]);
    let mut closed = HashSet::new();
    frontier.push(from, OrderedFloat(0.));

    while let Some(current) = frontier.pop() {
        if !closed.insert(current) {
            continue;
        }
        let cost = costs[&current];
        if current == to {
            trace!(%from, %to, cost = cost.into_inner(), expanded = closed.len());
            return cost;
        }
        for direction in Direction::iter() {
            let next = current.step(direction);
            if closed.contains(&next) || !problem.is_passable(next) {
                continue;
            }
            let next_cost = cost + problem.terrain_cost(next);
            if costs.get(&next).map_or(true, |&known| next_cost < known) {
                costs.insert(next, next_cost);
                frontier.update(next, next_cost);
            }
        }
    }

    trace!(%from, %to, "unreachable");
    OrderedFloat(f64::INFINITY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::problem_formulations::PositionSearchProblem;
    use crate::test_utils::*;
    use crate::world::TerrainMap;

    fn distance(problem: &mut PositionSearchProblem, from: (i32, i32), to: (i32, i32)) -> f64 {
        true_distance(problem, from.into(), to.into()).into_inner()
    }

    #[test]
    fn uniform_terrain_matches_manhattan_distance() {
        let map = TerrainMap::open(4, 3);
        let mut problem = PositionSearchProblem::new(map, Point::new(0, 0), Point::new(3, 2));
        assert_eq!(distance(&mut problem, (0, 0), (3, 2)), 5.);
        assert_eq!(distance(&mut problem, (3, 2), (0, 0)), 5.);
        assert_eq!(distance(&mut problem, (1, 1), (1, 1)), 0.);
    }

    #[test]
    fn detours_around_expensive_cells() {
        let mut problem = position_problem(WEIGHTED_MAZE_LAYOUT_TEXT);
        assert_eq!(distance(&mut problem, (1, 3), (5, 3)), 8.);
        assert_eq!(distance(&mut problem, (1, 3), (3, 3)), 10.);
        assert_eq!(distance(&mut problem, (3, 3), (1, 3)), 2.);
    }

    #[test]
    fn each_direction_pays_for_its_own_target() {
        let mut map = TerrainMap::open(3, 1);
        map.set_terrain_cost(Point::new(0, 0), OrderedFloat(5.));
        map.set_terrain_cost(Point::new(2, 0), OrderedFloat(2.));
        let mut problem = PositionSearchProblem::new(map, Point::new(0, 0), Point::new(2, 0));

        assert_eq!(distance(&mut problem, (0, 0), (2, 0)), 3.);
        assert_eq!(problem.heuristic_cache().num_distances(), 1);
        assert_eq!(distance(&mut problem, (2, 0), (0, 0)), 6.);
        assert_eq!(problem.heuristic_cache().num_distances(), 1);
        assert_eq!(problem.heuristic_cache().hits(), 1);
    }

    #[test]
    fn sealed_targets_are_infinitely_far_in_both_orderings() {
        let mut problem = position_problem(SEALED_LAYOUT_TEXT);
        let start = Point::new(1, 1);
        let survivor = Point::new(3, 1);
        assert!(true_distance(&mut problem, start, survivor)
            .into_inner()
            .is_infinite());
        assert!(true_distance(&mut problem, survivor, start)
            .into_inner()
            .is_infinite());
        assert_eq!(problem.heuristic_cache().num_distances(), 1);
        assert_eq!(problem.heuristic_cache().misses(), 1);
        assert_eq!(problem.heuristic_cache().hits(), 1);
    }

    #[test]
    fn targets_off_the_map_are_infinitely_far() {
        let map = TerrainMap::open(2, 2);
        let mut problem = PositionSearchProblem::new(map, Point::new(0, 0), Point::new(1, 1));
        assert_eq!(distance(&mut problem, (0, 0), (5, 5)), f64::INFINITY);
        assert_eq!(distance(&mut problem, (5, 5), (0, 0)), f64::INFINITY);
        assert_eq!(problem.heuristic_cache().num_distances(), 1);
    }

    #[test]
    fn cached_answers_are_identical() {
        let mut problem = survivor_problem(RUBBLE_LAYOUT_TEXT);
        let from = Point::new(1, 4);
        let to = Point::new(6, 1);
        let first = true_distance(&mut problem, from, to);
        let second = true_distance(&mut problem, from, to);
        assert_eq!(first, second);
        assert_eq!(problem.heuristic_cache().misses(), 1);

        let mut fresh = survivor_problem(RUBBLE_LAYOUT_TEXT);
        assert_eq!(true_distance(&mut fresh, from, to), first);
    }
}
