//! Minimum spanning tree lower bounds over goal sets.

use crate::search::{
    heuristics::DistanceMetric, problem_formulations::TerrainProblem, Cost, GoalSetKey,
};
use crate::world::Point;
use ordered_float::OrderedFloat;
use tracing::debug;

/// Weight of a minimum spanning tree over the complete graph on `goals`,
/// built with Prim's algorithm from the first goal. `weight(a, b)` is
/// queried with `a` already in the tree. Fewer than two goals cost 0, and
/// an infinite edge weight makes the whole tree infinite.
pub fn minimum_spanning_tree<F>(goals: &[Point], mut weight: F) -> Cost
where
    F: FnMut(Point, Point) -> Cost,
{
    let Some((&root, _)) = goals.split_first() else {
        return OrderedFloat(0.);
    };

    let mut in_tree = vec![false; goals.len()];
    in_tree[0] = true;
    // Cheapest known edge from the tree to every goal outside it.
    let mut cheapest: Vec<Cost> = goals.iter().map(|&goal| weight(root, goal)).collect();
    let mut total = OrderedFloat(0.);

    for _ in 1..goals.len() {
        let Some((next, edge)) = cheapest
            .iter()
            .enumerate()
            .filter(|&(index, _)| !in_tree[index])
            .min_by_key(|&(_, cost)| *cost)
            .map(|(index, &cost)| (index, cost))
        else {
            break;
        };
        total += edge;
        in_tree[next] = true;
        for (index, &goal) in goals.iter().enumerate() {
            if !in_tree[index] {
                cheapest[index] = cheapest[index].min(weight(goals[next], goal));
            }
        }
    }

    total
}

/// [`minimum_spanning_tree`] over the canonical form of `goals`, memoised in
/// the problem's cache per goal set and metric.
pub fn cached_spanning_tree<P>(problem: &mut P, goals: &[Point], metric: DistanceMetric) -> Cost
where
    P: TerrainProblem + ?Sized,
{
    let key = GoalSetKey::new(metric, goals);
    if let Some(cost) = problem.heuristic_cache().spanning_tree(&key) {
        return cost;
    }
    let cost = minimum_spanning_tree(key.goals(), |a, b| metric.edge_weight(problem, a, b));
    debug!(goals = key.goals().len(), ?metric, cost = cost.into_inner(), "spanning tree");
    problem.heuristic_cache().insert_spanning_tree(key, cost);
    cost
}
