use crate::search::{
    heuristics::{cached_spanning_tree, DistanceMetric},
    problem_formulations::MultiGoalProblem,
    Heuristic, HeuristicValue,
};
use ordered_float::OrderedFloat;

/// Lower bound for visiting every remaining goal: the distance to the
/// nearest one plus a minimum spanning tree over all of them. The agent has
/// to reach some goal first and then connect the rest, and neither leg is
/// overestimated by the metric.
///
/// With [`DistanceMetric::Grid`] the bound is only admissible if every cell
/// costs at least 1 to enter; [`DistanceMetric::TrueDistance`] is exact on
/// any terrain. See [`DistanceMetric::preferred_for`].
#[derive(Debug, Clone, Copy)]
pub struct SurvivorHeuristic {
    metric: DistanceMetric,
}

impl SurvivorHeuristic {
    pub fn new(metric: DistanceMetric) -> Self {
        Self { metric }
    }

    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }
}

impl<P: MultiGoalProblem> Heuristic<P> for SurvivorHeuristic {
    fn evaluate(&mut self, state: &P::State, problem: &mut P) -> HeuristicValue {
        let (position, remaining) = problem.split_state(state);
        if remaining.is_empty() {
            return OrderedFloat(0.);
        }
        let nearest = remaining
            .iter()
            .map(|&goal| self.metric.distance(problem, position, goal))
            .min()
            .unwrap_or(OrderedFloat(f64::INFINITY));
        nearest + cached_spanning_tree(problem, remaining, self.metric)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{
        problem_formulations::{MultiSurvivorProblem, SurvivorState, TerrainProblem},
        search_engines::{GraphSearch, SearchResult},
        validate, SearchProblem,
    };
    use crate::test_utils::*;
    use crate::world::{Point, TerrainMap};

    const METRICS: [DistanceMetric; 2] = [DistanceMetric::Grid, DistanceMetric::TrueDistance];

    #[test]
    fn two_by_two_scenario() {
        let goals = [Point::new(0, 0), Point::new(1, 1)];
        let state = SurvivorState::new(Point::new(0, 0), goals);
        for metric in METRICS {
            let mut problem = MultiSurvivorProblem::new(TerrainMap::open(2, 2), goals[0], goals);
            let mut heuristic = SurvivorHeuristic::new(metric);
            assert_eq!(heuristic.evaluate(&state, &mut problem), OrderedFloat(2.));
            // The start survivor is rescued, one survivor two steps away.
            let initial_state = problem.initial_state();
            assert_eq!(
                heuristic.evaluate(&initial_state, &mut problem),
                OrderedFloat(2.)
            );
        }
    }

    #[test]
    fn completed_states_are_free() {
        let mut problem = survivor_problem(RUBBLE_LAYOUT_TEXT);
        let done = SurvivorState::new(Point::new(3, 2), Vec::new());
        for metric in METRICS {
            assert_eq!(
                SurvivorHeuristic::new(metric).evaluate(&done, &mut problem),
                OrderedFloat(0.)
            );
        }
    }

    #[test]
    fn admissible_against_exhaustive_ground_truth() {
        let problem = survivor_problem(RUBBLE_LAYOUT_TEXT);
        let ground_truth: Vec<_> = reachable_states(&problem)
            .into_iter()
            .map(|state| {
                let optimal = optimal_cost(&problem.with_initial_state(state.clone()));
                (state, optimal.expect("rubble is solvable"))
            })
            .collect();

        for metric in METRICS {
            let mut heuristic = SurvivorHeuristic::new(metric);
            let mut problem = survivor_problem(RUBBLE_LAYOUT_TEXT);
            for (state, optimal) in &ground_truth {
                let estimate = heuristic.evaluate(state, &mut problem);
                assert!(
                    estimate <= *optimal,
                    "{:?}: h({:?}) = {} > {}",
                    metric,
                    state,
                    estimate,
                    optimal
                );
            }
        }
    }

    #[test]
    fn consistent_under_both_metrics() {
        for layout in [RUBBLE_LAYOUT_TEXT, OPEN_FIELD_LAYOUT_TEXT] {
            for metric in METRICS {
                let mut problem = survivor_problem(layout);
                let mut heuristic = SurvivorHeuristic::new(metric);
                for state in reachable_states(&problem) {
                    let h = heuristic.evaluate(&state, &mut problem);
                    for successor in problem.successors(&state) {
                        let h_next = heuristic.evaluate(&successor.state, &mut problem);
                        assert!(
                            h <= successor.cost + h_next,
                            "{:?}: {:?} -> {:?}",
                            metric,
                            state,
                            successor
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn grid_is_the_preferred_metric_on_the_open_field() {
        let problem = survivor_problem(OPEN_FIELD_LAYOUT_TEXT);
        assert_eq!(
            DistanceMetric::preferred_for(problem.map()),
            DistanceMetric::Grid
        );
    }

    #[test]
    fn true_distance_dominates_grid_on_rough_terrain() {
        let mut problem = survivor_problem(RUBBLE_LAYOUT_TEXT);
        let mut grid = SurvivorHeuristic::new(DistanceMetric::Grid);
        let mut exact = SurvivorHeuristic::new(DistanceMetric::TrueDistance);
        let initial_state = problem.initial_state();
        let grid_value = grid.evaluate(&initial_state, &mut problem);
        let exact_value = exact.evaluate(&initial_state, &mut problem);
        assert!(grid_value < exact_value);
        for state in reachable_states(&problem) {
            assert!(grid.evaluate(&state, &mut problem) <= exact.evaluate(&state, &mut problem));
        }
    }

    #[test]
    fn astar_plans_are_optimal() {
        let expected = optimal_cost(&survivor_problem(RUBBLE_LAYOUT_TEXT));
        for metric in METRICS {
            let mut problem = survivor_problem(RUBBLE_LAYOUT_TEXT);
            let (result, statistics) =
                GraphSearch::astar().search(&mut problem, &mut SurvivorHeuristic::new(metric));
            let plan = result.plan().expect("rubble is solvable").to_vec();
            assert_eq!(validate(&problem, &plan).ok(), expected);
            assert!(statistics.evaluated_nodes() > 0);
        }
    }

    #[test]
    fn survivors_off_the_map_prune_every_successor() {
        let mut problem = MultiSurvivorProblem::new(
            TerrainMap::open(2, 2),
            Point::new(0, 0),
            [Point::new(5, 5)],
        );
        let mut heuristic = SurvivorHeuristic::new(DistanceMetric::TrueDistance);
        let initial_state = problem.initial_state();
        assert_eq!(
            heuristic.evaluate(&initial_state, &mut problem),
            OrderedFloat(f64::INFINITY)
        );

        let (result, statistics) = GraphSearch::astar().search(&mut problem, &mut heuristic);
        assert_eq!(result, SearchResult::ProvablyUnsolvable);
        assert_eq!(statistics.expanded_nodes(), 1);
        assert_eq!(statistics.deadend_nodes(), 2);
    }

    #[test]
    fn cache_does_not_change_search_cost() {
        let mut warm = survivor_problem(RUBBLE_LAYOUT_TEXT);
        let mut heuristic = SurvivorHeuristic::new(DistanceMetric::TrueDistance);
        let first = GraphSearch::astar().search(&mut warm, &mut heuristic).0;
        let filled = warm.heuristic_cache().num_distances();
        let second = GraphSearch::astar().search(&mut warm, &mut heuristic).0;
        assert_eq!(warm.heuristic_cache().num_distances(), filled);

        let first_cost = validate(&warm, first.plan().unwrap_or_default());
        let second_cost = validate(&warm, second.plan().unwrap_or_default());
        assert!(first_cost.is_ok());
        assert_eq!(first_cost, second_cost);
    }
}
