//! The graph search loop shared by every traversal strategy.

use crate::search::{
    search_engines::{
        DuplicatePolicy, GoalTest, NodeId, SearchLimits, SearchNodeStatus, SearchResult,
        SearchSpace, SearchStatistics, SearchStrategy, TerminationCondition,
    },
    Heuristic, HeuristicValue, SearchProblem, Successor,
};
use ordered_float::OrderedFloat;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphSearch {
    strategy: SearchStrategy,
    limits: SearchLimits,
}

impl GraphSearch {
    pub fn new(strategy: SearchStrategy, limits: SearchLimits) -> Self {
        Self { strategy, limits }
    }

    pub fn depth_first() -> Self {
        Self::new(SearchStrategy::DEPTH_FIRST, SearchLimits::default())
    }

    pub fn breadth_first() -> Self {
        Self::new(SearchStrategy::BREADTH_FIRST, SearchLimits::default())
    }

    pub fn uniform_cost() -> Self {
        Self::new(SearchStrategy::UNIFORM_COST, SearchLimits::default())
    }

    pub fn astar() -> Self {
        Self::new(SearchStrategy::ASTAR, SearchLimits::default())
    }

    pub fn with_limits(self, limits: SearchLimits) -> Self {
        Self { limits, ..self }
    }

    pub fn strategy(&self) -> SearchStrategy {
        self.strategy
    }

    fn evaluate<P, H>(
        &self,
        heuristic: &mut H,
        state: &P::State,
        problem: &mut P,
        statistics: &mut SearchStatistics,
    ) -> HeuristicValue
    where
        P: SearchProblem,
        H: Heuristic<P> + ?Sized,
    {
        if !self.strategy.informed {
            return OrderedFloat(0.);
        }
        statistics.increment_evaluated_nodes();
        heuristic.evaluate(state, problem)
    }

    /// Search `problem` for a path from its initial state to a goal. The
    /// heuristic is only consulted by informed strategies.
    pub fn search<P, H>(
        &self,
        problem: &mut P,
        heuristic: &mut H,
    ) -> (SearchResult<P::Action>, SearchStatistics)
    where
        P: SearchProblem,
        H: Heuristic<P> + ?Sized,
    {
        let mut statistics = SearchStatistics::new();
        let mut termination = TerminationCondition::new(self.limits);
        let mut frontier = self.strategy.frontier.create::<NodeId>();

        let initial_state = problem.initial_state();
        let mut search_space = SearchSpace::new(initial_state.clone());
        let root_id = search_space.get_root_node_id();
        let root_h = self.evaluate(heuristic, &initial_state, problem, &mut statistics);
        info!(initial_heuristic_value = root_h.into_inner());

        let root_node = search_space.get_node_mut(root_id);
        root_node.open(OrderedFloat(0.), root_h);
        frontier.push(root_id, root_node.get_f());

        if self.strategy.goal_test == GoalTest::OnGeneration && problem.is_goal(&initial_state) {
            return finish(SearchResult::Success(vec![]), statistics, termination);
        }

        while let Some(node_id) = frontier.pop() {
            termination.log_if_needed();

            let node = search_space.get_node(node_id);
            if node.get_status() == SearchNodeStatus::Closed {
                continue;
            }
            let g_value = node.get_g();
            let state = search_space.get_state(node_id).clone();

            if self.strategy.goal_test == GoalTest::OnExpansion && problem.is_goal(&state) {
                let plan = search_space.extract_plan(node_id);
                debug!(plan_length = plan.len(), plan_cost = g_value.into_inner());
                return finish(SearchResult::Success(plan), statistics, termination);
            }

            // Limits bound expansions, a goal found on the pop is still
            // returned.
            if let Some(result) = termination.should_terminate(statistics.expanded_nodes()) {
                return finish(result, statistics, termination);
            }

            search_space.get_node_mut(node_id).close();
            statistics.increment_expanded_nodes();

            let successors = problem.successors(&state);
            statistics.increment_generated_nodes(successors.len());

            for Successor {
                state: child_state,
                action,
                cost,
            } in successors
            {
                debug_assert!(cost >= OrderedFloat(0.), "Step costs must be non-negative");
                let child_g = g_value + cost;

                match self.strategy.duplicates {
                    DuplicatePolicy::FirstDiscovery => {
                        if search_space.contains(&child_state) {
                            continue;
                        }
                        let is_goal = self.strategy.goal_test == GoalTest::OnGeneration
                            && problem.is_goal(&child_state);
                        let child_id = search_space.insert_node(child_state, node_id, action);
                        search_space
                            .get_node_mut(child_id)
                            .open(child_g, OrderedFloat(0.));
                        if is_goal {
                            let plan = search_space.extract_plan(child_id);
                            debug!(plan_length = plan.len(), plan_cost = child_g.into_inner());
                            return finish(SearchResult::Success(plan), statistics, termination);
                        }
                        frontier.push(child_id, child_g);
                    }
                    DuplicatePolicy::BestCost => {
                        let child_id = match search_space.lookup(&child_state) {
                            Some(child_id) => {
                                let child_node = search_space.get_node_mut(child_id);
                                if child_node.get_status() != SearchNodeStatus::Open
                                    || child_g >= child_node.get_g()
                                {
                                    continue;
                                }
                                // The stored heuristic value is reused, it
                                // does not depend on the path.
                                child_node.improve(child_g, node_id, action);
                                statistics.increment_improved_nodes();
                                child_id
                            }
                            None => {
                                let h_value = self.evaluate(
                                    heuristic,
                                    &child_state,
                                    problem,
                                    &mut statistics,
                                );
                                let child_id =
                                    search_space.insert_node(child_state, node_id, action);
                                let child_node = search_space.get_node_mut(child_id);
                                if h_value.into_inner().is_infinite() {
                                    child_node.mark_as_deadend();
                                    statistics.increment_deadend_nodes();
                                    continue;
                                }
                                child_node.open(child_g, h_value);
                                child_id
                            }
                        };
                        frontier.update(child_id, search_space.get_node(child_id).get_f());
                    }
                }
            }
        }

        finish(SearchResult::ProvablyUnsolvable, statistics, termination)
    }
}

fn finish<A>(
    result: SearchResult<A>,
    mut statistics: SearchStatistics,
    mut termination: TerminationCondition,
) -> (SearchResult<A>, SearchStatistics) {
    statistics.finalise_search();
    termination.finalise();
    if !result.is_success() {
        info!("search ended without a plan");
    }
    (result, statistics)
}
