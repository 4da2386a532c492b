use crate::search::{
    problem_formulations::{MultiSurvivorProblem, PositionSearchProblem},
    Cost, SearchProblem,
};
use crate::world::Layout;
use ordered_float::OrderedFloat;
use std::collections::{HashMap, HashSet, VecDeque};

pub const CORRIDOR_LAYOUT_TEXT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/layouts/corridor.lay"));

pub const BRANCHING_LAYOUT_TEXT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/layouts/branching.lay"));

pub const WEIGHTED_MAZE_LAYOUT_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/layouts/weighted_maze.lay"
));

pub const RUBBLE_LAYOUT_TEXT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/layouts/rubble.lay"));

pub const OPEN_FIELD_LAYOUT_TEXT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/layouts/open_field.lay"));

pub const SEALED_LAYOUT_TEXT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/layouts/sealed.lay"));

pub fn position_problem(text: &str) -> PositionSearchProblem {
    let layout = Layout::from_text(text).expect("test layout should parse");
    PositionSearchProblem::from_layout(&layout).expect("test layout should have a survivor")
}

pub fn survivor_problem(text: &str) -> MultiSurvivorProblem {
    let layout = Layout::from_text(text).expect("test layout should parse");
    MultiSurvivorProblem::from_layout(&layout)
}

/// Every state reachable from the initial state, in breadth-first order.
pub fn reachable_states<P: SearchProblem>(problem: &P) -> Vec<P::State> {
    let initial_state = problem.initial_state();
    let mut seen = HashSet::from([initial_state.clone()]);
    let mut queue = VecDeque::from([initial_state]);
    let mut states = vec![];
    while let Some(state) = queue.pop_front() {
        for successor in problem.successors(&state) {
            if seen.insert(successor.state.clone()) {
                queue.push_back(successor.state);
            }
        }
        states.push(state);
    }
    states
}

/// Optimal plan cost, `None` if no goal is reachable. Relaxes every edge of
/// the reachable graph until no cost changes, so it shares no code with the
/// search engines.
pub fn optimal_cost<P: SearchProblem>(problem: &P) -> Option<Cost> {
    let states = reachable_states(problem);
    let edges: Vec<_> = states
        .iter()
        .flat_map(|state| {
            problem
                .successors(state)
                .into_iter()
                .map(move |successor| (state.clone(), successor.state, successor.cost))
        })
        .collect();

    let mut costs = HashMap::from([(problem.initial_state(), OrderedFloat(0.))]);
    let mut changed = true;
    while changed {
        changed = false;
        for (from, to, cost) in &edges {
            let Some(&from_cost) = costs.get(from) else {
                continue;
            };
            let candidate = from_cost + *cost;
            if costs.get(to).map_or(true, |&known| candidate < known) {
                costs.insert(to.clone(), candidate);
                changed = true;
            }
        }
    }

    costs
        .into_iter()
        .filter(|(state, _)| problem.is_goal(state))
        .map(|(_, cost)| cost)
        .min()
}
