//! Replays a plan through a problem's successor function.

use crate::search::{Cost, SearchProblem};
use ordered_float::OrderedFloat;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("step {step}: action {action} is not applicable in state {state}")]
    InapplicableAction {
        step: usize,
        action: String,
        state: String,
    },
    #[error("plan does not reach a goal state, final state is {0}")]
    GoalNotReached(String),
}

/// Apply `plan` from the initial state and return its total cost. When an
/// action labels several successors the cheapest one is taken.
pub fn validate<P: SearchProblem>(problem: &P, plan: &[P::Action]) -> Result<Cost, PlanError> {
    let mut state = problem.initial_state();
    let mut total = OrderedFloat(0.);

    for (step, action) in plan.iter().enumerate() {
        let successor = problem
            .successors(&state)
            .into_iter()
            .filter(|successor| successor.action == *action)
            .min_by_key(|successor| successor.cost)
            .ok_or_else(|| PlanError::InapplicableAction {
                step,
                action: format!("{:?}", action),
                state: format!("{:?}", state),
            })?;
        total += successor.cost;
        state = successor.state;
    }

    if !problem.is_goal(&state) {
        return Err(PlanError::GoalNotReached(format!("{:?}", state)));
    }
    Ok(total)
}
