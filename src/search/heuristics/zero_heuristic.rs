use crate::search::{Heuristic, HeuristicValue, SearchProblem};

/// Always 0. A* with this heuristic expands like uniform-cost search.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroHeuristic {}

impl ZeroHeuristic {
    pub fn new() -> Self {
        ZeroHeuristic {}
    }
}

impl<P: SearchProblem> Heuristic<P> for ZeroHeuristic {
    fn evaluate(&mut self, _state: &P::State, _problem: &mut P) -> HeuristicValue {
        (0.).into()
    }
}
