use crate::search::{
    problem_formulations::{MultiGoalProblem, SearchProblem, Successor, TerrainProblem},
    Cost, HeuristicCache,
};
use crate::world::{Direction, Layout, Point, TerrainMap};
use itertools::Itertools;
use smallvec::SmallVec;

/// The agent position together with the survivors not rescued yet. The
/// survivors are kept sorted and deduplicated so equal sets compare and
/// hash equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SurvivorState {
    position: Point,
    remaining: SmallVec<[Point; 8]>,
}

impl SurvivorState {
    pub fn new(position: Point, survivors: impl IntoIterator<Item = Point>) -> Self {
        Self {
            position,
            remaining: survivors.into_iter().sorted().dedup().collect(),
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn remaining(&self) -> &[Point] {
        &self.remaining
    }

    pub fn is_complete(&self) -> bool {
        self.remaining.is_empty()
    }

    /// The state after the agent steps onto `position`, rescuing the
    /// survivor there if any.
    pub fn moved_to(&self, position: Point) -> Self {
        let mut remaining = self.remaining.clone();
        if let Ok(index) = remaining.binary_search(&position) {
            remaining.remove(index);
        }
        Self {
            position,
            remaining,
        }
    }
}

/// Visit every survivor on the map. A survivor on the start cell counts as
/// rescued from the outset.
#[derive(Debug)]
pub struct MultiSurvivorProblem {
    map: TerrainMap,
    start: SurvivorState,
    heuristic_cache: HeuristicCache,
}

impl MultiSurvivorProblem {
    pub fn new(map: TerrainMap, start: Point, survivors: impl IntoIterator<Item = Point>) -> Self {
        Self::from_state(map, SurvivorState::new(start, survivors).moved_to(start))
    }

    pub fn from_state(map: TerrainMap, start: SurvivorState) -> Self {
        Self {
            map,
            start,
            heuristic_cache: HeuristicCache::new(),
        }
    }

    pub fn from_layout(layout: &Layout) -> Self {
        Self::new(
            layout.map.clone(),
            layout.start,
            layout.survivors.iter().copied(),
        )
    }

    /// The same map starting from another state, with an empty cache.
    pub fn with_initial_state(&self, start: SurvivorState) -> Self {
        Self::from_state(self.map.clone(), start)
    }

    pub fn map(&self) -> &TerrainMap {
        &self.map
    }
}

impl SearchProblem for MultiSurvivorProblem {
    type State = SurvivorState;
    type Action = Direction;

    fn initial_state(&self) -> SurvivorState {
        self.start.clone()
    }

    fn is_goal(&self, state: &SurvivorState) -> bool {
        state.is_complete()
    }

    fn successors(&self, state: &SurvivorState) -> Vec<Successor<SurvivorState, Direction>> {
        self.map
            .neighbours(state.position)
            .map(|(direction, next)| {
                Successor::new(
                    state.moved_to(next),
                    direction,
                    self.map.terrain_cost(next),
                )
            })
            .collect()
    }
}

impl TerrainProblem for MultiSurvivorProblem {
    fn is_passable(&self, point: Point) -> bool {
        self.map.is_passable(point)
    }

    fn terrain_cost(&self, point: Point) -> Cost {
        self.map.terrain_cost(point)
    }

    fn heuristic_cache(&mut self) -> &mut HeuristicCache {
        &mut self.heuristic_cache
    }
}

impl MultiGoalProblem for MultiSurvivorProblem {
    fn split_state<'a>(&self, state: &'a SurvivorState) -> (Point, &'a [Point]) {
        (state.position, &state.remaining)
    }
}
