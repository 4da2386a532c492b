use crate::search::{
    problem_formulations::{PointGoalProblem, SearchProblem, Successor, TerrainProblem},
    Cost, HeuristicCache,
};
use crate::world::{Direction, Layout, LayoutError, Point, TerrainMap};

/// Reach a single goal cell. Each step costs the terrain cost of the cell
/// it enters.
#[derive(Debug)]
pub struct PositionSearchProblem {
    map: TerrainMap,
    start: Point,
    goal: Point,
    heuristic_cache: HeuristicCache,
}

impl PositionSearchProblem {
    pub fn new(map: TerrainMap, start: Point, goal: Point) -> Self {
        Self {
            map,
            start,
            goal,
            heuristic_cache: HeuristicCache::new(),
        }
    }

    /// Uses the first survivor of the layout as the goal.
    pub fn from_layout(layout: &Layout) -> Result<Self, LayoutError> {
        let goal = *layout
            .survivors
            .first()
            .ok_or(LayoutError::MissingSurvivor)?;
        Ok(Self::new(layout.map.clone(), layout.start, goal))
    }

    /// The same map and goal with another start and an empty cache.
    pub fn with_start(&self, start: Point) -> Self {
        Self::new(self.map.clone(), start, self.goal)
    }

    pub fn map(&self) -> &TerrainMap {
        &self.map
    }
}

impl SearchProblem for PositionSearchProblem {
    type State = Point;
    type Action = Direction;

    fn initial_state(&self) -> Point {
        self.start
    }

    fn is_goal(&self, state: &Point) -> bool {
        *state == self.goal
    }

    fn successors(&self, state: &Point) -> Vec<Successor<Point, Direction>> {
        self.map
            .neighbours(*state)
            .map(|(direction, next)| Successor::new(next, direction, self.map.terrain_cost(next)))
            .collect()
    }
}

impl TerrainProblem for PositionSearchProblem {
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

impl PointGoalProblem for PositionSearchProblem {
    fn goal(&self) -> Point {
        self.goal
    }

    fn position(&self, state: &Point) -> Point {
        *state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use ordered_float::OrderedFloat;

    #[test]
    fn successors_pay_for_the_entered_cell() {
        let problem = position_problem(WEIGHTED_MAZE_LAYOUT_TEXT);
        assert_eq!(problem.initial_state(), Point::new(1, 3));
        assert_eq!(problem.goal(), Point::new(5, 3));

        let successors = problem.successors(&Point::new(2, 3));
        assert_eq!(
            successors,
            vec![
                Successor::new(Point::new(3, 3), Direction::East, OrderedFloat(9.)),
                Successor::new(Point::new(1, 3), Direction::West, OrderedFloat(1.)),
            ]
        );
    }

    #[test]
    fn layouts_without_survivors_have_no_goal() {
        let layout = Layout::from_text("P..").unwrap();
        assert!(matches!(
            PositionSearchProblem::from_layout(&layout),
            Err(LayoutError::MissingSurvivor)
        ));
    }
}
