use crate::search::Cost;
use crate::world::{Direction, Point};
use ordered_float::OrderedFloat;
use strum::IntoEnumIterator;

/// Walls and per-cell entry costs of a rectangular grid. Anything outside
/// the rectangle behaves like a wall.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainMap {
    width: usize,
    height: usize,
    walls: Vec<bool>,
    costs: Vec<Cost>,
}

impl TerrainMap {
    /// A map without walls where every cell costs 1 to enter.
    pub fn open(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            walls: vec![false; width * height],
            costs: vec![OrderedFloat(1.); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, point: Point) -> Option<usize> {
        let x = usize::try_from(point.x).ok()?;
        let y = usize::try_from(point.y).ok()?;
        (x < self.width && y < self.height).then_some(y * self.width + x)
    }

    pub fn contains(&self, point: Point) -> bool {
        self.index(point).is_some()
    }

    pub fn is_wall(&self, point: Point) -> bool {
        self.index(point).map_or(true, |index| self.walls[index])
    }

    pub fn is_passable(&self, point: Point) -> bool {
        !self.is_wall(point)
    }

    /// # Panics
    ///
    /// Panics if the point lies outside the map.
    pub fn set_wall(&mut self, point: Point, wall: bool) {
        let index = self.index(point).expect("point outside the map");
        self.walls[index] = wall;
    }

    /// Cost of stepping onto `point`. Cells outside the map cannot be
    /// entered and report an infinite cost.
    pub fn terrain_cost(&self, point: Point) -> Cost {
        self.index(point)
            .map_or(OrderedFloat(f64::INFINITY), |index| self.costs[index])
    }

    /// # Panics
    ///
    /// Panics if the point lies outside the map or the cost is negative.
    pub fn set_terrain_cost(&mut self, point: Point, cost: Cost) {
        assert!(cost >= OrderedFloat(0.), "terrain costs must be non-negative");
        let index = self.index(point).expect("point outside the map");
        self.costs[index] = cost;
    }

    /// The passable cells next to `point`, in [`Direction`] order.
    pub fn neighbours(&self, point: Point) -> impl Iterator<Item = (Direction, Point)> + '_ {
        Direction::iter()
            .map(move |direction| (direction, point.step(direction)))
            .filter(|&(_, next)| self.is_passable(next))
    }

    /// The cheapest entry cost of any passable cell.
    pub fn min_terrain_cost(&self) -> Option<Cost> {
        self.walls
            .iter()
            .zip(self.costs.iter())
            .filter(|(&wall, _)| !wall)
            .map(|(_, &cost)| cost)
            .min()
    }

    /// Whether every passable cell costs the same to enter.
    pub fn is_uniform(&self) -> bool {
        let mut costs = self
            .walls
            .iter()
            .zip(self.costs.iter())
            .filter(|(&wall, _)| !wall)
            .map(|(_, &cost)| cost);
        match costs.next() {
            Some(first) => costs.all(|cost| cost == first),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outside_the_map_is_a_wall() {
        let map = TerrainMap::open(2, 2);
        assert!(map.is_passable(Point::new(1, 1)));
        assert!(map.is_wall(Point::new(-1, 0)));
        assert!(map.is_wall(Point::new(2, 0)));
        assert!(map.is_wall(Point::new(0, 2)));
        assert_eq!(map.terrain_cost(Point::new(5, 5)), OrderedFloat(f64::INFINITY));
    }

    #[test]
    fn neighbours_skip_walls() {
        let mut map = TerrainMap::open(3, 3);
        map.set_wall(Point::new(1, 2), true);
        let neighbours: Vec<_> = map.neighbours(Point::new(1, 1)).collect();
        assert_eq!(
            neighbours,
            vec![
                (Direction::South, Point::new(1, 0)),
                (Direction::East, Point::new(2, 1)),
                (Direction::West, Point::new(0, 1)),
            ]
        );
    }

    #[test]
    fn uniformity_ignores_walls() {
        let mut map = TerrainMap::open(2, 1);
        assert!(map.is_uniform());
        map.set_wall(Point::new(0, 0), true);
        map.set_terrain_cost(Point::new(0, 0), OrderedFloat(7.));
        assert!(map.is_uniform());
        map.set_wall(Point::new(0, 0), false);
        assert!(!map.is_uniform());
        assert_eq!(map.min_terrain_cost(), Some(OrderedFloat(1.)));
    }
}
