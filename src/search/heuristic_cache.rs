//! Memoisation shared by the heuristics evaluated against one problem
//! instance. The cache never changes a returned value, only how often it is
//! recomputed, and it is never evicted.

use crate::search::{heuristics::DistanceMetric, Cost};
use crate::world::Point;
use itertools::Itertools;
use smallvec::SmallVec;
use std::collections::HashMap;

/// An unordered pair of points: `PointPair::new(a, b) == PointPair::new(b, a)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointPair {
    low: Point,
    high: Point,
}

impl PointPair {
    pub fn new(a: Point, b: Point) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    pub fn low(&self) -> Point {
        self.low
    }

    pub fn high(&self) -> Point {
        self.high
    }
}

/// A goal set in canonical form (sorted, deduplicated) together with the
/// metric its spanning tree was measured in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GoalSetKey {
    metric: DistanceMetric,
    goals: SmallVec<[Point; 8]>,
}

impl GoalSetKey {
    pub fn new(metric: DistanceMetric, goals: &[Point]) -> Self {
        Self {
            metric,
            goals: goals.iter().copied().sorted().dedup().collect(),
        }
    }

    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    pub fn goals(&self) -> &[Point] {
        &self.goals
    }
}

#[derive(Debug, Default)]
pub struct HeuristicCache {
    distances: HashMap<PointPair, Cost>,
    spanning_trees: HashMap<GoalSetKey, Cost>,
    hits: usize,
    misses: usize,
}

impl HeuristicCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn distance(&mut self, pair: &PointPair) -> Option<Cost> {
        let value = self.distances.get(pair).copied();
        self.record(value.is_some());
        value
    }

    pub fn insert_distance(&mut self, pair: PointPair, cost: Cost) {
        self.distances.insert(pair, cost);
    }

    pub fn spanning_tree(&mut self, key: &GoalSetKey) -> Option<Cost> {
        let value = self.spanning_trees.get(key).copied();
        self.record(value.is_some());
        value
    }

    pub fn insert_spanning_tree(&mut self, key: GoalSetKey, cost: Cost) {
        self.spanning_trees.insert(key, cost);
    }

    fn record(&mut self, hit: bool) {
        if hit {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
    }

    pub fn num_distances(&self) -> usize {
        self.distances.len()
    }

    pub fn num_spanning_trees(&self) -> usize {
        self.spanning_trees.len()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }
}
