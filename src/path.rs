use fxhash::FxBuildHasher;
use grid_util::Point;
use indexmap::IndexMap;
use itertools::Itertools;

use crate::C;

pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Back-pointers from each discovered node to the node it was reached from, in discovery order.
#[derive(Clone, Debug, Default)]
pub struct Predecessors {
    map: FxIndexMap<Point, Point>,
}

impl Predecessors {
    pub fn new() -> Predecessors {
        Predecessors::default()
    }
    /// Records `from` as the predecessor of `node`, replacing any earlier one.
    pub fn insert(&mut self, node: Point, from: Point) {
        self.map.insert(node, from);
    }
    pub fn get(&self, node: &Point) -> Option<Point> {
        self.map.get(node).copied()
    }
    pub fn len(&self) -> usize {
        self.map.len()
    }
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&Point, &Point)> {
        self.map.iter()
    }

    /// Follows the back-pointers from `terminal` until a node without a predecessor is reached
    /// and returns the nodes in forward order. A terminal without an entry yields just itself.
    /// The walk is bounded by the number of entries, so a cyclic map cannot hang it.
    pub fn reconstruct(&self, terminal: Point) -> Vec<Point> {
        let mut path: Vec<Point> = std::iter::successors(Some(terminal), |p| self.get(p))
            .take(self.map.len() + 1)
            .collect();
        path.reverse();
        path
    }
}

/// Whether each consecutive pair of points is orthogonally adjacent.
pub fn is_contiguous(path: &[Point]) -> bool {
    path.iter()
        .tuple_windows()
        .all(|(a, b)| a.manhattan_distance(b) == 1)
}

/// Cost of walking the path in cost units.
pub fn path_cost(path: &[Point]) -> i32 {
    path.iter()
        .tuple_windows()
        .map(|(a, b)| a.manhattan_distance(b) * C)
        .sum()
}

/// Converts an integer cost to unit steps.
pub fn cost_to_steps(cost: i32) -> f64 {
    (cost as f64) / (C as f64)
}
