use grid_util::Point;

use crate::C;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Distance estimators used to order informed search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Heuristic {
    Manhattan,
    #[default]
    Euclidean,
    /// Overestimates the remaining cost, so A* loses its optimality guarantee with it.
    SquaredEuclidean,
    Zero,
}

impl Heuristic {
    /// Distance in unit steps.
    pub fn distance(self, p1: &Point, p2: &Point) -> f64 {
        let dx = (p1.x - p2.x) as f64;
        let dy = (p1.y - p2.y) as f64;
        match self {
            Heuristic::Manhattan => dx.abs() + dy.abs(),
            Heuristic::Euclidean => (dx * dx + dy * dy).sqrt(),
            Heuristic::SquaredEuclidean => dx * dx + dy * dy,
            Heuristic::Zero => 0.0,
        }
    }

    /// Distance in integer cost units. Rounds down, which keeps admissible estimators admissible.
    pub fn estimate(self, p1: &Point, p2: &Point) -> i32 {
        match self {
            Heuristic::Manhattan => ((p1.x - p2.x).abs() + (p1.y - p2.y).abs()) * C,
            Heuristic::Zero => 0,
            _ => (self.distance(p1, p2) * C as f64).floor() as i32,
        }
    }

    /// Whether the estimate never exceeds the true remaining cost on a 4-connected grid.
    pub fn is_admissible(self) -> bool {
        !matches!(self, Heuristic::SquaredEuclidean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        let a = Point::new(0, 0);
        let b = Point::new(3, 4);
        assert_eq!(Heuristic::Manhattan.distance(&a, &b), 7.0);
        assert_eq!(Heuristic::Euclidean.distance(&a, &b), 5.0);
        assert_eq!(Heuristic::SquaredEuclidean.distance(&a, &b), 25.0);
        assert_eq!(Heuristic::Zero.distance(&a, &b), 0.0);
    }

    #[test]
    fn estimates_are_in_cost_units() {
        let a = Point::new(0, 0);
        let b = Point::new(1, 1);
        assert_eq!(Heuristic::Manhattan.estimate(&a, &b), 2 * C);
        // sqrt(2) * 100 = 141.42..
        assert_eq!(Heuristic::Euclidean.estimate(&a, &b), 141);
        assert_eq!(Heuristic::Zero.estimate(&a, &b), 0);
    }

    /// Admissible estimators never exceed the Manhattan distance, which is the true cost on an
    /// empty 4-connected grid.
    #[test]
    fn admissible_estimators_stay_below_manhattan() {
        let goal = Point::new(4, 2);
        for x in -5..10 {
            for y in -5..10 {
                let p = Point::new(x, y);
                let bound = Heuristic::Manhattan.estimate(&p, &goal);
                for h in [Heuristic::Manhattan, Heuristic::Euclidean, Heuristic::Zero] {
                    assert!(h.is_admissible());
                    assert!(h.estimate(&p, &goal) <= bound);
                }
            }
        }
        assert!(!Heuristic::SquaredEuclidean.is_admissible());
    }
}
