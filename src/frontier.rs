//! Frontier containers for the search loop. Breadth-first pops in insertion order, depth-first
//! in reverse insertion order, and the cost-based strategies pop the smallest estimated total
//! cost first.
use grid_util::Point;
use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

/// A node waiting in a priority frontier together with its cost bookkeeping.
#[derive(Clone, Copy, Debug)]
pub struct FrontierEntry<K> {
    /// fScore: gScore plus the heuristic estimate to the end.
    pub estimated_cost: K,
    /// gScore at the time the entry was pushed.
    pub cost: K,
    pub point: Point,
    seq: usize,
}

impl<K: Zero> FrontierEntry<K> {
    /// The entry for the start node, which has no accumulated cost.
    pub fn root(point: Point) -> FrontierEntry<K> {
        FrontierEntry {
            estimated_cost: Zero::zero(),
            cost: Zero::zero(),
            point,
            seq: 0,
        }
    }
}

impl<K: PartialEq> Eq for FrontierEntry<K> {}

impl<K: PartialEq> PartialEq for FrontierEntry<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost)
            && self.cost.eq(&other.cost)
            && self.seq == other.seq
    }
}

impl<K: Ord> PartialOrd for FrontierEntry<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for FrontierEntry<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: smallest estimated cost first, then the largest cost
        // (deepest node), then the earliest pushed entry.
        other
            .estimated_cost
            .cmp(&self.estimated_cost)
            .then_with(|| self.cost.cmp(&other.cost))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

#[derive(Clone, Debug)]
pub enum Frontier {
    Queue(VecDeque<Point>),
    Stack(Vec<Point>),
    Priority {
        heap: BinaryHeap<FrontierEntry<i32>>,
        next_seq: usize,
    },
}

impl Frontier {
    pub fn queue() -> Frontier {
        Frontier::Queue(VecDeque::new())
    }
    pub fn stack() -> Frontier {
        Frontier::Stack(Vec::new())
    }
    pub fn priority() -> Frontier {
        Frontier::Priority {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Seeds an empty frontier with the start node.
    pub fn push_root(&mut self, point: Point) {
        match self {
            Frontier::Priority { heap, next_seq } => {
                heap.push(FrontierEntry::root(point));
                *next_seq = (*next_seq).max(1);
            }
            _ => self.push(point, 0, 0),
        }
    }

    /// Pushes a node. The costs are only kept by the priority frontier.
    pub fn push(&mut self, point: Point, cost: i32, estimated_cost: i32) {
        match self {
            Frontier::Queue(queue) => queue.push_back(point),
            Frontier::Stack(stack) => stack.push(point),
            Frontier::Priority { heap, next_seq } => {
                heap.push(FrontierEntry {
                    estimated_cost,
                    cost,
                    point,
                    seq: *next_seq,
                });
                *next_seq += 1;
            }
        }
    }

    /// Removes the next node along with the gScore it was pushed with (zero for the
    /// unweighted frontiers).
    pub fn pop(&mut self) -> Option<(Point, i32)> {
        match self {
            Frontier::Queue(queue) => queue.pop_front().map(|p| (p, 0)),
            Frontier::Stack(stack) => stack.pop().map(|p| (p, 0)),
            Frontier::Priority { heap, .. } => heap.pop().map(|e| (e.point, e.cost)),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Frontier::Queue(queue) => queue.len(),
            Frontier::Stack(stack) => stack.len(),
            Frontier::Priority { heap, .. } => heap.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(mut frontier: Frontier) -> Vec<Point> {
        let mut out = vec![];
        while let Some((p, _)) = frontier.pop() {
            out.push(p);
        }
        out
    }

    #[test]
    fn queue_is_fifo_and_stack_is_lifo() {
        let points = [Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)];
        let mut queue = Frontier::queue();
        let mut stack = Frontier::stack();
        for p in points {
            queue.push(p, 0, 0);
            stack.push(p, 0, 0);
        }
        assert_eq!(drain(queue), points.to_vec());
        let mut reversed = points.to_vec();
        reversed.reverse();
        assert_eq!(drain(stack), reversed);
    }

    #[test]
    fn priority_tie_breaking() {
        let mut frontier = Frontier::priority();
        frontier.push(Point::new(0, 0), 100, 500);
        frontier.push(Point::new(1, 0), 300, 500);
        frontier.push(Point::new(2, 0), 0, 400);
        frontier.push(Point::new(3, 0), 300, 500);
        frontier.push(Point::new(4, 0), 0, 900);
        // Lowest fScore first, then highest gScore, then insertion order.
        assert_eq!(
            drain(frontier),
            vec![
                Point::new(2, 0),
                Point::new(1, 0),
                Point::new(3, 0),
                Point::new(0, 0),
                Point::new(4, 0)
            ]
        );
    }

    #[test]
    fn root_entry_has_zero_cost() {
        let entry: FrontierEntry<i32> = FrontierEntry::root(Point::new(5, 5));
        assert_eq!(entry.cost, 0);
        assert_eq!(entry.estimated_cost, 0);
    }
}
