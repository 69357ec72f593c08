//! The search loop shared by all strategies.
//!
//! Every strategy seeds the frontier with the start node, repeatedly removes one node and stops
//! as soon as the removed node is the end node. Otherwise the node's passable neighbours are
//! examined: the unweighted strategies accept a neighbour the first time it is seen, the
//! cost-based ones whenever the tentative gScore beats the best recorded so far. Each accepted
//! neighbour gets its predecessor recorded, is pushed onto the frontier and produces a
//! [Visited](EventKind::Visited) event. Reaching the end produces one
//! [PathStep](EventKind::PathStep) event per node of the reconstructed path.
use fxhash::FxHashMap;
use grid_util::Point;
use log::{debug, info, warn};

use crate::event::{EventKind, VisualizationEvent};
use crate::grid::Grid;
use crate::heuristic::Heuristic;
use crate::node::Node;
use crate::path::Predecessors;
use crate::strategy::Strategy;
use crate::DEFAULT_STEP_DELAY_MS;

/// How a run ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The end node was removed from the frontier. The path runs from start to end inclusive.
    Found { path: Vec<Node> },
    /// The frontier ran dry without reaching the end node.
    NoPath,
}

/// Everything a single run produced.
#[derive(Clone, Debug)]
pub struct SearchRun {
    pub strategy: Strategy,
    pub outcome: SearchOutcome,
    /// Visited and path-step events in the order the search produced them.
    pub events: Vec<VisualizationEvent>,
    pub predecessors: Predecessors,
    /// Number of distinct nodes discovered besides the start.
    pub visited_count: usize,
}

impl SearchRun {
    pub fn found(&self) -> bool {
        matches!(self.outcome, SearchOutcome::Found { .. })
    }
    pub fn path(&self) -> Option<&[Node]> {
        match &self.outcome {
            SearchOutcome::Found { path } => Some(path),
            SearchOutcome::NoPath => None,
        }
    }
    pub fn path_points(&self) -> Option<Vec<Point>> {
        self.path()
            .map(|path| path.iter().map(Node::point).collect())
    }
    pub fn events_of(&self, kind: EventKind) -> impl Iterator<Item = &VisualizationEvent> {
        self.events.iter().filter(move |e| e.kind == kind)
    }
}

/// A configured search: strategy, heuristic for the informed strategies, and the delay attached
/// to every emitted event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchEngine {
    pub strategy: Strategy,
    pub heuristic: Heuristic,
    pub step_delay_ms: u64,
}

impl SearchEngine {
    pub fn new(strategy: Strategy) -> SearchEngine {
        SearchEngine {
            strategy,
            heuristic: Heuristic::Euclidean,
            step_delay_ms: DEFAULT_STEP_DELAY_MS,
        }
    }
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> SearchEngine {
        self.heuristic = heuristic;
        self
    }
    pub fn with_step_delay_ms(mut self, step_delay_ms: u64) -> SearchEngine {
        self.step_delay_ms = step_delay_ms;
        self
    }

    /// Searches from `start` to `end` on the grid's current contents. The grid is only read;
    /// the returned events describe how it should be recolored. The endpoints are whatever the
    /// caller passes, the start and end markers stored in the grid are not consulted.
    pub fn search(&self, grid: &Grid, start: &Node, end: &Node) -> SearchRun {
        let strategy = self.strategy;
        let start_p = start.point();
        let end_p = end.point();
        let mut events = Vec::new();
        let mut predecessors = Predecessors::new();

        if !grid.point_in_bounds(start_p) || !grid.point_in_bounds(end_p) {
            warn!(
                "{}: endpoints ({}, {}) -> ({}, {}) are not both on the grid",
                strategy, start.row, start.col, end.row, end.col
            );
            return SearchRun {
                strategy,
                outcome: SearchOutcome::NoPath,
                events,
                predecessors,
                visited_count: 0,
            };
        }

        let heuristic = strategy.heuristic(self.heuristic);
        if strategy == Strategy::AStar && !heuristic.is_admissible() {
            warn!("A* with {:?} may return a longer than shortest path", heuristic);
        }
        let cost_based = strategy.is_cost_based();
        let step_cost = strategy.step_cost();
        info!(
            "{}: searching ({}, {}) -> ({}, {})",
            strategy, start.row, start.col, end.row, end.col
        );

        // Best known gScore per discovered node; for the unweighted strategies only membership
        // matters.
        let mut best: FxHashMap<Point, i32> = FxHashMap::default();
        best.insert(start_p, 0);
        let mut frontier = strategy.frontier();
        frontier.push_root(start_p);

        let mut outcome = SearchOutcome::NoPath;
        while let Some((current, cost)) = frontier.pop() {
            if current == end_p {
                let path = predecessors
                    .reconstruct(end_p)
                    .into_iter()
                    .map(|p| grid.node_at(p))
                    .collect::<Vec<Node>>();
                events.extend(
                    path.iter()
                        .map(|n| VisualizationEvent::path_step(*n, self.step_delay_ms)),
                );
                outcome = SearchOutcome::Found { path };
                break;
            }
            if cost_based && best.get(&current).is_some_and(|&b| cost > b) {
                debug!("{}: skipping stale entry for {:?}", strategy, current);
                continue;
            }
            for n in grid.neighbour_points(current) {
                let tentative = cost + step_cost;
                let improves = match best.get(&n) {
                    None => true,
                    Some(&b) => cost_based && tentative < b,
                };
                if !improves {
                    continue;
                }
                best.insert(n, tentative);
                predecessors.insert(n, current);
                let estimate = tentative + heuristic.estimate(&n, &end_p);
                frontier.push(n, tentative, estimate);
                events.push(VisualizationEvent::visited(
                    grid.node_at(n),
                    self.step_delay_ms,
                ));
            }
        }

        let visited_count = best.len() - 1;
        match &outcome {
            SearchOutcome::Found { path } => info!(
                "{}: found a path of {} nodes after discovering {} nodes",
                strategy,
                path.len(),
                visited_count
            ),
            SearchOutcome::NoPath => warn!(
                "{}: no path after discovering {} nodes",
                strategy, visited_count
            ),
        }
        SearchRun {
            strategy,
            outcome,
            events,
            predecessors,
            visited_count,
        }
    }
}

/// Runs `strategy` with the default heuristic and step delay.
pub fn search(grid: &Grid, start: &Node, end: &Node, strategy: Strategy) -> SearchRun {
    SearchEngine::new(strategy).search(grid, start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::CellState;
    use crate::path::is_contiguous;

    fn open_grid(size: usize) -> Grid {
        Grid::with_endpoints(size, (0, 0), (size as i32 - 1, size as i32 - 1)).unwrap()
    }

    fn run(grid: &Grid, strategy: Strategy) -> SearchRun {
        search(grid, &grid.start(), &grid.end(), strategy)
    }

    #[test]
    fn every_strategy_finds_a_path_on_an_open_grid() {
        let grid = open_grid(6);
        for strategy in Strategy::ALL {
            let run = run(&grid, strategy);
            let path = run.path_points().unwrap();
            assert_eq!(path.first(), Some(&grid.start_point()));
            assert_eq!(path.last(), Some(&grid.end_point()));
            assert!(is_contiguous(&path));
            if strategy.guarantees_shortest_path() {
                assert_eq!(path.len(), 11);
            }
        }
    }

    #[test]
    fn path_events_follow_visited_events() {
        let grid = open_grid(4);
        let run = run(&grid, Strategy::BreadthFirst);
        let first_path_step = run
            .events
            .iter()
            .position(|e| e.kind == EventKind::PathStep)
            .unwrap();
        assert!(run.events[first_path_step..]
            .iter()
            .all(|e| e.kind == EventKind::PathStep));
        assert_eq!(run.events_of(EventKind::PathStep).count(), 7);
        assert!(run.events.iter().all(|e| e.delay_ms == 5));
    }

    #[test]
    fn greedy_never_reopens_nodes() {
        let mut grid = open_grid(7);
        for row in 0..6 {
            grid.set_wall(row, 3, true);
        }
        let run = run(&grid, Strategy::GreedyBestFirst);
        assert!(run.found());
        assert_eq!(
            run.events_of(EventKind::Visited).count(),
            run.visited_count
        );
    }

    /// With the squared Euclidean estimate A* runs along the wall first and reaches (0, 2) from
    /// below before the cheaper route along the top row, so that node is reopened.
    ///  S.....
    ///  ......
    ///  ###...
    ///  E.....
    ///  ......
    ///  ......
    #[test]
    fn cheaper_route_reopens_a_node() {
        let mut grid = Grid::with_endpoints(6, (0, 0), (3, 0)).unwrap();
        for col in 0..3 {
            grid.set_wall(2, col, true);
        }
        let run = SearchEngine::new(Strategy::AStar)
            .with_heuristic(Heuristic::SquaredEuclidean)
            .search(&grid, &grid.start(), &grid.end());
        assert_eq!(run.events_of(EventKind::Visited).count(), 19);
        assert_eq!(run.visited_count, 18);
        assert!(run.events_of(EventKind::Visited).count() > run.visited_count);
        let reopened = run
            .events_of(EventKind::Visited)
            .filter(|e| (e.node.row, e.node.col) == (0, 2))
            .count();
        assert_eq!(reopened, 2);
        // The second discovery came from the left and replaced the first predecessor.
        let top = Point::new(2, 0);
        assert_eq!(run.predecessors.get(&top), Some(Point::new(1, 0)));
        assert_eq!(
            run.predecessors.reconstruct(top),
            vec![Point::new(0, 0), Point::new(1, 0), top]
        );

        let path = run.path_points().unwrap();
        assert_eq!(path.first(), Some(&grid.start_point()));
        assert_eq!(path.last(), Some(&grid.end_point()));
        assert!(is_contiguous(&path));
        assert_eq!(path.len(), 10);
        let mut unique = run.predecessors.reconstruct(grid.end_point());
        unique.sort_by_key(|p| (p.y, p.x));
        unique.dedup();
        assert_eq!(unique.len(), path.len());
    }

    #[test]
    fn unreachable_end_exhausts_the_frontier() {
        let mut grid = open_grid(4);
        grid.set_wall(3, 2, true);
        grid.set_wall(2, 3, true);
        grid.set_wall(2, 2, true);
        for strategy in Strategy::ALL {
            let run = run(&grid, strategy);
            assert_eq!(run.outcome, SearchOutcome::NoPath);
            assert_eq!(run.events_of(EventKind::PathStep).count(), 0);
            // Every open cell except the start is discovered exactly once.
            assert_eq!(run.visited_count, 16 - 3 - 2);
        }
    }

    #[test]
    fn off_grid_endpoints_yield_no_path() {
        let grid = open_grid(3);
        let ghost = Node::new(9, 9, CellState::End);
        let run = search(&grid, &grid.start(), &ghost, Strategy::AStar);
        assert!(!run.found());
        assert!(run.events.is_empty());
    }

    #[test]
    fn explicit_endpoints_override_the_grid_markers() {
        let grid = open_grid(5);
        let start = grid.node(2, 0).unwrap();
        let end = grid.node(2, 3).unwrap();
        let run = search(&grid, &start, &end, Strategy::Dijkstra);
        assert_eq!(run.path().unwrap().len(), 4);
    }

    #[test]
    fn same_start_and_end() {
        let grid = open_grid(3);
        let start = grid.start();
        let run = search(&grid, &start, &start, Strategy::BreadthFirst);
        assert_eq!(run.path().unwrap(), &[start]);
        assert_eq!(run.events.len(), 1);
    }
}
