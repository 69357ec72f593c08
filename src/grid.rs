use core::fmt;
use grid_util::{Point, SimpleValueGrid, ValueGrid};
use log::{debug, info, warn};
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::config::VisualizerConfig;
use crate::error::ConfigError;
use crate::node::{cell_point, CellState, Node};
use crate::N_SMALLVEC_SIZE;

/// Row and column offsets of the four orthogonal neighbours: up, down, left, right.
const NEIGHBOUR_OFFSETS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A square grid of cells with exactly one start and one end cell. Cells are stored in a flat
/// row-major [SimpleValueGrid] and mutated in place.
///
/// Besides the raw cell states, [Grid] maintains the connected components of the passable cells
/// in a [UnionFind] so that [reachable](Grid::reachable) can be answered without a search.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: SimpleValueGrid<CellState>,
    size: usize,
    start: Point,
    end: Point,
    components: UnionFind<usize>,
    components_dirty: bool,
}

impl Grid {
    /// An empty grid with the start and end placed as configured.
    pub fn from_config(config: &VisualizerConfig) -> Result<Grid, ConfigError> {
        config.validate()?;
        Grid::with_endpoints(config.grid_size, config.start_cell(), config.end_cell())
    }

    /// An empty `size` x `size` grid with the endpoints at the given `(row, col)` cells.
    pub fn with_endpoints(
        size: usize,
        start: (i32, i32),
        end: (i32, i32),
    ) -> Result<Grid, ConfigError> {
        if size < 2 {
            return Err(ConfigError::GridTooSmall(size));
        }
        for (row, col) in [start, end] {
            if !in_bounds(size, row, col) {
                return Err(ConfigError::EndpointOutOfBounds { row, col, size });
            }
        }
        if start == end {
            return Err(ConfigError::EndpointsOverlap {
                row: start.0,
                col: start.1,
            });
        }
        let mut grid = Grid {
            cells: SimpleValueGrid::new(size, size, CellState::Empty),
            size,
            start: cell_point(start.0, start.1),
            end: cell_point(end.0, end.1),
            components: UnionFind::new(size * size),
            components_dirty: true,
        };
        grid.cells.set_point(grid.start, CellState::Start);
        grid.cells.set_point(grid.end, CellState::End);
        grid.generate_components();
        Ok(grid)
    }

    pub fn size(&self) -> usize {
        self.size
    }
    pub fn start(&self) -> Node {
        self.node_at(self.start)
    }
    pub fn end(&self) -> Node {
        self.node_at(self.end)
    }
    pub fn start_point(&self) -> Point {
        self.start
    }
    pub fn end_point(&self) -> Point {
        self.end
    }

    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        in_bounds(self.size, row, col)
    }
    pub fn point_in_bounds(&self, p: Point) -> bool {
        self.in_bounds(p.y, p.x)
    }

    /// The cell at `(row, col)`, or [None] with a warning if the coordinates are outside the grid.
    pub fn node(&self, row: i32, col: i32) -> Option<Node> {
        if self.in_bounds(row, col) {
            Some(self.node_at(cell_point(row, col)))
        } else {
            warn!("No cell at ({}, {}) on a {}x{} grid", row, col, self.size, self.size);
            None
        }
    }

    /// The state of the cell at `(row, col)`, [None] outside the grid.
    pub fn state(&self, row: i32, col: i32) -> Option<CellState> {
        self.state_at(cell_point(row, col))
    }

    pub(crate) fn state_at(&self, p: Point) -> Option<CellState> {
        if self.point_in_bounds(p) {
            Some(self.cells.get_point(p))
        } else {
            None
        }
    }

    /// Writes a cell without touching the endpoint bookkeeping or the components. Only used
    /// for the search marks, which do not change passability.
    pub(crate) fn set_state_at(&mut self, p: Point, state: CellState) {
        debug_assert!(self.point_in_bounds(p));
        self.cells.set_point(p, state);
    }

    pub(crate) fn node_at(&self, p: Point) -> Node {
        Node::new(p.y, p.x, self.cells.get_point(p))
    }

    fn passable(&self, p: Point) -> bool {
        self.state_at(p).is_some_and(CellState::is_passable)
    }

    /// In-bounds, non-wall orthogonal neighbours of `p` in the order up, down, left, right.
    pub fn neighbour_points(&self, p: Point) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
        if !self.point_in_bounds(p) {
            return SmallVec::new();
        }
        NEIGHBOUR_OFFSETS
            .iter()
            .map(|(dr, dc)| Point::new(p.x + dc, p.y + dr))
            .filter(|n| self.passable(*n))
            .collect()
    }

    /// In-bounds, non-wall orthogonal neighbours of `node` in the order up, down, left, right.
    /// A node outside the grid has no neighbours.
    pub fn neighbours(&self, node: &Node) -> SmallVec<[Node; N_SMALLVEC_SIZE]> {
        self.neighbour_points(node.point())
            .into_iter()
            .map(|p| self.node_at(p))
            .collect()
    }

    /// Places or removes a wall. Endpoints and cells outside the grid are left alone, in which
    /// case `false` is returned.
    pub fn set_wall(&mut self, row: i32, col: i32, wall: bool) -> bool {
        let p = cell_point(row, col);
        let Some(current) = self.state_at(p) else {
            warn!("Cannot place wall at ({}, {}): outside the grid", row, col);
            return false;
        };
        if current.is_endpoint() {
            debug!("Ignoring wall edit on endpoint ({}, {})", row, col);
            return false;
        }
        let target = if wall {
            CellState::Wall
        } else {
            CellState::Empty
        };
        if current == target {
            return true;
        }
        self.cells.set_point(p, target);
        if wall {
            // Splitting a component cannot be undone in a union-find, so rebuild lazily.
            self.components_dirty = true;
        } else if current == CellState::Wall {
            self.join_components(p);
        }
        true
    }

    /// Flips a non-endpoint cell between empty and wall. Returns whether the cell changed.
    pub fn toggle_wall(&mut self, row: i32, col: i32) -> bool {
        match self.state(row, col) {
            Some(CellState::Wall) => self.set_wall(row, col, false),
            Some(state) if !state.is_endpoint() => self.set_wall(row, col, true),
            Some(_) => {
                debug!("Ignoring wall toggle on endpoint ({}, {})", row, col);
                false
            }
            None => {
                warn!("Cannot toggle ({}, {}): outside the grid", row, col);
                false
            }
        }
    }

    /// Resets every cell to empty and puts the endpoints back at the given cells.
    pub fn reset(&mut self, start: (i32, i32), end: (i32, i32)) {
        info!("Resetting {}x{} grid", self.size, self.size);
        self.cells = SimpleValueGrid::new(self.size, self.size, CellState::Empty);
        self.start = cell_point(start.0, start.1);
        self.end = cell_point(end.0, end.1);
        self.cells.set_point(self.start, CellState::Start);
        self.cells.set_point(self.end, CellState::End);
        self.generate_components();
    }

    /// Turns every visited or path-marked cell back into an empty one.
    pub fn clear_search_marks(&mut self) -> usize {
        let mut cleared = 0;
        for y in 0..self.size as i32 {
            for x in 0..self.size as i32 {
                let p = Point::new(x, y);
                if self.cells.get_point(p).is_search_mark() {
                    self.cells.set_point(p, CellState::Empty);
                    cleared += 1;
                }
            }
        }
        debug!("Cleared {} search marks", cleared);
        cleared
    }

    /// Swaps the contents of two cells, following the start or end if one of them moves.
    /// Returns `false` without changing anything if either cell is outside the grid.
    pub fn swap_cells(&mut self, from: (i32, i32), to: (i32, i32)) -> bool {
        let p_from = cell_point(from.0, from.1);
        let p_to = cell_point(to.0, to.1);
        let (Some(a), Some(b)) = (self.state_at(p_from), self.state_at(p_to)) else {
            warn!("Cannot swap {:?} and {:?}: outside the grid", from, to);
            return false;
        };
        self.cells.set_point(p_from, b);
        self.cells.set_point(p_to, a);
        for (state, new_pos) in [(a, p_to), (b, p_from)] {
            match state {
                CellState::Start => self.start = new_pos,
                CellState::End => self.end = new_pos,
                _ => {}
            }
        }
        if a.is_passable() != b.is_passable() {
            self.components_dirty = true;
        }
        debug!("Swapped {:?} ({:?}) with {:?} ({:?})", from, a, to, b);
        true
    }

    fn index(&self, p: Point) -> usize {
        p.y as usize * self.size + p.x as usize
    }

    fn join_components(&mut self, p: Point) {
        let p_ix = self.index(p);
        for n in self.neighbour_points(p) {
            let n_ix = self.index(n);
            self.components.union(p_ix, n_ix);
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up passable neighbours.
    pub fn generate_components(&mut self) {
        self.components = UnionFind::new(self.size * self.size);
        self.components_dirty = false;
        for y in 0..self.size as i32 {
            for x in 0..self.size as i32 {
                let p = Point::new(x, y);
                if !self.passable(p) {
                    continue;
                }
                let p_ix = self.index(p);
                // Linking right and down is enough to cover every edge once.
                for n in [Point::new(x + 1, y), Point::new(x, y + 1)] {
                    if self.passable(n) {
                        let n_ix = self.index(n);
                        self.components.union(p_ix, n_ix);
                    }
                }
            }
        }
    }

    /// Whether a path between the two cells exists. Walls and cells outside the grid are
    /// reachable from nothing.
    pub fn reachable(&mut self, from: &Node, to: &Node) -> bool {
        self.update();
        let (a, b) = (from.point(), to.point());
        if !self.passable(a) || !self.passable(b) {
            return false;
        }
        self.components.equiv(self.index(a), self.index(b))
    }

    /// Copies every cell in row-major order.
    pub fn snapshot(&self) -> Vec<Node> {
        (0..self.size as i32)
            .flat_map(|row| (0..self.size as i32).map(move |col| (row, col)))
            .map(|(row, col)| self.node_at(cell_point(row, col)))
            .collect()
    }

    pub fn count(&self, state: CellState) -> usize {
        self.snapshot().iter().filter(|n| n.state == state).count()
    }
}

fn in_bounds(size: usize, row: i32, col: i32) -> bool {
    row >= 0 && col >= 0 && (row as usize) < size && (col as usize) < size
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.size as i32 {
            let line = (0..self.size as i32)
                .map(|x| self.cells.get_point(Point::new(x, y)).symbol())
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
