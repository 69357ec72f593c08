use core::fmt;
use grid_util::Point;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The state of a single grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    Wall,
    Start,
    End,
    Visited,
    PathMarked,
}

impl CellState {
    /// Whether a search may step onto a cell in this state.
    pub fn is_passable(self) -> bool {
        self != CellState::Wall
    }
    /// Start and End are the two endpoint markers.
    pub fn is_endpoint(self) -> bool {
        matches!(self, CellState::Start | CellState::End)
    }
    /// Visited and PathMarked are written by searches only and are wiped before every run.
    pub fn is_search_mark(self) -> bool {
        matches!(self, CellState::Visited | CellState::PathMarked)
    }
    /// Single character used by the [Display](fmt::Display) impl of the grid.
    pub fn symbol(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Wall => '#',
            CellState::Start => 'S',
            CellState::End => 'E',
            CellState::Visited => 'o',
            CellState::PathMarked => '*',
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A copy of one grid cell: its coordinates and the state it had when the copy was taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Node {
    pub row: i32,
    pub col: i32,
    pub state: CellState,
}

impl Node {
    pub fn new(row: i32, col: i32, state: CellState) -> Node {
        Node { row, col, state }
    }
    pub fn point(&self) -> Point {
        cell_point(self.row, self.col)
    }
}

/// Maps `(row, col)` to a [Point], whose `x` is the column and `y` the row.
#[inline]
pub fn cell_point(row: i32, col: i32) -> Point {
    Point::new(col, row)
}
