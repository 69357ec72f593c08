use core::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::frontier::Frontier;
use crate::heuristic::Heuristic;
use crate::C;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The five search strategies. They share one traversal loop and differ in how the frontier is
/// ordered and how path cost accumulates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Strategy {
    #[default]
    BreadthFirst,
    DepthFirst,
    Dijkstra,
    AStar,
    GreedyBestFirst,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
        Strategy::Dijkstra,
        Strategy::AStar,
        Strategy::GreedyBestFirst,
    ];

    /// Name shown by the solver selection control.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "Breadth-First Search",
            Strategy::DepthFirst => "Depth-First Search",
            Strategy::Dijkstra => "Dijkstra's Algorithm",
            Strategy::AStar => "A* Search",
            Strategy::GreedyBestFirst => "Greedy Best-First Search",
        }
    }

    /// Cost-based strategies track gScore and may reopen a node when a cheaper route turns up.
    pub fn is_cost_based(self) -> bool {
        matches!(
            self,
            Strategy::Dijkstra | Strategy::AStar | Strategy::GreedyBestFirst
        )
    }

    /// Whether the returned path is a shortest one (for A*, given an admissible heuristic).
    pub fn guarantees_shortest_path(self) -> bool {
        matches!(
            self,
            Strategy::BreadthFirst | Strategy::Dijkstra | Strategy::AStar
        )
    }

    /// The amount added to gScore per step. Greedy best-first keeps gScore constant, so its
    /// ordering is driven by the heuristic alone.
    pub fn step_cost(self) -> i32 {
        match self {
            Strategy::GreedyBestFirst => 0,
            _ => C,
        }
    }

    /// The estimator actually used for ordering, given the configured one.
    pub fn heuristic(self, configured: Heuristic) -> Heuristic {
        match self {
            Strategy::AStar | Strategy::GreedyBestFirst => configured,
            _ => Heuristic::Zero,
        }
    }

    pub(crate) fn frontier(self) -> Frontier {
        match self {
            Strategy::BreadthFirst => Frontier::queue(),
            Strategy::DepthFirst => Frontier::stack(),
            _ => Frontier::priority(),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Lowercases and strips everything but letters and digits, so that "A* Search", "astar" and
/// "A-Star" all normalize to the same key.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '*')
        .map(|c| if c == '*' { 's' } else { c.to_ascii_lowercase() })
        .collect::<String>()
        .replace("star", "s")
}

impl FromStr for Strategy {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Strategy, ParseError> {
        match normalize(s).as_str() {
            "bfs" | "breadthfirst" | "breadthfirstsearch" => Ok(Strategy::BreadthFirst),
            "dfs" | "depthfirst" | "depthfirstsearch" => Ok(Strategy::DepthFirst),
            "dijkstra" | "dijkstras" | "dijkstrasalgorithm" => Ok(Strategy::Dijkstra),
            "as" | "assearch" => Ok(Strategy::AStar),
            "greedy" | "greedybestfirst" | "greedybestfirstsearch" | "bestfirst" => {
                Ok(Strategy::GreedyBestFirst)
            }
            _ => Err(ParseError::UnknownSolver(s.to_owned())),
        }
    }
}

/// Maze generators listed by the selection control. None of them is implemented; selecting one
/// is recorded and otherwise ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Generator {
    RecursiveDivision,
    RandomWalk,
    Prims,
    Kruskals,
    Ellers,
}

impl Generator {
    pub const ALL: [Generator; 5] = [
        Generator::RecursiveDivision,
        Generator::RandomWalk,
        Generator::Prims,
        Generator::Kruskals,
        Generator::Ellers,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Generator::RecursiveDivision => "Recursive Division",
            Generator::RandomWalk => "Random Walk",
            Generator::Prims => "Prim's Algorithm",
            Generator::Kruskals => "Kruskal's Algorithm",
            Generator::Ellers => "Eller's Algorithm",
        }
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Generator {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Generator, ParseError> {
        match normalize(s).trim_end_matches("algorithm") {
            "recursivedivision" => Ok(Generator::RecursiveDivision),
            "randomwalk" => Ok(Generator::RandomWalk),
            "prims" | "prim" => Ok(Generator::Prims),
            "kruskals" | "kruskal" => Ok(Generator::Kruskals),
            "ellers" | "eller" => Ok(Generator::Ellers),
            _ => Err(ParseError::UnknownGenerator(s.to_owned())),
        }
    }
}
