//! # grid_visualizer
//!
//! The engine behind an interactive grid pathfinding visualizer. A square grid holds walls and
//! exactly one start and one end cell; one of five search strategies
//! ([breadth-first](https://en.wikipedia.org/wiki/Breadth-first_search),
//! [depth-first](https://en.wikipedia.org/wiki/Depth-first_search),
//! [Dijkstra](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm),
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) and
//! [greedy best-first](https://en.wikipedia.org/wiki/Best-first_search)) is run between them on
//! a 4-connected grid with uniform step cost.
//!
//! A search runs to completion synchronously and returns the cells it discovered and the path it
//! found as an ordered stream of [VisualizationEvent]s. The [Scheduler] reveals that stream
//! against a virtual clock so a renderer can animate the search after the fact.
//!
//! ```
//! use grid_visualizer::{CellChange, Strategy, Visualizer, VisualizerConfig};
//!
//! let config = VisualizerConfig::default().with_grid_size(10).with_endpoint_margin(1);
//! let mut visualizer = Visualizer::new(config).unwrap();
//! visualizer.select_solver(Strategy::AStar);
//! let run = visualizer.run();
//! assert_eq!(run.path().unwrap().len(), 15);
//! let mut changes: Vec<CellChange> = Vec::new();
//! visualizer.finish_animation(&mut changes);
//! assert!(!changes.is_empty());
//! ```
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod frontier;
pub mod grid;
pub mod heuristic;
pub mod node;
pub mod path;
pub mod scheduler;
pub mod strategy;
pub mod visualizer;

pub use config::VisualizerConfig;
pub use engine::{search, SearchEngine, SearchOutcome, SearchRun};
pub use error::{ConfigError, ParseError};
pub use event::{CellChange, EventKind, VisualizationEvent};
pub use grid::Grid;
pub use heuristic::Heuristic;
pub use node::{CellState, Node};
pub use path::Predecessors;
pub use scheduler::{Renderer, Scheduler};
pub use strategy::{Generator, Strategy};
pub use visualizer::Visualizer;

/// Cost of one orthogonal step. Heuristics are scaled by the same factor and rounded down.
pub const C: i32 = 100;
/// Side length of the reference grid.
pub const DEFAULT_GRID_SIZE: usize = 50;
/// Distance of the start and end cells from their corners in the reference grid.
pub const DEFAULT_ENDPOINT_MARGIN: usize = 2;
/// Delay between two revealed events in the reference configuration.
pub const DEFAULT_STEP_DELAY_MS: u64 = 5;

const N_SMALLVEC_SIZE: usize = 4;
