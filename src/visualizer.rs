//! The operations the UI layer drives: selecting a solver, editing the grid, starting a run and
//! pumping the reveal of its events.
//!
//! A [Visualizer] holds the one grid shared by edits and the deferred reveal. Runs are computed
//! synchronously inside [run](Visualizer::run); their events are then queued on the
//! [Scheduler] and applied as the caller advances time with [tick](Visualizer::tick). The
//! running flag only covers the synchronous part, so edits made while a reveal is still
//! draining go through and interleave with it.
use log::{debug, info, warn};

use crate::config::VisualizerConfig;
use crate::engine::{SearchEngine, SearchRun};
use crate::error::{ConfigError, ParseError};
use crate::grid::Grid;
use crate::node::Node;
use crate::scheduler::{Renderer, Scheduler};
use crate::strategy::{Generator, Strategy};

#[derive(Clone, Debug)]
pub struct Visualizer {
    config: VisualizerConfig,
    grid: Grid,
    strategy: Strategy,
    generator: Option<Generator>,
    scheduler: Scheduler,
    running: bool,
}

impl Visualizer {
    pub fn new(config: VisualizerConfig) -> Result<Visualizer, ConfigError> {
        let grid = Grid::from_config(&config)?;
        Ok(Visualizer {
            strategy: config.strategy,
            config,
            grid,
            generator: None,
            scheduler: Scheduler::new(),
            running: false,
        })
    }

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
    /// Every cell in row-major order, for an initial or full redraw.
    pub fn snapshot(&self) -> Vec<Node> {
        self.grid.snapshot()
    }
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
    pub fn generator(&self) -> Option<Generator> {
        self.generator
    }
    pub fn is_running(&self) -> bool {
        self.running
    }
    /// Whether revealed events are still pending.
    pub fn is_animating(&self) -> bool {
        !self.scheduler.is_idle()
    }
    pub fn pending_events(&self) -> usize {
        self.scheduler.pending()
    }

    pub fn select_solver(&mut self, strategy: Strategy) {
        debug!("Selected solver {}", strategy);
        self.strategy = strategy;
    }
    pub fn select_solver_by_name(&mut self, name: &str) -> Result<Strategy, ParseError> {
        let strategy = name.parse::<Strategy>()?;
        self.select_solver(strategy);
        Ok(strategy)
    }

    /// Records the generator choice. No generator is implemented, so nothing else happens.
    pub fn select_generator(&mut self, generator: Generator) {
        debug!("Selected generator {} (not implemented)", generator);
        self.generator = Some(generator);
    }
    pub fn select_generator_by_name(&mut self, name: &str) -> Result<Generator, ParseError> {
        let generator = name.parse::<Generator>()?;
        self.select_generator(generator);
        Ok(generator)
    }

    /// Flips a cell between empty and wall. Refused on the endpoints, outside the grid and while
    /// a run is in progress.
    pub fn toggle_wall(&mut self, row: i32, col: i32) -> bool {
        if self.running {
            warn!("Ignoring wall toggle at ({}, {}): a run is in progress", row, col);
            return false;
        }
        self.grid.toggle_wall(row, col)
    }

    /// Resets the grid to all empty cells with the endpoints at their configured places.
    /// Events still pending from an earlier run are kept and will be applied to the new grid.
    pub fn clear(&mut self) {
        let (start, end) = (self.config.start_cell(), self.config.end_cell());
        self.grid.reset(start, end);
    }

    /// Swaps the contents of two cells. Dragging the start or end onto another cell relocates
    /// it; the recorded endpoints follow the swap.
    pub fn move_endpoint(
        &mut self,
        from_row: i32,
        from_col: i32,
        to_row: i32,
        to_col: i32,
    ) -> bool {
        if self.running {
            warn!("Ignoring endpoint move: a run is in progress");
            return false;
        }
        self.grid.swap_cells((from_row, from_col), (to_row, to_col))
    }

    /// Runs the selected solver between the current start and end, then queues the resulting
    /// events for reveal. Marks left by the previous run are wiped first.
    pub fn run(&mut self) -> SearchRun {
        self.running = true;
        self.grid.clear_search_marks();
        let engine = SearchEngine::new(self.strategy)
            .with_heuristic(self.config.heuristic)
            .with_step_delay_ms(self.config.step_delay_ms);
        let (start, end) = (self.grid.start(), self.grid.end());
        let run = engine.search(&self.grid, &start, &end);
        self.running = false;
        let reveal_end = self.scheduler.schedule(run.events.iter().copied());
        info!(
            "{} queued {} events, reveal ends at {} ms",
            run.strategy,
            run.events.len(),
            reveal_end
        );
        run
    }

    /// Advances the reveal clock and applies every due event.
    pub fn tick<R: Renderer + ?Sized>(&mut self, elapsed_ms: u64, renderer: &mut R) -> usize {
        self.scheduler.advance(elapsed_ms, &mut self.grid, renderer)
    }

    /// Applies every pending event immediately.
    pub fn finish_animation<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> usize {
        self.scheduler.drain(&mut self.grid, renderer)
    }

    /// Drops every pending event.
    pub fn cancel_animation(&mut self) -> usize {
        self.scheduler.cancel()
    }
}
