use crate::error::ConfigError;
use crate::heuristic::Heuristic;
use crate::strategy::Strategy;
use crate::{DEFAULT_ENDPOINT_MARGIN, DEFAULT_GRID_SIZE, DEFAULT_STEP_DELAY_MS};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Settings for a [Visualizer](crate::visualizer::Visualizer). The default is the reference
/// configuration: a 50x50 grid with the endpoints inset by 2 cells, 5 ms between revealed cells
/// and the Euclidean heuristic for informed search.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VisualizerConfig {
    pub grid_size: usize,
    pub endpoint_margin: usize,
    pub step_delay_ms: u64,
    pub heuristic: Heuristic,
    pub strategy: Strategy,
}

impl Default for VisualizerConfig {
    fn default() -> VisualizerConfig {
        VisualizerConfig {
            grid_size: DEFAULT_GRID_SIZE,
            endpoint_margin: DEFAULT_ENDPOINT_MARGIN,
            step_delay_ms: DEFAULT_STEP_DELAY_MS,
            heuristic: Heuristic::Euclidean,
            strategy: Strategy::BreadthFirst,
        }
    }
}

impl VisualizerConfig {
    pub fn with_grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }
    pub fn with_endpoint_margin(mut self, endpoint_margin: usize) -> Self {
        self.endpoint_margin = endpoint_margin;
        self
    }
    pub fn with_step_delay_ms(mut self, step_delay_ms: u64) -> Self {
        self.step_delay_ms = step_delay_ms;
        self
    }
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Checks that the grid is large enough to hold distinct, in-bounds start and end cells.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < 2 {
            return Err(ConfigError::GridTooSmall(self.grid_size));
        }
        if self.grid_size <= 2 * self.endpoint_margin + 1 {
            return Err(ConfigError::MarginTooLarge {
                size: self.grid_size,
                margin: self.endpoint_margin,
            });
        }
        Ok(())
    }

    /// Start cell as `(row, col)`: inset from the top-left corner.
    pub fn start_cell(&self) -> (i32, i32) {
        let m = self.endpoint_margin as i32;
        (m, m)
    }
    /// End cell as `(row, col)`: inset from the bottom-right corner.
    pub fn end_cell(&self) -> (i32, i32) {
        let far = self.grid_size as i32 - 1 - self.endpoint_margin as i32;
        (far, far)
    }
}
