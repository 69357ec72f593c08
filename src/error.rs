use thiserror::Error;

/// Rejected [VisualizerConfig](crate::config::VisualizerConfig) values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid size {0} is too small, at least 2 cells per side are needed")]
    GridTooSmall(usize),
    #[error("endpoint margin {margin} does not leave distinct start and end cells on a {size}x{size} grid")]
    MarginTooLarge { size: usize, margin: usize },
    #[error("endpoint ({row}, {col}) lies outside a {size}x{size} grid")]
    EndpointOutOfBounds { row: i32, col: i32, size: usize },
    #[error("start and end both placed at ({row}, {col})")]
    EndpointsOverlap { row: i32, col: i32 },
}

/// Names coming from the selection controls that match no known solver or generator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown solver `{0}`")]
    UnknownSolver(String),
    #[error("unknown generator `{0}`")]
    UnknownGenerator(String),
}
