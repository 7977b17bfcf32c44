use thiserror::Error;

use crate::game::{MAX_GRID_SIZE, MIN_GRID_SIZE};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Requested grid size outside [MIN_GRID_SIZE, MAX_GRID_SIZE].
    #[error("grid size must be between {min} and {max}, got {size}", min = MIN_GRID_SIZE, max = MAX_GRID_SIZE)]
    OutOfRange { size: usize },

    /// Move target outside the current grid.
    #[error("move ({row}, {col}) is outside the {size}x{size} grid")]
    InvalidMove { row: usize, col: usize, size: usize },
}
