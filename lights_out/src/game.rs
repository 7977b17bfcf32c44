// game.rs - Lights Out grid engine

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::GameError;

pub const MIN_GRID_SIZE: usize = 3;
pub const MAX_GRID_SIZE: usize = 7;

/// The Lights Out puzzle state: an N×N boolean grid (true = light on).
///
/// A move toggles the clicked cell and its full 3×3 neighborhood, diagonals
/// included, clipped at the edges. The game is won when every light is off.
pub struct LightsOutGame {
    size: usize,
    grid: Vec<Vec<bool>>,
    rng: StdRng,
}

impl Default for LightsOutGame {
    fn default() -> Self {
        Self::new()
    }
}

impl LightsOutGame {
    /// Creates a randomized MIN_GRID_SIZE×MIN_GRID_SIZE game with an OS-seeded RNG.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Same as `new`, but with a deterministic seed (reproducible boards).
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        let mut game = Self {
            size: MIN_GRID_SIZE,
            grid: vec![vec![false; MIN_GRID_SIZE]; MIN_GRID_SIZE],
            rng,
        };
        game.new_game();
        game
    }

    /// Number of horizontal/vertical cells in the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Resizes the grid to `size`×`size` and starts a new randomized game.
    ///
    /// Fails without touching the current grid when `size` is outside
    /// [MIN_GRID_SIZE, MAX_GRID_SIZE].
    pub fn set_size(&mut self, size: usize) -> Result<(), GameError> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
            return Err(GameError::OutOfRange { size });
        }
        debug!("resizing grid to {size}x{size}");
        self.size = size;
        self.grid = vec![vec![false; size]; size];
        self.new_game();
        Ok(())
    }

    /// On/off state at (row, col).
    ///
    /// Callers must keep row and col below `size()`; out-of-range indices panic.
    pub fn cell(&self, row: usize, col: usize) -> bool {
        self.grid[row][col]
    }

    /// Re-randomizes the whole grid, each cell an independent coin flip.
    pub fn new_game(&mut self) {
        for row in self.grid.iter_mut() {
            for cell in row.iter_mut() {
                *cell = self.rng.random_bool(0.5);
            }
        }
    }

    /// Toggles (row, col) and every neighbor in its 3×3 block, clipped to the
    /// grid. Fails without touching the grid when the target is out of range.
    pub fn make_move(&mut self, row: usize, col: usize) -> Result<(), GameError> {
        if row >= self.size || col >= self.size {
            return Err(GameError::InvalidMove {
                row,
                col,
                size: self.size,
            });
        }
        for i in row.saturating_sub(1)..=(row + 1).min(self.size - 1) {
            for j in col.saturating_sub(1)..=(col + 1).min(self.size - 1) {
                self.grid[i][j] = !self.grid[i][j];
            }
        }
        Ok(())
    }

    /// True iff every light is off.
    pub fn is_game_over(&self) -> bool {
        self.grid.iter().all(|row| row.iter().all(|&cell| !cell))
    }
}
