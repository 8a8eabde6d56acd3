// stepper.rs - Synchronous generation advance over the double buffer

use crate::grid::Grid;
use crate::rules::{live_neighbours, next_state};

/// Owns the grid and the generation counter.
#[derive(Debug)]
pub struct Stepper {
    grid       : Grid,
    generation : u64,
}

impl Stepper {
    pub fn new(grid: Grid) -> Self {
        Self::with_generation(grid, 0)
    }

    pub fn with_generation(grid: Grid, generation: u64) -> Self {
        Self { grid, generation }
    }

    /// Advances every cell by one generation.
    ///
    /// Neighbours are always counted against the current buffer and results
    /// land in scratch, so cells visited later in the sweep still see the
    /// previous generation.
    pub fn advance(&mut self) {
        let grid = &mut self.grid;
        for row in 0..grid.height() {
            for col in 0..grid.width() {
                let n = live_neighbours(grid, row, col);
                let next = next_state(grid.get(row, col), n);
                grid.set_scratch(row, col, next);
            }
        }
        grid.commit();
        self.generation += 1;
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }
}
