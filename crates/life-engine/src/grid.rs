//! Fixed-size 2D cell grid.

use life_core::{CellState, Error, Result, Seed};
use serde::{Deserialize, Serialize};

/// A fixed rows x cols grid of cell states, stored row-major.
///
/// Coordinates are bounds-checked on every access; there is no wraparound
/// and no clamping. Dimensions never change after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a grid with every cell Empty.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidConfig(format!(
                "grid dimensions must be at least 1x1, got {rows}x{cols}"
            )));
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![CellState::Empty; rows * cols],
        })
    }

    /// Create a grid from a parsed seed, occupying each seeded cell.
    pub fn from_seed(seed: &Seed) -> Result<Self> {
        let mut grid = Self::new(seed.board.rows, seed.board.cols)?;
        for &(row, col) in &seed.cells {
            grid.set(row, col, CellState::Occupied)?;
        }
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    /// Get the state of a cell.
    pub fn get(&self, row: usize, col: usize) -> Result<CellState> {
        Ok(self.cells[self.index(row, col)?])
    }

    /// Set the state of a cell.
    pub fn set(&mut self, row: usize, col: usize, state: CellState) -> Result<()> {
        let index = self.index(row, col)?;
        self.cells[index] = state;
        Ok(())
    }

    /// Reset every cell to Empty.
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Empty);
    }

    /// Iterate over all cells as `(row, col, state)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &state)| (i / self.cols, i % self.cols, state))
    }

    /// Whether the grid holds only settled (Empty/Occupied) cells.
    pub fn is_settled(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_settled())
    }

    /// Number of Occupied cells.
    pub fn population(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == CellState::Occupied)
            .count()
    }
}
