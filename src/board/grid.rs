//! The grid itself.
//!
//! A board is a flat row-major sequence of cells plus its dimensions.
//! `(row, col) = (index / cols, index % cols)`. Search creates child states
//! by cloning the whole board, so branches never alias each other.

use std::fmt;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::cell::{Cell, Player};
use super::claim::Claim;

/// A rows x cols grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an all-empty board.
    ///
    /// Panics if either dimension is zero; malformed dimensions are a
    /// caller contract violation, not a recoverable error.
    pub fn new(rows: usize, cols: usize) -> Board {
        assert!(rows > 0 && cols > 0, "board dimensions must be positive");
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    /// Creates a board with `poison` cells placed uniformly at random among
    /// the empty cells, driven by `seed` for reproducibility.
    ///
    /// Panics if `poison` exceeds the cell count.
    pub fn with_poison(rows: usize, cols: usize, poison: usize, seed: u64) -> Board {
        let mut board = Board::new(rows, cols);
        assert!(
            poison <= board.cell_count(),
            "poison count exceeds cell count"
        );
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut remaining = poison;
        while remaining > 0 {
            let position = rng.gen_range(0..board.cell_count());
            if board.cells[position].is_empty() {
                board.cells[position] = Cell::Poisoned;
                remaining -= 1;
            }
        }
        board
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns the cell at `index`. Out-of-range indices panic.
    pub fn cell(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// Overwrites the cell at `index`. Out-of-range indices panic.
    pub fn set_cell(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }

    /// Linear index of `(row, col)`.
    pub fn index_of(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        row * self.cols + col
    }

    /// `(row, col)` of a linear index.
    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }

    /// Up to four axis-adjacent in-bounds neighbours of `index`, in the
    /// stable order down, up, right, left.
    pub fn neighbours(&self, index: usize) -> Vec<usize> {
        let (r, c) = self.coords(index);
        let mut result = Vec::with_capacity(4);
        if r + 1 < self.rows {
            result.push((r + 1) * self.cols + c);
        }
        if r >= 1 {
            result.push((r - 1) * self.cols + c);
        }
        if c + 1 < self.cols {
            result.push(r * self.cols + c + 1);
        }
        if c >= 1 {
            result.push(r * self.cols + c - 1);
        }
        result
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    /// Indices of all poisoned cells, ascending.
    pub fn poisoned_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_poisoned())
            .map(|(i, _)| i)
            .collect()
    }

    /// Indices of all cells owned by `player`, ascending.
    pub fn owned_indices(&self, player: Player) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.owner() == Some(player))
            .map(|(i, _)| i)
            .collect()
    }

    /// Iterates the linear indices covered by a claim, row-major.
    pub fn claim_cells<'a>(&'a self, claim: &'a Claim) -> impl Iterator<Item = usize> + 'a {
        let cols = self.cols;
        (claim.top..=claim.bottom)
            .flat_map(move |r| (claim.left..=claim.right).map(move |c| r * cols + c))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            for c in 0..self.cols {
                write!(f, "|{}", self.cells[r * self.cols + c].glyph())?;
            }
            writeln!(f, "|")?;
        }
        Ok(())
    }
}
