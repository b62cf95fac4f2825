//! Fixed-size grid of cells. Row 0 is the top row; gravity pulls toward
//! `rows - 1`.
//!
//! The grid is the single owner of board extent: every other component asks
//! it for bounds and neighbors instead of keeping its own dimensions.

use alloc::vec::Vec;

use crate::common::BoardError;
use crate::token::{Color, Token};

/// Orthogonal neighbor offsets in traversal order: up, down, left, right.
pub(crate) const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord { row, col }
    }
}

/// One slot of the grid. Its coordinate never changes; the token comes and goes.
#[derive(Debug)]
pub struct Cell {
    coord: Coord,
    token: Option<Token>,
}

impl Cell {
    fn new(row: usize, col: usize) -> Self {
        Self {
            coord: Coord::new(row, col),
            token: None,
        }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn row(&self) -> usize {
        self.coord.row
    }

    pub fn col(&self) -> usize {
        self.coord.col
    }

    pub fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    pub fn is_filled(&self) -> bool {
        self.token.is_some()
    }

    /// Color of the token, if any.
    pub fn color(&self) -> Option<Color> {
        self.token.as_ref().map(Token::color)
    }
}

/// `rows x columns` cells stored row-major.
#[derive(Debug)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid. Dimensions are validated by the config layer;
    /// a zero dimension yields a grid without cells.
    pub fn new(rows: usize, columns: usize) -> Self {
        let mut cells = Vec::with_capacity(rows * columns);
        for r in 0..rows {
            for c in 0..columns {
                cells.push(Cell::new(r, c));
            }
        }
        Self {
            rows,
            columns,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.columns
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<usize, BoardError> {
        if self.in_bounds(row, col) {
            Ok(row * self.columns + col)
        } else {
            Err(BoardError::OutOfRange { row, col })
        }
    }

    /// The cell at (`row`, `col`).
    pub fn cell_at(&self, row: usize, col: usize) -> Result<&Cell, BoardError> {
        let idx = self.check_bounds(row, col)?;
        Ok(&self.cells[idx])
    }

    pub fn token_at(&self, row: usize, col: usize) -> Result<Option<&Token>, BoardError> {
        Ok(self.cell_at(row, col)?.token())
    }

    pub fn is_filled(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        Ok(self.cell_at(row, col)?.is_filled())
    }

    /// Place `token` (or clear the cell with `None`), returning what was there.
    pub fn set(
        &mut self,
        row: usize,
        col: usize,
        token: Option<Token>,
    ) -> Result<Option<Token>, BoardError> {
        let idx = self.check_bounds(row, col)?;
        Ok(core::mem::replace(&mut self.cells[idx].token, token))
    }

    /// Remove and return the token at (`row`, `col`).
    pub fn take(&mut self, row: usize, col: usize) -> Result<Option<Token>, BoardError> {
        self.set(row, col, None)
    }

    /// Empty cells in `col`, wherever they are.
    pub fn count_empty_in_column(&self, col: usize) -> Result<usize, BoardError> {
        self.check_bounds(0, col)?;
        Ok((0..self.rows)
            .filter(|&r| self.cells[r * self.columns + col].token.is_none())
            .count())
    }

    /// Number of filled cells on the whole board.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_filled()).count()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// In-bounds orthogonal neighbors of (`row`, `col`).
    pub fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = Coord> + '_ {
        DIRECTIONS.iter().filter_map(move |&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            self.in_bounds(r, c).then_some(Coord::new(r, c))
        })
    }

    // Unchecked index helpers for the algorithms, which only ever walk
    // in-bounds coordinates.

    #[inline]
    pub(crate) fn index_of(&self, row: usize, col: usize) -> usize {
        debug_assert!(self.in_bounds(row, col));
        row * self.columns + col
    }

    #[inline]
    pub(crate) fn coord_of(&self, idx: usize) -> Coord {
        Coord::new(idx / self.columns, idx % self.columns)
    }

    #[inline]
    pub(crate) fn color_at(&self, idx: usize) -> Option<Color> {
        self.cells[idx].color()
    }

    #[inline]
    pub(crate) fn slot(&self, idx: usize) -> &Option<Token> {
        &self.cells[idx].token
    }

    #[inline]
    pub(crate) fn slot_mut(&mut self, idx: usize) -> &mut Option<Token> {
        &mut self.cells[idx].token
    }
}
