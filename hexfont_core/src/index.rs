//! Cell coordinates within a glyph grid.
//!
//! `Point` names one hexagon by row and column. Rows are numbered top to
//! bottom; odd rows sit half a cell to the right on the hex lattice. The
//! flat bit index of a point is row-major with a stride of [`ROW_STRIDE`].

use std::cmp::Ordering;
use std::fmt;

use crate::glyph::{CELLS, COLS, ROW_STRIDE, ROWS};

/// A cell coordinate combining a row and a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    /// Create a new point at the given row and column.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns `true` if the point lies inside a 6×4 glyph grid.
    pub fn in_bounds(self) -> bool {
        self.row < ROWS && self.col < COLS
    }

    /// Flat bit index of this point (row-major).
    ///
    /// Panics if the point is outside the grid.
    pub fn bit(self) -> usize {
        assert!(
            self.in_bounds(),
            "cell ({}, {}) outside {ROWS}x{COLS} glyph grid",
            self.row,
            self.col
        );
        self.row * ROW_STRIDE + self.col
    }

    /// Inverse of [`Point::bit`].
    ///
    /// Panics if `bit >= CELLS`.
    pub fn from_bit(bit: usize) -> Self {
        assert!(bit < CELLS, "bit {bit} outside {CELLS}-cell glyph grid");
        Self {
            row: bit / ROW_STRIDE,
            col: bit % ROW_STRIDE,
        }
    }

    /// Whether this cell sits on a shifted (odd) row of the hex lattice.
    pub fn is_offset_row(self) -> bool {
        self.row % 2 == 1
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.row.cmp(&other.row) {
            Ordering::Equal => self.col.cmp(&other.col),
            ord => ord,
        }
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
