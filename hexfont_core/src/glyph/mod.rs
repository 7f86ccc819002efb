//! Glyph grid: a fixed 6×4 bitmap of hexagon cells.
//!
//! A `GlyphGrid` holds the pixels of one character. Grids own their cells
//! inline, so every saved glyph is its own copy and editing a working grid
//! never reaches back into a glyph that was saved earlier. The flattened
//! form lives in [`GlyphBits`].

mod bits;

use std::fmt;
use std::str::FromStr;

use crate::index::Point;

pub use bits::GlyphBits;

/// Number of rows in a glyph.
pub const ROWS: usize = 6;

/// Number of columns in a glyph.
pub const COLS: usize = 4;

/// Number of cells in a glyph.
pub const CELLS: usize = ROWS * COLS;

/// Distance between the flat indices of vertically adjacent cells.
///
/// Always equal to [`COLS`]; packing and unpacking both go through this.
pub const ROW_STRIDE: usize = COLS;

/// Separator between rows in the pattern form (`"#..#/..../..."`).
pub const PATTERN_ROW_SEPARATOR: char = '/';

const FILLED: char = '#';
const EMPTY: char = '.';

/// Errors from parsing a glyph pattern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseGlyphError {
    #[error("expected {ROWS} rows, found {found}")]
    RowCount { found: usize },
    #[error("row {row} has {found} cells, expected {COLS}")]
    RowWidth { row: usize, found: usize },
    #[error("row {row}, column {col}: unexpected symbol {symbol:?} (use '#' or '.')")]
    Symbol { row: usize, col: usize, symbol: char },
}

/// One character's pixels on the hex lattice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GlyphGrid {
    cells: [[bool; COLS]; ROWS],
}

impl GlyphGrid {
    /// Create an empty grid (every cell off).
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of the cell at `row`, `col`.
    ///
    /// Panics if the coordinate is outside the grid.
    pub fn get(&self, row: usize, col: usize) -> bool {
        Self::check(row, col);
        self.cells[row][col]
    }

    /// Set the cell at `row`, `col`.
    ///
    /// Panics if the coordinate is outside the grid.
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        Self::check(row, col);
        self.cells[row][col] = value;
    }

    /// Flip the cell at `row`, `col` and return its new value.
    pub fn toggle(&mut self, row: usize, col: usize) -> bool {
        let value = !self.get(row, col);
        self.cells[row][col] = value;
        value
    }

    /// Value of the cell at `point`.
    pub fn at(&self, point: Point) -> bool {
        self.get(point.row, point.col)
    }

    /// Turn every cell off.
    pub fn clear(&mut self) {
        self.cells = [[false; COLS]; ROWS];
    }

    /// Returns `true` if no cell is on.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(|&c| !c)
    }

    /// Number of cells that are on.
    pub fn filled(&self) -> usize {
        self.cells.iter().flatten().filter(|&&c| c).count()
    }

    /// Iterate over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Point, bool)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cols)| {
            cols.iter()
                .enumerate()
                .map(move |(col, &on)| (Point::new(row, col), on))
        })
    }

    /// Pack the grid into its 24-bit row-major form.
    pub fn flatten(&self) -> GlyphBits {
        let mut bits = GlyphBits::EMPTY;
        for (point, on) in self.cells() {
            if on {
                bits.insert(point.bit());
            }
        }
        bits
    }

    /// Rebuild a grid from its packed form.
    pub fn unflatten(bits: GlyphBits) -> Self {
        let mut grid = Self::new();
        for bit in bits.iter_ones() {
            let point = Point::from_bit(bit);
            grid.cells[point.row][point.col] = true;
        }
        grid
    }

    /// Single-line pattern form: rows joined by `/`, `#` on, `.` off.
    pub fn to_pattern(&self) -> String {
        let mut out = String::with_capacity(CELLS + ROWS - 1);
        for (row, cols) in self.cells.iter().enumerate() {
            if row > 0 {
                out.push(PATTERN_ROW_SEPARATOR);
            }
            out.extend(cols.iter().map(|&on| if on { FILLED } else { EMPTY }));
        }
        out
    }

    fn check(row: usize, col: usize) {
        assert!(
            row < ROWS && col < COLS,
            "cell ({row}, {col}) outside {ROWS}x{COLS} glyph grid"
        );
    }
}

impl From<GlyphBits> for GlyphGrid {
    fn from(bits: GlyphBits) -> Self {
        Self::unflatten(bits)
    }
}

impl From<&GlyphGrid> for GlyphBits {
    fn from(grid: &GlyphGrid) -> Self {
        grid.flatten()
    }
}

impl FromStr for GlyphGrid {
    type Err = ParseGlyphError;

    /// Parse the pattern form. `#`/`1` mark filled cells, `.`/`0` empty ones.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.trim().split(PATTERN_ROW_SEPARATOR).collect();
        if rows.len() != ROWS {
            return Err(ParseGlyphError::RowCount { found: rows.len() });
        }

        let mut grid = Self::new();
        for (row, text) in rows.iter().enumerate() {
            let symbols: Vec<char> = text.trim().chars().collect();
            if symbols.len() != COLS {
                return Err(ParseGlyphError::RowWidth {
                    row,
                    found: symbols.len(),
                });
            }
            for (col, &symbol) in symbols.iter().enumerate() {
                grid.cells[row][col] = match symbol {
                    '#' | '1' => true,
                    '.' | '0' => false,
                    _ => return Err(ParseGlyphError::Symbol { row, col, symbol }),
                };
            }
        }
        Ok(grid)
    }
}

/// Multi-line picture with odd rows shifted right, matching the lattice.
impl fmt::Display for GlyphGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cols) in self.cells.iter().enumerate() {
            if row > 0 {
                f.write_str("\n")?;
            }
            if row % 2 == 1 {
                f.write_str(" ")?;
            }
            for (col, &on) in cols.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", if on { FILLED } else { EMPTY })?;
            }
        }
        Ok(())
    }
}
