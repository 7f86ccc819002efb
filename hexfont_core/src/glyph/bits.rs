//! Packed 24-bit form of a glyph.

use std::fmt;

use super::CELLS;

/// Fixed-width bitset with one bit per glyph cell.
///
/// Bit `i` is the cell at flat index `i` (row-major, see
/// [`Point::bit`](crate::Point::bit)). Bits at and above [`CELLS`] are
/// always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GlyphBits(u32);

impl GlyphBits {
    /// No cells set.
    pub const EMPTY: Self = Self(0);

    /// Mask of the bits that map to cells.
    pub const MASK: u32 = (1 << CELLS) - 1;

    /// Build from a raw integer, discarding bits beyond the last cell.
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw & Self::MASK)
    }

    /// The packed integer.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns `true` if bit `bit` is set.
    pub fn contains(self, bit: usize) -> bool {
        bit < CELLS && self.0 & (1 << bit) != 0
    }

    /// Set bit `bit`.
    pub fn insert(&mut self, bit: usize) {
        debug_assert!(bit < CELLS, "bit {bit} >= {CELLS}");
        self.0 |= 1 << bit;
    }

    /// Clear bit `bit`.
    pub fn remove(&mut self, bit: usize) {
        debug_assert!(bit < CELLS, "bit {bit} >= {CELLS}");
        self.0 &= !(1 << bit);
    }

    /// Number of set bits.
    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Indices of the set bits, lowest first.
    pub fn iter_ones(self) -> impl Iterator<Item = usize> {
        (0..CELLS).filter(move |&bit| self.contains(bit))
    }
}

impl fmt::Binary for GlyphBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}
