//! Pointy-top hexagon layout for glyph grids.
//!
//! Odd rows are shifted right by half a cell so the 6×4 grid tiles as a
//! hex lattice. All values are in user units of the output canvas.

use std::f32::consts::PI;

use hexfont_core::{COLS, Point, ROWS};

/// Hexagon layout for a given cell radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexLayout {
    size: f32,
}

impl HexLayout {
    /// Layout with hexagons of radius `size` (center to corner).
    pub fn new(size: f32) -> Self {
        Self { size }
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    /// Flat-to-flat width of one hexagon.
    pub fn hex_width(&self) -> f32 {
        3.0_f32.sqrt() * self.size
    }

    /// Corner-to-corner height of one hexagon.
    pub fn hex_height(&self) -> f32 {
        2.0 * self.size
    }

    pub fn horizontal_spacing(&self) -> f32 {
        self.hex_width()
    }

    /// Rows overlap by a quarter of the hexagon height.
    pub fn vertical_spacing(&self) -> f32 {
        self.hex_height() * 0.75
    }

    /// Center of the hexagon at `point`.
    pub fn center(&self, point: Point) -> (f32, f32) {
        let hs = self.horizontal_spacing();
        let shift = if point.is_offset_row() { hs / 2.0 } else { 0.0 };
        let x = point.col as f32 * hs + shift + self.hex_width() / 2.0;
        let y = point.row as f32 * self.vertical_spacing() + self.hex_height() / 2.0;
        (x, y)
    }

    /// Corners of a hexagon centered at `(cx, cy)`, clockwise from the
    /// upper right.
    pub fn corners(&self, (cx, cy): (f32, f32)) -> [(f32, f32); 6] {
        std::array::from_fn(|i| {
            let angle = PI / 3.0 * i as f32 - PI / 6.0;
            (cx + self.size * angle.cos(), cy + self.size * angle.sin())
        })
    }

    /// Width of the canvas holding one glyph.
    pub fn glyph_width(&self) -> f32 {
        self.horizontal_spacing() * COLS as f32 + self.hex_width() / 2.0
    }

    /// Height of the canvas holding one glyph.
    pub fn glyph_height(&self) -> f32 {
        self.vertical_spacing() * ROWS as f32 + self.hex_height() / 4.0
    }
}

#[cfg(test)]
mod tests;
