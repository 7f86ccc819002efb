//! Text previews rendered with a hex font.
//!
//! Both renderers go through [`preview::layout`], so they only ever read
//! glyphs and draw a placeholder for undesigned characters.

pub mod svg;

use hexfont_core::preview::{self, GlyphSource, MISSING_GLYPH, PreviewGlyph};
use hexfont_core::{COLS, GlyphGrid, ROWS};

/// Width of one glyph in the ASCII preview, in columns.
pub const ASCII_GLYPH_WIDTH: usize = 2 * COLS;

/// Blank columns between glyphs in the ASCII preview.
const ASCII_GAP: &str = "  ";

/// Row of an undesigned glyph that carries the placeholder.
const PLACEHOLDER_ROW: usize = ROWS / 2 - 1;

/// Render `text` as ASCII art, one block of six lines per text line.
///
/// Blocks are separated by an empty line and trailing spaces are trimmed.
pub fn ascii<S: GlyphSource + ?Sized>(source: &S, text: &str) -> String {
    let mut blocks = Vec::new();
    for line in text.lines() {
        let slots = preview::layout(source, line);
        let rows: Vec<String> = (0..ROWS)
            .map(|row| {
                let segments: Vec<String> = slots.iter().map(|slot| segment(slot, row)).collect();
                segments.join(ASCII_GAP).trim_end().to_owned()
            })
            .collect();
        blocks.push(rows.join("\n"));
    }
    blocks.join("\n\n")
}

/// One glyph row, padded to [`ASCII_GLYPH_WIDTH`].
fn segment(slot: &PreviewGlyph<'_>, row: usize) -> String {
    let mut out = match slot.grid() {
        Some(grid) => grid_row(grid, row),
        None if row == PLACEHOLDER_ROW => format!("{:>4}", MISSING_GLYPH),
        None => String::new(),
    };
    let pad = ASCII_GLYPH_WIDTH.saturating_sub(out.chars().count());
    out.extend(std::iter::repeat_n(' ', pad));
    out
}

fn grid_row(grid: &GlyphGrid, row: usize) -> String {
    let mut out = String::with_capacity(ASCII_GLYPH_WIDTH);
    if row % 2 == 1 {
        out.push(' ');
    }
    for col in 0..COLS {
        if col > 0 {
            out.push(' ');
        }
        out.push(if grid.get(row, col) { '#' } else { '.' });
    }
    out
}

#[cfg(test)]
mod tests;
