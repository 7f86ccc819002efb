//! Read-only glyph lookup for text previews.
//!
//! Renderers never touch the catalog directly: they ask a [`GlyphSource`]
//! for each character and draw a placeholder for anything undesigned.

use crate::catalog::FontCatalog;
use crate::glyph::GlyphGrid;

/// Symbol shown in place of a character that has no glyph.
pub const MISSING_GLYPH: char = '\u{25a1}';

/// Read-only access to designed glyphs.
pub trait GlyphSource {
    /// The glyph for `ch`, or `None` if it has not been designed.
    fn glyph(&self, ch: char) -> Option<&GlyphGrid>;
}

impl GlyphSource for FontCatalog {
    fn glyph(&self, ch: char) -> Option<&GlyphGrid> {
        self.get(ch)
    }
}

/// One laid-out character of a preview line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewGlyph<'a> {
    Designed { ch: char, grid: &'a GlyphGrid },
    Missing(char),
}

impl<'a> PreviewGlyph<'a> {
    /// The character this slot stands for.
    pub fn ch(&self) -> char {
        match *self {
            Self::Designed { ch, .. } | Self::Missing(ch) => ch,
        }
    }

    /// The glyph, if designed.
    pub fn grid(&self) -> Option<&'a GlyphGrid> {
        match *self {
            Self::Designed { grid, .. } => Some(grid),
            Self::Missing(_) => None,
        }
    }
}

/// Look up every character of `text` in order.
pub fn layout<'a, S>(source: &'a S, text: &str) -> Vec<PreviewGlyph<'a>>
where
    S: GlyphSource + ?Sized,
{
    text.chars()
        .map(|ch| match source.glyph(ch) {
            Some(grid) => PreviewGlyph::Designed { ch, grid },
            None => PreviewGlyph::Missing(ch),
        })
        .collect()
}

#[cfg(test)]
mod tests;
