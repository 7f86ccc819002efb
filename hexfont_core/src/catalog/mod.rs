//! Font catalog: the in-memory font.
//!
//! Maps single characters to glyph grids. Iteration follows insertion order,
//! which fixes the byte layout of the encoded token; equality ignores order.

use std::collections::HashMap;

use log::{debug, info};

use crate::codec::{self, DecodeError, DecodeMode, DecodeReport};
use crate::glyph::GlyphGrid;

/// Token of the font every fresh catalog starts from.
///
/// Spells `HELLO WORLD` (plus `P`) with three-column letters and a blank
/// space glyph.
pub const DEFAULT_FONT_TOKEN: &str = "Po66v,A3eoh0,H3bvbp,E4etxz,L4etjl,O22wye,W3eo9h,R3bp7b,D22wyf, 0";

/// Insertion-ordered mapping from character to glyph.
#[derive(Debug, Clone, Default)]
pub struct FontCatalog {
    /// Glyphs in insertion order.
    entries: Vec<(char, GlyphGrid)>,
    /// Position of each character in `entries`.
    index: HashMap<char, usize>,
}

impl FontCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode `token` into a catalog, falling back to an empty one.
    ///
    /// Malformed records are skipped, so this never fails.
    pub fn bootstrap(token: &str) -> Self {
        let decoded = codec::decode(token);
        debug!(
            "catalog: bootstrapped {} glyphs ({} records skipped)",
            decoded.catalog.len(),
            decoded.skipped.len()
        );
        decoded.catalog
    }

    /// Store a copy of `grid` under `ch`, replacing any earlier glyph.
    pub fn save(&mut self, ch: char, grid: &GlyphGrid) {
        self.insert(ch, grid.clone());
    }

    /// Store `grid` under `ch` and return the glyph it replaced.
    ///
    /// A replaced glyph keeps its original position in iteration order.
    pub fn insert(&mut self, ch: char, grid: GlyphGrid) -> Option<GlyphGrid> {
        if let Some(&slot) = self.index.get(&ch) {
            return Some(std::mem::replace(&mut self.entries[slot].1, grid));
        }
        self.index.insert(ch, self.entries.len());
        self.entries.push((ch, grid));
        None
    }

    /// The glyph for `ch`, or an empty grid if it has not been designed.
    pub fn load(&self, ch: char) -> GlyphGrid {
        self.get(ch).cloned().unwrap_or_default()
    }

    /// The stored glyph for `ch`, if any.
    pub fn get(&self, ch: char) -> Option<&GlyphGrid> {
        self.index.get(&ch).map(|&slot| &self.entries[slot].1)
    }

    pub fn contains(&self, ch: char) -> bool {
        self.index.contains_key(&ch)
    }

    /// Number of designed glyphs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Glyphs in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (char, &GlyphGrid)> {
        self.entries.iter().map(|(ch, grid)| (*ch, grid))
    }

    /// Designed characters in insertion order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.iter().map(|(ch, _)| *ch)
    }

    /// Encode the catalog as a token.
    pub fn to_token(&self) -> String {
        codec::encode(self)
    }

    /// Replace the whole catalog with the one decoded from `token`.
    ///
    /// On error the catalog is left exactly as it was.
    pub fn replace_from_token(
        &mut self,
        token: &str,
        mode: DecodeMode,
    ) -> Result<DecodeReport, DecodeError> {
        let decoded = codec::decode_with(token, mode)?;
        let report = DecodeReport {
            glyphs: decoded.catalog.len(),
            skipped: decoded.skipped,
        };
        *self = decoded.catalog;
        info!(
            "catalog: replaced with {} glyphs ({} records skipped)",
            report.glyphs,
            report.skipped.len()
        );
        Ok(report)
    }
}

/// Two catalogs are equal when they hold the same glyphs, in any order.
impl PartialEq for FontCatalog {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .entries()
                .all(|(ch, grid)| other.get(ch).is_some_and(|g| g == grid))
    }
}

impl Eq for FontCatalog {}

impl FromIterator<(char, GlyphGrid)> for FontCatalog {
    fn from_iter<I: IntoIterator<Item = (char, GlyphGrid)>>(iter: I) -> Self {
        let mut catalog = Self::new();
        catalog.extend(iter);
        catalog
    }
}

impl Extend<(char, GlyphGrid)> for FontCatalog {
    fn extend<I: IntoIterator<Item = (char, GlyphGrid)>>(&mut self, iter: I) {
        for (ch, grid) in iter {
            self.insert(ch, grid);
        }
    }
}

#[cfg(test)]
mod tests;
