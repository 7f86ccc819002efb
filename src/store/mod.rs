//! Shared font store.
//!
//! `FontStore` owns the one live `FontCatalog`. Every mutation (saving a
//! glyph, replacing the font from a token) takes the write lock, so a
//! wholesale replacement can never interleave with a save. Readers take the
//! read lock and see either the old catalog or the new one.

use log::{info, warn};
use parking_lot::RwLock;

use hexfont_core::codec::legacy;
use hexfont_core::{
    DEFAULT_FONT_TOKEN, DecodeError, DecodeMode, DecodeReport, FontCatalog, GlyphGrid,
};

/// Single-writer holder of the live font.
#[derive(Debug, Default)]
pub struct FontStore {
    catalog: RwLock<FontCatalog>,
}

impl FontStore {
    /// Create a store around an existing catalog.
    pub fn new(catalog: FontCatalog) -> Self {
        Self {
            catalog: RwLock::new(catalog),
        }
    }

    /// Start from a persisted token, or the built-in font when there is none.
    ///
    /// Never fails: undecodable input leaves an empty font.
    pub fn bootstrap(token: Option<&str>) -> Self {
        Self::new(FontCatalog::bootstrap(token.unwrap_or(DEFAULT_FONT_TOKEN)))
    }

    /// Store a copy of `grid` under `ch`.
    pub fn save(&self, ch: char, grid: &GlyphGrid) {
        self.catalog.write().save(ch, grid);
    }

    /// The glyph for `ch`, or an empty grid.
    pub fn load(&self, ch: char) -> GlyphGrid {
        self.catalog.read().load(ch)
    }

    /// Encode the live font.
    pub fn token(&self) -> String {
        self.catalog.read().to_token()
    }

    /// Clone of the live font.
    pub fn snapshot(&self) -> FontCatalog {
        self.catalog.read().clone()
    }

    /// Run `f` against the live font under the read lock.
    pub fn with_catalog<R>(&self, f: impl FnOnce(&FontCatalog) -> R) -> R {
        f(&self.catalog.read())
    }

    /// Replace the live font from a token; unchanged on error.
    pub fn replace_from_token(
        &self,
        token: &str,
        mode: DecodeMode,
    ) -> Result<DecodeReport, DecodeError> {
        let result = self.catalog.write().replace_from_token(token, mode);
        if let Err(e) = &result {
            warn!("store: keeping current font, token rejected: {e}");
        }
        result
    }

    /// Replace the live font from a first-generation token; unchanged on
    /// error.
    pub fn import_legacy(&self, token: &str) -> Result<DecodeReport, DecodeError> {
        let decoded = legacy::decode(token)?;
        let report = DecodeReport {
            glyphs: decoded.catalog.len(),
            skipped: decoded.skipped,
        };
        info!(
            "store: imported {} legacy glyphs ({} records skipped)",
            report.glyphs,
            report.skipped.len()
        );
        *self.catalog.write() = decoded.catalog;
        Ok(report)
    }

    /// Replace the live font with `catalog`.
    pub fn reset_to(&self, catalog: FontCatalog) {
        *self.catalog.write() = catalog;
    }
}
