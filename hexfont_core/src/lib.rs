//! Core data structures and codec for hexagonal bitmap fonts.
//!
//! This crate provides the glyph grid, the font catalog that maps characters
//! to glyphs, and the token codec that packs a whole font into a short
//! base-36 string. It has no platform-specific code.

#![deny(unsafe_code)]

pub mod catalog;
pub mod codec;
pub mod glyph;
pub mod index;
pub mod preview;

pub use catalog::{DEFAULT_FONT_TOKEN, FontCatalog};
pub use codec::{DecodeError, DecodeMode, DecodeReport, Decoded, RecordError, SkippedRecord};
pub use glyph::{CELLS, COLS, GlyphBits, GlyphGrid, ParseGlyphError, ROW_STRIDE, ROWS};
pub use index::Point;
pub use preview::{GlyphSource, PreviewGlyph};
