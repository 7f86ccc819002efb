//! Import of first-generation font tokens.
//!
//! The first token format was standard base64 over `C:bits;C:bits;…`, where
//! `bits` is 18 `0`/`1` characters covering a 6×3 grid in row-major order.
//! Imported glyphs land in the three leftmost columns of the current grid.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use log::debug;

use super::{Decoded, DecodeError, RecordError, SkippedRecord};
use crate::catalog::FontCatalog;
use crate::glyph::{GlyphGrid, ROWS};

/// Columns in a first-generation glyph.
pub const LEGACY_COLS: usize = 3;

/// Cells in a first-generation glyph.
pub const LEGACY_CELLS: usize = ROWS * LEGACY_COLS;

const LEGACY_SEPARATOR: char = ';';

/// Decode one `C:bits` record.
pub fn decode_record(record: &str) -> Result<(char, GlyphGrid), RecordError> {
    let mut chars = record.chars();
    let ch = chars.next().ok_or(RecordError::Empty)?;
    let bits = chars
        .as_str()
        .strip_prefix(':')
        .ok_or(RecordError::MissingSeparator)?;
    if bits.is_empty() {
        return Err(RecordError::MissingValue);
    }

    let found = bits.chars().count();
    if found != LEGACY_CELLS {
        return Err(RecordError::Length {
            expected: LEGACY_CELLS,
            found,
        });
    }

    let mut grid = GlyphGrid::new();
    for (i, digit) in bits.chars().enumerate() {
        let on = match digit {
            '1' => true,
            '0' => false,
            _ => return Err(RecordError::InvalidDigit { digit }),
        };
        grid.set(i / LEGACY_COLS, i % LEGACY_COLS, on);
    }
    Ok((ch, grid))
}

/// Decode a first-generation token.
///
/// Bad base64 or a non-UTF-8 payload fails the whole import; individual
/// malformed records are skipped as in the current format.
pub fn decode(token: &str) -> Result<Decoded, DecodeError> {
    let payload = String::from_utf8(STANDARD.decode(token.trim())?)?;
    let mut catalog = FontCatalog::new();
    let mut skipped = Vec::new();

    if payload.is_empty() {
        return Ok(Decoded { catalog, skipped });
    }

    for (index, record) in payload.split(LEGACY_SEPARATOR).enumerate() {
        match decode_record(record) {
            Ok((ch, grid)) => {
                catalog.insert(ch, grid);
            }
            Err(reason) => {
                debug!("legacy: skipping record {index} ({record:?}): {reason}");
                skipped.push(SkippedRecord {
                    index,
                    record: record.to_owned(),
                    reason,
                });
            }
        }
    }

    Ok(Decoded { catalog, skipped })
}
