//! Font token codec.
//!
//! A token is a comma-separated list of records. Each record is one
//! character followed by the base-36 form of the glyph's packed bits:
//!
//! ```text
//! A4zsox,B0,C1a2b
//! ```
//!
//! Decoding is best effort. A record with no character, no digits, or a
//! digit outside base 36 is skipped and decoding carries on with the next
//! one; [`DecodeMode::Strict`] turns the first such record into an error.

mod base36;
pub mod legacy;

use log::{debug, warn};

use crate::catalog::FontCatalog;
use crate::glyph::{GlyphBits, GlyphGrid};

/// Separator between records.
pub const RECORD_SEPARATOR: char = ',';

/// Why a single record could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("empty record")]
    Empty,
    #[error("no glyph value after the character")]
    MissingValue,
    #[error("missing ':' after the character")]
    MissingSeparator,
    #[error("invalid digit {digit:?}")]
    InvalidDigit { digit: char },
    #[error("glyph value does not fit in 32 bits")]
    Overflow,
    #[error("expected {expected} cells, found {found}")]
    Length { expected: usize, found: usize },
}

/// Token-level decode failure. The caller's catalog stays untouched.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("record {index} ({record:?}): {reason}")]
    Malformed {
        index: usize,
        record: String,
        reason: RecordError,
    },
    #[error("legacy token is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("legacy token is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// How to treat malformed records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeMode {
    /// Skip malformed records and keep going.
    #[default]
    Lenient,
    /// Fail on the first malformed record.
    Strict,
}

/// A record that was dropped during decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// Position of the record in the token (0-based).
    pub index: usize,
    /// The record text as it appeared in the token.
    pub record: String,
    pub reason: RecordError,
}

/// Result of a successful decode.
#[derive(Debug, Clone)]
pub struct Decoded {
    pub catalog: FontCatalog,
    pub skipped: Vec<SkippedRecord>,
}

/// Summary of a catalog replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeReport {
    /// Number of glyphs in the new catalog.
    pub glyphs: usize,
    pub skipped: Vec<SkippedRecord>,
}

/// Encode a single glyph record.
pub fn encode_record(ch: char, grid: &GlyphGrid) -> String {
    let mut record = String::with_capacity(8);
    record.push(ch);
    record.push_str(&base36::encode(grid.flatten().raw()));
    record
}

/// Encode the whole catalog, records in insertion order.
pub fn encode(catalog: &FontCatalog) -> String {
    let mut token = String::new();
    for (i, (ch, grid)) in catalog.entries().enumerate() {
        if ch == RECORD_SEPARATOR {
            warn!("codec: glyph for {ch:?} cannot be decoded again");
        }
        if i > 0 {
            token.push(RECORD_SEPARATOR);
        }
        token.push_str(&encode_record(ch, grid));
    }
    token
}

/// Decode one record into its character and glyph.
pub fn decode_record(record: &str) -> Result<(char, GlyphGrid), RecordError> {
    let mut chars = record.chars();
    let ch = chars.next().ok_or(RecordError::Empty)?;
    let value = base36::decode(chars.as_str())?;
    if value & !GlyphBits::MASK != 0 {
        debug!("codec: {ch:?} value {value:#x} has bits past the last cell, dropping them");
    }
    Ok((ch, GlyphGrid::unflatten(GlyphBits::from_raw(value))))
}

/// Decode a token, skipping malformed records.
///
/// An empty token yields an empty catalog. Trailing whitespace (a newline
/// from a paste) is ignored; every record ends in a digit, so no record is
/// lost to the trim.
pub fn decode(token: &str) -> Decoded {
    let token = token.trim_end();
    let mut catalog = FontCatalog::new();
    let mut skipped = Vec::new();

    if token.is_empty() {
        return Decoded { catalog, skipped };
    }

    for (index, record) in token.split(RECORD_SEPARATOR).enumerate() {
        match decode_record(record) {
            Ok((ch, grid)) => {
                catalog.insert(ch, grid);
            }
            Err(reason) => {
                debug!("codec: skipping record {index} ({record:?}): {reason}");
                skipped.push(SkippedRecord {
                    index,
                    record: record.to_owned(),
                    reason,
                });
            }
        }
    }

    Decoded { catalog, skipped }
}

/// Decode a token, failing on the first malformed record.
pub fn decode_strict(token: &str) -> Result<FontCatalog, DecodeError> {
    let decoded = decode(token);
    match decoded.skipped.into_iter().next() {
        Some(first) => Err(first.into()),
        None => Ok(decoded.catalog),
    }
}

/// Decode a token with the given malformed-record policy.
pub fn decode_with(token: &str, mode: DecodeMode) -> Result<Decoded, DecodeError> {
    match mode {
        DecodeMode::Lenient => Ok(decode(token)),
        DecodeMode::Strict => decode_strict(token).map(|catalog| Decoded {
            catalog,
            skipped: Vec::new(),
        }),
    }
}

impl From<SkippedRecord> for DecodeError {
    fn from(skipped: SkippedRecord) -> Self {
        Self::Malformed {
            index: skipped.index,
            record: skipped.record,
            reason: skipped.reason,
        }
    }
}
