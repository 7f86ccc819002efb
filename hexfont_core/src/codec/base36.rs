//! Base-36 digits for packed glyph values.

use super::RecordError;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Lowercase base-36 form of `value`, no sign, no padding.
pub(super) fn encode(mut value: u32) -> String {
    if value == 0 {
        return "0".to_owned();
    }
    let mut buf = Vec::with_capacity(7);
    while value > 0 {
        buf.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    buf.iter().rev().map(|&b| char::from(b)).collect()
}

/// Parse base-36 digits. Letters may be either case; signs and
/// whitespace are rejected.
pub(super) fn decode(digits: &str) -> Result<u32, RecordError> {
    if digits.is_empty() {
        return Err(RecordError::MissingValue);
    }
    digits.chars().try_fold(0u32, |value, digit| {
        let d = digit.to_digit(36).ok_or(RecordError::InvalidDigit { digit })?;
        value
            .checked_mul(36)
            .and_then(|v| v.checked_add(d))
            .ok_or(RecordError::Overflow)
    })
}
