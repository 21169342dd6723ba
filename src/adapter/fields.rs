//! Field access and absence rules shared by the dataset mappings

use super::error::ParseError;
use crate::source::RawRow;

/// Placeholder for a missing identifier
pub const NOT_AVAILABLE: &str = "not available";
/// Placeholder for a missing free-text value
pub const UNKNOWN: &str = "Unknown";

/// A field is absent when it is blank or one of the placeholders.
pub fn is_absent(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty() || trimmed == NOT_AVAILABLE || trimmed == UNKNOWN
}

/// The raw value, unless it is absent
pub fn present(raw: &str) -> Option<&str> {
    if is_absent(raw) {
        None
    } else {
        Some(raw)
    }
}

/// Field at `index`; a row too short for the column contract is an error.
pub fn column(row: &RawRow, index: usize) -> Result<&str, ParseError> {
    row.field(index).ok_or(ParseError::MissingColumn {
        index,
        width: row.len(),
    })
}

pub fn parse_int(field: &str, raw: &str) -> Result<i64, ParseError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidInteger {
            field: field.to_string(),
            value: raw.to_string(),
        })
}

/// Integer when present; invalid text is an error, not an absence.
pub fn optional_int(field: &str, raw: &str) -> Result<Option<i64>, ParseError> {
    present(raw).map(|v| parse_int(field, v)).transpose()
}
