//! Error types for color parsing and family lookup.

use thiserror::Error;

/// Error type for parsing hex color strings.
///
/// Returned when a hex color string has the wrong number of digits or
/// contains a character that is not a hexadecimal digit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Digit count (after stripping '#') is not 3 or 6
    #[error("invalid hex color length {0} (expected 3 or 6 digits)")]
    InvalidLength(usize),
    /// Character that is not a hexadecimal digit
    #[error("invalid hex digit: {0:?}")]
    InvalidDigit(char),
}

/// Requested family key is not in the family table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a valid color family: {0:?}")]
pub struct FamilyNotFound(pub String);
