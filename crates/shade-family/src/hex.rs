//! Digit-level helpers that work directly on hex color strings.

use crate::error::ParseColorError;

/// Strip an optional leading `#`, validate and expand to six uppercase digits.
///
/// Three-digit shorthand doubles each digit (`F0A` becomes `FF00AA`).
pub(crate) fn expand_digits(hex: &str) -> Result<String, ParseColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    let count = digits.chars().count();
    if count != 3 && count != 6 {
        return Err(ParseColorError::InvalidLength(count));
    }
    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ParseColorError::InvalidDigit(bad));
    }

    let upper = digits.to_ascii_uppercase();
    if count == 3 {
        Ok(upper.chars().flat_map(|c| [c, c]).collect())
    } else {
        Ok(upper)
    }
}

/// Replace every digit with its 15's complement (`0` ↔ `F`, `1` ↔ `E`, ...).
///
/// This is a per-digit inversion of the RGB bytes, not a rotation in HSL
/// space. Input is normalized to six uppercase digits first, so `#F00` and
/// `#ff0000` both invert to `#00FFFF`.
pub fn invert(hex: &str) -> Result<String, ParseColorError> {
    let digits = expand_digits(hex)?;

    let mut out = String::with_capacity(7);
    out.push('#');
    for c in digits.chars() {
        // expand_digits guarantees a hex digit
        let value = c.to_digit(16).unwrap_or(0);
        let flipped = char::from_digit(15 - value, 16).unwrap_or('0');
        out.push(flipped.to_ascii_uppercase());
    }
    Ok(out)
}

/// Whether the red, green and blue bytes are identical.
///
/// Anything that is not a valid 3 or 6 digit hex color is reported as not
/// grayscale rather than as an error.
pub fn is_grayscale(hex: &str) -> bool {
    match expand_digits(hex) {
        Ok(digits) => digits[0..2] == digits[2..4] && digits[2..4] == digits[4..6],
        Err(_) => false,
    }
}

/// Alias of [`is_grayscale`].
pub fn is_greyscale(hex: &str) -> bool {
    is_grayscale(hex)
}

/// Whether `s` is a `#` followed by exactly 3 or 6 hex digits.
pub fn is_hex_color(s: &str) -> bool {
    match s.strip_prefix('#') {
        Some(digits) => {
            matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}
