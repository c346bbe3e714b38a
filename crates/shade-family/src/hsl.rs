//! RGB ↔ HSL conversion for hex color strings.
//!
//! Hue is measured in degrees within `[0, 360)`; saturation and luminosity
//! are normalized to `[0, 1]`.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseColorError;
use crate::hex::expand_digits;

/// A color in Hue/Saturation/Luminosity form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees
    pub h: f64,
    /// Saturation (0.0..=1.0)
    pub s: f64,
    /// Luminosity (0.0..=1.0)
    pub l: f64,
}

impl Hsl {
    #[inline]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Convert 8-bit RGB channels to HSL.
    pub fn from_rgb([r, g, b]: [u8; 3]) -> Self {
        let r = f64::from(r) / 255.0;
        let g = f64::from(g) / 255.0;
        let b = f64::from(b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Self::new(0.0, 0.0, l);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let sector = if max == r {
            ((g - b) / d).rem_euclid(6.0)
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        let mut h = sector * 60.0;
        if h >= 360.0 {
            h -= 360.0;
        }

        Self::new(h, s, l)
    }

    /// Convert to 8-bit RGB channels.
    ///
    /// Hue is folded into `[0, 360)` first, so negative hues from wrapping
    /// ranges are accepted. Saturation and luminosity are clamped.
    pub fn to_rgb(self) -> [u8; 3] {
        let h = self.h.rem_euclid(360.0);
        let s = self.s.clamp(0.0, 1.0);
        let l = self.l.clamp(0.0, 1.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let hp = h / 60.0;
        let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match hp as u8 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        [to_channel(r + m), to_channel(g + m), to_channel(b + m)]
    }

    /// Format as `#RRGGBB` with uppercase digits.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb();
        format!("#{r:02X}{g:02X}{b:02X}")
    }
}

#[inline]
fn to_channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

impl FromStr for Hsl {
    type Err = ParseColorError;

    /// Parse a hex color (`#RRGGBB`, `RRGGBB`, `#RGB` or `RGB`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = expand_digits(s)?;
        let channel = |i: usize| -> Result<u8, ParseColorError> {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ParseColorError::InvalidDigit(digits.as_bytes()[i] as char))
        };
        Ok(Self::from_rgb([channel(0)?, channel(2)?, channel(4)?]))
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({:.1}, {:.3}, {:.3})", self.h, self.s, self.l)
    }
}

/// Parse a hex color string into its HSL triple.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl, ParseColorError> {
    hex.parse()
}

/// Format an HSL triple as an uppercase `#RRGGBB` string.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    Hsl::new(h, s, l).to_hex()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_hsl(hex: &str, h: f64, s: f64, l: f64) {
        let hsl = hex_to_hsl(hex).unwrap();
        assert!((hsl.h - h).abs() < 0.5, "{hex}: hue {} != {h}", hsl.h);
        assert!((hsl.s - s).abs() < 0.005, "{hex}: sat {} != {s}", hsl.s);
        assert!((hsl.l - l).abs() < 0.005, "{hex}: lum {} != {l}", hsl.l);
    }

    #[test]
    fn test_primaries() {
        assert_hsl("#FF0000", 0.0, 1.0, 0.5);
        assert_hsl("#00FF00", 120.0, 1.0, 0.5);
        assert_hsl("#0000FF", 240.0, 1.0, 0.5);
        assert_hsl("#FFFFFF", 0.0, 0.0, 1.0);
        assert_hsl("#000000", 0.0, 0.0, 0.0);
    }

    #[test]
    fn test_mixed_colors() {
        assert_hsl("#e58677", 8.2, 0.68, 0.682);
        assert_hsl("#7a87e2", 232.5, 0.642, 0.682);
        assert_hsl("#55e74c", 116.5, 0.763, 0.602);
        // Reds just below 360° stay in [0, 360)
        assert_hsl("#72393d", 355.8, 0.333, 0.335);
    }

    #[test]
    fn test_parse_forms() {
        let full = hex_to_hsl("#FF0000").unwrap();
        assert_eq!(hex_to_hsl("FF0000").unwrap(), full);
        assert_eq!(hex_to_hsl("#F00").unwrap(), full);
        assert_eq!(hex_to_hsl("f00").unwrap(), full);
        assert_eq!(hex_to_hsl("#ff0000").unwrap(), full);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(hex_to_hsl(""), Err(ParseColorError::InvalidLength(0)));
        assert_eq!(hex_to_hsl("#FF00"), Err(ParseColorError::InvalidLength(4)));
        assert_eq!(
            hex_to_hsl("#1234567"),
            Err(ParseColorError::InvalidLength(7))
        );
        assert_eq!(
            hex_to_hsl("#afafah"),
            Err(ParseColorError::InvalidDigit('h'))
        );
        assert!(hex_to_hsl("notacolor").is_err());
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(hsl_to_hex(0.0, 1.0, 0.5), "#FF0000");
        assert_eq!(hsl_to_hex(120.0, 1.0, 0.5), "#00FF00");
        assert_eq!(hsl_to_hex(240.0, 1.0, 0.5), "#0000FF");
        assert_eq!(hsl_to_hex(0.0, 0.0, 1.0), "#FFFFFF");
        assert_eq!(hsl_to_hex(0.0, 0.0, 0.0), "#000000");
    }

    #[test]
    fn test_to_hex_wraps_negative_hue() {
        assert_eq!(hsl_to_hex(-120.0, 1.0, 0.5), "#0000FF");
        assert_eq!(hsl_to_hex(-10.0, 0.2, 0.2), hsl_to_hex(350.0, 0.2, 0.2));
        assert_eq!(hsl_to_hex(360.0, 1.0, 0.5), "#FF0000");
    }

    #[test]
    fn test_to_hex_clamps_out_of_range() {
        assert_eq!(hsl_to_hex(0.0, 2.0, 0.5), "#FF0000");
        assert_eq!(hsl_to_hex(0.0, 1.0, 1.5), "#FFFFFF");
        assert_eq!(hsl_to_hex(0.0, 1.0, -0.5), "#000000");
    }

    #[test]
    fn test_round_trip_base_colors() {
        let bases = [
            "#FF0000", "#FFA500", "#FFFF00", "#00FF00", "#00FFFF", "#0000FF", "#800080",
            "#FF00FF",
        ];
        for hex in bases {
            let hsl = hex_to_hsl(hex).unwrap();
            assert_eq!(hsl.to_hex(), hex, "round trip of {hex} via {hsl}");
        }
    }
}
