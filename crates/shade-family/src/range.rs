//! Closed numeric intervals over HSL components.

use rand::Rng;

/// A closed interval `[bottom, top]`.
///
/// A negative `bottom` marks a hue interval that wraps across 0°: it covers
/// `360 + bottom ..= 360` followed by `0 ..= top`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub bottom: f64,
    pub top: f64,
}

impl Range {
    #[inline]
    pub const fn new(bottom: f64, top: f64) -> Self {
        Self { bottom, top }
    }

    /// Whether `value` lies within the range.
    ///
    /// For wrapping ranges, values at or past `360 + bottom` are mapped to
    /// their negative equivalent angle before comparing.
    pub fn between(&self, value: f64) -> bool {
        let mut value = value;
        if self.bottom < 0.0 {
            let diff = 360.0 + self.bottom;
            if value >= diff {
                value = -(360.0 - value);
            }
        }
        value >= self.bottom && value <= self.top
    }

    /// Uniform draw over the literal `[bottom, top]` span.
    ///
    /// Wrapping ranges may yield a negative value; the HSL to hex
    /// conversion folds it back into `[0, 360)`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.gen::<f64>() * (self.top - self.bottom) + self.bottom
    }
}
