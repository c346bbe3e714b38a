//! The fixed table of color families and the operations over it.
//!
//! A family is a triple of HSL ranges; any color whose hue, saturation and
//! luminosity all fall inside the ranges is a shade of that family.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::FamilyNotFound;
use crate::hsl::Hsl;
use crate::range::Range;

/// A named set of HSL ranges around a base color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Family {
    /// Display name, e.g. "Red"
    pub name: &'static str,
    /// Canonical base color as six hex digits without '#'
    pub base: &'static str,
    pub hue: Range,
    pub sat: Range,
    pub lum: Range,
}

const RED: Family = Family {
    name: "Red",
    base: "FF0000",
    hue: Range::new(-10.0, 20.0),
    sat: Range::new(0.2, 1.0),
    lum: Range::new(0.2, 1.0),
};

const ORANGE: Family = Family {
    name: "Orange",
    base: "FFA500",
    hue: Range::new(21.0, 50.0),
    sat: Range::new(0.3, 1.0),
    lum: Range::new(0.4, 1.0),
};

const YELLOW: Family = Family {
    name: "Yellow",
    base: "FFFF00",
    hue: Range::new(51.0, 60.0),
    sat: Range::new(0.4, 1.0),
    lum: Range::new(0.63, 1.0),
};

const GREEN: Family = Family {
    name: "Green",
    base: "00FF00",
    hue: Range::new(81.0, 140.0),
    sat: Range::new(0.4, 1.0),
    lum: Range::new(0.3, 0.8),
};

const CYAN: Family = Family {
    name: "Cyan",
    base: "00FFFF",
    hue: Range::new(170.0, 200.0),
    sat: Range::new(0.25, 1.0),
    lum: Range::new(0.3, 1.0),
};

const BLUE: Family = Family {
    name: "Blue",
    base: "0000FF",
    hue: Range::new(221.0, 240.0),
    sat: Range::new(0.1, 1.0),
    lum: Range::new(0.2, 1.0),
};

const PURPLE: Family = Family {
    name: "Purple",
    base: "800080",
    hue: Range::new(241.0, 280.0),
    sat: Range::new(0.3, 1.0),
    lum: Range::new(0.4, 0.7),
};

const MAGENTA: Family = Family {
    name: "Magenta",
    base: "FF00FF",
    hue: Range::new(281.0, 320.0),
    sat: Range::new(0.35, 1.0),
    lum: Range::new(0.3, 0.7),
};

const ALL: Family = Family {
    name: "All",
    base: "FF00FF",
    hue: Range::new(0.0, 360.0),
    sat: Range::new(0.0, 1.0),
    lum: Range::new(0.0, 1.0),
};

/// Family table keyed by uppercase name, in ascending key order.
static TABLE: [(&str, Family); 9] = [
    ("ALL", ALL),
    ("BLUE", BLUE),
    ("CYAN", CYAN),
    ("GREEN", GREEN),
    ("MAGENTA", MAGENTA),
    ("ORANGE", ORANGE),
    ("PURPLE", PURPLE),
    ("RED", RED),
    ("YELLOW", YELLOW),
];

impl Family {
    /// Look up a family by its uppercase table key.
    ///
    /// The lookup is case-sensitive; callers normalize case first.
    pub fn new(key: &str) -> Result<Self, FamilyNotFound> {
        TABLE
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, family)| *family)
            .ok_or_else(|| FamilyNotFound(key.to_string()))
    }

    /// Whether the hex color is a shade of this family.
    ///
    /// Malformed hex input is simply not a member.
    pub fn contains(&self, hex: &str) -> bool {
        match hex.parse::<Hsl>() {
            Ok(hsl) => self.contains_hsl(hsl),
            Err(_) => false,
        }
    }

    pub fn contains_hsl(&self, hsl: Hsl) -> bool {
        self.hue.between(hsl.h) && self.sat.between(hsl.s) && self.lum.between(hsl.l)
    }

    /// Draw hue, saturation and luminosity independently from the ranges.
    pub fn random_hsl<R: Rng + ?Sized>(&self, rng: &mut R) -> Hsl {
        let h = self.hue.sample(rng);
        let s = self.sat.sample(rng);
        let l = self.lum.sample(rng);
        Hsl::new(h, s, l)
    }

    /// A random shade of this family as `#RRGGBB`.
    ///
    /// The same rng state always yields the same sequence of shades.
    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        self.random_hsl(rng).to_hex()
    }

    /// Base color with a leading '#'.
    pub fn base_hex(&self) -> String {
        format!("#{}", self.base)
    }
}

/// Every family key, sorted ascending (includes "ALL").
pub fn list() -> Vec<&'static str> {
    TABLE.iter().map(|(key, _)| *key).collect()
}

/// Key of the first family (in sorted key order) that contains the color.
///
/// The catch-all ALL family is never reported. Returns `None` when nothing
/// matches, including for malformed input.
pub fn find_family(hex: &str) -> Option<&'static str> {
    let hsl = hex.parse::<Hsl>().ok()?;
    TABLE
        .iter()
        .filter(|(key, _)| *key != "ALL")
        .find(|(_, family)| family.contains_hsl(hsl))
        .map(|(key, _)| *key)
}

/// The nine families as a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FamilyKey {
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Purple,
    Magenta,
    #[default]
    All,
}

impl FamilyKey {
    pub const VARIANTS: [FamilyKey; 9] = [
        FamilyKey::Red,
        FamilyKey::Orange,
        FamilyKey::Yellow,
        FamilyKey::Green,
        FamilyKey::Cyan,
        FamilyKey::Blue,
        FamilyKey::Purple,
        FamilyKey::Magenta,
        FamilyKey::All,
    ];

    /// Uppercase table key
    pub fn as_str(self) -> &'static str {
        match self {
            FamilyKey::Red => "RED",
            FamilyKey::Orange => "ORANGE",
            FamilyKey::Yellow => "YELLOW",
            FamilyKey::Green => "GREEN",
            FamilyKey::Cyan => "CYAN",
            FamilyKey::Blue => "BLUE",
            FamilyKey::Purple => "PURPLE",
            FamilyKey::Magenta => "MAGENTA",
            FamilyKey::All => "ALL",
        }
    }

    pub fn family(self) -> Family {
        match self {
            FamilyKey::Red => RED,
            FamilyKey::Orange => ORANGE,
            FamilyKey::Yellow => YELLOW,
            FamilyKey::Green => GREEN,
            FamilyKey::Cyan => CYAN,
            FamilyKey::Blue => BLUE,
            FamilyKey::Purple => PURPLE,
            FamilyKey::Magenta => MAGENTA,
            FamilyKey::All => ALL,
        }
    }
}

impl From<FamilyKey> for Family {
    fn from(key: FamilyKey) -> Self {
        key.family()
    }
}

impl fmt::Display for FamilyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FamilyKey {
    type Err = FamilyNotFound;

    /// Case-insensitive parse of a family key ("red", "Red", "RED").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        FamilyKey::VARIANTS
            .into_iter()
            .find(|key| key.as_str() == upper)
            .ok_or_else(|| FamilyNotFound(s.to_string()))
    }
}
