//! shade-family: classify hex colors into named families and generate
//! random shades of a family.
//!
//! # Quick Start
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use shade_family::{find_family, invert, Family};
//!
//! assert_eq!(find_family("#e58677"), Some("RED"));
//! assert_eq!(invert("#19547A").unwrap(), "#E6AB85");
//!
//! let blue = Family::new("BLUE").unwrap();
//! let mut rng = StdRng::seed_from_u64(1);
//! let shade = blue.random(&mut rng);
//! assert_eq!(shade.len(), 7);
//! ```
//!
//! # Families
//!
//! Nine families are defined, keyed by uppercase name: RED, ORANGE, YELLOW,
//! GREEN, CYAN, BLUE, PURPLE, MAGENTA and the catch-all ALL. Each one is a
//! [`Range`] of hue, saturation and luminosity. The RED hue range starts
//! below zero and wraps across 360°.
//!
//! # Randomness
//!
//! Sampling never touches a global generator: every sampling entry point
//! takes the random source as a parameter, so a seeded `StdRng` gives a
//! reproducible sequence and `StdRng::from_entropy()` gives fresh shades.

mod error;
mod family;
mod hex;
mod hsl;
mod range;

pub use error::{FamilyNotFound, ParseColorError};
pub use family::{find_family, list, Family, FamilyKey};
pub use hex::{invert, is_grayscale, is_greyscale, is_hex_color};
pub use hsl::{hex_to_hsl, hsl_to_hex, Hsl};
pub use range::Range;
