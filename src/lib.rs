// SPDX-License-Identifier: MIT
//
// hueseed — stable, mutually distinct display colors for version strings.
//
// A version string seeds a fresh pseudorandom stream, the stream proposes
// golden-ratio-stepped hues, and an optional avoid token steers the pick away
// from hues already handed out in the same session:
//
//   hueseed-rand   → Uheprng seeded from the version (bit-for-bit stable)
//   hueseed-color  → circular hue distance, HSV → HSL, hsl() text
//   this crate     → rejection sampling, AvoidToken, options, chains
//
// The same version always gets the same color, in every process, on every
// platform. Nothing here performs I/O or keeps global state.

//! Deterministic, visually distinct colors derived from version strings.
//!
//! ```
//! use hueseed::generate_color;
//!
//! let first = generate_color("1.0.0", None);
//! assert_eq!(first.color(), "hsl(69.07381712413859, 85%, 67%)");
//!
//! let second = generate_color("2.0.0", Some(first.avoid_token()));
//! assert_eq!(second.color(), "hsl(208.70505396112665, 85%, 67%)");
//! assert_eq!(second.avoid_token().all_hues(), &[first.hue(), second.hue()]);
//! ```

pub mod chain;
pub mod error;
pub mod generator;
pub mod options;
pub mod token;

pub use chain::{ColorChain, palette};
pub use error::Error;
pub use generator::{GeneratedColor, Generator};
pub use options::GeneratorOptions;
pub use token::AvoidToken;

pub use hueseed_color::{Hsl, Hsv, ParseHslError, hue_difference};
pub use hueseed_rand::{SeededSource, Uheprng, UnitSource};

/// Generate the color for `version` with the default options.
///
/// Pass the previous result's [`avoid_token`](GeneratedColor::avoid_token) to
/// keep the new color clear of every color generated before it.
#[must_use]
pub fn generate_color(version: &str, avoid: Option<&AvoidToken>) -> GeneratedColor {
    Generator::standard().generate(version, avoid)
}
