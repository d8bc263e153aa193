//! # hueseed-color — hue arithmetic and CSS color text
//!
//! The small amount of color math hueseed needs, kept apart from the
//! generator so it can be tested on its own:
//!
//! ```text
//! normalized hue [0, 1)
//!     │
//!     ▼
//! hue.rs:  circular distance, wrapping, degrees
//!     │
//!     ▼
//! hsl.rs:  Hsv(h°, S%, V%) → Hsl(h°, S%, L%) → "hsl(H, S%, L%)"
//! ```
//!
//! Distances are plain arc lengths on the hue circle. No perceptual model is
//! involved, and nothing here reasons about contrast.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]

pub mod hsl;
pub mod hue;

pub use hsl::{Hsl, Hsv, ParseHslError};
pub use hue::hue_difference;
