// SPDX-License-Identifier: MIT
//
// hueseed-rand — seeded pseudorandom source for hueseed.
//
// A string goes in, an endless stream of reals in [0, 1) comes out, and the
// same string always yields the same stream on every platform. The engine is
// Gibson Research's Ultra-High-Entropy PRNG: a lag-48 multiply-with-carry
// generator whose 48 state words are stirred by the Mash string hash.
//
//   seed ──► clean ──► Mash ──► 48 state words ──► MWC step ──► 53-bit fraction
//
// Everything is plain IEEE-754 f64 arithmetic, evaluated in a fixed order.
// No fused multiply-add, no platform RNG, no global state: each generator is
// a value the caller owns, so two generators never interfere.

pub mod mash;
pub mod source;
pub mod uheprng;

pub use mash::Mash;
pub use source::{SeededSource, UnitSource};
pub use uheprng::Uheprng;
