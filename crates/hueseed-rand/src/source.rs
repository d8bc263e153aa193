// SPDX-License-Identifier: MIT
//
// The seam between a hue generator and whatever produces its randomness.
//
// A generator only ever asks for "the next real in [0, 1)" and, at the start
// of a call, "a fresh stream for this seed". Keeping those two questions in
// traits lets tests drive the generator from a scripted sequence and lets a
// host swap in a different engine when cross-implementation matching is not
// needed.

/// An endless stream of reals in [0, 1).
pub trait UnitSource {
    /// The next value of the stream, in [0, 1).
    fn next_unit(&mut self) -> f64;
}

/// A [`UnitSource`] constructed deterministically from a seed string.
///
/// Implementations must return an identical stream for identical seeds and
/// must not share state between instances.
pub trait SeededSource: UnitSource + Sized {
    /// Create a fresh stream keyed by `seed`.
    fn from_seed(seed: &str) -> Self;
}

impl<S: UnitSource + ?Sized> UnitSource for &mut S {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

impl<S: UnitSource + ?Sized> UnitSource for Box<S> {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}
