// SPDX-License-Identifier: MIT
//
// The generator: seed → candidate hues → rejection sampling → hsl() text.
//
//   for each attempt (at most `max_attempts`):
//       r   = source.next_unit()                    fresh stream per call
//       hue = (r + golden) mod 1                    spreads successive draws
//       accept if no token, or hue is ≥ 0.25 from the adjacent hue
//                               and ≥ 0.05 from every earlier hue
//   if nothing was accepted, keep the last candidate
//
// The avoidance is best effort: a crowded token can exhaust the attempts, in
// which case the last candidate wins and `GeneratedColor::is_distinct` is
// false. That is a normal outcome, not an error.

use std::fmt;
use std::marker::PhantomData;

use log::{debug, trace};

use hueseed_color::hue::{hue_difference, to_degrees, wrap_unit};
use hueseed_color::{Hsl, Hsv};
use hueseed_rand::{SeededSource, Uheprng, UnitSource};

use crate::error::Error;
use crate::options::GeneratorOptions;
use crate::token::AvoidToken;

// ─── GeneratedColor ─────────────────────────────────────────────────────────

/// One generated color and the token to pass to the next call.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedColor {
    color: String,
    hsl: Hsl,
    hue: f64,
    attempts: u32,
    distinct: bool,
    avoid_token: AvoidToken,
}

impl GeneratedColor {
    /// The color as `hsl(H, S%, L%)` text.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// The color as a structured value.
    #[must_use]
    pub const fn hsl(&self) -> Hsl {
        self.hsl
    }

    /// The accepted hue, normalized to [0, 1).
    #[must_use]
    pub const fn hue(&self) -> f64 {
        self.hue
    }

    /// How many candidates were drawn, 1 to `max_attempts`.
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    /// `false` when every candidate collided and the last one was kept.
    #[must_use]
    pub const fn is_distinct(&self) -> bool {
        self.distinct
    }

    /// The token extending the one this color was generated against.
    #[must_use]
    pub const fn avoid_token(&self) -> &AvoidToken {
        &self.avoid_token
    }

    /// Split into the color text and the new token.
    #[must_use]
    pub fn into_parts(self) -> (String, AvoidToken) {
        (self.color, self.avoid_token)
    }
}

impl fmt::Display for GeneratedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.color)
    }
}

// ─── Generator ──────────────────────────────────────────────────────────────

/// A color generator over a seeded source `S`.
///
/// Holds only options. Every call seeds a fresh `S` from the version
/// string, so a generator can be shared freely across threads.
///
/// ```
/// use hueseed::{Generator, GeneratorOptions};
///
/// let generator = Generator::standard();
/// let first = generator.generate("1.0.0", None);
/// let second = generator.generate("2.0.0", Some(first.avoid_token()));
/// assert_eq!(second.avoid_token().len(), 2);
///
/// let strict = GeneratorOptions { max_attempts: 500, ..GeneratorOptions::new() };
/// let generator = Generator::<hueseed::Uheprng>::new(strict).unwrap();
/// assert_eq!(generator.options().max_attempts, 500);
/// ```
#[derive(Debug, Clone)]
pub struct Generator<S = Uheprng> {
    options: GeneratorOptions,
    source: PhantomData<fn() -> S>,
}

impl Generator<Uheprng> {
    /// The standard generator: default options over UHEPRNG.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            options: GeneratorOptions::new(),
            source: PhantomData,
        }
    }
}

impl Default for Generator<Uheprng> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<S: SeededSource> Generator<S> {
    /// Build a generator with custom options.
    pub fn new(options: GeneratorOptions) -> Result<Self, Error> {
        options.validate()?;
        Ok(Self {
            options,
            source: PhantomData,
        })
    }

    #[must_use]
    pub const fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Generate the color for `version`, keeping clear of `avoid`.
    #[must_use]
    pub fn generate(&self, version: &str, avoid: Option<&AvoidToken>) -> GeneratedColor {
        let mut source = S::from_seed(version);
        self.generate_from(&mut source, avoid)
    }
}

impl<S> Generator<S> {
    /// Generate from an already seeded stream.
    ///
    /// [`generate`](Generator::generate) calls this with a fresh source; it
    /// is exposed for hosts that manage their own streams.
    #[must_use]
    pub fn generate_from<U>(&self, source: &mut U, avoid: Option<&AvoidToken>) -> GeneratedColor
    where
        U: UnitSource + ?Sized,
    {
        let (hue, attempts, distinct) = match avoid {
            None => (self.candidate(source), 1, true),
            Some(token) => self.sample_avoiding(source, token),
        };
        self.finish(hue, attempts, distinct, avoid)
    }

    /// Draw candidates until one clears `token` or attempts run out.
    fn sample_avoiding<U>(&self, source: &mut U, token: &AvoidToken) -> (f64, u32, bool)
    where
        U: UnitSource + ?Sized,
    {
        let max = self.options.max_attempts;
        let mut attempts = 1;
        let mut hue = self.candidate(source);
        while self.collides(hue, token) {
            if attempts >= max {
                debug!(
                    "no hue clears {} earlier hues after {max} attempts, keeping {hue}",
                    token.len()
                );
                return (hue, attempts, false);
            }
            trace!("candidate {attempts} rejected: {hue}");
            hue = self.candidate(source);
            attempts += 1;
        }
        (hue, attempts, true)
    }

    /// One golden-ratio-stepped candidate hue.
    fn candidate<U>(&self, source: &mut U) -> f64
    where
        U: UnitSource + ?Sized,
    {
        wrap_unit(source.next_unit() + self.options.hue_offset)
    }

    /// `true` if `hue` is too close to the adjacent hue or any earlier hue.
    fn collides(&self, hue: f64, token: &AvoidToken) -> bool {
        hue_difference(hue, token.adjacent_hue()) < self.options.adjacent_threshold
            || token
                .all_hues()
                .iter()
                .any(|&other| hue_difference(hue, other) < self.options.all_threshold)
    }

    fn finish(
        &self,
        hue: f64,
        attempts: u32,
        distinct: bool,
        avoid: Option<&AvoidToken>,
    ) -> GeneratedColor {
        let hsl = Hsv::new(
            to_degrees(hue),
            self.options.saturation * 100.0,
            self.options.value * 100.0,
        )
        .to_hsl();
        GeneratedColor {
            color: hsl.to_string(),
            hsl,
            hue,
            attempts,
            distinct,
            avoid_token: AvoidToken::after(avoid, hue),
        }
    }
}
