// SPDX-License-Identifier: MIT
//
// ColorChain — a session of mutually distinct colors.
//
// Threading the token by hand is easy to get wrong (pass the old token, drop
// one, reorder). A chain owns the token between calls and hands back each
// color as it is made. It is exactly equivalent to calling the generator
// with the previous result's token every time.

use hueseed_rand::{SeededSource, Uheprng};

use crate::generator::{GeneratedColor, Generator};
use crate::token::AvoidToken;

/// A caller-held sequence of colors, each avoiding all earlier ones.
///
/// ```
/// use hueseed::ColorChain;
///
/// let mut chain = ColorChain::new();
/// let a = chain.generate("1.0.0");
/// let b = chain.generate("2.0.0");
/// assert_ne!(a.color(), b.color());
/// assert_eq!(chain.hues(), &[a.hue(), b.hue()]);
/// ```
#[derive(Debug, Clone)]
pub struct ColorChain<S = Uheprng> {
    generator: Generator<S>,
    token: Option<AvoidToken>,
}

impl ColorChain<Uheprng> {
    /// An empty chain over the standard generator.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_generator(Generator::standard())
    }
}

impl Default for ColorChain<Uheprng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SeededSource> ColorChain<S> {
    /// An empty chain over `generator`.
    #[must_use]
    pub const fn with_generator(generator: Generator<S>) -> Self {
        Self { generator, token: None }
    }

    /// Continue a chain from a token saved earlier.
    #[must_use]
    pub const fn resume(generator: Generator<S>, token: AvoidToken) -> Self {
        Self {
            generator,
            token: Some(token),
        }
    }

    /// Generate the next color and remember it.
    pub fn generate(&mut self, version: &str) -> GeneratedColor {
        let color = self.generator.generate(version, self.token.as_ref());
        self.token = Some(color.avoid_token().clone());
        color
    }

    /// The token to hand to the next call, if any color has been made.
    #[must_use]
    pub const fn token(&self) -> Option<&AvoidToken> {
        self.token.as_ref()
    }

    /// Every hue generated so far, oldest first.
    #[must_use]
    pub fn hues(&self) -> &[f64] {
        self.token.as_ref().map_or(&[][..], AvoidToken::all_hues)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.hues().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hues().is_empty()
    }

    /// Give up the chain, keeping its token.
    #[must_use]
    pub fn into_token(self) -> Option<AvoidToken> {
        self.token
    }
}

/// Colors for `versions` in order, each avoiding every earlier one.
pub fn palette<I, V>(versions: I) -> Vec<GeneratedColor>
where
    I: IntoIterator<Item = V>,
    V: AsRef<str>,
{
    let mut chain = ColorChain::new();
    versions
        .into_iter()
        .map(|version| chain.generate(version.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const VERSIONS: [&str; 5] = ["1.0.0", "1.1.0", "1.2.0", "2.0.0", "2.1.0"];

    #[test]
    fn chain_matches_manual_threading() {
        let generator = Generator::standard();
        let mut token: Option<AvoidToken> = None;
        let mut manual = Vec::new();
        for version in VERSIONS {
            let color = generator.generate(version, token.as_ref());
            token = Some(color.avoid_token().clone());
            manual.push(color);
        }
        assert_eq!(palette(VERSIONS), manual);
    }

    #[test]
    fn hues_grow_in_generation_order() {
        let mut chain = ColorChain::new();
        assert!(chain.is_empty());
        let mut seen = Vec::new();
        for (n, version) in VERSIONS.iter().enumerate() {
            let color = chain.generate(version);
            seen.push(color.hue());
            assert_eq!(chain.len(), n + 1);
            assert_eq!(chain.hues(), seen.as_slice());
            assert_eq!(chain.token().map(AvoidToken::adjacent_hue), Some(color.hue()));
        }
    }

    #[test]
    fn resume_continues_where_saved() {
        let mut full = ColorChain::new();
        let expected: Vec<_> = VERSIONS.iter().map(|v| full.generate(v)).collect();

        let mut first = ColorChain::new();
        first.generate(VERSIONS[0]);
        first.generate(VERSIONS[1]);
        let saved = first.into_token().unwrap();

        let mut resumed = ColorChain::resume(Generator::standard(), saved);
        let rest: Vec<_> = VERSIONS[2..].iter().map(|v| resumed.generate(v)).collect();
        assert_eq!(rest, expected[2..]);
    }

    #[test]
    fn palette_of_nothing_is_empty() {
        assert!(palette(Vec::<String>::new()).is_empty());
    }
}
