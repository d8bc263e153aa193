// SPDX-License-Identifier: MIT
//
// UHEPRNG — Ultra-High-Entropy Pseudo-Random Number Generator (GRC).
//
// 48 f64 state words in [0, 1), a carry and a rotating phase. Each raw step
// is one multiply-with-carry on the next word:
//
//   t    = 1768863 · s[p] + c · 2^-32
//   c    = ⌊t⌋
//   s[p] = t − c
//
// Two raw steps combine into one 53-bit fraction. Seeding cleans the seed
// text, pumps it through Mash, then subtracts one Mash value per state word
// for every UTF-16 unit of the seed.
//
// The arithmetic order below is load-bearing. Reordering a product or fusing
// a multiply-add changes the last bit of a word, and a single bit diverges the
// whole stream within a few steps.

use std::sync::LazyLock;

use regex::Regex;

use crate::mash::{Mash, TWO_POW_NEG_32};
use crate::source::{SeededSource, UnitSource};

/// Number of entropy-holding state words.
const ORDER: usize = 48;

/// Multiply-with-carry multiplier.
const MWC_MULTIPLIER: f64 = 1_768_863.0;

/// 2^21, scales the second raw draw into the low 21 bits of a 53-bit fraction.
const TWO_POW_21: f64 = 2_097_152.0;

/// 2^-53, one unit in the last place of a 53-bit fraction.
const TWO_POW_NEG_53: f64 = 1.0 / 9_007_199_254_740_992.0;

/// The seed byte Mash is primed with for every state word.
const SPACE: u16 = 0x20;

// Whitespace per ECMAScript `\s`: this is narrower than Unicode White_Space
// (no U+0085) and wider in one spot (U+FEFF).
static EDGE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| {
    let ws = r"[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";
    Regex::new(&format!("^{ws}+|{ws}+$")).expect("edge whitespace pattern is valid")
});

static CONTROL_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x00-\x1F]").expect("control char pattern is valid"));

/// Normalize a seed the way UHEPRNG does before hashing it.
///
/// Leading and trailing whitespace is trimmed first, then every C0 control
/// character (U+0000–U+001F) is removed wherever it appears. Seeds that
/// differ only in that respect produce the same stream.
///
/// ```
/// use hueseed_rand::uheprng::clean_seed;
///
/// assert_eq!(clean_seed("  1.0.0\n"), "1.0.0");
/// assert_eq!(clean_seed("1.0\t.0"), "1.0.0");
/// ```
#[must_use]
pub fn clean_seed(seed: &str) -> String {
    let trimmed = EDGE_WHITESPACE.replace_all(seed, "");
    CONTROL_CHARS.replace_all(&trimmed, "").into_owned()
}

/// A seeded UHEPRNG stream.
///
/// # Examples
///
/// ```
/// use hueseed_rand::Uheprng;
///
/// let mut a = Uheprng::new("1.0.0");
/// let mut b = Uheprng::new("1.0.0");
/// assert_eq!(a.random(), b.random());
///
/// let r = a.random();
/// assert!((0.0..1.0).contains(&r));
/// ```
#[derive(Debug, Clone)]
pub struct Uheprng {
    mash: Mash,
    state: [f64; ORDER],
    carry: f64,
    phase: usize,
}

impl Uheprng {
    /// Create a generator seeded from `seed`.
    #[must_use]
    pub fn new(seed: &str) -> Self {
        let mut rng = Self {
            mash: Mash::new(),
            state: [0.0; ORDER],
            carry: 1.0,
            phase: ORDER,
        };
        rng.init_state();
        rng.hash_seed(seed);
        rng
    }

    /// Reset Mash and prime every state word with a fresh hash of `" "`.
    fn init_state(&mut self) {
        self.mash.reset();
        for word in &mut self.state {
            *word = self.mash.hash_units([SPACE]);
        }
        self.carry = 1.0;
        self.phase = ORDER;
    }

    /// Stir the cleaned seed into the state words.
    fn hash_seed(&mut self, seed: &str) {
        let cleaned = clean_seed(seed);
        // Evolves the accumulator; an empty seed resets it instead.
        let _ = self.mash.hash(&cleaned);
        for unit in cleaned.encode_utf16() {
            for word in &mut self.state {
                *word -= self.mash.hash_code_unit(unit);
                if *word < 0.0 {
                    *word += 1.0;
                }
            }
        }
    }

    /// One multiply-with-carry step: a 32-bit fraction in [0, 1).
    #[allow(clippy::suboptimal_flops)] // a fused multiply-add would change the stream
    pub fn raw(&mut self) -> f64 {
        self.phase += 1;
        if self.phase >= ORDER {
            self.phase = 0;
        }
        let t = MWC_MULTIPLIER * self.state[self.phase] + self.carry * TWO_POW_NEG_32;
        self.carry = t.trunc();
        self.state[self.phase] = t - self.carry;
        self.state[self.phase]
    }

    /// A 53-bit fraction in [0, 1) synthesized from two raw steps.
    #[allow(clippy::suboptimal_flops)]
    pub fn fraction(&mut self) -> f64 {
        let high = self.raw();
        let low = (self.raw() * TWO_POW_21).trunc();
        high + low * TWO_POW_NEG_53
    }

    /// An equally likely integer in `[0, range)`.
    ///
    /// Returns 0 when `range` is 0.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn range(&mut self, range: u32) -> u32 {
        (f64::from(range) * self.fraction()).floor() as u32
    }

    /// A real in [0, 1).
    ///
    /// Scales the 53-bit fraction up to `f64::MAX` and back down, which is
    /// how `random-seed` derives its unit draws. The result differs
    /// from [`fraction`](Self::fraction) only in rounding of the last bits.
    pub fn random(&mut self) -> f64 {
        (f64::MAX * self.fraction()).floor() / f64::MAX
    }
}

impl UnitSource for Uheprng {
    fn next_unit(&mut self) -> f64 {
        self.random()
    }
}

impl SeededSource for Uheprng {
    fn from_seed(seed: &str) -> Self {
        Self::new(seed)
    }
}
