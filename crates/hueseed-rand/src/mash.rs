// SPDX-License-Identifier: MIT
//
// Mash — Johannes Baagøe's string hash, the entropy pump behind UHEPRNG.
//
// Mash keeps a single f64 accumulator `n` that only ever holds integers below
// 2^33 plus a 32-bit fraction, so every step is exact in double precision.
// Each UTF-16 code unit is folded in by a multiply by a fixed irrational-ish
// constant, splitting the product into integer and fractional parts twice.
//
// The hash is stateful on purpose: calling it again with the same text gives
// a different value, because `n` carries over. UHEPRNG relies on that to fill
// its 48 state words from a single repeated input.

/// Initial accumulator value (`0xefc8249d`).
const INITIAL: f64 = 4_022_871_197.0;

/// Mixing multiplier applied to the accumulator for every code unit.
const MULTIPLIER: f64 = 0.025_196_032_824_169_38;

/// 2^32, the modulus of the unsigned 32-bit view of the accumulator.
pub(crate) const TWO_POW_32: f64 = 4_294_967_296.0;

/// 2^-32, scales a 32-bit integer into [0, 1).
pub(crate) const TWO_POW_NEG_32: f64 = 1.0 / TWO_POW_32;

/// Stateful Mash hash.
///
/// # Examples
///
/// ```
/// use hueseed_rand::Mash;
///
/// let mut a = Mash::new();
/// let mut b = Mash::new();
/// assert_eq!(a.hash("1.0.0"), b.hash("1.0.0"));
///
/// // Empty input resets the accumulator and yields nothing.
/// assert_eq!(a.hash(""), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mash {
    n: f64,
}

impl Mash {
    /// A hash with a freshly initialized accumulator.
    #[must_use]
    pub const fn new() -> Self {
        Self { n: INITIAL }
    }

    /// Restore the accumulator to its initial value.
    pub const fn reset(&mut self) {
        self.n = INITIAL;
    }

    /// Hash `data`, returning a value in [0, 1).
    ///
    /// Empty text resets the accumulator and returns `None`, matching the
    /// JavaScript Mash, which treats an empty argument as a reset request.
    pub fn hash(&mut self, data: &str) -> Option<f64> {
        if data.is_empty() {
            self.reset();
            return None;
        }
        Some(self.hash_units(data.encode_utf16()))
    }

    /// Hash the decimal text of a UTF-16 code unit.
    ///
    /// UHEPRNG feeds each seed character back in as a number, which the
    /// JavaScript Mash stringifies first: unit `49` (`'1'`) hashes `"49"`.
    pub fn hash_code_unit(&mut self, unit: u16) -> f64 {
        let digits = unit.to_string();
        self.hash_units(digits.encode_utf16())
    }

    /// Fold a sequence of UTF-16 code units into the accumulator.
    pub fn hash_units<I>(&mut self, units: I) -> f64
    where
        I: IntoIterator<Item = u16>,
    {
        for unit in units {
            self.n += f64::from(unit);
            let mut h = MULTIPLIER * self.n;
            self.n = to_uint32(h);
            h -= self.n;
            h *= self.n;
            self.n = to_uint32(h);
            h -= self.n;
            self.n += h * TWO_POW_32;
        }
        to_uint32(self.n) * TWO_POW_NEG_32
    }
}

impl Default for Mash {
    fn default() -> Self {
        Self::new()
    }
}

/// ECMAScript `ToUint32`: truncate toward zero, then wrap into [0, 2^32).
#[inline]
pub(crate) fn to_uint32(x: f64) -> f64 {
    if x.is_finite() {
        x.trunc().rem_euclid(TWO_POW_32)
    } else {
        0.0
    }
}
