//! HSV input, HSL output, and the `hsl(H, S%, L%)` text contract.
//!
//! Generated colors are specified in HSV (a fixed saturation and value with a
//! varying hue) but emitted as CSS `hsl()` text. The conversion is the
//! standard one:
//!
//! ```text
//! L = (2 − S/100) · V / 2
//! S' = S · V / (L < 50 ? 2L : 200 − 2L)
//! ```
//!
//! Both percentages are rounded to the nearest integer. The hue passes
//! through unrounded.

use std::fmt;
use std::str::FromStr;

use crate::hue::DEGREES_PER_TURN;

/// A color in HSV: hue in degrees, saturation and value in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue angle in degrees, 0.0 to 360.0.
    pub hue: f64,
    /// Saturation, 0.0 to 100.0.
    pub saturation: f64,
    /// Value (brightness), 0.0 to 100.0.
    pub value: f64,
}

impl Hsv {
    #[inline]
    #[must_use]
    pub const fn new(hue: f64, saturation: f64, value: f64) -> Self {
        Self { hue, saturation, value }
    }

    /// Convert to HSL with integer percentages.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let Self { hue: h, saturation: s, value: v } = self;
        let l = (2.0 - s / 100.0) * v / 2.0;
        let divisor = if l < 50.0 { l * 2.0 } else { 200.0 - l * 2.0 };
        // Black and pure white have no meaningful saturation.
        let sat = if divisor > 0.0 { s * v / divisor } else { 0.0 };
        Hsl {
            hue: h,
            saturation: round_percent(sat),
            lightness: round_percent(l),
        }
    }
}

impl From<Hsv> for Hsl {
    fn from(hsv: Hsv) -> Self {
        hsv.to_hsl()
    }
}

/// A color in HSL with integer percentages, as written in CSS.
///
/// `Display` renders exactly `hsl(H, S%, L%)`: no surrounding whitespace,
/// comma-space separators, `%` after saturation and lightness only. The hue
/// prints in its shortest round-trip decimal form, so integral hues print
/// without a fractional part.
///
/// ```
/// use hueseed_color::{Hsl, Hsv};
///
/// let hsl = Hsv::new(0.0, 60.0, 95.0).to_hsl();
/// assert_eq!(hsl.to_string(), "hsl(0, 85%, 67%)");
///
/// let parsed: Hsl = "hsl(0, 85%, 67%)".parse().unwrap();
/// assert_eq!(parsed, hsl);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue angle in degrees, 0.0 to 360.0.
    pub hue: f64,
    /// Saturation percentage, 0 to 100.
    pub saturation: u8,
    /// Lightness percentage, 0 to 100.
    pub lightness: u8,
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}

/// Error returned when text is not in `hsl(H, S%, L%)` form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseHslError {
    #[error("expected `hsl(H, S%, L%)`, got {0:?}")]
    Syntax(String),
    #[error("hue {0:?} is not a number in [0, 360)")]
    Hue(String),
    #[error("{0:?} is not a percentage in [0, 100]")]
    Percent(String),
}

impl FromStr for Hsl {
    type Err = ParseHslError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let syntax = || ParseHslError::Syntax(s.to_owned());
        let inner = s
            .strip_prefix("hsl(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(syntax)?;

        let mut parts = inner.split(", ");
        let (Some(h), Some(sat), Some(light), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(syntax());
        };

        Ok(Self {
            hue: parse_hue(h)?,
            saturation: parse_percent(sat)?,
            lightness: parse_percent(light)?,
        })
    }
}

fn parse_hue(text: &str) -> Result<f64, ParseHslError> {
    text.parse::<f64>()
        .ok()
        .filter(|h| (0.0..DEGREES_PER_TURN).contains(h))
        .ok_or_else(|| ParseHslError::Hue(text.to_owned()))
}

fn parse_percent(text: &str) -> Result<u8, ParseHslError> {
    text.strip_suffix('%')
        .and_then(|digits| digits.parse::<u8>().ok())
        .filter(|p| *p <= 100)
        .ok_or_else(|| ParseHslError::Percent(text.to_owned()))
}

/// Round half away from zero and clamp into 0..=100.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_percent(x: f64) -> u8 {
    if x.is_nan() {
        return 0;
    }
    x.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    // ── Conversion ──────────────────────────────────────────────────

    #[test]
    fn generator_constants_convert_exactly() {
        // L = 1.4 · 95 / 2 = 66.5 → 67; S = 60 · 95 / (200 − 133) ≈ 85.07 → 85
        let hsl = Hsv::new(0.0, 0.6 * 100.0, 0.95 * 100.0).to_hsl();
        assert_eq!(hsl, Hsl { hue: 0.0, saturation: 85, lightness: 67 });
    }

    #[test]
    fn hue_passes_through_unrounded() {
        let hsl = Hsv::new(69.073_817_124_138_59, 60.0, 95.0).to_hsl();
        assert_eq!(hsl.hue, 69.073_817_124_138_59);
    }

    #[rstest]
    #[case(Hsv::new(0.0, 0.0, 0.0), 0, 0)]
    #[case(Hsv::new(0.0, 0.0, 100.0), 0, 100)]
    #[case(Hsv::new(0.0, 100.0, 100.0), 100, 50)]
    #[case(Hsv::new(120.0, 50.0, 50.0), 33, 38)]
    #[case(Hsv::new(240.0, 100.0, 50.0), 100, 25)]
    fn conversion_table(#[case] hsv: Hsv, #[case] s: u8, #[case] l: u8) {
        let hsl = hsv.to_hsl();
        assert_eq!((hsl.saturation, hsl.lightness), (s, l), "{hsv:?}");
    }

    #[test]
    fn percentages_stay_in_range() {
        for s in (0..=100).step_by(5) {
            for v in (0..=100).step_by(5) {
                let hsl = Hsv::new(10.0, f64::from(s), f64::from(v)).to_hsl();
                assert!(hsl.saturation <= 100 && hsl.lightness <= 100, "{hsl:?}");
            }
        }
    }

    // ── Text ────────────────────────────────────────────────────────

    #[rstest]
    #[case(0.0, "hsl(0, 85%, 67%)")]
    #[case(180.0, "hsl(180, 85%, 67%)")]
    #[case(69.073_817_124_138_59, "hsl(69.07381712413859, 85%, 67%)")]
    #[case(208.705_053_961_126_65, "hsl(208.70505396112665, 85%, 67%)")]
    fn display_is_exact(#[case] hue: f64, #[case] expected: &str) {
        let hsl = Hsl { hue, saturation: 85, lightness: 67 };
        assert_eq!(hsl.to_string(), expected);
    }

    #[test]
    fn parse_reads_display_output() {
        let hsl = Hsl { hue: 28.638_973_069_229_117, saturation: 85, lightness: 67 };
        assert_eq!(hsl.to_string().parse::<Hsl>(), Ok(hsl));
    }

    #[rstest]
    #[case("rgb(0, 0, 0)")]
    #[case("hsl(0, 85%, 67%) ")]
    #[case("hsl(0,85%,67%)")]
    #[case("hsl(0, 85%)")]
    #[case("hsl(0, 85%, 67%, 1)")]
    fn parse_rejects_bad_syntax(#[case] text: &str) {
        assert_eq!(text.parse::<Hsl>(), Err(ParseHslError::Syntax(text.to_owned())));
    }

    #[test]
    fn parse_rejects_bad_values() {
        assert_eq!(
            "hsl(360, 85%, 67%)".parse::<Hsl>(),
            Err(ParseHslError::Hue("360".to_owned()))
        );
        assert_eq!(
            "hsl(10, 101%, 67%)".parse::<Hsl>(),
            Err(ParseHslError::Percent("101%".to_owned()))
        );
        assert_eq!(
            "hsl(10, 85, 67%)".parse::<Hsl>(),
            Err(ParseHslError::Percent("85".to_owned()))
        );
    }
}
