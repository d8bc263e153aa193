//! Hue arithmetic on the normalized [0, 1) circle.
//!
//! 0 and 1 are the same point, so every operation here wraps. Degrees only
//! appear at the edge, when a hue is handed to the formatter.

/// Degrees in one full turn of the hue circle.
pub const DEGREES_PER_TURN: f64 = 360.0;

/// Shortest distance between two normalized hues, in [0, 0.5].
///
/// Computed as `|((a - b + 0.5) mod 1) - 0.5|` with a floored modulo, so the
/// result is the same whichever side of the 0/1 seam each hue sits on.
///
/// ```
/// use hueseed_color::hue_difference;
///
/// assert!((hue_difference(0.99, 0.01) - 0.02).abs() < 1e-12);
/// assert!((hue_difference(0.01, 0.99) - 0.02).abs() < 1e-12);
/// assert_eq!(hue_difference(0.5, 0.0), 0.5);
/// ```
#[inline]
#[must_use]
pub fn hue_difference(a: f64, b: f64) -> f64 {
    ((a - b + 0.5).rem_euclid(1.0) - 0.5).abs()
}

/// Wrap any finite hue into [0, 1).
#[inline]
#[must_use]
pub fn wrap_unit(h: f64) -> f64 {
    let h = h.rem_euclid(1.0);
    // rem_euclid of a tiny negative rounds up to exactly 1.0.
    if h >= 1.0 { 0.0 } else { h }
}

/// Convert a normalized hue to degrees.
#[inline]
#[must_use]
pub fn to_degrees(h: f64) -> f64 {
    h * DEGREES_PER_TURN
}

/// `true` if `h` is a finite hue in [0, 1).
#[inline]
#[must_use]
pub fn is_unit_hue(h: f64) -> bool {
    (0.0..1.0).contains(&h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    // ── Distance ────────────────────────────────────────────────────

    #[rstest]
    #[case(0.99, 0.01, 0.02)]
    #[case(0.01, 0.99, 0.02)]
    #[case(0.5, 0.0, 0.5)]
    #[case(0.0, 0.5, 0.5)]
    #[case(0.25, 0.75, 0.5)]
    #[case(0.1, 0.3, 0.2)]
    #[case(0.9, 0.2, 0.3)]
    fn distance_is_shortest_arc(#[case] a: f64, #[case] b: f64, #[case] expected: f64) {
        let d = hue_difference(a, b);
        assert!(approx_eq(d, expected, 1e-12), "hue_difference({a}, {b}) = {d}");
    }

    #[test]
    fn distance_to_self_is_zero() {
        for i in 0..100 {
            let h = f64::from(i) / 100.0;
            assert_eq!(hue_difference(h, h), 0.0, "h = {h}");
        }
    }

    #[test]
    fn distance_is_symmetric_and_bounded() {
        let hues = [0.0, 0.013, 0.25, 0.333, 0.5, 0.618, 0.75, 0.999];
        for &a in &hues {
            for &b in &hues {
                let ab = hue_difference(a, b);
                let ba = hue_difference(b, a);
                assert!(approx_eq(ab, ba, 1e-12), "{a} vs {b}: {ab} != {ba}");
                assert!((0.0..=0.5).contains(&ab), "{a} vs {b}: {ab}");
            }
        }
    }

    // ── Wrapping ────────────────────────────────────────────────────

    #[test]
    fn wrap_unit_stays_half_open() {
        assert_eq!(wrap_unit(1.0), 0.0);
        assert_eq!(wrap_unit(-1e-20), 0.0);
        assert!(approx_eq(wrap_unit(1.25), 0.25, 1e-12));
        assert!(approx_eq(wrap_unit(-0.25), 0.75, 1e-12));
    }

    #[test]
    fn unit_hue_bounds() {
        assert!(is_unit_hue(0.0));
        assert!(is_unit_hue(0.999_999));
        assert!(!is_unit_hue(1.0));
        assert!(!is_unit_hue(-0.1));
        assert!(!is_unit_hue(f64::NAN));
    }

    #[test]
    fn degrees_scale_full_turn() {
        assert_eq!(to_degrees(0.5), 180.0);
        assert_eq!(to_degrees(0.0), 0.0);
    }
}
