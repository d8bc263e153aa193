// SPDX-License-Identifier: MIT
//
// AvoidToken — the caller-threaded memory of a color session.
//
// The generator is stateless, so "avoid what I already picked" has to travel
// with the caller. A token is immutable; generating from one returns a new
// token that extends it:
//
//   None ──gen("1.0.0")──► { adjacent: a, all: [a] }
//        ──gen("2.0.0")──► { adjacent: b, all: [a, b] }
//        ──gen("3.0.0")──► { adjacent: c, all: [a, b, c] }
//
// `all_hues` only ever grows at the end. Tokens built or deserialized outside
// the generator pass through `AvoidToken::new`, so every hue in a token is
// known to be in [0, 1).

use serde::{Deserialize, Serialize};

use hueseed_color::hue::is_unit_hue;

use crate::error::Error;

/// The hues generated so far in a chain, plus the most recent one.
///
/// Serializes as `{"adjacentHue": …, "allHues": […]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawAvoidToken")]
pub struct AvoidToken {
    adjacent_hue: f64,
    all_hues: Vec<f64>,
}

/// Unchecked wire shape; converted through [`AvoidToken::new`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawAvoidToken {
    adjacent_hue: f64,
    all_hues: Vec<f64>,
}

impl TryFrom<RawAvoidToken> for AvoidToken {
    type Error = Error;

    fn try_from(raw: RawAvoidToken) -> Result<Self, Self::Error> {
        Self::new(raw.adjacent_hue, raw.all_hues)
    }
}

impl AvoidToken {
    /// Build a token from its parts, checking every hue is in [0, 1).
    ///
    /// `adjacent_hue` does not have to appear in `all_hues`; a hand-built
    /// token may name a hue to stay far from without recording it.
    pub fn new(adjacent_hue: f64, all_hues: Vec<f64>) -> Result<Self, Error> {
        if let Some(&hue) = std::iter::once(&adjacent_hue)
            .chain(&all_hues)
            .find(|h| !is_unit_hue(**h))
        {
            return Err(Error::HueOutOfRange { hue });
        }
        Ok(Self { adjacent_hue, all_hues })
    }

    /// The token a chain holds after its first color.
    pub(crate) fn first(hue: f64) -> Self {
        Self {
            adjacent_hue: hue,
            all_hues: vec![hue],
        }
    }

    /// A new token with `hue` appended; `self` is left untouched.
    #[must_use]
    pub fn extended(&self, hue: f64) -> Self {
        let mut all_hues = Vec::with_capacity(self.all_hues.len() + 1);
        all_hues.extend_from_slice(&self.all_hues);
        all_hues.push(hue);
        Self {
            adjacent_hue: hue,
            all_hues,
        }
    }

    /// Extend `token` if there is one, otherwise start a chain.
    pub(crate) fn after(token: Option<&Self>, hue: f64) -> Self {
        token.map_or_else(|| Self::first(hue), |t| t.extended(hue))
    }

    /// The most recently generated hue.
    #[must_use]
    pub const fn adjacent_hue(&self) -> f64 {
        self.adjacent_hue
    }

    /// Every hue generated in this chain, oldest first.
    #[must_use]
    pub fn all_hues(&self) -> &[f64] {
        &self.all_hues
    }

    /// Number of hues recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.all_hues.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.all_hues.is_empty()
    }

    /// Read a token from its JSON form.
    pub fn from_json(text: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(text)?)
    }

    /// Write the token as compact JSON.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_accepts_unit_hues() {
        let token = AvoidToken::new(0.3, vec![0.1, 0.3]).unwrap();
        assert_eq!(token.adjacent_hue(), 0.3);
        assert_eq!(token.all_hues(), &[0.1, 0.3]);
        assert_eq!(token.len(), 2);
    }

    #[test]
    fn new_accepts_adjacent_outside_history() {
        let token = AvoidToken::new(0.7, Vec::new()).unwrap();
        assert!(token.is_empty());
    }

    #[test]
    fn new_rejects_out_of_range_hues() {
        for (adjacent, all) in [
            (1.0, vec![]),
            (-0.01, vec![]),
            (0.2, vec![0.1, f64::NAN]),
            (0.2, vec![f64::INFINITY]),
        ] {
            let result = AvoidToken::new(adjacent, all.clone());
            assert!(
                matches!(result, Err(Error::HueOutOfRange { .. })),
                "{adjacent} / {all:?}"
            );
        }
    }

    #[test]
    fn extended_leaves_original_untouched() {
        let original = AvoidToken::new(0.2, vec![0.2]).unwrap();
        let next = original.extended(0.6);
        assert_eq!(original.all_hues(), &[0.2]);
        assert_eq!(next.all_hues(), &[0.2, 0.6]);
        assert_eq!(next.adjacent_hue(), 0.6);
    }

    #[test]
    fn after_starts_or_extends() {
        let first = AvoidToken::after(None, 0.4);
        assert_eq!(first, AvoidToken::first(0.4));
        let second = AvoidToken::after(Some(&first), 0.9);
        assert_eq!(second.all_hues(), &[0.4, 0.9]);
    }

    // ── JSON ────────────────────────────────────────────────────────

    #[test]
    fn json_uses_camel_case() {
        let token = AvoidToken::new(0.25, vec![0.75, 0.25]).unwrap();
        assert_eq!(
            token.to_json().unwrap(),
            r#"{"adjacentHue":0.25,"allHues":[0.75,0.25]}"#
        );
        assert_eq!(AvoidToken::from_json(&token.to_json().unwrap()).unwrap(), token);
    }

    #[test]
    fn json_validates_hues() {
        let err = AvoidToken::from_json(r#"{"adjacentHue":1.5,"allHues":[]}"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().contains("outside [0, 1)"), "{err}");
    }

    #[test]
    fn json_rejects_malformed_shape() {
        for text in [
            r#"{"adjacentHue":0.5}"#,
            r#"{"adjacentHue":"0.5","allHues":[]}"#,
            r#"{"adjacentHue":0.5,"allHues":[],"extra":1}"#,
            "null",
            "",
        ] {
            assert!(AvoidToken::from_json(text).is_err(), "{text:?}");
        }
    }
}
