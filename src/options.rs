// SPDX-License-Identifier: MIT
//
// Generator options — every tunable constant in one typed struct.
//
// | Field                | Default             | Meaning                                 |
// |----------------------|---------------------|-----------------------------------------|
// | `adjacent_threshold` | 0.25 (90°)          | min distance to the previous hue        |
// | `all_threshold`      | 0.05 (18°)          | min distance to every earlier hue       |
// | `max_attempts`       | 100                 | candidates drawn before accepting last  |
// | `saturation`         | 0.6                 | HSV saturation of every color           |
// | `value`              | 0.95                | HSV value of every color                |
// | `hue_offset`         | 0.618033988749895   | golden-ratio step added to each draw    |
//
// The defaults match the colors the JavaScript `random-seed` based generator
// produces. Changing any of them changes every color a version maps to.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Tunable constants for a [`Generator`](crate::Generator).
///
/// Deserializes with every field optional; missing fields take their
/// defaults. Call [`validate`](Self::validate) (or build a `Generator`, which
/// does) before use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorOptions {
    pub adjacent_threshold: f64,
    pub all_threshold: f64,
    pub max_attempts: u32,
    pub saturation: f64,
    pub value: f64,
    pub hue_offset: f64,
}

impl GeneratorOptions {
    pub const ADJACENT_THRESHOLD: f64 = 0.25;
    pub const ALL_THRESHOLD: f64 = 0.05;
    pub const MAX_ATTEMPTS: u32 = 100;
    pub const SATURATION: f64 = 0.6;
    pub const VALUE: f64 = 0.95;
    /// The golden ratio conjugate as `0.618033988749895`, one ulp above the
    /// correctly rounded value.
    pub const GOLDEN_RATIO: f64 = 0.618_033_988_749_895;

    /// The default options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            adjacent_threshold: Self::ADJACENT_THRESHOLD,
            all_threshold: Self::ALL_THRESHOLD,
            max_attempts: Self::MAX_ATTEMPTS,
            saturation: Self::SATURATION,
            value: Self::VALUE,
            hue_offset: Self::GOLDEN_RATIO,
        }
    }

    /// Check every field is in range.
    ///
    /// Thresholds are hue distances, so anything above 0.5 would reject every
    /// candidate. Saturation and value are fractions of 1.
    pub fn validate(&self) -> Result<(), Error> {
        let half_turn = 0.0..=0.5;
        let unit = 0.0..=1.0;
        if !half_turn.contains(&self.adjacent_threshold) {
            return Err(Error::InvalidOptions("adjacent_threshold must be in [0, 0.5]"));
        }
        if !half_turn.contains(&self.all_threshold) {
            return Err(Error::InvalidOptions("all_threshold must be in [0, 0.5]"));
        }
        if self.max_attempts == 0 {
            return Err(Error::InvalidOptions("max_attempts must be at least 1"));
        }
        if !unit.contains(&self.saturation) {
            return Err(Error::InvalidOptions("saturation must be in [0, 1]"));
        }
        if !unit.contains(&self.value) {
            return Err(Error::InvalidOptions("value must be in [0, 1]"));
        }
        if !(0.0..1.0).contains(&self.hue_offset) {
            return Err(Error::InvalidOptions("hue_offset must be in [0, 1)"));
        }
        Ok(())
    }
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self::new()
    }
}
