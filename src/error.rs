// SPDX-License-Identifier: MIT
//
// Boundary errors. Generation itself cannot fail; only inputs that arrive
// from outside (hand-built or deserialized tokens, custom options) are
// checked, and they are checked once, on the way in.

/// Errors raised while validating inputs to the generator.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A token hue is NaN, infinite, or outside [0, 1).
    #[error("hue {hue} is outside [0, 1)")]
    HueOutOfRange { hue: f64 },

    /// A [`GeneratorOptions`](crate::GeneratorOptions) field is out of range.
    #[error("invalid generator options: {0}")]
    InvalidOptions(&'static str),

    /// Serialized token text could not be read or written.
    #[error("malformed avoid token: {0}")]
    Json(#[from] serde_json::Error),
}
