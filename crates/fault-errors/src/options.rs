//! Decoder tuning.

use serde::{Deserialize, Serialize};

const fn default_true() -> bool {
    true
}

/// How the dispatch registry treats envelopes whose detail is missing or corrupt.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DecodeOptions {
    /// Decode a detail-less envelope to its code's default variant (with
    /// empty fields) instead of leaving it unrecognized.
    #[serde(default = "default_true")]
    pub degrade_missing_details: bool,

    /// Treat a registered detail whose body fails to decode as unrecognized
    /// instead of decoding it with empty fields.
    #[serde(default)]
    pub strict_details: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            degrade_missing_details: default_true(),
            strict_details: false,
        }
    }
}
