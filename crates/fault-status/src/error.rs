//! Status envelope error types.

use thiserror::Error;

/// Errors raised while packing or unpacking status details.
#[derive(Debug, Error)]
pub enum StatusError {
    /// A payload could not be converted into a detail value.
    #[error("Failed to encode detail '{type_tag}': {source}")]
    Encode {
        type_tag: &'static str,
        source: serde_json::Error,
    },

    /// A detail carried the expected type tag but its body did not decode.
    #[error("Malformed detail '{type_tag}': {source}")]
    Malformed {
        type_tag: &'static str,
        source: serde_json::Error,
    },

    /// A detail was unpacked as a payload type it does not carry.
    #[error("Detail type mismatch: expected '{expected}', found '{found}'")]
    TypeMismatch {
        expected: &'static str,
        found: String,
    },

    /// The envelope already carries a different detail.
    #[error("Status already carries detail '{existing}', refusing to attach '{attempted}'")]
    DetailConflict {
        existing: String,
        attempted: &'static str,
    },
}
