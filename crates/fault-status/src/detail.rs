//! Typed detail payloads carried inside a status envelope.

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::error::StatusError;

/// A structured payload that can be packed into a [`Detail`].
///
/// `TYPE_TAG` identifies the payload on the wire and must never change once
/// published.
pub trait DetailPayload: Serialize + DeserializeOwned {
    const TYPE_TAG: &'static str;
}

/// One typed payload inside a status envelope's detail list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detail {
    type_tag: String,
    #[serde(default)]
    value: serde_json::Value,
}

impl Detail {
    /// Build a detail from a raw tag and value, as received from a transport.
    #[must_use]
    pub fn new(type_tag: impl Into<String>, value: serde_json::Value) -> Self {
        Self {
            type_tag: type_tag.into(),
            value,
        }
    }

    /// Pack a typed payload.
    ///
    /// # Errors
    ///
    /// Returns `StatusError::Encode` if the payload does not serialize.
    pub fn pack<P: DetailPayload>(payload: &P) -> Result<Self, StatusError> {
        let value = serde_json::to_value(payload).map_err(|source| StatusError::Encode {
            type_tag: P::TYPE_TAG,
            source,
        })?;
        Ok(Self::new(P::TYPE_TAG, value))
    }

    /// Unpack this detail as payload type `P`.
    ///
    /// # Errors
    ///
    /// Returns `StatusError::TypeMismatch` if the tag is not `P::TYPE_TAG`,
    /// or `StatusError::Malformed` if the body does not decode as `P`.
    pub fn unpack<P: DetailPayload>(&self) -> Result<P, StatusError> {
        if !self.is::<P>() {
            return Err(StatusError::TypeMismatch {
                expected: P::TYPE_TAG,
                found: self.type_tag.clone(),
            });
        }
        P::deserialize(&self.value).map_err(|source| StatusError::Malformed {
            type_tag: P::TYPE_TAG,
            source,
        })
    }

    /// Whether this detail carries payload type `P`.
    #[must_use]
    pub fn is<P: DetailPayload>(&self) -> bool {
        self.type_tag == P::TYPE_TAG
    }

    #[must_use]
    pub fn type_tag(&self) -> &str {
        &self.type_tag
    }

    #[must_use]
    pub const fn value(&self) -> &serde_json::Value {
        &self.value
    }
}
