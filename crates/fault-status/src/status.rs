//! The status envelope itself.

use serde::{Deserialize, Serialize};

use crate::code::Code;
use crate::detail::{Detail, DetailPayload};
use crate::error::StatusError;

/// Generic wire-level failure: code, message and typed details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    code: Code,
    #[serde(default)]
    message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    details: Vec<Detail>,
}

impl Status {
    /// Create a status with no details.
    #[must_use]
    pub fn new(code: Code, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Vec::new(),
        }
    }

    /// Reassemble a status exactly as a transport delivered it.
    #[must_use]
    pub fn from_parts(code: Code, message: impl Into<String>, details: Vec<Detail>) -> Self {
        Self {
            code,
            message: message.into(),
            details,
        }
    }

    /// Attach one structured detail.
    ///
    /// Attaching a payload identical to the one already present is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StatusError::DetailConflict` if the envelope already carries a
    /// different detail, or `StatusError::Encode` if the payload does not
    /// serialize. The envelope is left untouched on error.
    pub fn attach_detail<P: DetailPayload>(&mut self, payload: &P) -> Result<(), StatusError> {
        let detail = Detail::pack(payload)?;
        match self.details.first() {
            None => {
                self.details.push(detail);
                Ok(())
            }
            Some(existing) if *existing == detail => Ok(()),
            Some(existing) => Err(StatusError::DetailConflict {
                existing: existing.type_tag().to_string(),
                attempted: P::TYPE_TAG,
            }),
        }
    }

    /// Builder form of [`Status::attach_detail`].
    ///
    /// # Errors
    ///
    /// Same as [`Status::attach_detail`].
    pub fn with_detail<P: DetailPayload>(mut self, payload: &P) -> Result<Self, StatusError> {
        self.attach_detail(payload)?;
        Ok(self)
    }

    /// Extract the first detail tagged `P::TYPE_TAG`.
    ///
    /// Returns `Ok(None)` when no such detail is present.
    ///
    /// # Errors
    ///
    /// Returns `StatusError::Malformed` if the detail is present but its body
    /// does not decode as `P`.
    pub fn extract_detail<P: DetailPayload>(&self) -> Result<Option<P>, StatusError> {
        self.details
            .iter()
            .find(|detail| detail.is::<P>())
            .map(Detail::unpack)
            .transpose()
    }

    /// First detail with the given type tag, if any.
    #[must_use]
    pub fn find_detail(&self, type_tag: &str) -> Option<&Detail> {
        self.details.iter().find(|detail| detail.type_tag() == type_tag)
    }

    #[must_use]
    pub const fn code(&self) -> Code {
        self.code
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn details(&self) -> &[Detail] {
        &self.details
    }

    /// Whether this status represents success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.code == Code::Ok
    }
}
