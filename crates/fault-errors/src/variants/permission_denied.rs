//! Caller lacks the rights for the operation.

use fault_status::{Code, Status};
use thiserror::Error;

use crate::cache::StatusCache;
use crate::encoder::{encode, message_or};
use crate::kind::ErrorKind;
use crate::payloads::PermissionDeniedFailure;
use crate::variants::DetailedVariant;

/// The caller is not allowed to perform the operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct PermissionDenied {
    message: String,
    reason: String,
    status: StatusCache,
}

impl PermissionDenied {
    #[must_use]
    pub fn new(message: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            message: message_or(message.into(), "permission denied"),
            reason: reason.into(),
            status: StatusCache::empty(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Machine-readable reason; empty when the server gave none.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn status(&self) -> &Status {
        self.status
            .get_or_build(|| encode(Self::CODE, &self.message, &self.detail()))
    }
}

impl DetailedVariant for PermissionDenied {
    const CODE: Code = Code::PermissionDenied;
    const KIND: ErrorKind = ErrorKind::PermissionDenied;

    type Detail = PermissionDeniedFailure;

    fn detail(&self) -> Self::Detail {
        PermissionDeniedFailure {
            reason: self.reason.clone(),
        }
    }

    fn from_wire(status: Status, detail: Self::Detail) -> Self {
        Self {
            message: message_or(status.message().to_string(), "permission denied"),
            reason: detail.reason,
            status: StatusCache::received(status),
        }
    }
}
