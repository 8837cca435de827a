//! Request throttled, with the reason it was rejected.

use fault_status::{Code, Status};
use thiserror::Error;

use crate::cache::StatusCache;
use crate::encoder::{encode, message_or};
use crate::kind::ErrorKind;
use crate::payloads::{ResourceExhaustedCause, ResourceExhaustedFailure};
use crate::variants::DetailedVariant;

/// A rate or capacity limit rejected the request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ResourceExhausted {
    message: String,
    cause: ResourceExhaustedCause,
    status: StatusCache,
}

impl ResourceExhausted {
    #[must_use]
    pub fn new(cause: ResourceExhaustedCause, message: impl Into<String>) -> Self {
        Self {
            message: message_or(message.into(), "resource exhausted"),
            cause,
            status: StatusCache::empty(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub const fn cause(&self) -> ResourceExhaustedCause {
        self.cause
    }

    pub fn status(&self) -> &Status {
        self.status
            .get_or_build(|| encode(Self::CODE, &self.message, &self.detail()))
    }
}

impl DetailedVariant for ResourceExhausted {
    const CODE: Code = Code::ResourceExhausted;
    const KIND: ErrorKind = ErrorKind::ResourceExhausted;

    type Detail = ResourceExhaustedFailure;

    fn detail(&self) -> Self::Detail {
        ResourceExhaustedFailure { cause: self.cause }
    }

    fn from_wire(status: Status, detail: Self::Detail) -> Self {
        Self {
            message: message_or(status.message().to_string(), "resource exhausted"),
            cause: detail.cause,
            status: StatusCache::received(status),
        }
    }
}
