//! The closed set of service error variants.
//!
//! Each variant is its own record type: `message` plus variant fields plus a
//! [`StatusCache`](crate::cache::StatusCache). Detail-carrying variants
//! implement [`DetailedVariant`]; variants identified by status code alone
//! implement [`CodedVariant`]. The registry dispatches through these traits.

use fault_status::{Code, DetailPayload, Status};
use schemars::JsonSchema;

use crate::kind::ErrorKind;
use crate::service_error::ServiceError;

/// A variant that carries one structured detail payload.
pub trait DetailedVariant: Sized + Into<ServiceError> {
    /// Wire status code. Part of the published contract.
    const CODE: Code;
    const KIND: ErrorKind;

    type Detail: DetailPayload + Default + JsonSchema;

    /// Payload built from the variant's fields, copied 1:1.
    fn detail(&self) -> Self::Detail;

    /// Reconstruct from a received envelope and its (possibly defaulted) payload.
    /// The envelope is cached verbatim.
    fn from_wire(status: Status, detail: Self::Detail) -> Self;
}

/// A variant identified by its status code alone.
pub trait CodedVariant: Sized + Into<ServiceError> {
    const CODE: Code;
    const KIND: ErrorKind;

    /// Reconstruct from a received envelope, caching it verbatim.
    fn from_wire(status: Status) -> Self;
}

/// Variant with a caller message and no fields beyond it, encoded with no detail.
macro_rules! code_only_error {
    ($(#[$doc:meta])* $name:ident, $code:ident, $fallback:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        #[error("{message}")]
        pub struct $name {
            message: String,
            status: $crate::cache::StatusCache,
        }

        impl $name {
            #[must_use]
            pub fn new(message: impl Into<String>) -> Self {
                Self {
                    message: $crate::encoder::message_or(message.into(), $fallback),
                    status: $crate::cache::StatusCache::empty(),
                }
            }

            #[must_use]
            pub fn message(&self) -> &str {
                &self.message
            }

            pub fn status(&self) -> &fault_status::Status {
                self.status.get_or_build(|| {
                    $crate::encoder::encode_bare(<Self as $crate::variants::CodedVariant>::CODE, &self.message)
                })
            }
        }

        impl $crate::variants::CodedVariant for $name {
            const CODE: fault_status::Code = fault_status::Code::$code;
            const KIND: $crate::kind::ErrorKind = $crate::kind::ErrorKind::$name;

            fn from_wire(status: fault_status::Status) -> Self {
                Self {
                    message: $crate::encoder::message_or(status.message().to_string(), $fallback),
                    status: $crate::cache::StatusCache::received(status),
                }
            }
        }
    };
}

/// Variant with a caller message whose detail payload has no fields: the
/// payload's type tag alone tells it apart from other variants sharing its code.
macro_rules! marker_error {
    ($(#[$doc:meta])* $name:ident, $code:ident, $detail:ty, $fallback:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        #[error("{message}")]
        pub struct $name {
            message: String,
            status: $crate::cache::StatusCache,
        }

        impl $name {
            #[must_use]
            pub fn new(message: impl Into<String>) -> Self {
                Self {
                    message: $crate::encoder::message_or(message.into(), $fallback),
                    status: $crate::cache::StatusCache::empty(),
                }
            }

            #[must_use]
            pub fn message(&self) -> &str {
                &self.message
            }

            pub fn status(&self) -> &fault_status::Status {
                self.status.get_or_build(|| {
                    $crate::encoder::encode(
                        <Self as $crate::variants::DetailedVariant>::CODE,
                        &self.message,
                        &<$detail>::default(),
                    )
                })
            }
        }

        impl $crate::variants::DetailedVariant for $name {
            const CODE: fault_status::Code = fault_status::Code::$code;
            const KIND: $crate::kind::ErrorKind = $crate::kind::ErrorKind::$name;

            type Detail = $detail;

            fn detail(&self) -> Self::Detail {
                <$detail>::default()
            }

            fn from_wire(status: fault_status::Status, _detail: Self::Detail) -> Self {
                Self {
                    message: $crate::encoder::message_or(status.message().to_string(), $fallback),
                    status: $crate::cache::StatusCache::received(status),
                }
            }
        }
    };
}

mod client_version;
mod code_only;
mod marker;
mod namespace_not_active;
mod not_found;
mod permission_denied;
mod resource_exhausted;
mod unrecognized;
mod workflow_execution;

pub use client_version::ClientVersionNotSupported;
pub use code_only::{
    Canceled, DataLoss, DeadlineExceeded, Internal, InvalidArgument, Unavailable, Unimplemented,
};
pub use marker::{CancellationAlreadyRequested, NamespaceAlreadyExists, QueryFailed};
pub use namespace_not_active::NamespaceNotActive;
pub use not_found::NotFound;
pub use permission_denied::PermissionDenied;
pub use resource_exhausted::ResourceExhausted;
pub use unrecognized::Unrecognized;
pub use workflow_execution::WorkflowExecutionAlreadyStarted;
