//! # fault-errors
//!
//! Typed service errors that survive an RPC boundary.
//!
//! Every variant knows its fixed wire status code and its structured detail
//! payload. Encoding goes through each variant's `status()`, which builds the
//! envelope once and returns the same one afterwards. Decoding goes through
//! [`DispatchRegistry`], which picks the variant from the payload's type tag
//! (or from the status code when no detail is present) and caches the
//! received envelope so that re-sending it never drifts from the original.
//!
//! ```
//! use fault_errors::{ClientVersionNotSupported, ServiceError};
//! use fault_status::Code;
//!
//! let sent = ClientVersionNotSupported::new("1.2.0", "go-client", ">=1.5.0");
//! assert_eq!(sent.status().code(), Code::FailedPrecondition);
//!
//! let received = ServiceError::from_status(sent.status().clone()).unwrap();
//! let ServiceError::ClientVersionNotSupported(err) = received else { unreachable!() };
//! assert_eq!(err.client_impl(), "go-client");
//! ```

pub mod cache;
mod encoder;
pub mod kind;
pub mod options;
pub mod payloads;
pub mod registry;
pub mod service_error;
pub mod variants;

pub use cache::StatusCache;
pub use kind::ErrorKind;
pub use options::DecodeOptions;
pub use registry::{ContractEntry, DispatchRegistry};
pub use service_error::ServiceError;
pub use variants::{
    Canceled, CancellationAlreadyRequested, ClientVersionNotSupported, CodedVariant, DataLoss,
    DeadlineExceeded, DetailedVariant, Internal, InvalidArgument, NamespaceAlreadyExists,
    NamespaceNotActive, NotFound, PermissionDenied, QueryFailed, ResourceExhausted, Unavailable,
    Unimplemented, Unrecognized, WorkflowExecutionAlreadyStarted,
};
