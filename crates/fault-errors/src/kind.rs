//! Field-less tag naming each member of the error variant set.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which variant a [`crate::ServiceError`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    ClientVersionNotSupported,
    WorkflowExecutionAlreadyStarted,
    NamespaceNotActive,
    NamespaceAlreadyExists,
    CancellationAlreadyRequested,
    QueryFailed,
    NotFound,
    ResourceExhausted,
    PermissionDenied,
    Canceled,
    DataLoss,
    DeadlineExceeded,
    Internal,
    InvalidArgument,
    Unavailable,
    Unimplemented,
    /// The envelope matched no registered variant.
    Unrecognized,
}

impl ErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ClientVersionNotSupported => "client_version_not_supported",
            Self::WorkflowExecutionAlreadyStarted => "workflow_execution_already_started",
            Self::NamespaceNotActive => "namespace_not_active",
            Self::NamespaceAlreadyExists => "namespace_already_exists",
            Self::CancellationAlreadyRequested => "cancellation_already_requested",
            Self::QueryFailed => "query_failed",
            Self::NotFound => "not_found",
            Self::ResourceExhausted => "resource_exhausted",
            Self::PermissionDenied => "permission_denied",
            Self::Canceled => "canceled",
            Self::DataLoss => "data_loss",
            Self::DeadlineExceeded => "deadline_exceeded",
            Self::Internal => "internal",
            Self::InvalidArgument => "invalid_argument",
            Self::Unavailable => "unavailable",
            Self::Unimplemented => "unimplemented",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
