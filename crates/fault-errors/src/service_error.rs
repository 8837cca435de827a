//! The tagged union over every variant.

use fault_status::{Code, Status};
use thiserror::Error;

use crate::kind::ErrorKind;
use crate::registry::DispatchRegistry;
use crate::variants::{
    Canceled, CancellationAlreadyRequested, ClientVersionNotSupported, DataLoss, DeadlineExceeded,
    DetailedVariant, Internal, InvalidArgument, NamespaceAlreadyExists, NamespaceNotActive,
    NotFound, PermissionDenied, QueryFailed, ResourceExhausted, Unavailable, Unimplemented,
    Unrecognized, WorkflowExecutionAlreadyStarted,
};

/// Any service error that can cross the wire.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error(transparent)]
    ClientVersionNotSupported(#[from] ClientVersionNotSupported),
    #[error(transparent)]
    WorkflowExecutionAlreadyStarted(#[from] WorkflowExecutionAlreadyStarted),
    #[error(transparent)]
    NamespaceNotActive(#[from] NamespaceNotActive),
    #[error(transparent)]
    NamespaceAlreadyExists(#[from] NamespaceAlreadyExists),
    #[error(transparent)]
    CancellationAlreadyRequested(#[from] CancellationAlreadyRequested),
    #[error(transparent)]
    QueryFailed(#[from] QueryFailed),
    #[error(transparent)]
    NotFound(#[from] NotFound),
    #[error(transparent)]
    ResourceExhausted(#[from] ResourceExhausted),
    #[error(transparent)]
    PermissionDenied(#[from] PermissionDenied),
    #[error(transparent)]
    Canceled(#[from] Canceled),
    #[error(transparent)]
    DataLoss(#[from] DataLoss),
    #[error(transparent)]
    DeadlineExceeded(#[from] DeadlineExceeded),
    #[error(transparent)]
    Internal(#[from] Internal),
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),
    #[error(transparent)]
    Unavailable(#[from] Unavailable),
    #[error(transparent)]
    Unimplemented(#[from] Unimplemented),
    /// The envelope matched no registered variant.
    #[error(transparent)]
    Unrecognized(#[from] Unrecognized),
}

/// Apply the same expression to whichever variant `$self` holds.
macro_rules! each_variant {
    ($self:expr, $err:ident => $body:expr) => {
        match $self {
            ServiceError::ClientVersionNotSupported($err) => $body,
            ServiceError::WorkflowExecutionAlreadyStarted($err) => $body,
            ServiceError::NamespaceNotActive($err) => $body,
            ServiceError::NamespaceAlreadyExists($err) => $body,
            ServiceError::CancellationAlreadyRequested($err) => $body,
            ServiceError::QueryFailed($err) => $body,
            ServiceError::NotFound($err) => $body,
            ServiceError::ResourceExhausted($err) => $body,
            ServiceError::PermissionDenied($err) => $body,
            ServiceError::Canceled($err) => $body,
            ServiceError::DataLoss($err) => $body,
            ServiceError::DeadlineExceeded($err) => $body,
            ServiceError::Internal($err) => $body,
            ServiceError::InvalidArgument($err) => $body,
            ServiceError::Unavailable($err) => $body,
            ServiceError::Unimplemented($err) => $body,
            ServiceError::Unrecognized($err) => $body,
        }
    };
}

impl ServiceError {
    /// Decode a received envelope with the process-wide default registry.
    ///
    /// Returns `None` for an `OK` status.
    #[must_use]
    pub fn from_status(status: Status) -> Option<Self> {
        DispatchRegistry::global().decode(status)
    }

    /// Human-readable explanation. Never empty.
    #[must_use]
    pub fn message(&self) -> &str {
        each_variant!(self, err => err.message())
    }

    /// The envelope this error is sent as.
    pub fn status(&self) -> &Status {
        each_variant!(self, err => err.status())
    }

    #[must_use]
    pub fn code(&self) -> Code {
        self.status().code()
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ClientVersionNotSupported(_) => ErrorKind::ClientVersionNotSupported,
            Self::WorkflowExecutionAlreadyStarted(_) => ErrorKind::WorkflowExecutionAlreadyStarted,
            Self::NamespaceNotActive(_) => ErrorKind::NamespaceNotActive,
            Self::NamespaceAlreadyExists(_) => ErrorKind::NamespaceAlreadyExists,
            Self::CancellationAlreadyRequested(_) => ErrorKind::CancellationAlreadyRequested,
            Self::QueryFailed(_) => ErrorKind::QueryFailed,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::ResourceExhausted(_) => ErrorKind::ResourceExhausted,
            Self::PermissionDenied(_) => ErrorKind::PermissionDenied,
            Self::Canceled(_) => ErrorKind::Canceled,
            Self::DataLoss(_) => ErrorKind::DataLoss,
            Self::DeadlineExceeded(_) => ErrorKind::DeadlineExceeded,
            Self::Internal(_) => ErrorKind::Internal,
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::Unavailable(_) => ErrorKind::Unavailable,
            Self::Unimplemented(_) => ErrorKind::Unimplemented,
            Self::Unrecognized(_) => ErrorKind::Unrecognized,
        }
    }

    /// The variant's typed fields as they appear in its detail payload.
    ///
    /// `None` for code-only variants and for unrecognized envelopes.
    #[must_use]
    pub fn detail_json(&self) -> Option<serde_json::Value> {
        match self {
            Self::ClientVersionNotSupported(err) => detail_value(err),
            Self::WorkflowExecutionAlreadyStarted(err) => detail_value(err),
            Self::NamespaceNotActive(err) => detail_value(err),
            Self::NamespaceAlreadyExists(err) => detail_value(err),
            Self::CancellationAlreadyRequested(err) => detail_value(err),
            Self::QueryFailed(err) => detail_value(err),
            Self::NotFound(err) => detail_value(err),
            Self::ResourceExhausted(err) => detail_value(err),
            Self::PermissionDenied(err) => detail_value(err),
            Self::Canceled(_)
            | Self::DataLoss(_)
            | Self::DeadlineExceeded(_)
            | Self::Internal(_)
            | Self::InvalidArgument(_)
            | Self::Unavailable(_)
            | Self::Unimplemented(_)
            | Self::Unrecognized(_) => None,
        }
    }

    #[must_use]
    pub const fn is_unrecognized(&self) -> bool {
        matches!(self, Self::Unrecognized(_))
    }

    /// Consume the error, yielding the envelope to hand to the transport.
    #[must_use]
    pub fn into_status(self) -> Status {
        match self {
            Self::Unrecognized(err) => err.into_status(),
            other => other.status().clone(),
        }
    }
}

fn detail_value<V: DetailedVariant>(err: &V) -> Option<serde_json::Value> {
    serde_json::to_value(err.detail()).ok()
}

impl From<ServiceError> for Status {
    fn from(err: ServiceError) -> Self {
        err.into_status()
    }
}
