//! Variants whose detail payload is a bare type marker.

use crate::payloads::{
    CancellationAlreadyRequestedFailure, NamespaceAlreadyExistsFailure, QueryFailedFailure,
};

marker_error!(
    /// A namespace with the requested name is already registered.
    NamespaceAlreadyExists,
    AlreadyExists,
    NamespaceAlreadyExistsFailure,
    "namespace already exists"
);
marker_error!(
    /// Cancellation of the workflow execution was already requested.
    CancellationAlreadyRequested,
    AlreadyExists,
    CancellationAlreadyRequestedFailure,
    "cancellation already requested"
);
marker_error!(
    /// A workflow query failed to execute.
    QueryFailed,
    InvalidArgument,
    QueryFailedFailure,
    "query failed"
);
