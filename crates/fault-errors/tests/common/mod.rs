//! Sample errors shared by the integration tests.

#![allow(dead_code)]

use fault_errors::payloads::ResourceExhaustedCause;
use fault_errors::{
    Canceled, CancellationAlreadyRequested, ClientVersionNotSupported, DataLoss, DeadlineExceeded,
    Internal, InvalidArgument, NamespaceAlreadyExists, NamespaceNotActive, NotFound,
    PermissionDenied, QueryFailed, ResourceExhausted, ServiceError, Unavailable, Unimplemented,
    WorkflowExecutionAlreadyStarted,
};
use uuid::Uuid;

pub const RUN_ID: &str = "9b7c8a6e-3f1d-4c2b-a5e4-7d6f0e1c2b3a";

pub fn run_id() -> Uuid {
    Uuid::parse_str(RUN_ID).unwrap()
}

/// One freshly constructed instance of every variant.
pub fn samples() -> Vec<ServiceError> {
    vec![
        ClientVersionNotSupported::new("1.2.0", "go-client", ">=1.5.0").into(),
        WorkflowExecutionAlreadyStarted::new("already started", "req-42", run_id()).into(),
        NamespaceNotActive::new("orders", "us-east", "eu-west").into(),
        NamespaceAlreadyExists::new("namespace orders already registered").into(),
        CancellationAlreadyRequested::new("cancel already requested").into(),
        QueryFailed::new("query handler returned an error").into(),
        NotFound::with_clusters("workflow run not found", "us-east", "eu-west").into(),
        ResourceExhausted::new(ResourceExhaustedCause::ConcurrentLimit, "too many pollers").into(),
        PermissionDenied::new("caller may not signal", "missing role: writer").into(),
        Canceled::new("caller went away").into(),
        DataLoss::new("history branch corrupted").into(),
        DeadlineExceeded::new("persistence timed out").into(),
        Internal::new("shard controller panicked").into(),
        InvalidArgument::new("workflow id is empty").into(),
        Unavailable::new("frontend draining").into(),
        Unimplemented::new("batch reset is not implemented").into(),
    ]
}
