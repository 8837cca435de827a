//! Envelopes with missing, corrupt or foreign details.

use fault_errors::payloads::{
    ResourceExhaustedCause, ResourceExhaustedFailure, WorkflowExecutionAlreadyStartedFailure,
};
use fault_errors::{DecodeOptions, DispatchRegistry, ErrorKind, ServiceError};
use fault_status::{Code, Detail, DetailPayload, Status};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn corrupt_started_detail() -> Detail {
    Detail::new(
        WorkflowExecutionAlreadyStartedFailure::TYPE_TAG,
        serde_json::json!({"start_request_id": 17, "run_id": "not-a-uuid"}),
    )
}

#[test]
fn already_exists_without_detail_is_workflow_started() {
    let wire = Status::new(Code::AlreadyExists, "workflow is already running");
    let decoded = ServiceError::from_status(wire.clone()).unwrap();

    let ServiceError::WorkflowExecutionAlreadyStarted(err) = decoded else {
        panic!("expected WorkflowExecutionAlreadyStarted");
    };
    assert_eq!(err.start_request_id(), "");
    assert!(err.run_id().is_nil());
    assert_eq!(err.message(), "workflow is already running");
    assert_eq!(err.status(), &wire);
}

#[test]
fn already_exists_with_corrupt_detail_decodes_with_empty_fields() {
    let wire = Status::from_parts(Code::AlreadyExists, "", vec![corrupt_started_detail()]);
    let decoded = ServiceError::from_status(wire.clone()).unwrap();

    let ServiceError::WorkflowExecutionAlreadyStarted(err) = decoded else {
        panic!("expected WorkflowExecutionAlreadyStarted");
    };
    assert_eq!(err.start_request_id(), "");
    assert!(err.run_id().is_nil());
    assert!(!err.message().is_empty());
    assert_eq!(err.status(), &wire);
}

#[test]
fn partial_detail_keeps_present_fields() {
    let wire = Status::from_parts(
        Code::AlreadyExists,
        "dup",
        vec![Detail::new(
            WorkflowExecutionAlreadyStartedFailure::TYPE_TAG,
            serde_json::json!({"start_request_id": "req-9"}),
        )],
    );
    let ServiceError::WorkflowExecutionAlreadyStarted(err) =
        ServiceError::from_status(wire).unwrap()
    else {
        panic!("expected WorkflowExecutionAlreadyStarted");
    };
    assert_eq!(err.start_request_id(), "req-9");
    assert!(err.run_id().is_nil());
}

#[test]
fn empty_run_id_keeps_request_id() {
    let wire = Status::from_parts(
        Code::AlreadyExists,
        "dup",
        vec![Detail::new(
            WorkflowExecutionAlreadyStartedFailure::TYPE_TAG,
            serde_json::json!({"start_request_id": "req-9", "run_id": ""}),
        )],
    );
    let ServiceError::WorkflowExecutionAlreadyStarted(err) =
        ServiceError::from_status(wire.clone()).unwrap()
    else {
        panic!("expected WorkflowExecutionAlreadyStarted");
    };
    assert_eq!(err.start_request_id(), "req-9");
    assert!(err.run_id().is_nil());
    assert_eq!(err.status(), &wire);
}

#[test]
fn unknown_cause_survives_strict_details() {
    let registry = DispatchRegistry::with_options(DecodeOptions {
        degrade_missing_details: true,
        strict_details: true,
    });
    let wire = Status::from_parts(
        Code::ResourceExhausted,
        "slow down",
        vec![Detail::new(
            ResourceExhaustedFailure::TYPE_TAG,
            serde_json::json!({"cause": "busy_worker_pool"}),
        )],
    );
    let ServiceError::ResourceExhausted(err) = registry.decode(wire).unwrap() else {
        panic!("expected ResourceExhausted");
    };
    assert_eq!(err.cause(), ResourceExhaustedCause::Unspecified);
    assert_eq!(err.message(), "slow down");
}

#[test]
fn strict_details_rejects_corrupt_detail() {
    let registry = DispatchRegistry::with_options(DecodeOptions {
        degrade_missing_details: true,
        strict_details: true,
    });
    let wire = Status::from_parts(Code::AlreadyExists, "dup", vec![corrupt_started_detail()]);
    let decoded = registry.decode(wire.clone()).unwrap();
    assert!(decoded.is_unrecognized());
    assert_eq!(decoded.into_status(), wire);
}

#[test]
fn without_degradation_missing_detail_is_unrecognized() {
    let registry = DispatchRegistry::with_options(DecodeOptions {
        degrade_missing_details: false,
        strict_details: false,
    });
    let decoded = registry
        .decode(Status::new(Code::AlreadyExists, "dup"))
        .unwrap();
    assert_eq!(decoded.kind(), ErrorKind::Unrecognized);

    // Code-only variants are unaffected.
    let decoded = registry.decode(Status::new(Code::Internal, "boom")).unwrap();
    assert_eq!(decoded.kind(), ErrorKind::Internal);
}

#[rstest]
#[case(Code::AlreadyExists, ErrorKind::WorkflowExecutionAlreadyStarted)]
#[case(Code::NotFound, ErrorKind::NotFound)]
#[case(Code::ResourceExhausted, ErrorKind::ResourceExhausted)]
#[case(Code::PermissionDenied, ErrorKind::PermissionDenied)]
#[case(Code::Cancelled, ErrorKind::Canceled)]
#[case(Code::InvalidArgument, ErrorKind::InvalidArgument)]
#[case(Code::Unavailable, ErrorKind::Unavailable)]
#[case(Code::FailedPrecondition, ErrorKind::Unrecognized)]
#[case(Code::Unknown, ErrorKind::Unrecognized)]
#[case(Code::Aborted, ErrorKind::Unrecognized)]
#[case(Code::Unauthenticated, ErrorKind::Unrecognized)]
fn detail_less_envelope_decodes_by_code(#[case] code: Code, #[case] expected: ErrorKind) {
    let wire = Status::new(code, "bare");
    let decoded = ServiceError::from_status(wire.clone()).unwrap();
    assert_eq!(decoded.kind(), expected);
    assert_eq!(decoded.message(), "bare");
    assert_eq!(decoded.status(), &wire);
}

#[test]
fn unknown_code_with_foreign_payload_is_unrecognized() {
    let wire = Status::from_parts(
        Code::Unknown,
        "something odd",
        vec![Detail::new(
            "vendor.v1.SomethingElse",
            serde_json::json!({"x": 1}),
        )],
    );
    let decoded = ServiceError::from_status(wire.clone()).unwrap();
    let ServiceError::Unrecognized(err) = decoded else {
        panic!("expected Unrecognized");
    };
    assert_eq!(err.message(), "something odd");
    assert_eq!(err.status(), &wire);
}

#[test]
fn unrecognized_with_empty_message_still_explains() {
    let decoded = ServiceError::from_status(Status::new(Code::Unknown, "")).unwrap();
    assert_eq!(decoded.message(), "unrecognized service error (UNKNOWN)");
    assert_eq!(decoded.status().message(), "");
}

#[test]
fn empty_wire_message_is_replaced_but_envelope_kept() {
    let wire = Status::new(Code::NotFound, "");
    let decoded = ServiceError::from_status(wire.clone()).unwrap();
    assert_eq!(decoded.message(), "not found");
    assert_eq!(decoded.status(), &wire);
}

#[test]
fn ok_is_not_an_error() {
    assert!(ServiceError::from_status(Status::new(Code::Ok, "")).is_none());
    assert!(
        DispatchRegistry::new()
            .decode(Status::new(Code::Ok, "fine"))
            .is_none()
    );
}

#[test]
fn tag_is_trusted_over_mismatched_code() {
    let sent = fault_errors::ClientVersionNotSupported::new("0.1", "py", ">=1");
    let wire = Status::from_parts(Code::Internal, sent.message(), sent.status().details().to_vec());
    let decoded = ServiceError::from_status(wire.clone()).unwrap();
    assert_eq!(decoded.kind(), ErrorKind::ClientVersionNotSupported);
    assert_eq!(decoded.code(), Code::Internal);
    assert_eq!(decoded.status(), &wire);
}
