//! Encode → decode → re-encode fidelity for every variant.

mod common;

use fault_errors::{ErrorKind, ServiceError};
use fault_status::{Code, Status};
use pretty_assertions::assert_eq;

#[test]
fn every_variant_roundtrips() {
    for sent in common::samples() {
        let received = ServiceError::from_status(sent.status().clone())
            .unwrap_or_else(|| panic!("{} decoded as OK", sent.kind()));

        assert_eq!(received.kind(), sent.kind());
        assert_eq!(received.status(), sent.status(), "{}", sent.kind());
        assert_eq!(received.message(), sent.message());
        assert_eq!(received.detail_json(), sent.detail_json());
        assert_eq!(received, sent);
    }
}

#[test]
fn roundtrip_through_json() {
    for sent in common::samples() {
        let json = serde_json::to_string(sent.status()).unwrap();
        let wire: Status = serde_json::from_str(&json).unwrap();
        let received = ServiceError::from_status(wire).unwrap();
        assert_eq!(received.status(), sent.status(), "{}", sent.kind());
        assert_eq!(received, sent);
    }
}

#[test]
fn status_is_idempotent() {
    for err in common::samples() {
        let first = err.status().clone();
        let second = err.status();
        assert_eq!(&first, second);
        assert!(std::ptr::eq(err.status(), second));
    }
}

#[test]
fn message_is_never_empty() {
    for err in common::samples() {
        assert!(!err.message().is_empty(), "{}", err.kind());
        assert_eq!(err.to_string(), err.message());
    }
}

#[test]
fn client_version_scenario() {
    let err = fault_errors::ClientVersionNotSupported::new("1.2.0", "go-client", ">=1.5.0");
    assert_eq!(
        err.message(),
        "Client version 1.2.0 is not supported. Supported versions for go-client are >=1.5.0"
    );
    assert_eq!(err.status().code(), Code::FailedPrecondition);
}

#[test]
fn workflow_already_started_scenario() {
    let run_id = common::run_id();
    let sent = fault_errors::WorkflowExecutionAlreadyStarted::new("already started", "req-42", run_id);

    let decoded = ServiceError::from_status(sent.status().clone()).unwrap();
    let ServiceError::WorkflowExecutionAlreadyStarted(decoded) = decoded else {
        panic!("expected WorkflowExecutionAlreadyStarted");
    };
    assert_eq!(decoded.start_request_id(), "req-42");
    assert_eq!(decoded.run_id(), run_id);
    assert_eq!(decoded.message(), "already started");
}

#[test]
fn received_envelope_is_forwarded_verbatim() {
    // A peer may attach extra details this side does not model; forwarding
    // the decoded error must keep them.
    let sent = fault_errors::WorkflowExecutionAlreadyStarted::new("dup", "req-1", common::run_id());
    let mut details = sent.status().details().to_vec();
    details.push(fault_status::Detail::new(
        "vendor.v1.DebugInfo",
        serde_json::json!({"stack": "frame 0"}),
    ));
    let wire = Status::from_parts(Code::AlreadyExists, "dup", details);

    let decoded = ServiceError::from_status(wire.clone()).unwrap();
    assert_eq!(decoded.kind(), ErrorKind::WorkflowExecutionAlreadyStarted);
    assert_eq!(decoded.into_status(), wire);
}
