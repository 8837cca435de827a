//! Start request for a workflow id that already has a running execution.

use fault_status::{Code, Status};
use thiserror::Error;
use uuid::Uuid;

use crate::cache::StatusCache;
use crate::encoder::{encode, message_or};
use crate::kind::ErrorKind;
use crate::payloads::WorkflowExecutionAlreadyStartedFailure;
use crate::variants::DetailedVariant;

/// A workflow execution with the requested id is already running.
///
/// `start_request_id` identifies the request that started the running
/// execution and `run_id` its run, so that callers can tell a duplicate
/// delivery of their own request apart from a genuine conflict.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct WorkflowExecutionAlreadyStarted {
    message: String,
    start_request_id: String,
    run_id: Uuid,
    status: StatusCache,
}

impl WorkflowExecutionAlreadyStarted {
    #[must_use]
    pub fn new(
        message: impl Into<String>,
        start_request_id: impl Into<String>,
        run_id: Uuid,
    ) -> Self {
        Self {
            message: message_or(message.into(), "workflow execution already started"),
            start_request_id: start_request_id.into(),
            run_id,
            status: StatusCache::empty(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn start_request_id(&self) -> &str {
        &self.start_request_id
    }

    /// Nil when the sender did not provide one.
    #[must_use]
    pub const fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn status(&self) -> &Status {
        self.status
            .get_or_build(|| encode(Self::CODE, &self.message, &self.detail()))
    }
}

impl DetailedVariant for WorkflowExecutionAlreadyStarted {
    const CODE: Code = Code::AlreadyExists;
    const KIND: ErrorKind = ErrorKind::WorkflowExecutionAlreadyStarted;

    type Detail = WorkflowExecutionAlreadyStartedFailure;

    fn detail(&self) -> Self::Detail {
        WorkflowExecutionAlreadyStartedFailure {
            start_request_id: self.start_request_id.clone(),
            run_id: self.run_id,
        }
    }

    fn from_wire(status: Status, detail: Self::Detail) -> Self {
        Self {
            message: message_or(status.message().to_string(), "workflow execution already started"),
            start_request_id: detail.start_request_id,
            run_id: detail.run_id,
            status: StatusCache::received(status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn status_is_already_exists_with_detail() {
        let run_id = Uuid::new_v4();
        let err = WorkflowExecutionAlreadyStarted::new("already started", "req-42", run_id);
        let status = err.status();
        assert_eq!(status.code(), Code::AlreadyExists);
        assert_eq!(status.message(), "already started");
        assert_eq!(
            status
                .extract_detail::<WorkflowExecutionAlreadyStartedFailure>()
                .unwrap(),
            Some(WorkflowExecutionAlreadyStartedFailure {
                start_request_id: "req-42".into(),
                run_id,
            })
        );
    }

    #[test]
    fn from_wire_keeps_fields_and_envelope() {
        let run_id = Uuid::new_v4();
        let sent = WorkflowExecutionAlreadyStarted::new("already started", "req-42", run_id);
        let received = WorkflowExecutionAlreadyStarted::from_wire(sent.status().clone(), sent.detail());
        assert_eq!(received, sent);
        assert_eq!(received.status(), sent.status());
        assert_eq!(received.run_id(), run_id);
    }
}
