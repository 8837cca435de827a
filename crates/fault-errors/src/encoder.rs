//! Building a status envelope from a variant's current fields.

use fault_status::{Code, DetailPayload, Status};

/// Build the envelope for a detail-carrying variant.
///
/// Attaching to a fresh envelope only fails if the payload does not
/// serialize; in that case the bare envelope is returned so that the message
/// still reaches the caller.
pub(crate) fn encode<P: DetailPayload>(code: Code, message: &str, payload: &P) -> Status {
    let mut status = Status::new(code, message);
    if let Err(error) = status.attach_detail(payload) {
        tracing::error!(%error, %code, type_tag = P::TYPE_TAG, "failed to attach error detail; sending bare status");
    }
    status
}

/// Build the envelope for a code-only variant.
pub(crate) fn encode_bare(code: Code, message: &str) -> Status {
    Status::new(code, message)
}

/// Substitute a non-empty message when the caller provided none.
pub(crate) fn message_or(message: String, fallback: &str) -> String {
    if message.is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payloads::PermissionDeniedFailure;
    use pretty_assertions::assert_eq;

    #[test]
    fn encode_attaches_exactly_one_detail() {
        let payload = PermissionDeniedFailure {
            reason: "no".into(),
        };
        let status = encode(Code::PermissionDenied, "denied", &payload);
        assert_eq!(status.code(), Code::PermissionDenied);
        assert_eq!(status.message(), "denied");
        assert_eq!(status.details().len(), 1);
        assert_eq!(
            status.extract_detail::<PermissionDeniedFailure>().unwrap(),
            Some(payload)
        );
    }

    #[test]
    fn encode_is_deterministic() {
        let payload = PermissionDeniedFailure {
            reason: "no".into(),
        };
        assert_eq!(
            encode(Code::PermissionDenied, "denied", &payload),
            encode(Code::PermissionDenied, "denied", &payload)
        );
    }

    #[test]
    fn message_or_keeps_non_empty() {
        assert_eq!(message_or("given".into(), "fallback"), "given");
        assert_eq!(message_or(String::new(), "fallback"), "fallback");
    }
}
