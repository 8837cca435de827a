//! Envelopes no registered variant claims.

use fault_status::Status;
use thiserror::Error;

/// An envelope that matched no registered variant.
///
/// The envelope is kept verbatim so it can be inspected or forwarded
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Unrecognized {
    message: String,
    status: Status,
}

impl Unrecognized {
    #[must_use]
    pub fn new(status: Status) -> Self {
        let message = if status.message().is_empty() {
            format!("unrecognized service error ({})", status.code())
        } else {
            status.message().to_string()
        };
        Self { message, status }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub const fn status(&self) -> &Status {
        &self.status
    }

    #[must_use]
    pub fn into_status(self) -> Status {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fault_status::Code;

    #[test]
    fn empty_message_names_the_code() {
        let err = Unrecognized::new(Status::new(Code::Aborted, ""));
        assert_eq!(err.message(), "unrecognized service error (ABORTED)");
        assert_eq!(err.status().message(), "");
    }
}
