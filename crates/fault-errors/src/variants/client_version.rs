//! Client SDK version rejected by the server.

use fault_status::{Code, Status};
use thiserror::Error;

use crate::cache::StatusCache;
use crate::encoder::{encode, message_or};
use crate::kind::ErrorKind;
use crate::payloads::ClientVersionNotSupportedFailure;
use crate::variants::DetailedVariant;

/// The calling client's version is not supported by the server.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ClientVersionNotSupported {
    message: String,
    client_version: String,
    client_impl: String,
    supported_versions: String,
    status: StatusCache,
}

impl ClientVersionNotSupported {
    #[must_use]
    pub fn new(
        client_version: impl Into<String>,
        client_impl: impl Into<String>,
        supported_versions: impl Into<String>,
    ) -> Self {
        let client_version = client_version.into();
        let client_impl = client_impl.into();
        let supported_versions = supported_versions.into();
        Self {
            message: format!(
                "Client version {client_version} is not supported. Supported versions for {client_impl} are {supported_versions}"
            ),
            client_version,
            client_impl,
            supported_versions,
            status: StatusCache::empty(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn client_version(&self) -> &str {
        &self.client_version
    }

    #[must_use]
    pub fn client_impl(&self) -> &str {
        &self.client_impl
    }

    #[must_use]
    pub fn supported_versions(&self) -> &str {
        &self.supported_versions
    }

    pub fn status(&self) -> &Status {
        self.status
            .get_or_build(|| encode(Self::CODE, &self.message, &self.detail()))
    }
}

impl DetailedVariant for ClientVersionNotSupported {
    const CODE: Code = Code::FailedPrecondition;
    const KIND: ErrorKind = ErrorKind::ClientVersionNotSupported;

    type Detail = ClientVersionNotSupportedFailure;

    fn detail(&self) -> Self::Detail {
        ClientVersionNotSupportedFailure {
            client_version: self.client_version.clone(),
            client_impl: self.client_impl.clone(),
            supported_versions: self.supported_versions.clone(),
        }
    }

    fn from_wire(status: Status, detail: Self::Detail) -> Self {
        Self {
            message: message_or(status.message().to_string(), "client version not supported"),
            client_version: detail.client_version,
            client_impl: detail.client_impl,
            supported_versions: detail.supported_versions,
            status: StatusCache::received(status),
        }
    }
}
