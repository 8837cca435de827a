//! Request routed to a standby cluster for its namespace.

use fault_status::{Code, Status};
use thiserror::Error;

use crate::cache::StatusCache;
use crate::encoder::{encode, message_or};
use crate::kind::ErrorKind;
use crate::payloads::NamespaceNotActiveFailure;
use crate::variants::DetailedVariant;

/// The request reached a standby cluster for a namespace that is active elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct NamespaceNotActive {
    message: String,
    namespace: String,
    current_cluster: String,
    active_cluster: String,
    status: StatusCache,
}

impl NamespaceNotActive {
    #[must_use]
    pub fn new(
        namespace: impl Into<String>,
        current_cluster: impl Into<String>,
        active_cluster: impl Into<String>,
    ) -> Self {
        let namespace = namespace.into();
        let current_cluster = current_cluster.into();
        let active_cluster = active_cluster.into();
        Self {
            message: format!(
                "Namespace: {namespace} is active in cluster: {active_cluster}, while current cluster {current_cluster} is a standby cluster."
            ),
            namespace,
            current_cluster,
            active_cluster,
            status: StatusCache::empty(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[must_use]
    pub fn current_cluster(&self) -> &str {
        &self.current_cluster
    }

    /// Cluster the caller should redirect to.
    #[must_use]
    pub fn active_cluster(&self) -> &str {
        &self.active_cluster
    }

    pub fn status(&self) -> &Status {
        self.status
            .get_or_build(|| encode(Self::CODE, &self.message, &self.detail()))
    }
}

impl DetailedVariant for NamespaceNotActive {
    const CODE: Code = Code::FailedPrecondition;
    const KIND: ErrorKind = ErrorKind::NamespaceNotActive;

    type Detail = NamespaceNotActiveFailure;

    fn detail(&self) -> Self::Detail {
        NamespaceNotActiveFailure {
            namespace: self.namespace.clone(),
            current_cluster: self.current_cluster.clone(),
            active_cluster: self.active_cluster.clone(),
        }
    }

    fn from_wire(status: Status, detail: Self::Detail) -> Self {
        Self {
            message: message_or(status.message().to_string(), "namespace not active"),
            namespace: detail.namespace,
            current_cluster: detail.current_cluster,
            active_cluster: detail.active_cluster,
            status: StatusCache::received(status),
        }
    }
}
