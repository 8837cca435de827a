//! Missing entity, optionally with the clusters involved.

use fault_status::{Code, Status};
use thiserror::Error;

use crate::cache::StatusCache;
use crate::encoder::{encode, message_or};
use crate::kind::ErrorKind;
use crate::payloads::NotFoundFailure;
use crate::variants::DetailedVariant;

/// A requested entity does not exist.
///
/// In a multi-cluster deployment the entity may live on another cluster;
/// the cluster fields say where the lookup ran and which cluster is active.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct NotFound {
    message: String,
    current_cluster: String,
    active_cluster: String,
    status: StatusCache,
}

impl NotFound {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_clusters(message, String::new(), String::new())
    }

    #[must_use]
    pub fn with_clusters(
        message: impl Into<String>,
        current_cluster: impl Into<String>,
        active_cluster: impl Into<String>,
    ) -> Self {
        Self {
            message: message_or(message.into(), "not found"),
            current_cluster: current_cluster.into(),
            active_cluster: active_cluster.into(),
            status: StatusCache::empty(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn current_cluster(&self) -> &str {
        &self.current_cluster
    }

    #[must_use]
    pub fn active_cluster(&self) -> &str {
        &self.active_cluster
    }

    pub fn status(&self) -> &Status {
        self.status
            .get_or_build(|| encode(Self::CODE, &self.message, &self.detail()))
    }
}

impl DetailedVariant for NotFound {
    const CODE: Code = Code::NotFound;
    const KIND: ErrorKind = ErrorKind::NotFound;

    type Detail = NotFoundFailure;

    fn detail(&self) -> Self::Detail {
        NotFoundFailure {
            current_cluster: self.current_cluster.clone(),
            active_cluster: self.active_cluster.clone(),
        }
    }

    fn from_wire(status: Status, detail: Self::Detail) -> Self {
        Self {
            message: message_or(status.message().to_string(), "not found"),
            current_cluster: detail.current_cluster,
            active_cluster: detail.active_cluster,
            status: StatusCache::received(status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_constructor_leaves_clusters_empty() {
        let err = NotFound::new("workflow not found");
        assert_eq!(err.current_cluster(), "");
        assert_eq!(err.active_cluster(), "");
        assert_eq!(err.status().code(), Code::NotFound);
        assert_eq!(err.status().details().len(), 1);
    }
}
