//! Structured detail payloads, one per detail-carrying variant.
//!
//! Field layouts and type tags are part of the wire contract. Every field is
//! `#[serde(default)]` so that partial payloads decode to empty values.
//! Run ids and causes that fail to parse default on their own without
//! taking the rest of the payload down with them.

use fault_status::DetailPayload;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ClientVersionNotSupportedFailure {
    #[serde(default)]
    pub client_version: String,
    #[serde(default)]
    pub client_impl: String,
    #[serde(default)]
    pub supported_versions: String,
}

impl DetailPayload for ClientVersionNotSupportedFailure {
    const TYPE_TAG: &'static str = "errordetails.v1.ClientVersionNotSupportedFailure";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WorkflowExecutionAlreadyStartedFailure {
    #[serde(default)]
    pub start_request_id: String,
    /// Run of the execution that already holds the workflow id. Nil when unknown.
    #[serde(default, deserialize_with = "lenient_run_id")]
    #[schemars(with = "Uuid")]
    pub run_id: Uuid,
}

impl DetailPayload for WorkflowExecutionAlreadyStartedFailure {
    const TYPE_TAG: &'static str = "errordetails.v1.WorkflowExecutionAlreadyStartedFailure";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NamespaceNotActiveFailure {
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub current_cluster: String,
    #[serde(default)]
    pub active_cluster: String,
}

impl DetailPayload for NamespaceNotActiveFailure {
    const TYPE_TAG: &'static str = "errordetails.v1.NamespaceNotActiveFailure";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NamespaceAlreadyExistsFailure {}

impl DetailPayload for NamespaceAlreadyExistsFailure {
    const TYPE_TAG: &'static str = "errordetails.v1.NamespaceAlreadyExistsFailure";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CancellationAlreadyRequestedFailure {}

impl DetailPayload for CancellationAlreadyRequestedFailure {
    const TYPE_TAG: &'static str = "errordetails.v1.CancellationAlreadyRequestedFailure";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct QueryFailedFailure {}

impl DetailPayload for QueryFailedFailure {
    const TYPE_TAG: &'static str = "errordetails.v1.QueryFailedFailure";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NotFoundFailure {
    #[serde(default)]
    pub current_cluster: String,
    #[serde(default)]
    pub active_cluster: String,
}

impl DetailPayload for NotFoundFailure {
    const TYPE_TAG: &'static str = "errordetails.v1.NotFoundFailure";
}

/// Why a resource was exhausted.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ResourceExhaustedCause {
    #[default]
    Unspecified,
    RpsLimit,
    ConcurrentLimit,
    SystemOverloaded,
}

impl ResourceExhaustedCause {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unspecified => "unspecified",
            Self::RpsLimit => "rps_limit",
            Self::ConcurrentLimit => "concurrent_limit",
            Self::SystemOverloaded => "system_overloaded",
        }
    }
}

impl fmt::Display for ResourceExhaustedCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ResourceExhaustedFailure {
    #[serde(default, deserialize_with = "lenient_cause")]
    #[schemars(with = "ResourceExhaustedCause")]
    pub cause: ResourceExhaustedCause,
}

impl DetailPayload for ResourceExhaustedFailure {
    const TYPE_TAG: &'static str = "errordetails.v1.ResourceExhaustedFailure";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PermissionDeniedFailure {
    #[serde(default)]
    pub reason: String,
}

impl DetailPayload for PermissionDeniedFailure {
    const TYPE_TAG: &'static str = "errordetails.v1.PermissionDeniedFailure";
}

/// Empty, null or malformed run ids read as nil.
fn lenient_run_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Uuid, D::Error> {
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(raw
        .as_str()
        .and_then(|run_id| Uuid::parse_str(run_id).ok())
        .unwrap_or_else(Uuid::nil))
}

/// Causes this build does not know read as `Unspecified`.
fn lenient_cause<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<ResourceExhaustedCause, D::Error> {
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(raw).unwrap_or_default())
}
