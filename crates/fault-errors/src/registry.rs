//! Dispatch registry: from a received envelope back to its typed variant.
//!
//! Detail-carrying variants are keyed by their payload's type tag. Code-only
//! variants, and the default variant for a code whose detail went missing,
//! are keyed by status code. Tags win over codes.

use std::collections::HashMap;
use std::sync::OnceLock;

use fault_status::{Code, DetailPayload, Status};
use schemars::{JsonSchema, schema_for};
use serde::Serialize;

use crate::kind::ErrorKind;
use crate::options::DecodeOptions;
use crate::service_error::ServiceError;
use crate::variants::{
    Canceled, CancellationAlreadyRequested, ClientVersionNotSupported, CodedVariant, DataLoss,
    DeadlineExceeded, DetailedVariant, Internal, InvalidArgument, NamespaceAlreadyExists,
    NamespaceNotActive, NotFound, PermissionDenied, QueryFailed, ResourceExhausted, Unavailable,
    Unimplemented, Unrecognized, WorkflowExecutionAlreadyStarted,
};

type DecodeFn = fn(Status, &DecodeOptions) -> ServiceError;
type SchemaFn = fn() -> serde_json::Value;

#[derive(Clone, Copy)]
struct Registration {
    kind: ErrorKind,
    code: Code,
    type_tag: Option<&'static str>,
    decode: DecodeFn,
    schema: Option<SchemaFn>,
}

impl Registration {
    fn detailed<V: DetailedVariant>() -> Self {
        Self {
            kind: V::KIND,
            code: V::CODE,
            type_tag: Some(V::Detail::TYPE_TAG),
            decode: decode_detailed::<V>,
            schema: Some(payload_schema::<V::Detail> as SchemaFn),
        }
    }

    fn coded<V: CodedVariant>() -> Self {
        Self {
            kind: V::KIND,
            code: V::CODE,
            type_tag: None,
            decode: decode_coded::<V>,
            schema: None,
        }
    }
}

/// One row of the published wire contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContractEntry {
    pub kind: ErrorKind,
    pub code: Code,
    /// `None` for variants identified by code alone.
    pub type_tag: Option<&'static str>,
    /// JSON Schema of the detail payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<serde_json::Value>,
}

/// Maps detail type tags and status codes to variant decoders.
pub struct DispatchRegistry {
    by_tag: HashMap<&'static str, Registration>,
    by_code: HashMap<Code, Registration>,
    contract: Vec<Registration>,
    options: DecodeOptions,
}

impl DispatchRegistry {
    /// Registry of every variant with default decode options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(DecodeOptions::default())
    }

    #[must_use]
    pub fn with_options(options: DecodeOptions) -> Self {
        let mut registry = Self {
            by_tag: HashMap::new(),
            by_code: HashMap::new(),
            contract: Vec::new(),
            options,
        };

        // --- Detail-carrying (9) ---
        registry.register_detailed::<ClientVersionNotSupported>();
        registry.register_detailed::<WorkflowExecutionAlreadyStarted>();
        registry.register_detailed::<NamespaceNotActive>();
        registry.register_detailed::<NamespaceAlreadyExists>();
        registry.register_detailed::<CancellationAlreadyRequested>();
        registry.register_detailed::<QueryFailed>();
        registry.register_detailed::<NotFound>();
        registry.register_detailed::<ResourceExhausted>();
        registry.register_detailed::<PermissionDenied>();

        // --- Code-only (7) ---
        registry.register_coded::<Canceled>();
        registry.register_coded::<DataLoss>();
        registry.register_coded::<DeadlineExceeded>();
        registry.register_coded::<Internal>();
        registry.register_coded::<InvalidArgument>();
        registry.register_coded::<Unavailable>();
        registry.register_coded::<Unimplemented>();

        // --- Default variant when a detail-carrying code arrives without one (4) ---
        registry.register_fallback::<WorkflowExecutionAlreadyStarted>();
        registry.register_fallback::<NotFound>();
        registry.register_fallback::<ResourceExhausted>();
        registry.register_fallback::<PermissionDenied>();

        registry
    }

    /// Process-wide registry with default options.
    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<DispatchRegistry> = OnceLock::new();
        GLOBAL.get_or_init(Self::new)
    }

    fn register_detailed<V: DetailedVariant>(&mut self) {
        let registration = Registration::detailed::<V>();
        let previous = self.by_tag.insert(V::Detail::TYPE_TAG, registration);
        debug_assert!(
            previous.is_none(),
            "detail type tag registered twice: {}",
            V::Detail::TYPE_TAG
        );
        self.contract.push(registration);
    }

    fn register_coded<V: CodedVariant>(&mut self) {
        let registration = Registration::coded::<V>();
        let previous = self.by_code.insert(V::CODE, registration);
        debug_assert!(previous.is_none(), "status code registered twice: {}", V::CODE);
        self.contract.push(registration);
    }

    fn register_fallback<V: DetailedVariant>(&mut self) {
        let previous = self.by_code.insert(V::CODE, Registration::detailed::<V>());
        debug_assert!(previous.is_none(), "status code registered twice: {}", V::CODE);
    }

    /// Reconstruct the typed error an envelope represents.
    ///
    /// Returns `None` for an `OK` status. Envelopes that match no variant
    /// come back as [`ServiceError::Unrecognized`] holding the envelope
    /// verbatim.
    #[must_use]
    pub fn decode(&self, status: Status) -> Option<ServiceError> {
        if status.is_ok() {
            return None;
        }

        let tagged = status
            .details()
            .iter()
            .find_map(|detail| self.by_tag.get(detail.type_tag()))
            .copied();
        if let Some(registration) = tagged {
            return Some((registration.decode)(status, &self.options));
        }

        if let Some(registration) = self.by_code.get(&status.code()).copied() {
            let is_fallback = registration.type_tag.is_some();
            if !is_fallback || self.options.degrade_missing_details {
                if is_fallback {
                    tracing::debug!(
                        code = %status.code(),
                        kind = %registration.kind,
                        details = status.details().len(),
                        "no registered detail; decoding by status code"
                    );
                }
                return Some((registration.decode)(status, &self.options));
            }
        }

        tracing::debug!(
            code = %status.code(),
            details = status.details().len(),
            "status envelope matches no registered variant"
        );
        Some(Unrecognized::new(status).into())
    }

    /// Variant a detail type tag decodes to.
    #[must_use]
    pub fn kind_for_tag(&self, type_tag: &str) -> Option<ErrorKind> {
        self.by_tag.get(type_tag).map(|registration| registration.kind)
    }

    /// Variant a detail-less envelope with this code decodes to, honoring
    /// the registry's options.
    #[must_use]
    pub fn kind_for_code(&self, code: Code) -> Option<ErrorKind> {
        self.by_code
            .get(&code)
            .filter(|registration| {
                registration.type_tag.is_none() || self.options.degrade_missing_details
            })
            .map(|registration| registration.kind)
    }

    /// The wire contract, one entry per variant, sorted by kind.
    #[must_use]
    pub fn contract(&self) -> Vec<ContractEntry> {
        let mut entries: Vec<ContractEntry> = self
            .contract
            .iter()
            .map(|registration| ContractEntry {
                kind: registration.kind,
                code: registration.code,
                type_tag: registration.type_tag,
                schema: registration.schema.map(|schema| schema()),
            })
            .collect();
        entries.sort_by_key(|entry| entry.kind);
        entries
    }

    #[must_use]
    pub const fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Number of registered variants.
    #[must_use]
    pub fn variant_count(&self) -> usize {
        self.contract.len()
    }
}

impl Default for DispatchRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn decode_detailed<V: DetailedVariant>(status: Status, options: &DecodeOptions) -> ServiceError {
    let detail = match status.extract_detail::<V::Detail>() {
        Ok(detail) => detail.unwrap_or_default(),
        Err(error) if options.strict_details => {
            tracing::warn!(%error, kind = %V::KIND, "malformed error detail; leaving status unrecognized");
            return Unrecognized::new(status).into();
        }
        Err(error) => {
            tracing::warn!(%error, kind = %V::KIND, "malformed error detail; decoding with empty fields");
            V::Detail::default()
        }
    };
    V::from_wire(status, detail).into()
}

fn decode_coded<V: CodedVariant>(status: Status, _options: &DecodeOptions) -> ServiceError {
    V::from_wire(status).into()
}

fn payload_schema<P: JsonSchema>() -> serde_json::Value {
    serde_json::to_value(schema_for!(P)).unwrap_or_default()
}
