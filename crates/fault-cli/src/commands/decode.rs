use std::io::Read;
use std::path::Path;

use anyhow::Context;
use fault_config::FaultConfig;
use fault_errors::{DispatchRegistry, ErrorKind};
use fault_status::{Code, Status};
use serde::Serialize;

use crate::cli::{DecodeArgs, OutputFormat};
use crate::output::output;

/// What an envelope decodes to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodeReport {
    /// `None` for an `OK` status.
    pub kind: Option<ErrorKind>,
    pub code: Code,
    pub message: String,
    pub detail: Option<serde_json::Value>,
    /// Whether re-sending the decoded error reproduces the input envelope.
    pub reencodes_identically: bool,
}

/// Handle `fault decode`.
pub fn handle(args: &DecodeArgs, config: &FaultConfig, format: OutputFormat) -> anyhow::Result<()> {
    let status = read_status(args.file.as_deref())?;
    let registry = DispatchRegistry::with_options(config.decode.clone());
    let report = build_report(&registry, status);
    tracing::debug!(kind = ?report.kind, code = %report.code, "decoded envelope");
    output(&report, format)
}

/// Parse a JSON envelope from `path`, or stdin when `None`.
pub fn read_status(path: Option<&Path>) -> anyhow::Result<Status> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read envelope from stdin")?;
            buf
        }
    };
    serde_json::from_str(&raw).context("input is not a JSON status envelope")
}

pub fn build_report(registry: &DispatchRegistry, status: Status) -> DecodeReport {
    let input = status.clone();
    match registry.decode(status) {
        None => DecodeReport {
            kind: None,
            code: input.code(),
            message: input.message().to_string(),
            detail: None,
            reencodes_identically: true,
        },
        Some(err) => DecodeReport {
            kind: Some(err.kind()),
            code: err.code(),
            message: err.message().to_string(),
            detail: err.detail_json(),
            reencodes_identically: err.status() == &input,
        },
    }
}
