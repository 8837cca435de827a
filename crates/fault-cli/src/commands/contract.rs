use fault_config::FaultConfig;
use fault_errors::{ContractEntry, DispatchRegistry};

use crate::cli::{ContractArgs, OutputFormat};
use crate::output::output;

/// Handle `fault contract`.
pub fn handle(args: &ContractArgs, config: &FaultConfig, format: OutputFormat) -> anyhow::Result<()> {
    let registry = DispatchRegistry::with_options(config.decode.clone());
    output(&contract_rows(&registry, args.schemas), format)
}

pub fn contract_rows(registry: &DispatchRegistry, with_schemas: bool) -> Vec<ContractEntry> {
    let mut rows = registry.contract();
    if !with_schemas {
        for row in &mut rows {
            row.schema = None;
        }
    }
    rows
}
