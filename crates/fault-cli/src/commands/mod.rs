pub mod contract;
pub mod decode;

use fault_config::FaultConfig;

use crate::cli::{Commands, OutputFormat};

/// Route a parsed command to its handler.
pub fn dispatch(command: &Commands, config: &FaultConfig, format: OutputFormat) -> anyhow::Result<()> {
    match command {
        Commands::Decode(args) => decode::handle(args, config, format),
        Commands::Contract(args) => contract::handle(args, config, format),
    }
}
