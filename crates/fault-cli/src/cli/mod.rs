use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Output mode shared by all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Raw,
}

/// Top-level CLI parser for the `fault` binary.
#[derive(Debug, Parser)]
#[command(name = "fault", version, about = "Faultline - service error envelope toolbox")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Extra config file layered above the default config files
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Decode a JSON status envelope into its typed service error.
    Decode(DecodeArgs),
    /// Print the wire contract: variant, status code, detail type tag.
    Contract(ContractArgs),
}

#[derive(Clone, Debug, Args)]
pub struct DecodeArgs {
    /// File holding the envelope; reads stdin when omitted
    pub file: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct ContractArgs {
    /// Include each detail payload's JSON Schema
    #[arg(long)]
    pub schemas: bool,
}
