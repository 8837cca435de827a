use clap::Parser;
use fault_config::FaultConfig;

mod cli;
mod commands;
mod output;

fn main() {
    if let Err(error) = run() {
        eprintln!("fault error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let config = load_config(&cli)?;
    init_tracing(cli.quiet, cli.verbose, &config.log.filter)?;

    commands::dispatch(&cli.command, &config, cli.format)
}

fn load_config(cli: &cli::Cli) -> anyhow::Result<FaultConfig> {
    let config = match cli.config.as_deref() {
        Some(path) => FaultConfig::load_from_with_dotenv(path)?,
        None => FaultConfig::load_with_dotenv()?,
    };
    Ok(config)
}

fn init_tracing(quiet: bool, verbose: bool, configured: &str) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        configured
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("FAULTLINE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
