//! pulse CLI: one-shot health check over the configured endpoint list and
//! store groups, or the HTTP service from the same config.
//!
//! Exit code 2 when the aggregate level is `error`, 0 otherwise.

mod check;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pulse_core::config::PulseConfig;

#[derive(Debug, Parser)]
#[command(name = "pulse", about = "Pulse health check runner", version)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "pulse.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run every configured probe once and print a summary (default).
    Check {
        /// Write the full aggregation pass to a JSON snapshot file.
        #[arg(long)]
        snapshot: Option<PathBuf>,
    },
    /// Run the HTTP status service.
    Serve,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("pulse_cli=info,pulse_probes=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config = PulseConfig::load(&cli.config)?;

    match cli.command.unwrap_or(Command::Check { snapshot: None }) {
        Command::Check { snapshot } => check::run(config, snapshot.as_deref()).await,
        Command::Serve => {
            pulse_server::serve(config).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
