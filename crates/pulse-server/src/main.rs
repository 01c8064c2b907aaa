//! pulse-server binary: load config, init tracing, serve.
//!
//! Logging: set `RUST_LOG=pulse_server=debug` (or `info`, `warn`) to adjust
//! verbosity on stderr.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pulse_core::config::PulseConfig;

#[derive(Debug, Parser)]
#[command(name = "pulse-server", about = "Pulse status service")]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "pulse.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("pulse_server=info,pulse_probes=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config = PulseConfig::load(&args.config)?;
    pulse_server::serve(config).await
}
