//! Colgraph CLI binary.

use anyhow::Result;
use colgraph::cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Can be controlled via RUST_LOG environment variable
    // Example: RUST_LOG=colgraph=debug colgraph dump
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter())),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!("Starting colgraph");
    cli.execute()?;
    tracing::debug!("Colgraph completed successfully");
    Ok(())
}
