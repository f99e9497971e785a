//! ta-purge - delete every video from a TubeArchivist instance.
//!
//! This is a thin wrapper over the `tubearchivist` library. Use `--dry-run`
//! first to see what would go.

mod cli;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.json_logs);

    let config = cli.into_config()?;
    let dry_run = config.dry_run;
    debug!(?config, "starting purge");

    let summary = tubearchivist::purge::run(config, output::event)
        .await
        .context("Purge aborted")?;

    output::summary(&summary, dry_run);

    Ok(())
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
