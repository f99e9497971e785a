//! CLI argument definitions.

use anyhow::{Context, Result};
use clap::Parser;

use tubearchivist::{ApiKey, ArchiveUrl, Countdown, PurgeConfig};

/// Delete all downloaded YouTube videos using the TubeArchivist API.
#[derive(Parser, Debug)]
#[command(name = "ta-purge")]
#[command(author, version = env!("TA_PURGE_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Your TubeArchivist API key
    #[arg(long, env = "TA_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Your TubeArchivist URL without the trailing slash (https://yt.example.com)
    #[arg(long, env = "TA_URL")]
    pub url: String,

    /// List videos and report what would be deleted, without deleting
    #[arg(long)]
    pub dry_run: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long)]
    pub json_logs: bool,
}

impl Cli {
    /// Validate the arguments into a run configuration.
    pub fn into_config(self) -> Result<PurgeConfig> {
        Ok(PurgeConfig {
            url: ArchiveUrl::new(&self.url).context("Invalid --url")?,
            api_key: ApiKey::new(&self.api_key).context("Invalid --api-key")?,
            dry_run: self.dry_run,
            countdown: Countdown::default(),
        })
    }
}
