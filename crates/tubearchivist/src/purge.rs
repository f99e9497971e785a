//! Delete-everything pipeline.
//!
//! [`run`] walks the whole archive and deletes each video in turn, one
//! request at a time. Progress is reported through [`PurgeEvent`]s so the
//! caller decides how to render it; each event's `Display` text is the line
//! meant for the operator.

use std::fmt;
use std::time::Duration;

use tracing::{info, instrument};

use crate::Result;
use crate::api::ArchiveClient;
use crate::types::{ApiKey, ArchiveUrl};
use crate::video::DeleteOutcome;

/// Grace period before a live run starts deleting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub ticks: u32,
    pub interval: Duration,
}

impl Countdown {
    /// No grace period at all.
    pub const fn none() -> Self {
        Self {
            ticks: 0,
            interval: Duration::ZERO,
        }
    }

    /// Report each remaining tick, then wait one interval.
    pub async fn run(&self, mut on_tick: impl FnMut(u32)) {
        for remaining in (1..=self.ticks).rev() {
            on_tick(remaining);
            tokio::time::sleep(self.interval).await;
        }
    }
}

/// Five ticks, one second apart.
impl Default for Countdown {
    fn default() -> Self {
        Self {
            ticks: 5,
            interval: Duration::from_secs(1),
        }
    }
}

/// Everything a purge run needs.
#[derive(Debug, Clone)]
pub struct PurgeConfig {
    pub url: ArchiveUrl,
    pub api_key: ApiKey,
    pub dry_run: bool,
    pub countdown: Countdown,
}

/// Something that happened during a purge run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurgeEvent {
    DryRunMode,
    LiveMode,
    CancelHint,
    Countdown { remaining: u32 },
    NoVideos,
    MissingId,
    WouldDelete { video_id: String },
    Deleting { video_id: String },
    Outcome(DeleteOutcome),
}

impl fmt::Display for PurgeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DryRunMode => f.write_str("Running in dry run mode. No videos will be deleted."),
            Self::LiveMode => f.write_str("!!! Running in normal mode. Videos will be deleted. !!!"),
            Self::CancelHint => f.write_str("!!! Press Ctrl+C to cancel. !!!"),
            Self::Countdown { remaining } => write!(f, "Starting in {remaining}..."),
            Self::NoVideos => f.write_str("No videos found."),
            Self::MissingId => f.write_str("No video ID found for the video."),
            Self::WouldDelete { video_id } => {
                write!(f, "[DRY RUN] Would delete video with ID: {video_id}")
            }
            Self::Deleting { video_id } => write!(f, "Deleting video with ID: {video_id}"),
            Self::Outcome(outcome) => fmt::Display::fmt(outcome, f),
        }
    }
}

/// Per-run tallies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PurgeSummary {
    pub listed: usize,
    pub deleted: usize,
    pub not_found: usize,
    pub failed: usize,
    pub skipped: usize,
    pub would_delete: usize,
}

impl PurgeSummary {
    fn record(&mut self, outcome: &DeleteOutcome) {
        match outcome {
            DeleteOutcome::Deleted { .. } => self.deleted += 1,
            DeleteOutcome::NotFound { .. } => self.not_found += 1,
            DeleteOutcome::Failed { .. } => self.failed += 1,
        }
    }
}

/// Run a full purge: mode banner, countdown (live runs only), list, delete.
///
/// # Errors
///
/// Invalid client setup, transport failures, or an unreadable list page.
/// HTTP-level failures are reported as events and do not stop the run.
pub async fn run(config: PurgeConfig, mut on_event: impl FnMut(&PurgeEvent)) -> Result<PurgeSummary> {
    let PurgeConfig {
        url,
        api_key,
        dry_run,
        countdown,
    } = config;

    let client = ArchiveClient::new(url, api_key)?;

    if dry_run {
        on_event(&PurgeEvent::DryRunMode);
    } else {
        on_event(&PurgeEvent::LiveMode);
        on_event(&PurgeEvent::CancelHint);
        countdown
            .run(|remaining| on_event(&PurgeEvent::Countdown { remaining }))
            .await;
    }

    purge_videos(&client, dry_run, on_event).await
}

/// List every video once, then delete (or, on a dry run, report) each one.
///
/// Records without an identifier are skipped in both modes.
#[instrument(skip(client, on_event), fields(archive = %client.url()))]
pub async fn purge_videos(
    client: &ArchiveClient,
    dry_run: bool,
    mut on_event: impl FnMut(&PurgeEvent),
) -> Result<PurgeSummary> {
    let videos = client.list_videos().await?;
    let mut summary = PurgeSummary {
        listed: videos.len(),
        ..PurgeSummary::default()
    };
    info!(count = videos.len(), "listed videos");

    if videos.is_empty() {
        on_event(&PurgeEvent::NoVideos);
        return Ok(summary);
    }

    for video in &videos {
        let Some(video_id) = video.id() else {
            summary.skipped += 1;
            on_event(&PurgeEvent::MissingId);
            continue;
        };

        if dry_run {
            summary.would_delete += 1;
            on_event(&PurgeEvent::WouldDelete {
                video_id: video_id.to_string(),
            });
            continue;
        }

        on_event(&PurgeEvent::Deleting {
            video_id: video_id.to_string(),
        });
        let outcome = client.delete_video(video_id).await?;
        summary.record(&outcome);
        on_event(&PurgeEvent::Outcome(outcome));
    }

    Ok(summary)
}
