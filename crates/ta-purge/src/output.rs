//! Output formatting helpers.

use colored::Colorize;

use tubearchivist::{DeleteOutcome, PurgeEvent, PurgeSummary};

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a warning.
pub fn warning(msg: &str) {
    println!("{}", msg.yellow().bold());
}

/// Print a plain progress line.
pub fn info(msg: &str) {
    println!("{}", msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Render one pipeline event.
pub fn event(event: &PurgeEvent) {
    let line = event.to_string();
    match event {
        PurgeEvent::LiveMode | PurgeEvent::CancelHint => warning(&line),
        PurgeEvent::Countdown { .. } | PurgeEvent::NoVideos | PurgeEvent::MissingId => {
            println!("{}", line.dimmed())
        }
        PurgeEvent::Outcome(DeleteOutcome::Deleted { .. }) => success(&line),
        PurgeEvent::Outcome(DeleteOutcome::Failed { .. }) => error(&line),
        PurgeEvent::DryRunMode
        | PurgeEvent::WouldDelete { .. }
        | PurgeEvent::Deleting { .. }
        | PurgeEvent::Outcome(DeleteOutcome::NotFound { .. }) => info(&line),
    }
}

/// Print the end-of-run tallies.
pub fn summary(summary: &PurgeSummary, dry_run: bool) {
    if summary.listed == 0 {
        return;
    }

    println!();
    field("Listed", &summary.listed.to_string());
    if dry_run {
        field("Would delete", &summary.would_delete.to_string());
    } else {
        field("Deleted", &summary.deleted.to_string());
        field("Not found", &summary.not_found.to_string());
        field("Failed", &summary.failed.to_string());
    }
    field("Skipped", &summary.skipped.to_string());
}
