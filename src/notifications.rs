use anyhow::{Context, Result};
use notify_rust::Notification;

use crate::state::{Wait, WaitKind};

pub fn next_check_body(wait: &Wait, due: &str) -> String {
    match wait.kind {
        WaitKind::Snooze => format!("Snoozed. Next focus check in {} at {due}.", wait.format_time()),
        WaitKind::Interval => format!("Next focus check in {} at {due}.", wait.format_time()),
    }
}

pub fn notify_next_check(header: &str, wait: &Wait, due: &str) -> Result<()> {
    Notification::new()
        .summary(header)
        .body(&next_check_body(wait, due))
        .timeout(5000)
        .show()
        .map(|_| ())
        .context("Failed to show desktop notification")
}
