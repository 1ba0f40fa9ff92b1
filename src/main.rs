mod config;
mod dialog;
mod interval;
mod logging;
mod notifications;
mod state;
mod timer;

use config::Config;
use dialog::ReminderDialog;
use interval::IntervalGenerator;
use timer::FocusLoop;
use tracing::{debug, error, info, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load configuration before logging so `verbose` can pick the level
    let loaded = Config::load();
    let config = loaded.as_ref().cloned().unwrap_or_else(|_| Config::empty());

    logging::init_logging(config.verbose());

    if let Err(e) = &loaded {
        error!("Failed to load configuration: {e:#}");
        warn!("Using built-in defaults");
    } else if config.is_empty() {
        warn!("Configuration is empty, using built-in defaults");
    } else {
        debug!("Loaded {} configuration entries", config.len());
    }

    println!("Focus Prompt is running. Press Ctrl+C to stop.");

    let intervals = IntervalGenerator::from_config(&config);
    let (min, max) = intervals.bounds();
    debug!("Reminders every {min} to {max} seconds");

    let mut focus = FocusLoop::new(&config, intervals, ReminderDialog);
    info!("First focus check in {}", focus.next_wait().format_time());

    let interrupted = tokio::select! {
        _ = focus.run() => None,
        result = tokio::signal::ctrl_c() => Some(result),
    };

    match interrupted {
        Some(Ok(())) => info!("Stopping Focus Prompt"),
        Some(Err(e)) => {
            // Without a signal handler the process can still be killed externally
            error!("Failed to listen for Ctrl+C: {e}");
            focus.run().await;
        }
        None => {}
    }
}
