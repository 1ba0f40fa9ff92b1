use anyhow::Result;
use chrono::Local;
use rand::rngs::StdRng;
use rand::Rng;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use crate::config::{
    Config, DEFAULT_PROMPT_HEADER, DEFAULT_PROMPT_MESSAGE, DEFAULT_SNOOZE_DURATION,
    NOTIFY_ENABLED, PROMPT_HEADER, PROMPT_MESSAGE, SNOOZE_DURATION,
};
use crate::dialog::{Prompt, ReminderChoice};
use crate::interval::IntervalGenerator;
use crate::notifications;
use crate::state::{LoopState, Wait};

type Notifier = fn(&str, &Wait, &str) -> Result<()>;

/// Sleeps, asks, and schedules the next focus check, forever.
pub struct FocusLoop<P, R = StdRng> {
    intervals: IntervalGenerator<R>,
    prompt: P,
    state: LoopState,
    next_wait: Wait,
    snooze_secs: u64,
    message: String,
    header: String,
    notifier: Option<Notifier>,
}

impl<P: Prompt, R: Rng> FocusLoop<P, R> {
    pub fn new(config: &Config, mut intervals: IntervalGenerator<R>, prompt: P) -> Self {
        let next_wait = Wait::interval(intervals.interval_seconds());

        Self {
            intervals,
            prompt,
            state: LoopState::Waiting,
            next_wait,
            snooze_secs: config.get_secs(SNOOZE_DURATION, DEFAULT_SNOOZE_DURATION),
            message: config.get_string(PROMPT_MESSAGE, DEFAULT_PROMPT_MESSAGE),
            header: config.get_string(PROMPT_HEADER, DEFAULT_PROMPT_HEADER),
            notifier: config
                .get_bool(NOTIFY_ENABLED, false)
                .then_some(notifications::notify_next_check as Notifier),
        }
    }

    pub fn next_wait(&self) -> Wait {
        self.next_wait
    }

    /// Runs cycles until the task is dropped. A failed cycle is logged and
    /// the next one starts with the same pending wait.
    pub async fn run(&mut self) {
        loop {
            if let Err(e) = self.run_cycle().await {
                error!("Focus check failed: {e:#}");
            }
        }
    }

    /// One wait → prompt → reschedule pass.
    pub async fn run_cycle(&mut self) -> Result<ReminderChoice> {
        self.state = LoopState::Waiting;
        debug!(
            state = self.state.display_name(),
            "Sleeping for {} ({:?})",
            self.next_wait.format_time(),
            self.next_wait.kind
        );
        sleep(self.next_wait.duration()).await;

        self.state = LoopState::Prompting;
        let asked = self.prompt.ask(&self.message, &self.header).await;
        self.state = LoopState::Waiting;
        let choice = asked?;

        self.next_wait = match choice {
            ReminderChoice::Snoozed => {
                debug!("Snoozed for {} seconds", self.snooze_secs);
                Wait::snooze(self.snooze_secs)
            }
            ReminderChoice::Focused => Wait::interval(self.intervals.interval_seconds()),
        };

        let due = self.next_wait.due_at(Local::now()).format("%H:%M:%S").to_string();
        debug!("Next prompt at {due}");

        if choice.is_snoozed() {
            info!("Snoozed until {due}");
        }

        // The answer is already recorded; a missing notification only gets a warning
        if let Some(notify) = self.notifier {
            if let Err(e) = notify(&self.header, &self.next_wait, &due) {
                warn!("{e:#}");
            }
        }

        Ok(choice)
    }
}
