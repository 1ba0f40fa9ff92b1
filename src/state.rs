use chrono::{DateTime, Duration as ChronoDuration, Local};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Waiting,
    Prompting,
}

impl LoopState {
    pub fn display_name(&self) -> &str {
        match self {
            LoopState::Waiting => "Waiting",
            LoopState::Prompting => "Prompting",
        }
    }
}

/// Why the loop is sleeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitKind {
    Interval,
    Snooze,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wait {
    pub secs: u64,
    pub kind: WaitKind,
}

impl Wait {
    pub fn interval(secs: u64) -> Self {
        Self { secs, kind: WaitKind::Interval }
    }

    pub fn snooze(secs: u64) -> Self {
        Self { secs, kind: WaitKind::Snooze }
    }

    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.secs)
    }

    /// Wall-clock time at which a wait starting at `from` ends.
    pub fn due_at(&self, from: DateTime<Local>) -> DateTime<Local> {
        let secs = i64::try_from(self.secs).unwrap_or(i64::MAX);
        ChronoDuration::try_seconds(secs)
            .and_then(|d| from.checked_add_signed(d))
            .unwrap_or(from)
    }

    pub fn format_time(&self) -> String {
        let minutes = self.secs / 60;
        let seconds = self.secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn format_time_pads_minutes_and_seconds() {
        assert_eq!(Wait::snooze(300).format_time(), "05:00");
        assert_eq!(Wait::interval(1865).format_time(), "31:05");
        assert_eq!(Wait::interval(7).format_time(), "00:07");
    }

    #[test]
    fn due_at_adds_the_wait() {
        let start = Local.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
        let due = Wait::interval(1800).due_at(start);
        assert_eq!(due - start, ChronoDuration::minutes(30));
    }

    #[test]
    fn due_at_saturates_on_overflow() {
        let start = Local.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
        assert_eq!(Wait::interval(u64::MAX).due_at(start), start);
    }

    #[test]
    fn constructors_tag_the_kind() {
        assert_eq!(Wait::interval(10).kind, WaitKind::Interval);
        assert_eq!(Wait::snooze(10).kind, WaitKind::Snooze);
        assert_eq!(Wait::snooze(10).duration(), Duration::from_secs(10));
    }
}
