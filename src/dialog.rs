use anyhow::{bail, Result};
use rfd::{AsyncMessageDialog, MessageButtons, MessageDialogResult, MessageLevel};
use std::future::Future;

pub const FOCUSED_LABEL: &str = "I'm Focused";
pub const SNOOZE_LABEL: &str = "Snooze";

/// The zenity backend reports a dismissed dialog as the cancel label and
/// only falls back to `Cancel` when no dialog could be shown at all.
const CANCEL_MEANS_FAILURE: bool = cfg!(any(
    target_os = "linux",
    target_os = "freebsd",
    target_os = "dragonfly",
    target_os = "netbsd",
    target_os = "openbsd"
));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderChoice {
    Focused,
    Snoozed,
}

impl ReminderChoice {
    /// Only an explicit "Snooze" counts as snoozing; closing the dialog does not.
    pub fn from_dialog_result(result: &MessageDialogResult) -> Result<Self> {
        match result {
            MessageDialogResult::Custom(label) if label == SNOOZE_LABEL => Ok(Self::Snoozed),
            MessageDialogResult::Custom(label) if label == FOCUSED_LABEL => Ok(Self::Focused),
            MessageDialogResult::Cancel if !CANCEL_MEANS_FAILURE => Ok(Self::Focused),
            MessageDialogResult::Cancel => bail!("Reminder dialog could not be shown"),
            other => bail!("Unexpected reminder dialog result: {other:?}"),
        }
    }

    pub fn is_snoozed(self) -> bool {
        self == Self::Snoozed
    }
}

/// Something that can ask the user whether they are still focused.
pub trait Prompt {
    fn ask(&mut self, message: &str, header: &str) -> impl Future<Output = Result<ReminderChoice>>;
}

/// "Snooze" sits on the OK button and "I'm Focused" on the cancel button,
/// so every backend's close/escape path lands on "I'm Focused".
fn reminder_buttons() -> MessageButtons {
    MessageButtons::OkCancelCustom(SNOOZE_LABEL.to_string(), FOCUSED_LABEL.to_string())
}

/// Native modal dialog with the two reminder buttons.
#[derive(Debug, Default)]
pub struct ReminderDialog;

impl Prompt for ReminderDialog {
    async fn ask(&mut self, message: &str, header: &str) -> Result<ReminderChoice> {
        let result = AsyncMessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title(header)
            .set_description(message)
            .set_buttons(reminder_buttons())
            .show()
            .await;

        ReminderChoice::from_dialog_result(&result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snooze_button_means_snoozed() {
        let result = MessageDialogResult::Custom(SNOOZE_LABEL.to_string());
        let choice = ReminderChoice::from_dialog_result(&result).unwrap();
        assert_eq!(choice, ReminderChoice::Snoozed);
        assert!(choice.is_snoozed());
    }

    #[test]
    fn focused_button_means_not_snoozed() {
        let result = MessageDialogResult::Custom(FOCUSED_LABEL.to_string());
        let choice = ReminderChoice::from_dialog_result(&result).unwrap();
        assert_eq!(choice, ReminderChoice::Focused);
        assert!(!choice.is_snoozed());
    }

    #[test]
    fn dismissing_the_dialog_is_not_a_snooze() {
        // Esc or the close button reports the cancel button's label.
        let MessageButtons::OkCancelCustom(_, cancel) = reminder_buttons() else {
            unreachable!()
        };
        let result = MessageDialogResult::Custom(cancel);
        assert_eq!(
            ReminderChoice::from_dialog_result(&result).unwrap(),
            ReminderChoice::Focused
        );
    }

    #[test]
    fn snooze_is_the_ok_button() {
        let MessageButtons::OkCancelCustom(ok, cancel) = reminder_buttons() else {
            unreachable!()
        };
        assert_eq!(ok, SNOOZE_LABEL);
        assert_eq!(cancel, FOCUSED_LABEL);
    }

    #[test]
    fn unknown_results_are_errors() {
        for result in [
            MessageDialogResult::Ok,
            MessageDialogResult::Yes,
            MessageDialogResult::No,
            MessageDialogResult::Custom("Later".to_string()),
        ] {
            assert!(ReminderChoice::from_dialog_result(&result).is_err());
        }
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn cancel_without_a_dialog_is_an_error() {
        let err = ReminderChoice::from_dialog_result(&MessageDialogResult::Cancel).unwrap_err();
        assert!(err.to_string().contains("could not be shown"));
    }
}
