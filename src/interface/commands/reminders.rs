//! # Reminder Command
//!
//! Handles `add reminder <time> <message>` (experimental). Reminders are
//! write-only state: there is no fire or consume path.

use crate::application::state::SharedState;
use crate::domain::error::BotError;
use crate::strings::messages;

pub async fn handle_add(state: &SharedState, args: &str) -> Result<String, BotError> {
    let (time, message) = args
        .split_once(' ')
        .map(|(t, m)| (t.trim(), m.trim()))
        .filter(|(t, m)| !t.is_empty() && !m.is_empty())
        .ok_or_else(|| BotError::validation(messages::INVALID_REMINDER))?;

    state.lock().await.add_reminder(time, message);
    Ok(messages::reminder_added(message, time))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::state::BotState;

    #[tokio::test]
    async fn test_reminder_splits_on_first_space() {
        let state = BotState::shared();
        let reply = handle_add(&state, "18:00 take out the trash").await.unwrap();
        assert_eq!(reply, "Reminder 'take out the trash' at '18:00' added.");

        let guard = state.lock().await;
        assert_eq!(guard.reminders().len(), 1);
        assert_eq!(guard.reminders()[0].time, "18:00");
        assert_eq!(guard.reminders()[0].message, "take out the trash");
    }

    #[tokio::test]
    async fn test_missing_message_is_rejected() {
        let state = BotState::shared();
        assert!(handle_add(&state, "18:00").await.is_err());
        assert!(state.lock().await.reminders().is_empty());
    }
}
