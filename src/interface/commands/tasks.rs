//! # Task Commands
//!
//! Handles `add task`, `list tasks` and `remove task`. The to-do list is
//! process-global and index-addressed with 1-based indices.

use crate::application::state::SharedState;
use crate::domain::error::BotError;
use crate::strings::messages;

pub async fn handle_add(state: &SharedState, description: &str) -> Result<String, BotError> {
    if description.is_empty() {
        return Err(BotError::validation(messages::EMPTY_TASK));
    }
    state.lock().await.add_task(description);
    Ok(messages::task_added(description))
}

pub async fn handle_list(state: &SharedState) -> Result<String, BotError> {
    let guard = state.lock().await;
    if guard.tasks().is_empty() {
        Ok(messages::EMPTY_TASK_LIST.to_string())
    } else {
        Ok(messages::task_listing(guard.tasks()))
    }
}

/// Removal is check-then-act under the state lock, so a concurrent removal
/// cannot slip between the bounds check and the mutation.
pub async fn handle_remove(state: &SharedState, arg: &str) -> Result<String, BotError> {
    let index: usize = arg
        .parse()
        .map_err(|_| BotError::validation(messages::INVALID_TASK_NUMBER))?;
    let removed = state.lock().await.remove_task(index)?;
    Ok(messages::task_removed(&removed.description))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::state::BotState;

    #[tokio::test]
    async fn test_add_list_remove_cycle() {
        let state = BotState::shared();
        handle_add(&state, "water the plants").await.unwrap();
        handle_add(&state, "buy milk").await.unwrap();

        let listing = handle_list(&state).await.unwrap();
        assert_eq!(listing, "Tasks:\n1. water the plants\n2. buy milk");

        let reply = handle_remove(&state, "1").await.unwrap();
        assert_eq!(reply, "Removed task - 'water the plants'");

        let listing = handle_list(&state).await.unwrap();
        assert_eq!(listing, "Tasks:\n1. buy milk");
    }

    #[tokio::test]
    async fn test_empty_list_message() {
        let state = BotState::shared();
        assert_eq!(handle_list(&state).await.unwrap(), "Your to-do list is empty.");
    }

    #[tokio::test]
    async fn test_non_numeric_index() {
        let state = BotState::shared();
        let err = handle_remove(&state, "first").await.unwrap_err();
        assert!(matches!(err, BotError::Validation(_)));
    }

    #[tokio::test]
    async fn test_empty_description_is_rejected() {
        let state = BotState::shared();
        assert!(handle_add(&state, "").await.is_err());
        assert!(state.lock().await.tasks().is_empty());
    }
}
