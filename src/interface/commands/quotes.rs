//! # Quote Commands
//!
//! Handles `add quote`, `list quotes` and `random quote`. Quotes are
//! write-mostly: there is deliberately no removal command.

use crate::application::state::SharedState;
use crate::domain::error::BotError;
use crate::strings::messages;

pub async fn handle_add(state: &SharedState, text: &str) -> Result<String, BotError> {
    if text.is_empty() {
        return Err(BotError::validation(messages::EMPTY_QUOTE));
    }
    state.lock().await.add_quote(text);
    Ok(messages::quote_added(text))
}

pub async fn handle_list(state: &SharedState) -> Result<String, BotError> {
    let guard = state.lock().await;
    if guard.quotes().is_empty() {
        Ok(messages::NO_QUOTES.to_string())
    } else {
        Ok(messages::quote_listing(guard.quotes()))
    }
}

pub async fn handle_random(state: &SharedState) -> Result<String, BotError> {
    let guard = state.lock().await;
    match guard.random_quote() {
        Some(quote) => Ok(messages::random_quote(&quote.text)),
        None => Ok(messages::NO_QUOTES.to_string()),
    }
}
