//! # Settings Commands
//!
//! Handles `settings botrule ...`: toggling experimental functions, setting
//! the language and listing the current settings record.

use crate::application::state::SharedState;
use crate::domain::error::BotError;
use crate::strings::messages;

/// Sub-dispatches on the text after `settings botrule`. The key checks are
/// ordered the same way the commands are documented; an unknown key is a
/// validation error rather than silence.
pub async fn handle(state: &SharedState, args: &str) -> Result<String, BotError> {
    if let Some((_, value)) = args.split_once("experimentalfunctions") {
        let mut guard = state.lock().await;
        let enabled = guard.set_experimental_functions(value)?;
        Ok(messages::experimental_functions_set(enabled))
    } else if let Some((_, value)) = args.split_once("language") {
        let mut guard = state.lock().await;
        let language = guard.set_language(value)?;
        Ok(messages::language_set(language))
    } else if args.contains("list") {
        let guard = state.lock().await;
        Ok(messages::settings_listing(&guard.settings_lines()))
    } else {
        Err(BotError::validation(messages::UNKNOWN_SETTING))
    }
}
