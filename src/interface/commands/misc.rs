//! # Miscellaneous Commands
//!
//! Handles `time`, `date` and `help`. All three are read-only; help only
//! consults the settings record to decide whether the experimental section
//! is shown.

use chrono::Local;

use crate::application::state::SharedState;
use crate::domain::error::BotError;
use crate::strings::{help, messages};

pub fn handle_time() -> Result<String, BotError> {
    let now = Local::now().format("%H:%M:%S").to_string();
    Ok(messages::current_time(&now))
}

pub fn handle_date() -> Result<String, BotError> {
    let today = Local::now().format("%Y-%m-%d").to_string();
    Ok(messages::current_date(&today))
}

pub async fn handle_help(state: &SharedState) -> Result<String, BotError> {
    let experimental = state.lock().await.settings().experimental_functions;
    Ok(help::render(experimental))
}
