//! # Bot State
//!
//! The process-wide state store: settings record, task list, quote list and
//! reminder list. State is ephemeral by design and re-initialized to
//! defaults at process start.
//!
//! All collections are shared across concurrently running command units, so
//! the store is always accessed through [`SharedState`], one lock guarding
//! every mutation. Index-addressed removal validates and mutates under that
//! same lock, keeping check-then-act atomic.

use std::sync::Arc;

use rand::seq::SliceRandom;
use tokio::sync::Mutex;

use crate::domain::error::BotError;
use crate::domain::types::{Language, Quote, Reminder, Settings, Task};
use crate::strings::messages;

pub type SharedState = Arc<Mutex<BotState>>;

#[derive(Debug, Default)]
pub struct BotState {
    settings: Settings,
    tasks: Vec<Task>,
    quotes: Vec<Quote>,
    reminders: Vec<Reminder>,
}

impl BotState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedState {
        Arc::new(Mutex::new(Self::new()))
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Sets `experimentalfunctions` from the raw user token. Only the
    /// literal `true`/`false` (case-insensitive) are accepted; anything else
    /// leaves the setting unchanged.
    pub fn set_experimental_functions(&mut self, value: &str) -> Result<bool, BotError> {
        match value.trim().to_lowercase().as_str() {
            "true" => {
                self.settings.experimental_functions = true;
                Ok(true)
            }
            "false" => {
                self.settings.experimental_functions = false;
                Ok(false)
            }
            _ => Err(BotError::validation(messages::INVALID_SETTING_VALUE)),
        }
    }

    /// Sets `language` from the raw user token (`deutsch`/`english`,
    /// case-insensitive). Anything else leaves the setting unchanged.
    pub fn set_language(&mut self, value: &str) -> Result<Language, BotError> {
        let language = Language::parse(value)
            .ok_or_else(|| BotError::validation(messages::INVALID_LANGUAGE))?;
        self.settings.language = language;
        Ok(language)
    }

    /// Renders all settings as `key: value` lines in a fixed order.
    pub fn settings_lines(&self) -> String {
        format!(
            "experimentalfunctions: {}\nnotifications: {}\nlanguage: {}",
            self.settings.experimental_functions, self.settings.notifications, self.settings.language
        )
    }

    pub fn add_task(&mut self, description: &str) {
        self.tasks.push(Task {
            description: description.to_string(),
        });
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Removes the task at the given 1-based index. Out-of-range indices
    /// leave the list untouched.
    pub fn remove_task(&mut self, index: usize) -> Result<Task, BotError> {
        if index == 0 || index > self.tasks.len() {
            return Err(BotError::validation(messages::INVALID_TASK_NUMBER));
        }
        Ok(self.tasks.remove(index - 1))
    }

    pub fn add_quote(&mut self, text: &str) {
        self.quotes.push(Quote {
            text: text.to_string(),
        });
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn random_quote(&self) -> Option<&Quote> {
        self.quotes.choose(&mut rand::thread_rng())
    }

    pub fn add_reminder(&mut self, time: &str, message: &str) {
        self.reminders.push(Reminder {
            time: time.to_string(),
            message: message.to_string(),
        });
    }

    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }
}
