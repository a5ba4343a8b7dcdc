//! # Domain Types
//!
//! Common data structures and enums used across the application logic.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One record delivered by the inbound platform collaborator.
///
/// `kind` mirrors the platform's object name; only `"message"` records are
/// actionable, everything else (system join/leave events etc.) is ignored
/// without a reply.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InboundMessage {
    pub kind: String,
    pub text: String,
}

impl InboundMessage {
    pub fn chat(text: impl Into<String>) -> Self {
        Self {
            kind: "message".to_string(),
            text: text.into(),
        }
    }

    pub fn is_chat(&self) -> bool {
        self.kind == "message"
    }
}

/// Reply language selectable through `settings botrule language`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    German,
    English,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::German => write!(f, "Deutsch"),
            Language::English => write!(f, "English"),
        }
    }
}

impl Language {
    /// Parses the user-supplied setting value. Accepts the same tokens the
    /// original bot accepted, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "deutsch" => Some(Language::German),
            "english" => Some(Language::English),
            _ => None,
        }
    }
}

/// The mutable per-process settings record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    pub experimental_functions: bool,
    pub notifications: bool,
    pub language: Language,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            experimental_functions: false,
            notifications: true,
            language: Language::German,
        }
    }
}

/// An entry in the shared to-do list. Shown to users with a 1-based index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub description: String,
}

/// A stored quote. Quotes are write-mostly: they can be listed and sampled
/// but never removed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Quote {
    pub text: String,
}

/// A stored reminder. Write-only in the current bot: there is no fire or
/// consume path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reminder {
    pub time: String,
    pub message: String,
}

/// A fixed trivia entry. The answer is kept alongside the question but is
/// never checked against user input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriviaQuestion {
    pub question: &'static str,
    pub answer: &'static str,
}
