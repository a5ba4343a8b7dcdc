//! # Configuration
//!
//! Manages the loading and parsing of the application's configuration file
//! (`data/config.yaml`). Every field has a default so the bot starts with no
//! config file at all; a present but malformed file is a startup error.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Main application configuration structure.
/// Matches the layout of `data/config.yaml`.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub bot: BotConfig,
    #[serde(default)]
    pub services: ServicesConfig,
}

impl AppConfig {
    /// Loads the config from `path`, falling back to defaults when the file
    /// does not exist.
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {path}"))?;
        serde_yaml::from_str(&content).with_context(|| format!("Failed to parse {path}"))
    }
}

/// Identity of the bot inside a conversation.
#[derive(Debug, Deserialize, Clone)]
pub struct BotConfig {
    /// The literal marker that addresses a message to the bot.
    #[serde(default = "default_mention")]
    pub mention: String,
    /// Prefix stamped on every outgoing reply.
    #[serde(default = "default_reply_prefix")]
    pub reply_prefix: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            mention: default_mention(),
            reply_prefix: default_reply_prefix(),
        }
    }
}

/// Configuration for external services.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct ServicesConfig {
    #[serde(default)]
    pub rates: RatesConfig,
}

/// Specific configuration for the currency rate source.
#[derive(Debug, Deserialize, Clone)]
pub struct RatesConfig {
    /// Base URL; the base currency code is appended as a path segment.
    #[serde(default = "default_rates_endpoint")]
    pub endpoint: String,
    /// Per-request timeout in seconds. One slow fetch must not stall
    /// unrelated command processing.
    #[serde(default = "default_rates_timeout")]
    pub timeout_secs: u64,
}

impl Default for RatesConfig {
    fn default() -> Self {
        Self {
            endpoint: default_rates_endpoint(),
            timeout_secs: default_rates_timeout(),
        }
    }
}

fn default_mention() -> String {
    "@limo".to_string()
}

fn default_reply_prefix() -> String {
    "Limo Bot".to_string()
}

fn default_rates_endpoint() -> String {
    "https://open.er-api.com/v6/latest".to_string()
}

fn default_rates_timeout() -> u64 {
    10
}
