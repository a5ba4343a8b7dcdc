//! # Main Entry Point
//!
//! Initializes the bot:
//! - Domain: configuration and types
//! - Application: router and shared state
//! - Infrastructure: rate client, console chat adapter
//! - Interface: command handlers
//!
//! Each line read from stdin is treated as one inbound chat message and
//! handled by an independent spawned unit of work; the read loop never waits
//! for a handler to finish.

mod application;
mod domain;
mod infrastructure;
mod interface;
mod strings;

use std::fs;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::application::router::CommandRouter;
use crate::application::state::BotState;
use crate::domain::config::AppConfig;
use crate::domain::types::InboundMessage;
use crate::infrastructure::console::ConsoleChat;
use crate::infrastructure::rates::HttpRateProvider;

#[derive(Parser, Debug)]
#[command(name = "limo", about = "Chat-command bot core")]
struct Args {
    /// Path to the YAML configuration file
    #[arg(long, default_value = "data/config.yaml")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Load Configuration
    let config = AppConfig::load(&args.config)?;

    // 2. Logging Setup
    if !std::path::Path::new("data").exists() {
        fs::create_dir("data").context("Failed to create data directory")?;
    }

    // Clear previous session log
    let log_path = std::path::Path::new("data/session.log");
    if log_path.exists() {
        let _ = fs::remove_file(log_path);
    }

    let file_appender = tracing_appender::rolling::never("data", "session.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,hyper=warn,reqwest=warn"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false);
    let console_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    tracing::info!("Starting Limo...");

    // 3. Initialize Components
    // State is (re)initialized to defaults at every start; nothing persists.
    let state = BotState::shared();
    let rates = Arc::new(HttpRateProvider::new(&config.services.rates)?);
    let router = Arc::new(CommandRouter::new(config.clone(), state, rates));

    tracing::info!("Listening on stdin (mention token: {})", config.bot.mention);

    // 4. Event Loop
    // One spawned unit of work per message; the loop acknowledges by moving
    // on immediately.
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let router = router.clone();
        tokio::spawn(async move {
            let chat = ConsoleChat;
            let message = InboundMessage::chat(line);
            if let Err(e) = router.route(&chat, &message).await {
                tracing::error!("Failed to route message: {e}");
            }
        });
    }

    tracing::info!("Input closed, shutting down.");
    Ok(())
}
