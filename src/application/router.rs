//! # Command Router
//!
//! Recognizes the command phrase inside an inbound message and dispatches to
//! the matching handler (in `interface/commands`). Recognition walks an
//! ordered matcher table, first match wins; the table order is behavior, not
//! style, and is covered by tests.
//!
//! The router is also the error boundary: every handler failure is converted
//! into a user-facing reply here, and nothing below the router talks to the
//! reply channel.

use std::sync::Arc;

use anyhow::Result;
use regex::Regex;

use crate::application::state::SharedState;
use crate::domain::config::AppConfig;
use crate::domain::error::BotError;
use crate::domain::traits::{ChatProvider, RateProvider};
use crate::domain::types::InboundMessage;
use crate::interface::commands;
use crate::strings::messages;

/// A recognized command with its extracted raw argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Settings(String),
    AddTask(String),
    ListTasks,
    RemoveTask(String),
    Calc(String),
    Time,
    Date,
    Help,
    Currency(String),
    StartQuiz,
    AddReminder(String),
    AddQuote(String),
    ListQuotes,
    RandomQuote,
    Echo(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phrase {
    Settings,
    AddTask,
    ListTasks,
    RemoveTask,
    Calc,
    Time,
    Date,
    Help,
    Currency,
    StartQuiz,
    AddReminder,
    AddQuote,
    ListQuotes,
    RandomQuote,
}

struct Matcher {
    phrase: &'static str,
    kind: Phrase,
    /// Only matched while experimental functions are enabled; otherwise the
    /// text falls through to later matchers and ultimately the echo.
    experimental: bool,
}

/// Command phrases in dispatch priority order. First match wins, so
/// overlapping phrases (`add task` vs the echo fallback) resolve by their
/// position in this table.
const MATCHERS: &[Matcher] = &[
    Matcher { phrase: "settings botrule", kind: Phrase::Settings, experimental: false },
    Matcher { phrase: "add task", kind: Phrase::AddTask, experimental: false },
    Matcher { phrase: "list tasks", kind: Phrase::ListTasks, experimental: false },
    Matcher { phrase: "remove task", kind: Phrase::RemoveTask, experimental: false },
    Matcher { phrase: "calc", kind: Phrase::Calc, experimental: false },
    Matcher { phrase: "time", kind: Phrase::Time, experimental: false },
    Matcher { phrase: "date", kind: Phrase::Date, experimental: false },
    Matcher { phrase: "help", kind: Phrase::Help, experimental: false },
    Matcher { phrase: "currency", kind: Phrase::Currency, experimental: true },
    Matcher { phrase: "start quiz", kind: Phrase::StartQuiz, experimental: true },
    Matcher { phrase: "add reminder", kind: Phrase::AddReminder, experimental: true },
    Matcher { phrase: "add quote", kind: Phrase::AddQuote, experimental: false },
    Matcher { phrase: "list quotes", kind: Phrase::ListQuotes, experimental: false },
    Matcher { phrase: "random quote", kind: Phrase::RandomQuote, experimental: false },
];

/// Recognizes a command in `text`. Returns `None` when the message does not
/// address the bot at all (no mention token, or nothing left to echo),
/// which means no reply, distinct from an error reply.
pub fn parse_command(text: &str, mention: &str, experimental: bool) -> Option<Command> {
    if !text.contains(mention) {
        return None;
    }

    for matcher in MATCHERS {
        if matcher.experimental && !experimental {
            continue;
        }
        let needle = format!("{mention} {}", matcher.phrase);
        if let Some(idx) = text.find(&needle) {
            let arg = text[idx + needle.len()..].trim().to_string();
            return Some(build_command(matcher.kind, arg));
        }
    }

    // Fallback: echo everything after the mention token, minus any
    // parenthesized aside.
    let echo_re =
        Regex::new(&format!(r"{}\s*(\([^)]*\))?\s*(.*)", regex::escape(mention))).unwrap();
    let caps = echo_re.captures(text)?;
    let remainder = caps.get(2).map(|m| m.as_str().trim()).unwrap_or("");
    if remainder.is_empty() {
        None
    } else {
        Some(Command::Echo(remainder.to_string()))
    }
}

fn build_command(kind: Phrase, arg: String) -> Command {
    match kind {
        Phrase::Settings => Command::Settings(arg),
        Phrase::AddTask => Command::AddTask(arg),
        Phrase::ListTasks => Command::ListTasks,
        Phrase::RemoveTask => Command::RemoveTask(arg),
        Phrase::Calc => Command::Calc(arg),
        Phrase::Time => Command::Time,
        Phrase::Date => Command::Date,
        Phrase::Help => Command::Help,
        Phrase::Currency => Command::Currency(arg),
        Phrase::StartQuiz => Command::StartQuiz,
        Phrase::AddReminder => Command::AddReminder(arg),
        Phrase::AddQuote => Command::AddQuote(arg),
        Phrase::ListQuotes => Command::ListQuotes,
        Phrase::RandomQuote => Command::RandomQuote,
    }
}

pub struct CommandRouter {
    config: AppConfig,
    state: SharedState,
    rates: Arc<dyn RateProvider>,
}

impl CommandRouter {
    pub fn new(config: AppConfig, state: SharedState, rates: Arc<dyn RateProvider>) -> Self {
        Self {
            config,
            state,
            rates,
        }
    }

    /// Full boundary for one unit of work: interpret the message and, if it
    /// produced a reply, hand it to the platform collaborator.
    pub async fn route(&self, chat: &impl ChatProvider, message: &InboundMessage) -> Result<()> {
        if let Some(reply) = self.handle(message).await {
            chat.send_message(&reply)
                .await
                .map_err(|e| anyhow::anyhow!(e))?;
        }
        Ok(())
    }

    /// Interprets one inbound message and returns the reply text, or `None`
    /// when the message warrants no reply (system event, no mention, empty
    /// echo).
    pub async fn handle(&self, message: &InboundMessage) -> Option<String> {
        if !message.is_chat() {
            return None;
        }

        let experimental = self.state.lock().await.settings().experimental_functions;
        let command = parse_command(&message.text, &self.config.bot.mention, experimental)?;
        tracing::info!(?command, "dispatching command");

        let body = match self.dispatch(command).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("command failed: {e}");
                error_reply(&e)
            }
        };
        Some(format!("{}: {}", self.config.bot.reply_prefix, body))
    }

    async fn dispatch(&self, command: Command) -> Result<String, BotError> {
        match command {
            Command::Settings(args) => commands::settings::handle(&self.state, &args).await,
            Command::AddTask(arg) => commands::tasks::handle_add(&self.state, &arg).await,
            Command::ListTasks => commands::tasks::handle_list(&self.state).await,
            Command::RemoveTask(arg) => commands::tasks::handle_remove(&self.state, &arg).await,
            Command::Calc(arg) => commands::calc::handle(&arg),
            Command::Time => commands::misc::handle_time(),
            Command::Date => commands::misc::handle_date(),
            Command::Help => commands::misc::handle_help(&self.state).await,
            Command::Currency(arg) => commands::currency::handle(self.rates.as_ref(), &arg).await,
            Command::StartQuiz => commands::trivia::handle(),
            Command::AddReminder(arg) => {
                commands::reminders::handle_add(&self.state, &arg).await
            }
            Command::AddQuote(arg) => commands::quotes::handle_add(&self.state, &arg).await,
            Command::ListQuotes => commands::quotes::handle_list(&self.state).await,
            Command::RandomQuote => commands::quotes::handle_random(&self.state).await,
            Command::Echo(text) => Ok(text),
        }
    }
}

/// Single conversion point from typed errors to user-facing reply text.
fn error_reply(error: &BotError) -> String {
    match error {
        BotError::Validation(msg) => msg.clone(),
        BotError::UnknownCurrency(code) => messages::unknown_currency(code),
        BotError::RateSource(_) => messages::CURRENCY_FAILED.to_string(),
        BotError::Internal(_) => messages::GENERIC_ERROR.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::state::BotState;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex as StdMutex;

    const MENTION: &str = "@limo";

    fn parse(text: &str) -> Option<Command> {
        parse_command(text, MENTION, false)
    }

    fn parse_experimental(text: &str) -> Option<Command> {
        parse_command(text, MENTION, true)
    }

    #[test]
    fn test_no_mention_means_no_command() {
        assert_eq!(parse("add task buy milk"), None);
    }

    #[test]
    fn test_add_task_wins_over_echo() {
        assert_eq!(
            parse("@limo add task buy milk"),
            Some(Command::AddTask("buy milk".to_string()))
        );
    }

    #[test]
    fn test_matcher_table_priority_order() {
        // Each fixture must resolve to its own phrase even though a later
        // matcher (or the echo fallback) would also accept the text.
        assert!(matches!(
            parse("@limo settings botrule list"),
            Some(Command::Settings(_))
        ));
        assert_eq!(parse("@limo list tasks"), Some(Command::ListTasks));
        assert!(matches!(parse("@limo remove task 2"), Some(Command::RemoveTask(_))));
        assert!(matches!(parse("@limo calc 1 + 1"), Some(Command::Calc(_))));
        assert_eq!(parse("@limo time"), Some(Command::Time));
        assert_eq!(parse("@limo date"), Some(Command::Date));
        assert_eq!(parse("@limo help"), Some(Command::Help));
        assert!(matches!(parse("@limo add quote hi"), Some(Command::AddQuote(_))));
        assert_eq!(parse("@limo list quotes"), Some(Command::ListQuotes));
        assert_eq!(parse("@limo random quote"), Some(Command::RandomQuote));
    }

    #[test]
    fn test_gated_phrases_fall_through_to_echo_when_disabled() {
        assert_eq!(
            parse("@limo currency 10 USD to EUR"),
            Some(Command::Echo("currency 10 USD to EUR".to_string()))
        );
        assert_eq!(
            parse("@limo start quiz"),
            Some(Command::Echo("start quiz".to_string()))
        );
        assert_eq!(
            parse("@limo add reminder 18:00 trash"),
            Some(Command::Echo("add reminder 18:00 trash".to_string()))
        );
    }

    #[test]
    fn test_gated_phrases_match_when_enabled() {
        assert!(matches!(
            parse_experimental("@limo currency 10 USD to EUR"),
            Some(Command::Currency(_))
        ));
        assert_eq!(parse_experimental("@limo start quiz"), Some(Command::StartQuiz));
        assert!(matches!(
            parse_experimental("@limo add reminder 18:00 trash"),
            Some(Command::AddReminder(_))
        ));
    }

    #[test]
    fn test_echo_strips_parenthesized_aside() {
        assert_eq!(
            parse("@limo (to everyone) hello there"),
            Some(Command::Echo("hello there".to_string()))
        );
    }

    #[test]
    fn test_bare_mention_produces_nothing() {
        assert_eq!(parse("@limo"), None);
        assert_eq!(parse("@limo (aside only)"), None);
    }

    /// Chat stub capturing every outgoing reply.
    #[derive(Default)]
    struct RecordingChat {
        sent: StdMutex<Vec<String>>,
    }

    #[async_trait]
    impl ChatProvider for RecordingChat {
        async fn send_message(&self, content: &str) -> Result<(), String> {
            self.sent.lock().unwrap().push(content.to_string());
            Ok(())
        }
    }

    struct NoRates;

    #[async_trait]
    impl RateProvider for NoRates {
        async fn rates(&self, _base: &str) -> Result<HashMap<String, f64>, BotError> {
            Err(BotError::RateSource("unreachable".to_string()))
        }
    }

    fn router() -> CommandRouter {
        CommandRouter::new(AppConfig::default(), BotState::shared(), Arc::new(NoRates))
    }

    #[tokio::test]
    async fn test_system_events_produce_no_reply() {
        let router = router();
        let event = InboundMessage {
            kind: "system".to_string(),
            text: "@limo help".to_string(),
        };
        assert_eq!(router.handle(&event).await, None);
    }

    #[tokio::test]
    async fn test_reply_carries_prefix() {
        let router = router();
        let reply = router
            .handle(&InboundMessage::chat("@limo add task buy milk"))
            .await
            .unwrap();
        assert_eq!(reply, "Limo Bot: Task added - 'buy milk'");
    }

    #[tokio::test]
    async fn test_validation_error_becomes_reply() {
        let router = router();
        let reply = router
            .handle(&InboundMessage::chat("@limo remove task 5"))
            .await
            .unwrap();
        assert_eq!(reply, "Limo Bot: Invalid task number.");
    }

    #[tokio::test]
    async fn test_unreachable_rate_source_reply() {
        let router = router();
        router
            .handle(&InboundMessage::chat(
                "@limo settings botrule experimentalfunctions true",
            ))
            .await
            .unwrap();
        let reply = router
            .handle(&InboundMessage::chat("@limo currency 10 USD to EUR"))
            .await
            .unwrap();
        assert_eq!(
            reply,
            "Limo Bot: Currency conversion failed: rate source unavailable."
        );
    }

    #[tokio::test]
    async fn test_route_sends_through_chat_provider() {
        let router = router();
        let chat = RecordingChat::default();

        router
            .route(&chat, &InboundMessage::chat("@limo hello there"))
            .await
            .unwrap();
        router
            .route(&chat, &InboundMessage::chat("no mention at all"))
            .await
            .unwrap();

        let sent = chat.sent.lock().unwrap();
        assert_eq!(sent.as_slice(), ["Limo Bot: hello there"]);
    }

    #[tokio::test]
    async fn test_settings_update_then_list_through_router() {
        let router = router();
        router
            .handle(&InboundMessage::chat(
                "@limo settings botrule language english",
            ))
            .await
            .unwrap();
        let reply = router
            .handle(&InboundMessage::chat("@limo settings botrule list"))
            .await
            .unwrap();
        assert!(reply.contains("language: English"));
    }
}
