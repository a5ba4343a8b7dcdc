//! # Messages
//!
//! Contains constant strings and format functions for user-facing replies.
//! Includes error messages, confirmations and listing templates.

use crate::domain::types::{Language, Quote, Task};

pub const INVALID_SETTING_VALUE: &str = "Invalid setting. Use 'true' or 'false'.";
pub const INVALID_LANGUAGE: &str = "Invalid language. Use 'deutsch' or 'english'.";
pub const UNKNOWN_SETTING: &str =
    "Unknown setting. Use 'experimentalfunctions', 'language' or 'list'.";
pub const INVALID_TASK_NUMBER: &str = "Invalid task number.";
pub const EMPTY_TASK: &str = "Task description must not be empty.";
pub const EMPTY_TASK_LIST: &str = "Your to-do list is empty.";
pub const INVALID_CALCULATION: &str = "Invalid calculation. Use: <number> <operator> <number>.";
pub const DIVISION_BY_ZERO: &str = "Division by zero is not allowed.";
pub const INVALID_CURRENCY_COMMAND: &str =
    "Invalid currency command. Use: currency <amount> <from> to <to>.";
pub const INVALID_AMOUNT: &str = "Invalid amount. Use a positive number.";
pub const CURRENCY_FAILED: &str = "Currency conversion failed: rate source unavailable.";
pub const INVALID_REMINDER: &str = "Invalid reminder. Use: add reminder <time> <message>.";
pub const EMPTY_QUOTE: &str = "Quote text must not be empty.";
pub const NO_QUOTES: &str = "No quotes stored.";
pub const GENERIC_ERROR: &str = "An error occurred while processing the command.";

pub fn experimental_functions_set(value: bool) -> String {
    format!("Experimental functions set to {value}.")
}

pub fn language_set(language: Language) -> String {
    format!("Language set to {language}.")
}

pub fn settings_listing(lines: &str) -> String {
    format!("Settings:\n{lines}")
}

pub fn task_added(description: &str) -> String {
    format!("Task added - '{description}'")
}

pub fn task_listing(tasks: &[Task]) -> String {
    let lines: Vec<String> = tasks
        .iter()
        .enumerate()
        .map(|(i, t)| format!("{}. {}", i + 1, t.description))
        .collect();
    format!("Tasks:\n{}", lines.join("\n"))
}

pub fn task_removed(description: &str) -> String {
    format!("Removed task - '{description}'")
}

pub fn calc_result(expression: &str, result: &str) -> String {
    format!("The result of {expression} is {result}")
}

pub fn current_time(time: &str) -> String {
    format!("Current time is {time}")
}

pub fn current_date(date: &str) -> String {
    format!("Today's date is {date}")
}

pub fn currency_result(amount: &str, from: &str, result: &str, to: &str) -> String {
    format!("{amount} {from} is approximately {result} {to}")
}

pub fn unknown_currency(code: &str) -> String {
    format!("Unknown currency code '{code}'.")
}

pub fn quiz_question(question: &str) -> String {
    format!("Quiz: {question}")
}

pub fn reminder_added(message: &str, time: &str) -> String {
    format!("Reminder '{message}' at '{time}' added.")
}

pub fn quote_added(text: &str) -> String {
    format!("Quote added - '{text}'")
}

pub fn quote_listing(quotes: &[Quote]) -> String {
    let lines: Vec<String> = quotes
        .iter()
        .enumerate()
        .map(|(i, q)| format!("{}. {}", i + 1, q.text))
        .collect();
    format!("Quotes:\n{}", lines.join("\n"))
}

pub fn random_quote(text: &str) -> String {
    format!("Random quote - '{text}'")
}
