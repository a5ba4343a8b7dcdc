//! # Calc Command
//!
//! Handles `calc <expression>` by delegating to the constrained calculator.

use crate::application::calculator;
use crate::domain::error::BotError;
use crate::strings::messages;

pub fn handle(expression: &str) -> Result<String, BotError> {
    let result = calculator::evaluate(expression)?;
    Ok(messages::calc_result(
        expression,
        &calculator::format_number(result),
    ))
}
