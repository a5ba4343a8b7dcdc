//! # Currency Command
//!
//! Handles `currency <amount> <from> to <to>` (experimental). Parsing is
//! done here; the arithmetic and the rate fetch live in
//! `application::currency`.

use regex::Regex;

use crate::application::currency;
use crate::domain::error::BotError;
use crate::domain::traits::RateProvider;
use crate::strings::messages;

pub async fn handle(rates: &dyn RateProvider, args: &str) -> Result<String, BotError> {
    let re = Regex::new(r"(?i)^\s*(\d+(?:[.,]\d+)?)\s+([a-z]{3})\s+to\s+([a-z]{3})\s*$").unwrap();
    let caps = re
        .captures(args)
        .ok_or_else(|| BotError::validation(messages::INVALID_CURRENCY_COMMAND))?;

    let amount = currency::parse_amount(&caps[1])?;
    let from = caps[2].to_uppercase();
    let to = caps[3].to_uppercase();

    let converted = currency::convert(rates, amount, &from, &to).await?;
    Ok(messages::currency_result(
        caps[1].trim(),
        &from,
        &format!("{converted:.2}"),
        &to,
    ))
}
