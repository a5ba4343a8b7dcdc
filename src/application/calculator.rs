//! # Calculator
//!
//! Evaluates the constrained arithmetic grammar `<number> <operator>
//! <number>`. The grammar is deliberately narrow: the expression is parsed
//! explicitly and anything that does not match is rejected with a format
//! error, never handed to a general evaluator.

use regex::Regex;

use crate::domain::error::BotError;
use crate::strings::messages;

/// Evaluates a two-operand expression with one of `+ - * /` (the unicode
/// aliases `−`, `×` and `÷` are accepted too). Decimal commas are
/// normalized to periods before parsing.
pub fn evaluate(expression: &str) -> Result<f64, BotError> {
    let normalized = expression.replace(',', ".");
    let re = Regex::new(r"^\s*(-?\d+(?:\.\d+)?)\s*([+*/×÷−-])\s*(-?\d+(?:\.\d+)?)\s*$").unwrap();

    let caps = re
        .captures(&normalized)
        .ok_or_else(|| BotError::validation(messages::INVALID_CALCULATION))?;

    // The regex guarantees both operands parse.
    let lhs: f64 = caps[1].parse().unwrap();
    let rhs: f64 = caps[3].parse().unwrap();

    match &caps[2] {
        "+" => Ok(lhs + rhs),
        "-" | "−" => Ok(lhs - rhs),
        "*" | "×" => Ok(lhs * rhs),
        "/" | "÷" => {
            if rhs == 0.0 {
                Err(BotError::validation(messages::DIVISION_BY_ZERO))
            } else {
                Ok(lhs / rhs)
            }
        }
        _ => unreachable!(),
    }
}

/// Renders a result without a trailing `.0` for whole numbers, matching how
/// users expect `2 + 2` to read.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
