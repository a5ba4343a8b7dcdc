//! # Error Types
//!
//! The typed failure modes that command handlers can surface. The router is
//! the single place that converts these into user-facing reply text; nothing
//! below it talks to the reply channel.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BotError {
    /// Bad user input: out-of-range index, malformed expression, invalid
    /// setting value. Always turned into a reply naming the problem.
    #[error("{0}")]
    Validation(String),

    /// A currency code the rate source does not know about.
    #[error("unknown currency code '{0}'")]
    UnknownCurrency(String),

    /// The rate source is unreachable, timed out, or returned garbage.
    #[error("rate source error: {0}")]
    RateSource(String),

    /// Anything unexpected. Rendered as a generic error reply so the
    /// handling unit never leaks a raw fault to the platform.
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl BotError {
    pub fn validation(msg: impl Into<String>) -> Self {
        BotError::Validation(msg.into())
    }
}
