//! # Domain Traits
//!
//! Abstract interfaces for the platform collaborators (chat reply channel,
//! currency rate source). Allows for pluggable implementations in the
//! Infrastructure layer and for mocks in tests.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::error::BotError;

/// Abstract interface for the outbound reply channel (e.g. Talk, Matrix,
/// Console). Delivery and retry are the collaborator's responsibility.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Post a plain text message back into the originating conversation.
    async fn send_message(&self, content: &str) -> Result<(), String>;
}

/// Abstract interface for the currency rate source.
///
/// A fetch returns the full rates table anchored at `base`: a mapping from
/// currency code to rate relative to `base`, where `base` itself maps to
/// `1.0` by the source's convention.
#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn rates(&self, base: &str) -> Result<HashMap<String, f64>, BotError>;
}
