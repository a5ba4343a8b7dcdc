//! # Console Chat Adapter
//!
//! Implements the `ChatProvider` trait for a local console session. The
//! binary uses it to run the interpreter against stdin without any platform
//! glue; the hosting platform supplies its own adapter instead.

use async_trait::async_trait;

use crate::domain::traits::ChatProvider;

#[derive(Clone, Default)]
pub struct ConsoleChat;

#[async_trait]
impl ChatProvider for ConsoleChat {
    async fn send_message(&self, content: &str) -> Result<(), String> {
        tracing::info!("Bot sending reply: {content}");
        println!("{content}");
        Ok(())
    }
}
