//! # Command Handlers
//!
//! Contains specific handler functions for each supported command family.
//! These handlers are invoked by the Router and return the reply text; only
//! the Router talks to the reply channel.

pub mod calc;
pub mod currency;
pub mod misc;
pub mod quotes;
pub mod reminders;
pub mod settings;
pub mod tasks;
pub mod trivia;
