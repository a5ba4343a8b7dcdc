//! # Application Layer
//!
//! Contains the core business logic and orchestration of the bot.
//! This includes command routing, the shared state store, the calculator and
//! the currency conversion logic.

pub mod calculator;
pub mod currency;
pub mod router;
pub mod state;
pub mod trivia;
