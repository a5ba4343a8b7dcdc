//! # Interface Layer
//!
//! User-facing command handlers, invoked by the application-layer router.

pub mod commands;
