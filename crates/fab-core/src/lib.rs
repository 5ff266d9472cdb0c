//! Core domain + application logic for the Fitness Age Telegram bot.
//!
//! This crate is intentionally framework-agnostic. Telegram lives behind the
//! messaging port (trait) implemented in the adapter crate.

pub mod config;
pub mod domain;
pub mod errors;
pub mod fitness;
pub mod formatting;
pub mod logging;
pub mod messaging;

pub use errors::{Error, Result};
