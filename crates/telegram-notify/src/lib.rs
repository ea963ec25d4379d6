//! CI notification step for Telegram.
//!
//! Collects the step inputs, performs one `sendMessage` call against the
//! Telegram Bot API and reports the outcome back to the hosting pipeline.

pub mod cli;
pub mod config;
pub mod error;
pub mod github;
pub mod notifier;
pub mod telegram;
