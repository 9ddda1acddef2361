//! LinguaRelay Telegram Bot
//!
//! A Telegram bot that auto-translates group conversations and gives admins
//! basic moderation commands. This library provides the per-group settings
//! store, the translation policy engine, and the command and message
//! handlers wired up by the binary.

#![allow(non_snake_case)]

pub mod config;
pub mod database;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{RelayError, Result};

// Re-export main components for easy access
pub use database::DatabaseService;
pub use services::{PolicyEngine, ServiceFactory};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
