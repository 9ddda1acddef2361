//! Bot handlers module
//!
//! This module contains all Telegram bot handlers organized by type:
//! - Command handlers for bot commands
//! - Message handlers for group text messages
//! - Conversion from Telegram updates into handler models

pub mod commands;
pub mod messages;
pub mod telegram;

// Re-export commonly used handler functions
pub use commands::{handle_command, Command};
pub use messages::handle_group_message;
