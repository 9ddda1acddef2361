//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod group;
pub mod language;
pub mod message;

// Re-export commonly used models
pub use group::{GroupSettings, GroupSettingsRow, LanguageDefaults};
pub use language::{language_name, normalize_lang_code};
pub use message::{ChatMember, CommandInvocation, IncomingMessage};
