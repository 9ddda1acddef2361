//! Command handlers module
//!
//! This module contains handlers for the bot commands: /translate, /ban and /help.

pub mod ban;
pub mod help;
pub mod translate;

use teloxide::utils::command::BotCommands;
use crate::models::CommandInvocation;
use crate::services::ServiceFactory;
use crate::utils::errors::Result;

/// All available bot commands
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "LinguaRelay commands:")]
pub enum Command {
    #[command(description = "Toggle automatic translation in this group (admin only)")]
    Translate,
    #[command(description = "Ban the author of the replied-to message (admin only)")]
    Ban,
    #[command(description = "Show help information")]
    Help,
}

impl Command {
    /// Commands that only allow-listed admins may run
    pub fn requires_admin(&self) -> bool {
        matches!(self, Command::Translate | Command::Ban)
    }
}

/// Main command dispatcher
pub async fn handle_command(
    services: &ServiceFactory,
    invocation: &CommandInvocation,
    cmd: Command,
) -> Result<()> {
    match cmd {
        Command::Translate => translate::handle_toggle_translation(services, invocation).await,
        Command::Ban => ban::handle_ban(services, invocation).await.map(|_| ()),
        Command::Help => help::handle_help(services, invocation).await,
    }
}
