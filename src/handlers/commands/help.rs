//! Help command handler

use teloxide::utils::command::BotCommands;
use crate::handlers::commands::Command;
use crate::models::CommandInvocation;
use crate::services::ServiceFactory;
use crate::utils::errors::Result;
use crate::utils::helpers::escape_html;

/// Handle /help command
pub async fn handle_help(services: &ServiceFactory, invocation: &CommandInvocation) -> Result<()> {
    let help_text = format!(
        "🤖 LinguaRelay Help\n\n{}",
        escape_html(&Command::descriptions().to_string())
    );

    services
        .transport
        .reply(invocation.group_id, invocation.message_id, &help_text)
        .await
}
