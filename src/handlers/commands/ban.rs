//! /ban command handler

use tracing::{error, info};
use crate::models::{ChatMember, CommandInvocation};
use crate::services::ServiceFactory;
use crate::utils::errors::{RelayError, Result};
use crate::utils::helpers::user_mention_html;
use crate::utils::logging::log_admin_action;

pub const MISSING_REPLY_TEXT: &str = "Please reply to the user's message to ban them.";
pub const BAN_FAILED_TEXT: &str = "Failed to ban user. I might not have admin privileges.";

/// What a /ban invocation ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BanOutcome {
    Banned(ChatMember),
    MissingReply,
    Failed,
}

/// The member a /ban targets: the author of the replied-to message
pub fn ban_target(invocation: &CommandInvocation) -> Result<&ChatMember> {
    invocation.reply_to.as_ref().ok_or_else(|| {
        RelayError::PreconditionFailed("ban requires a replied-to message".to_string())
    })
}

/// Handle /ban: ban the author of the replied-to message
pub async fn handle_ban(services: &ServiceFactory, invocation: &CommandInvocation) -> Result<BanOutcome> {
    let target = match ban_target(invocation) {
        Ok(target) => target.clone(),
        Err(_) => {
            services
                .transport
                .reply(invocation.group_id, invocation.message_id, MISSING_REPLY_TEXT)
                .await?;
            return Ok(BanOutcome::MissingReply);
        }
    };

    let (reply, outcome) = match services
        .transport
        .ban_member(invocation.group_id, target.user_id)
        .await
    {
        Ok(()) => {
            info!(group_id = invocation.group_id, user_id = target.user_id, "User banned");
            log_admin_action(
                invocation.invoker_id,
                "ban_user",
                Some(&target.user_id.to_string()),
                None,
            );
            (
                format!("🚫 User {} has been banned.", user_mention_html(target.user_id, &target.display_name)),
                BanOutcome::Banned(target),
            )
        }
        Err(e) => {
            error!(group_id = invocation.group_id, user_id = target.user_id, error = %e, "Error banning user");
            (BAN_FAILED_TEXT.to_string(), BanOutcome::Failed)
        }
    };

    services
        .transport
        .reply(invocation.group_id, invocation.message_id, &reply)
        .await?;

    Ok(outcome)
}
