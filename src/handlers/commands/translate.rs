//! /translate command handler

use tracing::error;
use crate::models::{CommandInvocation, GroupSettings};
use crate::services::ServiceFactory;
use crate::utils::errors::Result;
use crate::utils::helpers::{escape_html, normalize_whitespace};
use crate::utils::logging::log_admin_action;

pub const TOGGLE_FAILED_TEXT: &str = "Failed to update translation settings. Please try again later.";

/// Status reply sent after a successful toggle
pub fn format_toggle_reply(settings: &GroupSettings) -> String {
    let status = if settings.auto_translate { "enabled" } else { "disabled" };
    format!(
        "🌍 Auto-translation has been {}.\nCurrently translating from: {}\nTarget language: {}",
        status,
        escape_html(&settings.source_langs.join(", ")),
        escape_html(&settings.target_lang)
    )
}

/// Handle /translate: flip auto-translation for the group
pub async fn handle_toggle_translation(
    services: &ServiceFactory,
    invocation: &CommandInvocation,
) -> Result<()> {
    let group_name = invocation
        .group_title
        .as_deref()
        .map(normalize_whitespace)
        .unwrap_or_default();

    let reply = match services.policy_engine.toggle(invocation.group_id, &group_name).await {
        Ok(settings) => {
            let status = if settings.auto_translate { "enabled" } else { "disabled" };
            log_admin_action(
                invocation.invoker_id,
                "toggle_translation",
                Some(&invocation.group_id.to_string()),
                Some(status),
            );
            format_toggle_reply(&settings)
        }
        Err(e) => {
            error!(group_id = invocation.group_id, error = %e, "Failed to toggle translation");
            TOGGLE_FAILED_TEXT.to_string()
        }
    };

    services
        .transport
        .reply(invocation.group_id, invocation.message_id, &reply)
        .await
}
