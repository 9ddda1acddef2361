//! Message handlers module
//!
//! Handles plain group messages: runs them through the translation policy
//! and posts the translation as a reply when one is produced.

use tracing::debug;
use crate::models::{language_name, IncomingMessage};
use crate::services::{Action, ServiceFactory, SkipReason};
use crate::utils::errors::Result;
use crate::utils::helpers::{escape_html, truncate_text};
use crate::utils::logging::log_group_event;

/// Reply text for a produced translation
pub fn format_translation_reply(source: &str, target: &str, text: &str) -> String {
    format!(
        "🌐 Translated from {} to {}:\n\n{}",
        escape_html(language_name(source)),
        escape_html(language_name(target)),
        escape_html(text)
    )
}

/// Handle an incoming group message
///
/// Returns the policy decision; only `Action::Translate` produces a reply.
pub async fn handle_group_message(services: &ServiceFactory, msg: &IncomingMessage) -> Result<Action> {
    let text = match msg.text.as_deref() {
        Some(text) => text,
        None => return Ok(Action::Skip(SkipReason::TooShort)),
    };

    debug!(
        group_id = msg.group_id,
        message_id = msg.message_id,
        preview = %truncate_text(text, 40),
        "Evaluating group message"
    );

    let action = services.policy_engine.evaluate(msg.group_id, text).await;

    if let Action::Translate { source, target, text } = &action {
        let reply = format_translation_reply(source, target, text);
        services
            .transport
            .reply(msg.group_id, msg.message_id, &reply)
            .await?;
        log_group_event(
            msg.group_id,
            "message_translated",
            msg.sender.as_ref().map(|sender| sender.user_id),
            Some(&format!("{} -> {}", source, target)),
        );
    }

    Ok(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_translation_reply() {
        assert_eq!(
            format_translation_reply("en", "my", "<my-text>"),
            "🌐 Translated from English to Myanmar:\n\n&lt;my-text&gt;"
        );
        assert_eq!(
            format_translation_reply("xx", "my", "ok"),
            "🌐 Translated from xx to Myanmar:\n\nok"
        );
    }
}
