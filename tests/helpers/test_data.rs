//! Test data helpers for creating test objects

use std::sync::Arc;
use LinguaRelay::config::Settings;
use LinguaRelay::database::DatabaseService;
use LinguaRelay::models::{ChatMember, CommandInvocation, IncomingMessage};
use LinguaRelay::services::ServiceFactory;
use super::mock_translator::MockTranslator;
use super::recording_transport::RecordingTransport;

pub fn test_bot_token() -> String {
    "12345:test_token".to_string()
}

pub fn test_chat_id() -> i64 {
    -1001234567890
}

pub fn test_admin_id() -> i64 {
    123456789
}

pub fn test_user_id() -> i64 {
    987654321
}

/// Valid settings for tests
pub fn test_settings() -> Settings {
    let mut settings = Settings::default();
    settings.bot.token = test_bot_token();
    settings.bot.admin_ids = vec![test_admin_id()];
    settings.database.url = "sqlite::memory:".to_string();
    settings.translation.api_key = "test-key".to_string();
    settings
}

/// Services wired to a mock provider and a recording transport
pub fn test_services(
    database: DatabaseService,
    provider: MockTranslator,
    transport: Arc<RecordingTransport>,
) -> ServiceFactory {
    ServiceFactory::from_parts(&test_settings(), database, Arc::new(provider), transport)
}

pub fn group_message(group_id: i64, message_id: i32, text: &str) -> IncomingMessage {
    IncomingMessage {
        group_id,
        message_id,
        text: Some(text.to_string()),
        sender: Some(test_member()),
    }
}

pub fn test_member() -> ChatMember {
    ChatMember {
        user_id: test_user_id(),
        display_name: "Spam Bot".to_string(),
    }
}

pub fn admin_command(group_id: i64, reply_to: Option<ChatMember>) -> CommandInvocation {
    CommandInvocation {
        group_id,
        group_title: Some("Test Group".to_string()),
        message_id: 77,
        invoker_id: test_admin_id(),
        reply_to,
    }
}
