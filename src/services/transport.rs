//! Chat transport abstraction
//!
//! Handlers send replies and issue bans through `ChatTransport`; the
//! Telegram implementation wraps a `teloxide::Bot`.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{MessageId, ParseMode, ReplyParameters, UserId};
use crate::utils::errors::Result;

#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Send an HTML-formatted reply to a message in a group
    async fn reply(&self, group_id: i64, reply_to: i32, html: &str) -> Result<()>;

    /// Ban a member from a group
    async fn ban_member(&self, group_id: i64, user_id: i64) -> Result<()>;
}

/// Telegram Bot API transport
#[derive(Clone)]
pub struct TelegramTransport {
    bot: Bot,
}

impl TelegramTransport {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl ChatTransport for TelegramTransport {
    async fn reply(&self, group_id: i64, reply_to: i32, html: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(group_id), html)
            .parse_mode(ParseMode::Html)
            .reply_parameters(ReplyParameters::new(MessageId(reply_to)))
            .await?;
        Ok(())
    }

    async fn ban_member(&self, group_id: i64, user_id: i64) -> Result<()> {
        self.bot
            .ban_chat_member(ChatId(group_id), UserId(user_id as u64))
            .await?;
        Ok(())
    }
}
