//! Recording chat transport
//!
//! Stands in for Telegram: every reply and ban call is recorded so tests
//! can assert on what the bot would have sent.

use std::sync::Mutex;
use async_trait::async_trait;
use LinguaRelay::services::ChatTransport;
use LinguaRelay::utils::errors::{RelayError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentReply {
    pub group_id: i64,
    pub reply_to: i32,
    pub html: String,
}

#[derive(Debug, Default)]
pub struct RecordingTransport {
    replies: Mutex<Vec<SentReply>>,
    ban_calls: Mutex<Vec<(i64, i64)>>,
    fail_bans: bool,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport whose ban primitive always fails, like a bot without rights
    pub fn failing_bans() -> Self {
        Self {
            fail_bans: true,
            ..Self::default()
        }
    }

    pub fn replies(&self) -> Vec<SentReply> {
        self.replies.lock().unwrap().clone()
    }

    pub fn last_reply(&self) -> Option<SentReply> {
        self.replies.lock().unwrap().last().cloned()
    }

    pub fn ban_calls(&self) -> Vec<(i64, i64)> {
        self.ban_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatTransport for RecordingTransport {
    async fn reply(&self, group_id: i64, reply_to: i32, html: &str) -> Result<()> {
        self.replies.lock().unwrap().push(SentReply {
            group_id,
            reply_to,
            html: html.to_string(),
        });
        Ok(())
    }

    async fn ban_member(&self, group_id: i64, user_id: i64) -> Result<()> {
        self.ban_calls.lock().unwrap().push((group_id, user_id));
        if self.fail_bans {
            return Err(RelayError::PermissionDenied(
                "Bad Request: not enough rights to restrict/unrestrict chat member".to_string(),
            ));
        }
        Ok(())
    }
}
