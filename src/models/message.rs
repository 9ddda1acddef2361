//! Transport-neutral message and command models
//!
//! The Telegram binding converts updates into these before handing them to
//! the handlers, so handlers never touch `teloxide` types directly.

/// A chat participant as seen by the bot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMember {
    pub user_id: i64,
    pub display_name: String,
}

/// A plain group message that may be translated
#[derive(Debug, Clone)]
pub struct IncomingMessage {
    pub group_id: i64,
    pub message_id: i32,
    pub text: Option<String>,
    pub sender: Option<ChatMember>,
}

/// An administrative command issued inside a group
#[derive(Debug, Clone)]
pub struct CommandInvocation {
    pub group_id: i64,
    pub group_title: Option<String>,
    pub message_id: i32,
    pub invoker_id: i64,
    /// Author of the message the command replied to
    pub reply_to: Option<ChatMember>,
}
