//! Telegram update conversion
//!
//! Turns `teloxide` messages into the transport-neutral models the
//! handlers work with.

use teloxide::types::{Message, User};
use crate::models::{ChatMember, CommandInvocation, IncomingMessage};

/// Chat member as seen in a Telegram update
pub fn member_from_user(user: &User) -> ChatMember {
    ChatMember {
        user_id: user.id.0 as i64,
        display_name: user.full_name(),
    }
}

/// Whether the message was posted in a group or supergroup
pub fn is_group_message(msg: &Message) -> bool {
    msg.chat.is_group() || msg.chat.is_supergroup()
}

/// Plain group text message, or `None` for private chats
pub fn incoming_message(msg: &Message) -> Option<IncomingMessage> {
    if !is_group_message(msg) {
        return None;
    }

    Some(IncomingMessage {
        group_id: msg.chat.id.0,
        message_id: msg.id.0,
        text: msg.text().map(str::to_string),
        sender: msg.from.as_ref().map(member_from_user),
    })
}

/// Group command invocation, or `None` without a sender or outside groups
pub fn command_invocation(msg: &Message) -> Option<CommandInvocation> {
    if !is_group_message(msg) {
        return None;
    }
    let invoker = msg.from.as_ref()?;

    Some(CommandInvocation {
        group_id: msg.chat.id.0,
        group_title: msg.chat.title().map(str::to_string),
        message_id: msg.id.0,
        invoker_id: invoker.id.0 as i64,
        reply_to: replied_member(msg),
    })
}

/// Author of the message `msg` explicitly replies to
///
/// Inside a forum topic every message carries the topic's root message as
/// `reply_to_message`; that implicit reply names no target.
pub fn replied_member(msg: &Message) -> Option<ChatMember> {
    let replied = msg.reply_to_message()?;
    if is_topic_root_reply(msg, replied) {
        return None;
    }
    replied.from.as_ref().map(member_from_user)
}

fn is_topic_root_reply(msg: &Message, replied: &Message) -> bool {
    msg.is_topic_message
        && (replied.forum_topic_created().is_some()
            || msg.thread_id.is_some_and(|thread| thread.0 == replied.id))
}
