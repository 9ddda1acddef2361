//! Authentication middleware
//!
//! Admin commands are gated by a static allow-list of Telegram user IDs.
//! Non-admin invocations are filtered out before reaching any handler.

use std::collections::HashSet;
use teloxide::types::{Message, User};
use tracing::{debug, warn};
use crate::handlers::Command;
use crate::utils::errors::{RelayError, Result};

/// Authentication middleware
#[derive(Debug, Clone)]
pub struct AuthMiddleware {
    admin_ids: HashSet<i64>,
}

impl AuthMiddleware {
    /// Create a new AuthMiddleware instance
    pub fn new(admin_ids: &[i64]) -> Self {
        Self {
            admin_ids: admin_ids.iter().copied().collect(),
        }
    }

    /// Check if user is an admin
    pub fn is_admin(&self, user_id: i64) -> bool {
        self.admin_ids.contains(&user_id)
    }

    /// Check if user is authorized for admin commands
    pub fn check_admin_auth(&self, user: &User) -> Result<()> {
        let user_id = user.id.0 as i64;

        if self.is_admin(user_id) {
            debug!(user_id = user_id, "Admin authentication successful");
            Ok(())
        } else {
            warn!(user_id = user_id, "Unauthorized admin command attempt");
            Err(RelayError::PermissionDenied(
                "Admin privileges required".to_string()
            ))
        }
    }

    /// Dispatcher gate: may the sender of `msg` run `cmd`?
    pub fn permits(&self, msg: &Message, cmd: &Command) -> bool {
        if !cmd.requires_admin() {
            return true;
        }

        match msg.from.as_ref() {
            Some(user) => self.check_admin_auth(user).is_ok(),
            None => {
                warn!(chat_id = msg.chat.id.0, command = ?cmd, "Admin command without a sender");
                false
            }
        }
    }

    pub fn admin_count(&self) -> usize {
        self.admin_ids.len()
    }
}
