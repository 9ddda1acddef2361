//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the LinguaRelay application.

use tracing::{info, warn, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::services::policy::SkipReason;
use crate::utils::errors::{ProviderError, Result};

/// Initialize logging based on configuration
///
/// The returned guard flushes the file writer on drop and must be held for
/// the lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, "linguarelay.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(non_blocking))
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log group events
pub fn log_group_event(group_id: i64, event: &str, user_id: Option<i64>, details: Option<&str>) {
    info!(
        group_id = group_id,
        event = event,
        user_id = user_id,
        details = details,
        "Group event occurred"
    );
}

/// Log admin actions
pub fn log_admin_action(admin_id: i64, action: &str, target: Option<&str>, details: Option<&str>) {
    warn!(
        admin_id = admin_id,
        action = action,
        target = target,
        details = details,
        "Admin action performed"
    );
}

/// Log why a message was not translated
pub fn log_translation_skip(group_id: i64, reason: SkipReason) {
    debug!(
        group_id = group_id,
        reason = %reason,
        "Message skipped by translation policy"
    );
}

/// Log provider failures; these are expected and never surfaced to users
pub fn log_provider_error(group_id: i64, operation: &str, error: &ProviderError) {
    warn!(
        group_id = group_id,
        operation = operation,
        error = %error,
        transient = error.is_transient(),
        "Translation provider call failed"
    );
}
