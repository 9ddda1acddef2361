//! Group translation policy engine
//!
//! Decides, per message, whether a group's settings call for a translation,
//! and owns the toggle of a group's auto-translate flag. The engine keeps no
//! copy of any group's settings between calls; every decision reads the
//! store afresh.

use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info};
use crate::database::GroupSettingsRepository;
use crate::models::{normalize_lang_code, GroupSettings};
use crate::services::translator::TranslationProvider;
use crate::utils::errors::Result;
use crate::utils::helpers::trimmed_char_count;
use crate::utils::logging::{log_provider_error, log_translation_skip};

/// Messages shorter than this (after trimming) are never sent for detection
pub const DEFAULT_MIN_MESSAGE_LENGTH: usize = 5;

/// Why a message was not translated; diagnostic only, never shown to users
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Disabled,
    TooShort,
    DetectionFailed,
    SourceNotEligible,
    AlreadyTargetLanguage,
    TranslationFailed,
    StorageUnavailable,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            SkipReason::Disabled => "disabled",
            SkipReason::TooShort => "too short",
            SkipReason::DetectionFailed => "detection failed",
            SkipReason::SourceNotEligible => "source not eligible",
            SkipReason::AlreadyTargetLanguage => "already target language",
            SkipReason::TranslationFailed => "translation failed",
            SkipReason::StorageUnavailable => "storage unavailable",
        };
        f.write_str(reason)
    }
}

/// Outcome of evaluating one message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Skip(SkipReason),
    Translate {
        source: String,
        target: String,
        text: String,
    },
}

#[derive(Clone)]
pub struct PolicyEngine {
    store: GroupSettingsRepository,
    provider: Arc<dyn TranslationProvider>,
    min_message_length: usize,
}

impl PolicyEngine {
    pub fn new(store: GroupSettingsRepository, provider: Arc<dyn TranslationProvider>) -> Self {
        Self {
            store,
            provider,
            min_message_length: DEFAULT_MIN_MESSAGE_LENGTH,
        }
    }

    pub fn with_min_message_length(mut self, min_message_length: usize) -> Self {
        self.min_message_length = min_message_length;
        self
    }

    /// Decide what to do with a group message
    ///
    /// Never fails: storage and provider errors are logged and end in a skip.
    pub async fn evaluate(&self, group_id: i64, text: &str) -> Action {
        let action = self.decide(group_id, text).await;
        if let Action::Skip(reason) = action {
            log_translation_skip(group_id, reason);
        }
        action
    }

    async fn decide(&self, group_id: i64, text: &str) -> Action {
        let settings = match self.store.read(group_id).await {
            Ok(settings) => settings,
            Err(e) => {
                error!(group_id = group_id, error = %e, "Cannot load group settings, skipping message");
                return Action::Skip(SkipReason::StorageUnavailable);
            }
        };

        if !settings.auto_translate {
            return Action::Skip(SkipReason::Disabled);
        }

        if text.is_empty() || trimmed_char_count(text) < self.min_message_length {
            return Action::Skip(SkipReason::TooShort);
        }

        let detected = match self.provider.detect(text).await {
            Ok(lang) => normalize_lang_code(&lang),
            Err(e) => {
                log_provider_error(group_id, "detect", &e);
                return Action::Skip(SkipReason::DetectionFailed);
            }
        };

        if !settings.is_source_language(&detected) {
            return Action::Skip(SkipReason::SourceNotEligible);
        }

        if settings.is_target_language(&detected) {
            return Action::Skip(SkipReason::AlreadyTargetLanguage);
        }

        match self.provider.translate(text, &detected, &settings.target_lang).await {
            Ok(translated) => {
                debug!(
                    group_id = group_id,
                    source = %detected,
                    target = %settings.target_lang,
                    provider = self.provider.provider_name(),
                    "Message translated"
                );
                Action::Translate {
                    source: detected,
                    target: settings.target_lang,
                    text: translated,
                }
            }
            Err(e) => {
                log_provider_error(group_id, "translate", &e);
                Action::Skip(SkipReason::TranslationFailed)
            }
        }
    }

    /// Flip a group's auto-translate flag, refreshing its display name
    ///
    /// The whole read-modify-write runs inside the store's critical section.
    pub async fn toggle(&self, group_id: i64, display_name: &str) -> Result<GroupSettings> {
        let display_name = display_name.trim().to_string();

        let settings = self
            .store
            .update(group_id, move |settings| {
                settings.auto_translate = !settings.auto_translate;
                if !display_name.is_empty() {
                    settings.group_name = display_name;
                }
            })
            .await?;

        info!(
            group_id = group_id,
            auto_translate = settings.auto_translate,
            "Auto-translation toggled"
        );
        Ok(settings)
    }
}
