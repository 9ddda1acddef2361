//! Translation provider trait
//!
//! This module defines the `TranslationProvider` trait so the policy engine
//! can work against Google Translate in production and a deterministic mock
//! in tests. Both calls are fallible and a failure is an ordinary outcome:
//! callers are expected to skip the message, not to retry.

use async_trait::async_trait;
use crate::utils::errors::{ProviderError, ProviderResult};

#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Detect the language of `text`, returning a language code such as `en`
    async fn detect(&self, text: &str) -> ProviderResult<String>;

    /// Translate `text` from `source_lang` into `target_lang`
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> ProviderResult<String>;

    /// Name used in logs
    fn provider_name(&self) -> &str;
}

/// Validate that a language code only contains code characters
pub fn validate_lang_code(code: &str) -> ProviderResult<()> {
    if code.is_empty() {
        return Err(ProviderError::InvalidLanguage("Language code is empty".to_string()));
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ProviderError::InvalidLanguage(format!(
            "Invalid characters in language code: {}",
            code
        )));
    }

    Ok(())
}
