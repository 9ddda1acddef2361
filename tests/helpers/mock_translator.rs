//! Mock translation provider
//!
//! A deterministic, network-free provider. Detection and translation are
//! driven by lookup tables, failures can be forced, and every call is
//! counted so tests can assert that the policy short-circuited.
//!
//! ```ignore
//! let mock = MockTranslator::new()
//!     .with_detection("Good morning everyone", "en")
//!     .with_translation("Good morning everyone", "my", "<my-text>");
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use LinguaRelay::services::TranslationProvider;
use LinguaRelay::utils::errors::{ProviderError, ProviderResult};

/// Mock translator with scripted answers
#[derive(Debug, Clone, Default)]
pub struct MockTranslator {
    detections: HashMap<String, String>,
    translations: HashMap<(String, String), String>,
    default_detection: Option<String>,
    detect_error: Option<ProviderError>,
    translate_error: Option<ProviderError>,
    delay_ms: u64,
    detect_calls: Arc<AtomicUsize>,
    translate_calls: Arc<AtomicUsize>,
}

impl MockTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Detect `text` as `lang`
    pub fn with_detection(mut self, text: &str, lang: &str) -> Self {
        self.detections.insert(text.to_string(), lang.to_string());
        self
    }

    /// Detect every unscripted text as `lang`
    pub fn detecting_all_as(mut self, lang: &str) -> Self {
        self.default_detection = Some(lang.to_string());
        self
    }

    /// Translate `text` into `target` as `translated`
    pub fn with_translation(mut self, text: &str, target: &str, translated: &str) -> Self {
        self.translations
            .insert((text.to_string(), target.to_string()), translated.to_string());
        self
    }

    pub fn failing_detection(mut self, error: ProviderError) -> Self {
        self.detect_error = Some(error);
        self
    }

    pub fn failing_translation(mut self, error: ProviderError) -> Self {
        self.translate_error = Some(error);
        self
    }

    /// Simulated network delay applied to every call
    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn detect_calls(&self) -> usize {
        self.detect_calls.load(Ordering::SeqCst)
    }

    pub fn translate_calls(&self) -> usize {
        self.translate_calls.load(Ordering::SeqCst)
    }

    async fn apply_delay(&self) {
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
    }
}

#[async_trait]
impl TranslationProvider for MockTranslator {
    async fn detect(&self, text: &str) -> ProviderResult<String> {
        self.detect_calls.fetch_add(1, Ordering::SeqCst);
        self.apply_delay().await;

        if let Some(error) = &self.detect_error {
            return Err(error.clone());
        }

        self.detections
            .get(text)
            .or(self.default_detection.as_ref())
            .cloned()
            .ok_or(ProviderError::NoResult)
    }

    async fn translate(
        &self,
        text: &str,
        _source_lang: &str,
        target_lang: &str,
    ) -> ProviderResult<String> {
        self.translate_calls.fetch_add(1, Ordering::SeqCst);
        self.apply_delay().await;

        if let Some(error) = &self.translate_error {
            return Err(error.clone());
        }

        let key = (text.to_string(), target_lang.to_string());
        Ok(self
            .translations
            .get(&key)
            .cloned()
            .unwrap_or_else(|| format!("{}_{}", text, target_lang)))
    }

    fn provider_name(&self) -> &str {
        "Mock Translator"
    }
}
