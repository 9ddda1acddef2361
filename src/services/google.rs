//! Google Translate API provider
//!
//! Talks to the Google Translate v2 REST API: `POST {api_url}/detect` for
//! language detection and `POST {api_url}` for translation, both
//! authenticated with the `key` query parameter.

use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;
use crate::config::TranslationConfig;
use crate::services::translator::{validate_lang_code, TranslationProvider};
use crate::utils::errors::{ProviderError, ProviderResult};

#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct DetectData {
    detections: Vec<Vec<Detection>>,
}

#[derive(Debug, Deserialize)]
struct Detection {
    language: String,
}

#[derive(Debug, Deserialize)]
struct TranslateData {
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
struct Translation {
    translated_text: String,
}

/// Google Translate API v2 provider
#[derive(Clone)]
pub struct GoogleTranslateProvider {
    client: Client,
    api_url: String,
    api_key: String,
}

impl GoogleTranslateProvider {
    /// Maximum characters per request accepted by the API
    const MAX_CHARS: usize = 30_000;

    /// Create a new provider from explicit values
    pub fn new(api_url: &str, api_key: &str, timeout: Duration) -> ProviderResult<Self> {
        if api_key.trim().is_empty() {
            return Err(ProviderError::Config("API key cannot be empty".to_string()));
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent("LinguaRelay-Bot/1.0")
            .build()
            .map_err(|e| ProviderError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Create a provider from the translation section of the settings
    pub fn from_config(config: &TranslationConfig) -> ProviderResult<Self> {
        Self::new(
            &config.api_url,
            &config.api_key,
            Duration::from_secs(config.timeout_seconds),
        )
    }

    fn check_length(text: &str) -> ProviderResult<()> {
        if text.chars().count() > Self::MAX_CHARS {
            return Err(ProviderError::RequestFailed(format!(
                "Text exceeds maximum length of {} characters",
                Self::MAX_CHARS
            )));
        }
        Ok(())
    }

    async fn post<T>(&self, url: &str, body: serde_json::Value) -> ProviderResult<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let response = self
            .client
            .post(url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(if status.is_server_error() {
                ProviderError::ServiceUnavailable
            } else {
                ProviderError::RequestFailed(format!("HTTP {}: {}", status, error_text))
            });
        }

        let parsed: ApiResponse<T> = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        Ok(parsed.data)
    }
}

impl std::fmt::Debug for GoogleTranslateProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleTranslateProvider")
            .field("api_key", &"***")
            .field("api_url", &self.api_url)
            .finish()
    }
}

#[async_trait]
impl TranslationProvider for GoogleTranslateProvider {
    async fn detect(&self, text: &str) -> ProviderResult<String> {
        if text.trim().is_empty() {
            return Err(ProviderError::NoResult);
        }
        Self::check_length(text)?;

        let url = format!("{}/detect", self.api_url);
        let data: DetectData = self.post(&url, json!({ "q": text })).await?;

        let language = data
            .detections
            .into_iter()
            .flatten()
            .map(|detection| detection.language)
            .find(|language| !language.is_empty() && language != "und")
            .ok_or(ProviderError::NoResult)?;

        debug!(language = %language, "Language detected");
        Ok(language)
    }

    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> ProviderResult<String> {
        validate_lang_code(source_lang)?;
        validate_lang_code(target_lang)?;
        Self::check_length(text)?;

        let body = json!({
            "q": text,
            "source": source_lang,
            "target": target_lang,
            "format": "text"
        });
        let data: TranslateData = self.post(&self.api_url, body).await?;

        data.translations
            .into_iter()
            .next()
            .map(|translation| translation.translated_text)
            .filter(|translated| !translated.is_empty())
            .ok_or(ProviderError::NoResult)
    }

    fn provider_name(&self) -> &str {
        "Google Translate"
    }
}
