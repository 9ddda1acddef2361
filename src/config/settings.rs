//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub bot: BotConfig,
    pub database: DatabaseConfig,
    pub translation: TranslationConfig,
    pub logging: LoggingConfig,
}

/// Telegram bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotConfig {
    pub token: String,
    pub admin_ids: Vec<i64>,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_seconds: u64,
}

/// Translation provider and policy configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TranslationConfig {
    pub api_url: String,
    pub api_key: String,
    pub timeout_seconds: u64,
    pub min_message_length: usize,
    pub default_source_langs: Vec<String>,
    pub default_target_lang: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: String,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let defaults = config::Config::try_from(&Settings::default())?;

        let settings = config::Config::builder()
            .add_source(defaults)
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("LINGUARELAY")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("bot.admin_ids")
                    .with_list_parse_key("translation.default_source_langs")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::RelayError> {
        super::validation::validate_settings(self)
    }
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            api_url: "https://translation.googleapis.com/language/translate/v2".to_string(),
            api_key: String::new(),
            timeout_seconds: 10,
            min_message_length: 5,
            default_source_langs: vec!["en".to_string(), "id".to_string()],
            default_target_lang: "my".to_string(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                token: String::new(),
                admin_ids: vec![],
            },
            database: DatabaseConfig {
                url: "sqlite://group_manager.db".to_string(),
                max_connections: 1,
                acquire_timeout_seconds: 30,
            },
            translation: TranslationConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: "logs".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_languages() {
        let settings = Settings::default();
        assert_eq!(settings.translation.default_source_langs, vec!["en", "id"]);
        assert_eq!(settings.translation.default_target_lang, "my");
        assert_eq!(settings.translation.min_message_length, 5);
    }

    #[test]
    fn test_default_database_is_single_connection() {
        let settings = Settings::default();
        assert_eq!(settings.database.max_connections, 1);
        assert!(settings.database.url.starts_with("sqlite:"));
    }
}
