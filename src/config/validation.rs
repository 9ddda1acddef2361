//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{RelayError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_bot_config(&settings.bot)?;
    validate_database_config(&settings.database)?;
    validate_translation_config(&settings.translation)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate bot configuration
fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    if config.token.is_empty() {
        return Err(RelayError::Config(
            "Bot token is required".to_string()
        ));
    }

    if config.admin_ids.is_empty() {
        return Err(RelayError::Config(
            "At least one admin ID must be configured".to_string()
        ));
    }

    Ok(())
}

/// Validate database configuration
fn validate_database_config(config: &super::DatabaseConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(RelayError::Config(
            "Database URL is required".to_string()
        ));
    }

    if !config.url.starts_with("sqlite:") {
        return Err(RelayError::Config(
            format!("Unsupported database URL: {}", config.url)
        ));
    }

    // The settings store serializes through a single storage handle.
    if config.max_connections != 1 {
        return Err(RelayError::Config(
            "Max connections must be exactly 1".to_string()
        ));
    }

    if config.acquire_timeout_seconds == 0 {
        return Err(RelayError::Config(
            "Database acquire timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate translation configuration
fn validate_translation_config(config: &super::TranslationConfig) -> Result<()> {
    if config.api_url.is_empty() {
        return Err(RelayError::Config(
            "Translation API URL is required".to_string()
        ));
    }

    if config.api_key.trim().is_empty() {
        return Err(RelayError::Config(
            "Translation API key is required".to_string()
        ));
    }

    if config.timeout_seconds == 0 {
        return Err(RelayError::Config(
            "Translation timeout must be greater than 0".to_string()
        ));
    }

    if config.default_source_langs.iter().all(|lang| lang.trim().is_empty()) {
        return Err(RelayError::Config(
            "At least one default source language is required".to_string()
        ));
    }

    if config.default_target_lang.trim().is_empty() {
        return Err(RelayError::Config(
            "Default target language is required".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(RelayError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(RelayError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
