//! Services module
//!
//! This module contains business logic services

pub mod google;
pub mod policy;
pub mod translator;
pub mod transport;

// Re-export commonly used services
pub use google::GoogleTranslateProvider;
pub use policy::{Action, PolicyEngine, SkipReason};
pub use translator::TranslationProvider;
pub use transport::{ChatTransport, TelegramTransport};

use std::sync::Arc;
use teloxide::Bot;
use crate::config::settings::Settings;
use crate::database::DatabaseService;
use crate::middleware::AuthMiddleware;
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub policy_engine: PolicyEngine,
    pub transport: Arc<dyn ChatTransport>,
    pub auth: AuthMiddleware,
    database: DatabaseService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory backed by Telegram and Google Translate
    pub fn new(bot: Bot, settings: &Settings, database: DatabaseService) -> Result<Self> {
        let provider = GoogleTranslateProvider::from_config(&settings.translation)?;
        let transport = TelegramTransport::new(bot);

        Ok(Self::from_parts(
            settings,
            database,
            Arc::new(provider),
            Arc::new(transport),
        ))
    }

    /// Assemble services from explicit provider and transport instances
    pub fn from_parts(
        settings: &Settings,
        database: DatabaseService,
        provider: Arc<dyn TranslationProvider>,
        transport: Arc<dyn ChatTransport>,
    ) -> Self {
        let policy_engine = PolicyEngine::new(database.groups.clone(), provider)
            .with_min_message_length(settings.translation.min_message_length);

        Self {
            policy_engine,
            transport,
            auth: AuthMiddleware::new(&settings.bot.admin_ids),
            database,
        }
    }

    /// Health check for all services
    pub async fn health_check(&self) -> ServiceHealthStatus {
        ServiceHealthStatus {
            database_healthy: self.database.health_check().await.is_ok(),
            admins_configured: self.auth.admin_count() > 0,
        }
    }
}

/// Health status for all services
#[derive(Debug, Clone)]
pub struct ServiceHealthStatus {
    pub database_healthy: bool,
    pub admins_configured: bool,
}

impl ServiceHealthStatus {
    /// Check if all critical services are healthy
    pub fn is_healthy(&self) -> bool {
        self.database_healthy && self.admins_configured
    }

    /// Get list of unhealthy services
    pub fn get_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if !self.database_healthy {
            issues.push("Database connection failed".to_string());
        }
        if !self.admins_configured {
            issues.push("No admin IDs configured".to_string());
        }

        issues
    }
}
