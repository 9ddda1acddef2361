//! Database service layer
//!
//! This module provides a high-level interface to database operations

use crate::database::{create_pool, run_migrations, health_check, DatabaseConfig, DatabasePool, GroupSettingsRepository};
use crate::models::LanguageDefaults;
use crate::utils::errors::RelayError;

#[derive(Debug, Clone)]
pub struct DatabaseService {
    pool: DatabasePool,
    pub groups: GroupSettingsRepository,
}

impl DatabaseService {
    pub fn new(pool: DatabasePool, defaults: LanguageDefaults) -> Self {
        Self {
            groups: GroupSettingsRepository::with_defaults(pool.clone(), defaults),
            pool,
        }
    }

    /// Open the pool, apply migrations and build the repositories
    pub async fn connect(config: &DatabaseConfig, defaults: LanguageDefaults) -> Result<Self, RelayError> {
        let pool = create_pool(config).await?;
        run_migrations(&pool).await?;
        Ok(Self::new(pool, defaults))
    }

    /// Check that the storage handle still answers
    pub async fn health_check(&self) -> Result<(), RelayError> {
        health_check(&self.pool).await
    }

    /// Close the pool, waiting for in-flight queries to finish
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
