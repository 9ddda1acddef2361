//! Database connection management

use std::str::FromStr;
use std::time::Duration;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use crate::utils::errors::RelayError;

pub type DatabasePool = Pool<Sqlite>;

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://group_manager.db".to_string(),
            max_connections: 1,
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

impl From<&crate::config::DatabaseConfig> for DatabaseConfig {
    fn from(config: &crate::config::DatabaseConfig) -> Self {
        Self {
            url: config.url.clone(),
            max_connections: config.max_connections,
            acquire_timeout: Duration::from_secs(config.acquire_timeout_seconds),
        }
    }
}

/// Create a new database connection pool
///
/// Connections are never recycled, so an in-memory database lives as long
/// as the pool does.
pub async fn create_pool(config: &DatabaseConfig) -> Result<DatabasePool, RelayError> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(1)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    // Test the connection
    sqlx::query("SELECT 1")
        .execute(&pool)
        .await?;

    tracing::info!(url = %config.url, "Database connection pool created successfully");
    Ok(pool)
}

/// Run database migrations
pub async fn run_migrations(pool: &DatabasePool) -> Result<(), RelayError> {
    tracing::info!("Running database migrations...");

    sqlx::migrate!("./migrations")
        .run(pool)
        .await?;

    tracing::info!("Database migrations completed successfully");
    Ok(())
}

/// Check database health
pub async fn health_check(pool: &DatabasePool) -> Result<(), RelayError> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_config() -> DatabaseConfig {
        DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            ..DatabaseConfig::default()
        }
    }

    #[tokio::test]
    async fn test_database_config_default() {
        let config = DatabaseConfig::default();
        assert_eq!(config.max_connections, 1);
        assert!(config.url.starts_with("sqlite:"));
    }

    #[tokio::test]
    async fn test_memory_pool_migrates_and_is_healthy() {
        let pool = create_pool(&memory_config()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        assert!(health_check(&pool).await.is_ok());

        let tables: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'groups'"
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(tables.0, 1);
    }

    #[tokio::test]
    async fn test_health_check_fails_after_close() {
        let pool = create_pool(&memory_config()).await.unwrap();
        pool.close().await;
        assert!(health_check(&pool).await.is_err());
    }
}
