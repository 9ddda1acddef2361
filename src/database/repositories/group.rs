//! Group settings repository implementation
//!
//! This is the settings store: the single owner of persisted group
//! configuration. Every operation runs inside one store-wide critical
//! section, and `update` keeps that section held across its whole
//! read-modify-write so concurrent mutations of a group compose serially.

use std::sync::Arc;
use sqlx::SqlitePool;
use tokio::sync::Mutex;
use tracing::debug;
use crate::models::group::{GroupSettings, GroupSettingsRow, LanguageDefaults};
use crate::utils::errors::RelayError;

#[derive(Clone)]
pub struct GroupSettingsRepository {
    pool: SqlitePool,
    defaults: LanguageDefaults,
    critical_section: Arc<Mutex<()>>,
}

impl std::fmt::Debug for GroupSettingsRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroupSettingsRepository")
            .field("defaults", &self.defaults)
            .finish()
    }
}

impl GroupSettingsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self::with_defaults(pool, LanguageDefaults::default())
    }

    pub fn with_defaults(pool: SqlitePool, defaults: LanguageDefaults) -> Self {
        Self {
            pool,
            defaults,
            critical_section: Arc::new(Mutex::new(())),
        }
    }

    pub fn defaults(&self) -> &LanguageDefaults {
        &self.defaults
    }

    /// Current settings for a group, or the virtual default record
    ///
    /// Reading never creates a row.
    pub async fn read(&self, group_id: i64) -> Result<GroupSettings, RelayError> {
        let _guard = self.critical_section.lock().await;
        self.read_locked(group_id).await
    }

    /// Stored settings for a group, without falling back to defaults
    pub async fn find(&self, group_id: i64) -> Result<Option<GroupSettings>, RelayError> {
        let _guard = self.critical_section.lock().await;
        self.find_locked(group_id).await
    }

    /// Replace the full record for a group
    pub async fn upsert(&self, settings: &GroupSettings) -> Result<(), RelayError> {
        let _guard = self.critical_section.lock().await;
        self.upsert_locked(settings).await
    }

    /// Read, mutate and write a group's record as one critical section
    pub async fn update<F>(&self, group_id: i64, mutate: F) -> Result<GroupSettings, RelayError>
    where
        F: FnOnce(&mut GroupSettings) + Send,
    {
        let _guard = self.critical_section.lock().await;

        let mut settings = self.read_locked(group_id).await?;
        mutate(&mut settings);
        // The key is owned by the store, never by the mutation.
        settings.group_id = group_id;
        self.upsert_locked(&settings).await?;

        debug!(group_id = group_id, auto_translate = settings.auto_translate, "Group settings updated");
        Ok(settings)
    }

    /// Count stored group records
    pub async fn count(&self) -> Result<i64, RelayError> {
        let _guard = self.critical_section.lock().await;
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM groups")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }

    async fn read_locked(&self, group_id: i64) -> Result<GroupSettings, RelayError> {
        Ok(self
            .find_locked(group_id)
            .await?
            .unwrap_or_else(|| GroupSettings::with_defaults(group_id, &self.defaults)))
    }

    async fn find_locked(&self, group_id: i64) -> Result<Option<GroupSettings>, RelayError> {
        let row = sqlx::query_as::<_, GroupSettingsRow>(
            "SELECT group_id, group_name, auto_translate, source_langs, target_lang FROM groups WHERE group_id = ?"
        )
        .bind(group_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| row.into_settings(&self.defaults)))
    }

    async fn upsert_locked(&self, settings: &GroupSettings) -> Result<(), RelayError> {
        sqlx::query(
            r#"
            INSERT OR REPLACE INTO groups (group_id, group_name, auto_translate, source_langs, target_lang)
            VALUES (?, ?, ?, ?, ?)
            "#
        )
        .bind(settings.group_id)
        .bind(&settings.group_name)
        .bind(settings.auto_translate)
        .bind(settings.source_langs_joined())
        .bind(&settings.target_lang)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
