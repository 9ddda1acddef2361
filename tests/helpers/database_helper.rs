//! Test database helper utilities
//!
//! Every test gets its own in-memory SQLite database with migrations applied.

use std::sync::Once;
use LinguaRelay::database::{DatabaseConfig, DatabaseService};
use LinguaRelay::models::{GroupSettings, LanguageDefaults};

static INIT: Once = Once::new();

/// Initialize test logging once per test binary
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("LinguaRelay=debug")
            .with_test_writer()
            .try_init();
    });
}

/// Config for a private in-memory database
pub fn memory_database_config() -> DatabaseConfig {
    DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        ..DatabaseConfig::default()
    }
}

/// Fresh, migrated in-memory database with the built-in language defaults
pub async fn test_database() -> DatabaseService {
    init_test_logging();
    DatabaseService::connect(&memory_database_config(), LanguageDefaults::default())
        .await
        .expect("Failed to create test database")
}

/// Store a record with auto-translation enabled and the given language pair
pub async fn enable_translation(
    database: &DatabaseService,
    group_id: i64,
    source_langs: &[&str],
    target_lang: &str,
) -> GroupSettings {
    let settings = GroupSettings {
        group_id,
        group_name: "Test Group".to_string(),
        auto_translate: true,
        source_langs: source_langs.iter().map(|lang| lang.to_string()).collect(),
        target_lang: target_lang.to_string(),
    };
    database
        .groups
        .upsert(&settings)
        .await
        .expect("Failed to store group settings");
    settings
}
