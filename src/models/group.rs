//! Group settings model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use super::language::normalize_lang_code;

/// Language pair applied when a group has no stored record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageDefaults {
    pub source_langs: Vec<String>,
    pub target_lang: String,
}

impl Default for LanguageDefaults {
    fn default() -> Self {
        Self {
            source_langs: vec!["en".to_string(), "id".to_string()],
            target_lang: "my".to_string(),
        }
    }
}

impl LanguageDefaults {
    /// Build defaults from configured values, keeping the built-in pair for blanks
    pub fn new(source_langs: &[String], target_lang: &str) -> Self {
        let builtin = Self::default();
        let source_langs = normalize_lang_list(source_langs.iter().map(String::as_str));
        let target_lang = target_lang.trim().to_lowercase();

        Self {
            source_langs: if source_langs.is_empty() { builtin.source_langs } else { source_langs },
            target_lang: if target_lang.is_empty() { builtin.target_lang } else { target_lang },
        }
    }
}

/// Per-group translation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSettings {
    pub group_id: i64,
    pub group_name: String,
    pub auto_translate: bool,
    pub source_langs: Vec<String>,
    pub target_lang: String,
}

impl GroupSettings {
    /// The virtual record for a group that has never been configured
    pub fn with_defaults(group_id: i64, defaults: &LanguageDefaults) -> Self {
        Self {
            group_id,
            group_name: String::new(),
            auto_translate: false,
            source_langs: defaults.source_langs.clone(),
            target_lang: defaults.target_lang.clone(),
        }
    }

    /// Eligibility of a detected language, compared by base code
    pub fn is_source_language(&self, lang: &str) -> bool {
        let lang = normalize_lang_code(lang);
        self.source_langs.iter().any(|source| normalize_lang_code(source) == lang)
    }

    /// Whether a detected language is already the group's target
    ///
    /// The target keeps its region for the provider (`zh-tw`), but a message
    /// in any variant of the base language needs no translation.
    pub fn is_target_language(&self, lang: &str) -> bool {
        normalize_lang_code(lang) == normalize_lang_code(&self.target_lang)
    }

    /// Comma-joined source languages, the stored representation
    pub fn source_langs_joined(&self) -> String {
        self.source_langs.join(",")
    }
}

/// Row layout of the `groups` table
#[derive(Debug, Clone, FromRow)]
pub struct GroupSettingsRow {
    pub group_id: i64,
    pub group_name: Option<String>,
    pub auto_translate: bool,
    pub source_langs: String,
    pub target_lang: String,
}

impl GroupSettingsRow {
    /// Decode a stored row, repairing blank language columns from the defaults
    pub fn into_settings(self, defaults: &LanguageDefaults) -> GroupSettings {
        let source_langs = normalize_lang_list(self.source_langs.split(','));
        let target_lang = self.target_lang.trim().to_lowercase();

        GroupSettings {
            group_id: self.group_id,
            group_name: self.group_name.unwrap_or_default(),
            auto_translate: self.auto_translate,
            source_langs: if source_langs.is_empty() { defaults.source_langs.clone() } else { source_langs },
            target_lang: if target_lang.is_empty() { defaults.target_lang.clone() } else { target_lang },
        }
    }
}

/// Reduce to base codes, drop blanks and duplicates while keeping first-seen order
///
/// Detected languages are compared by base code, so a regional source such
/// as `zh-TW` is stored as `zh`.
pub fn normalize_lang_list<'a, I>(codes: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut langs: Vec<String> = Vec::new();
    for code in codes {
        let code = normalize_lang_code(code);
        if !code.is_empty() && !langs.contains(&code) {
            langs.push(code);
        }
    }
    langs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(source_langs: &str, target_lang: &str) -> GroupSettingsRow {
        GroupSettingsRow {
            group_id: -100,
            group_name: None,
            auto_translate: true,
            source_langs: source_langs.to_string(),
            target_lang: target_lang.to_string(),
        }
    }

    #[test]
    fn test_default_record() {
        let settings = GroupSettings::with_defaults(-100, &LanguageDefaults::default());
        assert!(!settings.auto_translate);
        assert_eq!(settings.source_langs, vec!["en", "id"]);
        assert_eq!(settings.target_lang, "my");
        assert_eq!(settings.group_name, "");
    }

    #[test]
    fn test_row_decoding_dedupes_and_keeps_order() {
        let settings = row(" id, en ,ID,,", "MY").into_settings(&LanguageDefaults::default());
        assert_eq!(settings.source_langs, vec!["id", "en"]);
        assert_eq!(settings.target_lang, "my");
        assert_eq!(settings.source_langs_joined(), "id,en");
    }

    #[test]
    fn test_blank_source_list_falls_back_to_defaults() {
        let settings = row(" , ", "").into_settings(&LanguageDefaults::default());
        assert_eq!(settings.source_langs, vec!["en", "id"]);
        assert_eq!(settings.target_lang, "my");
    }

    #[test]
    fn test_configured_defaults_ignore_blanks() {
        let defaults = LanguageDefaults::new(&["".to_string()], " ");
        assert_eq!(defaults, LanguageDefaults::default());

        let defaults = LanguageDefaults::new(&["TH".to_string(), "en".to_string()], "Vi");
        assert_eq!(defaults.source_langs, vec!["th", "en"]);
        assert_eq!(defaults.target_lang, "vi");
    }

    #[test]
    fn test_regional_sources_reduce_to_base_codes() {
        let settings = row("zh-TW, en_GB, zh-CN", "zh-TW").into_settings(&LanguageDefaults::default());
        assert_eq!(settings.source_langs, vec!["zh", "en"]);
        assert_eq!(settings.target_lang, "zh-tw");

        let defaults = LanguageDefaults::new(&["pt-BR".to_string()], "my");
        assert_eq!(defaults.source_langs, vec!["pt"]);
    }

    #[test]
    fn test_language_checks_compare_base_codes() {
        let mut settings = GroupSettings::with_defaults(-100, &LanguageDefaults::default());
        settings.source_langs = vec!["zh-TW".to_string(), "en".to_string()];
        settings.target_lang = "zh-tw".to_string();

        assert!(settings.is_source_language("zh-TW"));
        assert!(settings.is_source_language("zh"));
        assert!(settings.is_source_language("en-US"));
        assert!(!settings.is_source_language("fr"));
        assert!(settings.is_target_language("zh-CN"));
        assert!(!settings.is_target_language("en"));
    }
}
