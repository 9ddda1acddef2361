//! Human-readable language names for reply messages

const LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("en", "English"),
    ("id", "Indonesian"),
    ("my", "Myanmar"),
    ("ms", "Malay"),
    ("th", "Thai"),
    ("vi", "Vietnamese"),
    ("zh", "Chinese"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("hi", "Hindi"),
    ("fr", "French"),
    ("de", "German"),
    ("es", "Spanish"),
    ("ru", "Russian"),
    ("ar", "Arabic"),
];

/// Display name for a language code, or the code itself when unknown
pub fn language_name(code: &str) -> &str {
    LANGUAGE_NAMES
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(code))
        .map(|(_, name)| *name)
        .unwrap_or(code)
}

/// Normalize a provider language code to its base language
///
/// `en-US` → `en`, `zh-CN` → `zh`, `MY` → `my`
pub fn normalize_lang_code(code: &str) -> String {
    let code = code.trim();
    code.split(|c| c == '-' || c == '_')
        .next()
        .unwrap_or(code)
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_language_names() {
        assert_eq!(language_name("en"), "English");
        assert_eq!(language_name("id"), "Indonesian");
        assert_eq!(language_name("my"), "Myanmar");
        assert_eq!(language_name("MY"), "Myanmar");
    }

    #[test]
    fn test_unknown_language_falls_back_to_code() {
        assert_eq!(language_name("xx"), "xx");
    }

    #[test]
    fn test_normalize_lang_code() {
        assert_eq!(normalize_lang_code("en-US"), "en");
        assert_eq!(normalize_lang_code("zh_CN"), "zh");
        assert_eq!(normalize_lang_code(" MY "), "my");
        assert_eq!(normalize_lang_code("id"), "id");
    }
}
