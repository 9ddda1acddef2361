//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

/// Truncate text to a maximum number of characters with ellipsis
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Escape text for Telegram HTML parse mode
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Build an HTML mention link for a user
pub fn user_mention_html(user_id: i64, display_name: &str) -> String {
    let name = if display_name.trim().is_empty() {
        user_id.to_string()
    } else {
        display_name.trim().to_string()
    };
    format!("<a href=\"tg://user?id={}\">{}</a>", user_id, escape_html(&name))
}

/// Number of characters left after trimming surrounding whitespace
pub fn trimmed_char_count(text: &str) -> usize {
    text.trim().chars().count()
}

/// Normalize whitespace in text
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
