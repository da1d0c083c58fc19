//! Text-span extraction shared by the intent handlers
//!
//! All helpers are pure: a missing span is `None`, never an error.

use once_cell::sync::Lazy;
use regex::Regex;

/// "to <name>", stopping before a trailing clause keyword
static TO_RECIPIENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"to\s+([a-zA-Z ]+?)(?:\s+(?:saying|that|says|telling)|$)")
        .expect("valid recipient pattern")
});

/// "call <name>"
static CALL_RECIPIENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"call\s+([a-zA-Z ]+)").expect("valid call pattern"));

/// Words that introduce the message body, tried in this order
const BODY_DELIMITERS: [&str; 5] = ["that", "saying", "says", "tell them", "says that"];

/// Messaging apps recognized by name, in priority order
const MESSAGING_APPS: [&str; 3] = ["whatsapp", "telegram", "messages"];

pub const DEFAULT_MESSAGING_APP: &str = "default_messaging";

/// True if any of `tokens` occurs as a substring of `normalized`
pub fn contains_any(normalized: &str, tokens: &[&str]) -> bool {
    tokens.iter().any(|token| normalized.contains(token))
}

/// Recipient named after "to", falling back to the words after "call"
pub fn extract_recipient(normalized: &str) -> Option<String> {
    TO_RECIPIENT
        .captures(normalized)
        .or_else(|| CALL_RECIPIENT.captures(normalized))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// Everything after the first occurrence of `keyword`, if non-empty
pub fn extract_after_keyword(normalized: &str, keyword: &str) -> Option<String> {
    let (_, after) = normalized.split_once(keyword)?;
    let after = after.trim();
    (!after.is_empty()).then(|| after.to_string())
}

/// Message body following a delimiter word, else the second sentence
///
/// The delimiter form is lowercased. The sentence form splits the
/// original-case text on '.' and keeps the second fragment as typed.
pub fn extract_message_body(text: &str) -> Option<String> {
    let lowered = text.to_lowercase();
    for delimiter in BODY_DELIMITERS {
        if let Some((_, body)) = lowered.split_once(delimiter) {
            return Some(body.trim_matches(|c| c == ' ' || c == '.').to_string());
        }
    }

    text.split('.').nth(1).map(|part| part.trim().to_string())
}

/// Messaging app named in the text, else the platform default
pub fn detect_messaging_app(normalized: &str) -> &'static str {
    MESSAGING_APPS
        .iter()
        .copied()
        .find(|app| normalized.contains(app))
        .unwrap_or(DEFAULT_MESSAGING_APP)
}

/// Playback context, by priority: liked > playlist > generic music > resume
pub fn extract_music_context(normalized: &str) -> &'static str {
    if normalized.contains("liked") {
        "liked"
    } else if normalized.contains("playlist") {
        "playlist"
    } else if normalized.contains("some") && normalized.contains("music") {
        "generic_music"
    } else {
        "resume"
    }
}
