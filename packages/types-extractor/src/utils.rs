// Shared Helpers
//
// Small string utilities used across tag resolution and entity mapping.

use once_cell::sync::Lazy;
use regex::Regex;

static LINE_BREAK_ARTIFACT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*").unwrap());
static NON_ALPHANUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z0-9]").unwrap());

/// Removes one level of surrounding single or double quotes, if present.
pub fn strip_quotes(text: &str) -> &str {
    let trimmed = text.trim();
    if trimmed.len() >= 2
        && ((trimmed.starts_with('"') && trimmed.ends_with('"'))
            || (trimmed.starts_with('\'') && trimmed.ends_with('\'')))
    {
        &trimmed[1..trimmed.len() - 1]
    } else {
        trimmed
    }
}

/// Removes the newline-plus-indentation artifacts multi-line documentation
/// text carries, joining the remaining lines into one.
pub fn remove_line_break_artifacts(text: &str) -> String {
    LINE_BREAK_ARTIFACT.replace_all(text, " ").trim().to_string()
}

/// Cuts tag text at the first newline-plus-indentation artifact. Everything
/// after it is comment-frame text, not part of the tag's value.
pub fn truncate_line_break_artifact(text: &str) -> String {
    match LINE_BREAK_ARTIFACT.find(text) {
        Some(artifact) => text[..artifact.start()].trim().to_string(),
        None => text.trim().to_string(),
    }
}

/// Splits a grouping-tag value on commas and strips every non-alphanumeric
/// character from each token. Empty tokens are dropped.
pub fn split_group_aliases(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|token| NON_ALPHANUMERIC.replace_all(token, "").to_string())
        .filter(|token| !token.is_empty())
        .collect()
}
